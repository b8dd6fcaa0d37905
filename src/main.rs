//! Lightbox CLI - maintenance for dated photo libraries
//!
//! Usage: lightbox <COMMAND>
//!
//! Commands:
//!   maintain  Sweep artifacts, hardlink selects and lock originals
//!   export    Render edits into shareable JPEGs
//!   rename    Rename raw files after their capture time

mod commands;
mod ui;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use lightbox::config::ColorMode;
use lightbox::presentation::cli::{Cli, Commands};

use commands::CommandStatus;

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Maintain(_) => "maintain",
        Commands::Export(_) => "export",
        Commands::Rename(_) => "rename",
    }
}

/// `RUST_LOG` wins; otherwise warn, `-v` debug, `-vv` trace
fn init_tracing(verbose: u8, color: Option<ColorMode>) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let ansi = match color {
        Some(ColorMode::Always) => true,
        Some(ColorMode::Never) => false,
        _ => std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.color);

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
    }

    let result = match &cli.command {
        Commands::Maintain(args) => commands::maintain::cmd_maintain(&cli, args, cancel.clone()),
        Commands::Export(args) => commands::export::cmd_export(&cli, args, cancel.clone()),
        Commands::Rename(args) => commands::rename::cmd_rename(&cli, args, cancel.clone()),
    };

    let code = match result {
        Ok(status) => status.exit_code(),
        Err(err) => {
            ui::error::print_error(&err, command_name(&cli.command), cli.json);
            if cancel.load(Ordering::SeqCst) {
                CommandStatus::Interrupted.exit_code()
            } else {
                CommandStatus::Failed.exit_code()
            }
        }
    };
    std::process::exit(code);
}
