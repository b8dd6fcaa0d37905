//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Stage toggles come in `--x` / `--no-x` pairs; when neither is given the
//!   config value applies

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::value_objects::ExportSize;

/// Lightbox - maintenance for dated photo libraries
#[derive(Parser, Debug)]
#[command(name = "lightbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (skips library and user config lookup)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep artifacts, hardlink selects and lock originals across a library
    Maintain(MaintainArgs),

    /// Render 1_EDIT/*.tif into 2_EXPORT/*.jpg with metadata
    Export(ExportArgs),

    /// Rename 0_RAW files after their capture time
    Rename(RenameArgs),
}

/// Resolve an `--x` / `--no-x` pair; clap keeps only the last one given
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Args, Debug, Clone)]
pub struct MaintainArgs {
    /// Photo library root
    pub library: PathBuf,

    /// Remove `._*` resource-fork files
    #[arg(long, overrides_with = "no_remove_hidden")]
    pub remove_hidden: bool,
    #[arg(long, overrides_with = "remove_hidden")]
    pub no_remove_hidden: bool,

    /// Empty every project's 1_EDIT directory
    #[arg(long, overrides_with = "no_remove_edits")]
    pub remove_edits: bool,
    #[arg(long, overrides_with = "remove_edits")]
    pub no_remove_edits: bool,

    /// Replace selects with hardlinks to identical raw originals
    #[arg(long, overrides_with = "no_hardlink_selects")]
    pub hardlink_selects: bool,
    #[arg(long, overrides_with = "hardlink_selects")]
    pub no_hardlink_selects: bool,

    /// Make originals read-only and sidecars writable
    #[arg(long, overrides_with = "no_fix_permissions")]
    pub fix_permissions: bool,
    #[arg(long, overrides_with = "fix_permissions")]
    pub no_fix_permissions: bool,

    /// Report what would change without touching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Projects processed in parallel
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub jobs: Option<u32>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl MaintainArgs {
    pub fn remove_hidden(&self) -> Option<bool> {
        toggle(self.remove_hidden, self.no_remove_hidden)
    }

    pub fn remove_edits(&self) -> Option<bool> {
        toggle(self.remove_edits, self.no_remove_edits)
    }

    pub fn hardlink_selects(&self) -> Option<bool> {
        toggle(self.hardlink_selects, self.no_hardlink_selects)
    }

    pub fn fix_permissions(&self) -> Option<bool> {
        toggle(self.fix_permissions, self.no_fix_permissions)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Project directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Size preset
    #[arg(short, long, value_enum)]
    pub size: Option<ExportSize>,

    /// Add the matte border
    #[arg(long, overrides_with = "no_border")]
    pub border: bool,
    #[arg(long, overrides_with = "border")]
    pub no_border: bool,

    /// EXIF override rules (JSON)
    #[arg(long, value_name = "RULES")]
    pub exif: Option<PathBuf>,

    /// Show the collaborator commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    pub fn border(&self) -> Option<bool> {
        toggle(self.border, self.no_border)
    }
}

#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Project directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Show the new names without renaming
    #[arg(long)]
    pub dry_run: bool,
}
