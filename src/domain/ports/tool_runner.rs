//! ToolRunner port - invocation of external command-line collaborators
//!
//! The raster tool and the metadata tool are opaque: we build an argv,
//! optionally feed stdin, and look at the exit status and captured output.

use std::ffi::{OsStr, OsString};

use crate::error::LightboxResult;

/// One command-line invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub stdin: Option<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Human-readable command line (for logs and dry-run output)
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                out.push_str(&format!("\"{}\"", arg));
            } else {
                out.push_str(&arg);
            }
        }
        out
    }
}

/// Captured result of an invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOutput {
    pub success: bool,
    /// `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external tools
///
/// Returns `Err` only when the tool could not be started at all; a
/// non-zero exit is reported through `ToolOutput::success`.
pub trait ToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> LightboxResult<ToolOutput>;
}
