//! Process-backed ToolRunner

use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::ports::{ToolInvocation, ToolOutput, ToolRunner};
use crate::error::{LightboxError, LightboxResult};

/// Runs collaborators as child processes found on `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> LightboxResult<ToolOutput> {
        tracing::debug!(command = %invocation.display(), "running tool");

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command
            .spawn()
            .map_err(|e| LightboxError::ToolUnavailable {
                tool: invocation.program.clone(),
                message: e.to_string(),
            })?;

        if let Some(input) = &invocation.stdin {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(input.as_bytes())?;
                // dropping closes the pipe so the tool sees EOF
            }
        }

        let output = child.wait_with_output()?;
        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
