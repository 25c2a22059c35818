//! Real child processes via `std::process::Command`.

use std::process::{Command, Stdio};

use super::{ExitStatus, Invocation, Invoker, LaunchError};

/// Spawns the command with inherited stdio and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    pub fn new() -> Self {
        Self
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, invocation: &Invocation) -> Result<ExitStatus, LaunchError> {
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| LaunchError::from_io(invocation.program_lossy(), e))?;
        Ok(ExitStatus::from(status))
    }
}
