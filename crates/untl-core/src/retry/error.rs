//! Loop-level failure.

use crate::invoke::LaunchError;

/// The loop stopped because the child could not be launched.
#[derive(Debug, thiserror::Error)]
pub enum RetryError {
    #[error("cannot launch command (attempt {attempt}): {source}")]
    Launch {
        attempt: u64,
        #[source]
        source: LaunchError,
    },
}

impl RetryError {
    /// Process exit code to report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RetryError::Launch { source, .. } => source.exit_code(),
        }
    }
}
