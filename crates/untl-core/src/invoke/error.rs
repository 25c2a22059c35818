//! Launch failure: the child never ran.

use std::io;

/// The command could not be started. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// No executable with that name on `PATH` (or at that path).
    #[error("{program}: command not found")]
    NotFound { program: String },
    /// The file exists but cannot be executed.
    #[error("{program}: permission denied")]
    PermissionDenied { program: String },
    /// Any other spawn/wait failure.
    #[error("{program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Classify a spawn error for `program`.
    pub fn from_io(program: impl Into<String>, err: io::Error) -> Self {
        let program = program.into();
        match err.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound { program },
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program },
            _ => LaunchError::Io {
                program,
                source: err,
            },
        }
    }

    /// Shell-style exit code: 127 for "not found", 126 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::NotFound { .. } => 127,
            LaunchError::PermissionDenied { .. } | LaunchError::Io { .. } => 126,
        }
    }
}
