//! Child process invocation.
//!
//! An [`Invoker`] runs one [`Invocation`] to completion and reduces the
//! outcome to an [`ExitStatus`], or to a [`LaunchError`] when the child could
//! not be started at all. The retry loop only ever talks to this trait.

mod error;
mod invocation;
mod process;
mod status;

pub use error::LaunchError;
pub use invocation::Invocation;
pub use process::ProcessInvoker;
pub use status::{ExitStatus, SIGNAL_STATUS_BASE};

/// Runs an invocation synchronously and reports how it ended.
pub trait Invoker {
    fn invoke(&mut self, invocation: &Invocation) -> Result<ExitStatus, LaunchError>;
}
