//! Retry loop: invoke, decide, sleep, repeat.

use std::time::Duration;

use super::error::RetryError;
use super::policy::{RetryDecision, RetryPolicy, StopReason};
use crate::config::RetryConfig;
use crate::invoke::{ExitStatus, Invocation, Invoker, ProcessInvoker};
use crate::timing;

/// Outcome of a loop that ran to a stop condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of times the command was run.
    pub attempts: u64,
    /// Status of the final attempt.
    pub last_status: ExitStatus,
    pub reason: StopReason,
}

/// Runs one invocation repeatedly under a fixed policy.
#[derive(Debug, Clone)]
pub struct RetryLoop {
    policy: RetryPolicy,
    invocation: Invocation,
}

impl RetryLoop {
    pub fn new(config: &RetryConfig, invocation: Invocation) -> Self {
        Self {
            policy: RetryPolicy::from(config),
            invocation,
        }
    }

    pub fn with_policy(policy: RetryPolicy, invocation: Invocation) -> Self {
        Self { policy, invocation }
    }

    /// Run real child processes, sleeping on the calling thread between them.
    pub fn run(&self) -> Result<RunSummary, RetryError> {
        self.run_with(&mut ProcessInvoker::new(), |d| {
            let left = timing::sleep_interruptible(d);
            if !left.is_zero() {
                tracing::info!(left_ms = left.as_millis() as u64, "wait cut short by signal");
            }
        })
    }

    /// Run with a caller-supplied invoker and sleep function.
    ///
    /// `sleep` is called only between attempts: never before the first one
    /// and never after the one that stops the loop. A launch failure ends the
    /// loop at once.
    pub fn run_with<I, S>(&self, invoker: &mut I, mut sleep: S) -> Result<RunSummary, RetryError>
    where
        I: Invoker,
        S: FnMut(Duration),
    {
        let mut attempt = 1u64;
        loop {
            tracing::debug!(attempt, command = %self.invocation, "launching");
            let status = match invoker.invoke(&self.invocation) {
                Ok(status) => status,
                Err(source) => {
                    tracing::error!(attempt, error = %source, "launch failed, giving up");
                    return Err(RetryError::Launch { attempt, source });
                }
            };
            tracing::debug!(attempt, status = status.code(), "command finished");

            match self.policy.decide(attempt, status) {
                RetryDecision::Stop(reason) => {
                    tracing::info!(
                        attempts = attempt,
                        status = status.code(),
                        mode = %self.policy.mode,
                        "stopping: {}",
                        reason
                    );
                    return Ok(RunSummary {
                        attempts: attempt,
                        last_status: status,
                        reason,
                    });
                }
                RetryDecision::RetryAfter(d) => {
                    if !d.is_zero() {
                        sleep(d);
                    }
                    attempt = attempt.saturating_add(1);
                }
            }
        }
    }
}
