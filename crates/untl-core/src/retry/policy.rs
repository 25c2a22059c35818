use std::fmt;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::invoke::ExitStatus;
use crate::mode::RunMode;

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `Until`: the child returned the target status.
    TargetReached,
    /// `While`: the child returned something other than the target.
    TargetLeft,
    /// The attempt limit was used up.
    LimitReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::TargetReached => "target status reached",
            StopReason::TargetLeft => "status left target",
            StopReason::LimitReached => "attempt limit reached",
        };
        f.write_str(s)
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not run the command again.
    Stop(StopReason),
    /// Run again after the given delay.
    RetryAfter(Duration),
}

/// Fixed-interval policy with an optional attempt cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub mode: RunMode,
    /// Status compared against in `Until`/`While`.
    pub target: u8,
    /// Maximum number of attempts (including the first); 0 = unlimited.
    pub max_attempts: u64,
    /// Delay between the end of one attempt and the start of the next.
    pub interval: Duration,
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            mode: cfg.mode,
            target: cfg.retval,
            max_attempts: cfg.limit,
            interval: cfg.interval,
        }
    }
}

impl RetryPolicy {
    /// Decide what follows attempt number `attempt` (1-based) that ended with
    /// `status`. The status is judged first; the limit only prevents a next
    /// attempt.
    pub fn decide(&self, attempt: u64, status: ExitStatus) -> RetryDecision {
        let on_target = status.matches(self.target);
        let stop = match self.mode {
            RunMode::Until if on_target => Some(StopReason::TargetReached),
            RunMode::While if !on_target => Some(StopReason::TargetLeft),
            RunMode::Until | RunMode::While | RunMode::Repeat => None,
        };
        if let Some(reason) = stop {
            return RetryDecision::Stop(reason);
        }
        if self.max_attempts > 0 && attempt >= self.max_attempts {
            return RetryDecision::Stop(StopReason::LimitReached);
        }
        RetryDecision::RetryAfter(self.interval)
    }
}
