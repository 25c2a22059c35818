use std::time::Duration;

use crate::mode::RunMode;

/// Settings for one run, fixed before the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub interval: Duration,
    /// 0 = unlimited.
    pub limit: u64,
    pub retval: u8,
    pub mode: RunMode,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            limit: 0,
            retval: 0,
            mode: RunMode::Until,
        }
    }
}

/// Values given on the command line; `None` keeps the built-in default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub interval: Option<Duration>,
    pub limit: Option<u64>,
    pub retval: Option<u8>,
    pub mode: Option<RunMode>,
}

impl RetryConfig {
    /// Apply command-line overrides to the built-in defaults. `inferred_mode`
    /// is used when no mode flag was given.
    pub fn resolve(overrides: &Overrides, inferred_mode: RunMode) -> Self {
        let defaults = RetryConfig::default();
        Self {
            interval: overrides.interval.unwrap_or(defaults.interval),
            limit: overrides.limit.unwrap_or(defaults.limit),
            retval: overrides.retval.unwrap_or(defaults.retval),
            mode: overrides.mode.unwrap_or(inferred_mode),
        }
    }
}
