//! Exit status of a finished child, reduced to one integer.

use std::fmt;

/// Integer base for signal terminations: `Signaled(n)` reports as `256 + n`,
/// outside the 0–255 range any target value can take.
pub const SIGNAL_STATUS_BASE: i32 = 256;

/// How a child that did run came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal exit with this code.
    Exited(i32),
    /// Killed by this signal number.
    Signaled(i32),
}

impl ExitStatus {
    /// Single-integer form used in logs and comparisons.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Exited(code) => code,
            ExitStatus::Signaled(signo) => SIGNAL_STATUS_BASE + signo,
        }
    }

    /// True only for a normal exit with exactly `target`.
    pub fn matches(self, target: u8) -> bool {
        matches!(self, ExitStatus::Exited(code) if code == i32::from(target))
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signo) = status.signal() {
                return ExitStatus::Signaled(signo);
            }
        }
        // No code and no signal is not reachable on supported platforms;
        // -1 keeps it from matching any target.
        ExitStatus::Exited(status.code().unwrap_or(-1))
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Exited(code) => write!(f, "exit {}", code),
            ExitStatus::Signaled(signo) => write!(f, "signal {} ({})", signo, self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exited_code_is_passthrough() {
        assert_eq!(ExitStatus::Exited(0).code(), 0);
        assert_eq!(ExitStatus::Exited(42).code(), 42);
        assert!(ExitStatus::Exited(0).matches(0));
    }

    #[test]
    fn signaled_is_outside_target_range() {
        let s = ExitStatus::Signaled(15);
        assert_eq!(s.code(), 271);
        assert!((0..=255u8).all(|t| !s.matches(t)));
    }

    #[test]
    fn out_of_range_exit_never_matches() {
        assert!(!ExitStatus::Exited(-1).matches(255));
        assert!(!ExitStatus::Exited(256).matches(0));
    }

    #[cfg(unix)]
    #[test]
    fn from_std_status() {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status: exit code in the high byte, signal in the low bits.
        assert_eq!(
            ExitStatus::from(std::process::ExitStatus::from_raw(3 << 8)),
            ExitStatus::Exited(3)
        );
        assert_eq!(
            ExitStatus::from(std::process::ExitStatus::from_raw(9)),
            ExitStatus::Signaled(9)
        );
    }
}
