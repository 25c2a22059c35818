//! Inter-attempt delay: parsing fractional seconds and sleeping with
//! sub-second precision.
//!
//! A signal delivered during the sleep cuts that wait short; the loop then
//! simply carries on with the next attempt.

use std::time::Duration;

/// Interval given in seconds that cannot be turned into a delay.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    #[error("interval must not be negative: {0}")]
    Negative(f64),
    #[error("interval must be a finite number of seconds: {0}")]
    NotFinite(f64),
}

/// Convert fractional seconds (`0.25`, `1`, `90.5`) to a `Duration`.
pub fn interval_from_secs(secs: f64) -> Result<Duration, IntervalError> {
    if secs.is_nan() || secs.is_infinite() {
        return Err(IntervalError::NotFinite(secs));
    }
    if secs < 0.0 {
        return Err(IntervalError::Negative(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| IntervalError::NotFinite(secs))
}

/// Parse a command-line interval such as `"0.5"`.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    interval_from_secs(secs).map_err(|e| e.to_string())
}

/// Sleep for `duration`. Returns the time left if a signal interrupted the
/// sleep, `Duration::ZERO` otherwise.
#[cfg(unix)]
pub fn sleep_interruptible(duration: Duration) -> Duration {
    if duration.is_zero() {
        return Duration::ZERO;
    }
    let request = libc::timespec {
        tv_sec: duration.as_secs().min(libc::time_t::MAX as u64) as libc::time_t,
        tv_nsec: duration.subsec_nanos() as libc::c_long,
    };
    let mut remaining = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    let r = unsafe { libc::nanosleep(&request, &mut remaining) };
    if r == 0 {
        return Duration::ZERO;
    }
    let err = std::io::Error::last_os_error();
    if err.kind() == std::io::ErrorKind::Interrupted {
        let left = Duration::new(remaining.tv_sec.max(0) as u64, remaining.tv_nsec.max(0) as u32);
        tracing::debug!(left_ms = left.as_millis() as u64, "sleep interrupted");
        return left;
    }
    // EINVAL is the only other documented failure; fall back to the std sleep.
    tracing::warn!("nanosleep failed ({}), using thread::sleep", err);
    std::thread::sleep(duration);
    Duration::ZERO
}

#[cfg(not(unix))]
pub fn sleep_interruptible(duration: Duration) -> Duration {
    std::thread::sleep(duration);
    Duration::ZERO
}
