//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Layout of the `time` command reply, e.g. `10/18/2026, 3:04:05 PM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time zone used when a caller does not name one.
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Errors raised while formatting wall-clock time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    /// The name is not a known IANA time zone
    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),
}

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given instant
    pub fn new(fixed_time: DateTime<Utc>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.fixed_time
    }
}

/// Render `instant` as local wall-clock time in the IANA zone `timezone`.
///
/// # Errors
///
/// Returns [`TimeError::UnknownTimezone`] when `timezone` cannot be resolved.
pub fn format_in_timezone(instant: DateTime<Utc>, timezone: &str) -> Result<String, TimeError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| TimeError::UnknownTimezone(timezone.to_string()))?;
    Ok(instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_year_2023_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_system_clock_returns_increasing_instants() {
        // テスト項目: SystemClock が呼び出すたびに単調に進む時刻を返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = clock.now();

        // then (期待する結果):
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_instant() {
        // テスト項目: FixedClock が固定された時刻を返し続ける
        // given (前提条件):
        let clock = FixedClock::new(new_year_2023_utc());

        // when (操作):
        let first = clock.now();
        let second = clock.now();

        // then (期待する結果):
        assert_eq!(first, new_year_2023_utc());
        assert_eq!(second, new_year_2023_utc());
    }

    #[test]
    fn test_format_in_default_timezone() {
        // テスト項目: デフォルトのタイムゾーン (UTC+8) で正しくフォーマットされる
        // given (前提条件):
        let instant = new_year_2023_utc();

        // when (操作):
        let result = format_in_timezone(instant, DEFAULT_TIMEZONE);

        // then (期待する結果):
        assert_eq!(result, Ok("1/1/2023, 8:00:00 AM".to_string()));
    }

    #[test]
    fn test_format_in_timezone_behind_utc() {
        // テスト項目: UTC より遅れているタイムゾーンでは前日の日付になる
        // given (前提条件):
        let instant = new_year_2023_utc();

        // when (操作):
        let result = format_in_timezone(instant, "America/New_York");

        // then (期待する結果):
        assert_eq!(result, Ok("12/31/2022, 7:00:00 PM".to_string()));
    }

    #[test]
    fn test_format_in_unknown_timezone() {
        // テスト項目: 存在しないタイムゾーン名はエラーになる
        // given (前提条件):
        let instant = new_year_2023_utc();

        // when (操作):
        let result = format_in_timezone(instant, "Mars/Olympus_Mons");

        // then (期待する結果):
        assert_eq!(
            result,
            Err(TimeError::UnknownTimezone("Mars/Olympus_Mons".to_string()))
        );
    }
}
