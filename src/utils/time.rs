//! Time utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the `Timestamp` parameter.
///
/// The request assembler reads the clock once per call. Tests inject a
/// [`FixedClock`] so that signatures become reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parses an RFC3339 instant, falling back to the Unix epoch on bad input.
    pub fn from_rfc3339(value: &str) -> Self {
        let at = DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// RFC3339 UTC with whole seconds and a `Z` suffix, e.g. `2024-01-01T00:00:00Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_drops_subseconds() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        assert_eq!(format_timestamp(at), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::from_rfc3339("2024-03-05T10:20:30+02:00");
        assert_eq!(format_timestamp(clock.now()), "2024-03-05T08:20:30Z");
    }

    #[test]
    fn test_fixed_clock_bad_input() {
        let clock = FixedClock::from_rfc3339("yesterday");
        assert_eq!(format_timestamp(clock.now()), "1970-01-01T00:00:00Z");
    }
}
