//! Request quota reported by the service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const QUOTA_MAX_HEADER: &str = "x-mws-quota-max";
pub const QUOTA_REMAINING_HEADER: &str = "x-mws-quota-remaining";
pub const QUOTA_RESETS_ON_HEADER: &str = "x-mws-quota-resetson";

/// Quota information returned alongside a response body.
///
/// All fields are optional: throttled sections send the headers, others do
/// not. Nothing in this crate acts on the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quota {
    pub max: Option<f64>,
    pub remaining: Option<f64>,
    pub resets_on: Option<DateTime<Utc>>,
}

impl Quota {
    /// Reads the `x-mws-quota-*` headers. Names match case-insensitively and
    /// unparsable values are dropped.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut quota = Quota::default();
        for (name, value) in headers {
            let value = value.trim();
            if name.eq_ignore_ascii_case(QUOTA_MAX_HEADER) {
                quota.max = value.parse().ok();
            } else if name.eq_ignore_ascii_case(QUOTA_REMAINING_HEADER) {
                quota.remaining = value.parse().ok();
            } else if name.eq_ignore_ascii_case(QUOTA_RESETS_ON_HEADER) {
                quota.resets_on = DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc));
            }
        }
        quota
    }

    pub fn is_empty(&self) -> bool {
        self.max.is_none() && self.remaining.is_none() && self.resets_on.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_headers() {
        let quota = Quota::from_headers([
            ("x-mws-quota-max", "200.0"),
            ("X-MWS-Quota-Remaining", "199.0"),
            ("x-mws-quota-resetsOn", "2024-01-01T01:00:00.000Z"),
            ("x-mws-request-id", "b0a5"),
        ]);
        assert_eq!(quota.max, Some(200.0));
        assert_eq!(quota.remaining, Some(199.0));
        assert_eq!(
            quota.resets_on.map(|dt| dt.to_rfc3339()),
            Some("2024-01-01T01:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_missing_and_bad_headers() {
        let quota = Quota::from_headers([("x-mws-quota-max", "lots")]);
        assert!(quota.is_empty());
    }
}
