//! Time-window filtering of score submissions.
//!
//! Every comparison happens on UTC instants. Score dates arrive as naive
//! strings that the service writes in UTC, and [`parse_score_timestamp`] is
//! the only place they are turned into instants.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{Error, Result};

/// Date format used by the scoring service
pub const SCORE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock format of window bounds given with a named timezone
pub const LOCAL_BOUND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Exclusive time window, both bounds normalized to UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window from bounds in any timezone.
    ///
    /// Fails unless `start` is strictly earlier than `end`.
    pub fn new<A: TimeZone, B: TimeZone>(start: DateTime<A>, end: DateTime<B>) -> Result<Self> {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);
        if start >= end {
            return Err(Error::InvalidConfig(format!(
                "time window start ({}) must be earlier than end ({})",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a window from RFC 3339 strings (e.g. "2022-08-22T00:00:00+03:00")
    pub fn parse_rfc3339(start: &str, end: &str) -> Result<Self> {
        let parse = |value: &str| {
            DateTime::parse_from_rfc3339(value).map_err(|e| {
                Error::InvalidConfig(format!("invalid window bound {:?}: {}", value, e))
            })
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// Create a window from wall-clock bounds (e.g. "2022-08-22T00:00:00")
    /// in a named IANA timezone such as "Europe/Minsk".
    ///
    /// A bound that falls into a DST gap or overlap is rejected.
    pub fn parse_local(start: &str, end: &str, zone: &str) -> Result<Self> {
        let tz: Tz = zone
            .trim()
            .parse()
            .map_err(|e| Error::InvalidConfig(format!("unknown timezone {:?}: {}", zone, e)))?;
        Self::new(local_bound(start, tz, zone)?, local_bound(end, tz, zone)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// True iff `start < instant < end`
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start < instant && instant < self.end
    }
}

fn local_bound(value: &str, tz: Tz, zone: &str) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), LOCAL_BOUND_FORMAT).map_err(|e| {
        Error::InvalidConfig(format!(
            "invalid window bound {:?} (expected YYYY-MM-DDTHH:MM:SS): {}",
            value, e
        ))
    })?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earlier, later) => Err(Error::InvalidConfig(format!(
            "window bound {:?} is ambiguous in {} ({} or {})",
            value,
            zone,
            earlier.to_rfc3339(),
            later.to_rfc3339()
        ))),
        LocalResult::None => Err(Error::InvalidConfig(format!(
            "window bound {:?} does not exist in {}",
            value, zone
        ))),
    }
}

/// Parse a score date string and interpret it as UTC
pub fn parse_score_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), SCORE_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| Error::TimestampParse {
            value: raw.to_string(),
            source,
        })
}

/// Check whether a raw score date falls strictly inside the window
pub fn in_window(raw: &str, window: &TimeWindow) -> Result<bool> {
    parse_score_timestamp(raw).map(|instant| window.contains(instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn minsk() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    fn week_window() -> TimeWindow {
        let start = minsk().with_ymd_and_hms(2022, 8, 22, 0, 0, 0).unwrap();
        let end = minsk().with_ymd_and_hms(2022, 8, 28, 0, 0, 0).unwrap();
        TimeWindow::new(start, end).unwrap()
    }

    #[test]
    fn test_window_normalizes_to_utc() {
        let window = week_window();
        assert_eq!(window.start().to_rfc3339(), "2022-08-21T21:00:00+00:00");
        assert_eq!(window.end().to_rfc3339(), "2022-08-27T21:00:00+00:00");
    }

    #[test]
    fn test_window_rejects_inverted_or_empty() {
        let t = Utc.with_ymd_and_hms(2022, 8, 22, 0, 0, 0).unwrap();
        assert!(matches!(
            TimeWindow::new(t, t),
            Err(Error::InvalidConfig(_))
        ));
        let earlier = Utc.with_ymd_and_hms(2022, 8, 21, 0, 0, 0).unwrap();
        assert!(TimeWindow::new(t, earlier).is_err());
    }

    #[test]
    fn test_window_bounds_across_timezones() {
        // Same instant expressed in two offsets is still an empty window
        let start = minsk().with_ymd_and_hms(2022, 8, 22, 3, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2022, 8, 22, 0, 0, 0).unwrap();
        assert!(TimeWindow::new(start, end).is_err());
    }

    #[test]
    fn test_parse_rfc3339_window() {
        let window =
            TimeWindow::parse_rfc3339("2022-08-22T00:00:00+03:00", "2022-08-28T00:00:00+03:00")
                .unwrap();
        assert_eq!(window, week_window());

        assert!(TimeWindow::parse_rfc3339("2022-08-22", "2022-08-28T00:00:00Z").is_err());
    }

    #[test]
    fn test_parse_local_window() {
        let window =
            TimeWindow::parse_local("2022-08-22T00:00:00", "2022-08-28T00:00:00", "Europe/Minsk")
                .unwrap();
        assert_eq!(window, week_window());
    }

    #[test]
    fn test_parse_local_window_across_dst_change() {
        // Berlin switches from +01:00 to +02:00 on 2022-03-27
        let window =
            TimeWindow::parse_local("2022-03-26T00:00:00", "2022-03-28T00:00:00", "Europe/Berlin")
                .unwrap();
        assert_eq!(window.start().to_rfc3339(), "2022-03-25T23:00:00+00:00");
        assert_eq!(window.end().to_rfc3339(), "2022-03-27T22:00:00+00:00");
    }

    #[test]
    fn test_parse_local_rejects_gap_and_overlap() {
        let gap =
            TimeWindow::parse_local("2022-03-27T02:30:00", "2022-03-28T00:00:00", "Europe/Berlin")
                .unwrap_err();
        assert!(matches!(&gap, Error::InvalidConfig(msg) if msg.contains("does not exist")));

        let overlap =
            TimeWindow::parse_local("2022-10-30T02:30:00", "2022-10-31T00:00:00", "Europe/Berlin")
                .unwrap_err();
        assert!(matches!(&overlap, Error::InvalidConfig(msg) if msg.contains("ambiguous")));
    }

    #[test]
    fn test_parse_local_rejects_bad_input() {
        assert!(matches!(
            TimeWindow::parse_local("2022-08-22T00:00:00", "2022-08-28T00:00:00", "Mars/Olympus"),
            Err(Error::InvalidConfig(_))
        ));
        // Offsets belong to the RFC 3339 form
        assert!(
            TimeWindow::parse_local(
                "2022-08-22T00:00:00+03:00",
                "2022-08-28T00:00:00",
                "Europe/Minsk"
            )
            .is_err()
        );
    }

    #[test]
    fn test_in_window_strict_boundaries() {
        let window = week_window();
        // Exactly on the bounds (UTC) is excluded
        assert!(!in_window("2022-08-21 21:00:00", &window).unwrap());
        assert!(!in_window("2022-08-27 21:00:00", &window).unwrap());
        // One second inside is included
        assert!(in_window("2022-08-21 21:00:01", &window).unwrap());
        assert!(in_window("2022-08-27 20:59:59", &window).unwrap());
        // Local midnight not yet reached in UTC terms is outside
        assert!(!in_window("2022-08-21 20:59:59", &window).unwrap());
    }

    #[test]
    fn test_in_window_matches_contains() {
        let window = week_window();
        for raw in [
            "2022-08-01 00:00:00",
            "2022-08-24 12:34:56",
            "2022-08-27 23:00:00",
            "2023-01-01 00:00:00",
        ] {
            let instant = parse_score_timestamp(raw).unwrap();
            let expected = window.start() < instant && instant < window.end();
            assert_eq!(in_window(raw, &window).unwrap(), expected, "{raw}");
            // Filtering is idempotent
            assert_eq!(in_window(raw, &window).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_parse_score_timestamp_rejects_malformed() {
        for raw in ["", "2022-08-24", "2022/08/24 12:00:00", "2022-08-24T12:00:00Z"] {
            let err = parse_score_timestamp(raw).unwrap_err();
            assert!(matches!(err, Error::TimestampParse { .. }), "{raw}");
        }
    }
}
