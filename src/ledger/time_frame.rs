use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// A rolling lookback window within which expenses count toward a budget.
///
/// The numeric value is the window length in whole days; `Forever` is
/// unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeFrame {
    Day,
    Week,
    Month,
    Year,
    Forever,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 5] = [
        TimeFrame::Day,
        TimeFrame::Week,
        TimeFrame::Month,
        TimeFrame::Year,
        TimeFrame::Forever,
    ];

    /// Window length in days, `-1` meaning unbounded.
    pub fn days(self) -> i64 {
        match self {
            TimeFrame::Day => 1,
            TimeFrame::Week => 7,
            TimeFrame::Month => 28,
            TimeFrame::Year => 365,
            TimeFrame::Forever => -1,
        }
    }

    /// Stable storage name, also the CLI-facing label.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFrame::Day => "DAY",
            TimeFrame::Week => "WEEK",
            TimeFrame::Month => "MONTH",
            TimeFrame::Year => "YEAR",
            TimeFrame::Forever => "FOREVER",
        }
    }

    /// Whether `timestamp` falls within the rolling window ending at `now`.
    ///
    /// The bound is inclusive and day-truncated: a timestamp exactly
    /// `days()` whole days old is still inside the window.
    pub fn is_within_window(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            TimeFrame::Forever => true,
            _ => (now - timestamp).num_days() <= self.days(),
        }
    }

    /// Lower bound of the window ending at `now`; `None` means unbounded.
    pub fn window_start(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeFrame::Forever => None,
            _ => Some(now - Duration::days(self.days())),
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|tf| tf.as_str() == upper)
            .copied()
            .ok_or_else(|| LedgerError::InvalidArgument(format!("unknown time frame `{}`", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn window_bound_is_inclusive() {
        let now = at(2025, 3, 15, 12);
        for frame in [
            TimeFrame::Day,
            TimeFrame::Week,
            TimeFrame::Month,
            TimeFrame::Year,
        ] {
            let on_edge = now - Duration::days(frame.days());
            let past_edge = now - Duration::days(frame.days() + 1);
            assert!(frame.is_within_window(on_edge, now), "{frame} edge");
            assert!(!frame.is_within_window(past_edge, now), "{frame} past edge");
        }
    }

    #[test]
    fn forever_includes_everything() {
        let now = at(2025, 3, 15, 12);
        let ancient = at(1971, 1, 1, 0);
        let future = at(2030, 1, 1, 0);
        assert!(TimeFrame::Forever.is_within_window(ancient, now));
        assert!(TimeFrame::Forever.is_within_window(future, now));
    }

    #[test]
    fn window_start_subtracts_whole_days() {
        let now = at(2025, 3, 15, 12);
        assert_eq!(TimeFrame::Week.window_start(now), Some(at(2025, 3, 8, 12)));
        assert_eq!(TimeFrame::Forever.window_start(now), None);
    }

    #[test]
    fn day_counts_are_truncated_not_exact() {
        let now = at(2025, 3, 15, 12);
        // 1 day and 23 hours old truncates to 1 whole day, inside a DAY window.
        let ts = now - Duration::hours(47);
        assert!(TimeFrame::Day.is_within_window(ts, now));
        assert!(!TimeFrame::Day.is_within_window(now - Duration::hours(49), now));
    }

    #[test]
    fn labels_round_trip() {
        for frame in TimeFrame::ALL {
            assert_eq!(frame.as_str().parse::<TimeFrame>().unwrap(), frame);
        }
        assert!("fortnight".parse::<TimeFrame>().is_err());
    }
}
