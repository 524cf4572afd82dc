use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Longest window any report accepts.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Half-open time range `[start, end)` a report is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ParseError> {
        if end <= start {
            return Err(ParseError::EmptyWindow);
        }
        Ok(Self { start, end })
    }

    /// The `days` days ending at `as_of`.
    pub fn trailing_days(as_of: DateTime<Utc>, days: u32) -> Result<Self, ParseError> {
        if days == 0 || days > MAX_WINDOW_DAYS {
            return Err(ParseError::WindowLength {
                days,
                max: MAX_WINDOW_DAYS,
            });
        }
        let start = as_of
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or(ParseError::WindowOutOfRange)?;
        Self::new(start, as_of)
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trailing_window_is_half_open() {
        let as_of = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let window = ReportWindow::trailing_days(as_of, 30).unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        assert!(window.contains(window.start));
        assert!(!window.contains(as_of));
    }

    #[test]
    fn zero_and_oversized_windows_are_rejected() {
        let as_of = Utc::now();
        assert!(ReportWindow::trailing_days(as_of, 0).is_err());
        assert!(ReportWindow::trailing_days(as_of, MAX_WINDOW_DAYS + 1).is_err());
        assert_eq!(
            ReportWindow::new(as_of, as_of).unwrap_err(),
            ParseError::EmptyWindow
        );
    }

    #[test]
    fn window_before_earliest_date_is_rejected() {
        let as_of: DateTime<Utc> = "-262143-01-02T00:00:00Z".parse().unwrap();
        assert_eq!(
            ReportWindow::trailing_days(as_of, 30).unwrap_err(),
            ParseError::WindowOutOfRange
        );
        assert!(ReportWindow::trailing_days(DateTime::<Utc>::MIN_UTC, 1).is_err());
    }
}
