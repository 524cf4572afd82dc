//! Query-string parameters shared by the project endpoints.

use billing_reports::{ParseError, ReportWindow, StatusFilter, DEFAULT_TREND_BUCKETS};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::Deserialize;
use std::str::FromStr;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// UTC-14:00 to UTC+14:00.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;
const MAX_SNAPSHOT_DAYS: i64 = 366;
const DEFAULT_SNAPSHOT_DAYS: i64 = 30;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn status<S>(&self) -> AppResult<Option<S>>
    where
        S: FromStr<Err = ParseError> + Copy,
    {
        Ok(StatusFilter::<S>::parse(self.status.as_deref())?.status())
    }

    pub fn limit(&self, config: &Config) -> AppResult<i64> {
        resolve_limit(self.limit, config)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookLogParams {
    pub processed: Option<bool>,
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindowParams {
    /// End of the window. Defaults to the time the request is served.
    pub as_of: Option<DateTime<Utc>>,
    pub days: Option<u32>,
    pub buckets: Option<usize>,
    pub tz_offset_minutes: Option<i32>,
}

impl WindowParams {
    pub fn window(&self, default_days: u32) -> AppResult<ReportWindow> {
        let as_of = self.as_of.unwrap_or_else(Utc::now);
        Ok(ReportWindow::trailing_days(as_of, self.days.unwrap_or(default_days))?)
    }

    pub fn offset(&self) -> AppResult<FixedOffset> {
        let minutes = self.tz_offset_minutes.unwrap_or(0);
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(AppError::bad_request(format!(
                "tz_offset_minutes must be between -{MAX_OFFSET_MINUTES} and {MAX_OFFSET_MINUTES}"
            )));
        }
        FixedOffset::east_opt(minutes * 60)
            .ok_or_else(|| AppError::bad_request("Invalid tz_offset_minutes"))
    }

    /// Requested bucket count. Callers may ask for fewer than the default
    /// but never for more.
    pub fn buckets(&self, default_buckets: usize) -> AppResult<usize> {
        match self.buckets.unwrap_or(default_buckets) {
            n if (1..=DEFAULT_TREND_BUCKETS).contains(&n) => Ok(n),
            _ => Err(AppError::bad_request(format!(
                "buckets must be between 1 and {DEFAULT_TREND_BUCKETS}"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SnapshotParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SnapshotParams {
    /// Inclusive date range, defaulting to the 30 days ending `today`.
    pub fn range(&self, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
        let to = self.to.unwrap_or(today);
        let from = match self.from {
            Some(from) => from,
            None => to
                .checked_sub_signed(Duration::days(DEFAULT_SNAPSHOT_DAYS - 1))
                .ok_or(ParseError::WindowOutOfRange)?,
        };

        if from > to {
            return Err(AppError::bad_request("from must not be after to"));
        }
        if (to - from).num_days() >= MAX_SNAPSHOT_DAYS {
            return Err(AppError::bad_request(format!(
                "Snapshot range must not exceed {MAX_SNAPSHOT_DAYS} days"
            )));
        }
        Ok((from, to))
    }
}

pub fn resolve_limit(limit: Option<i64>, config: &Config) -> AppResult<i64> {
    match limit {
        None => Ok(config.default_list_limit),
        Some(n) if n < 1 => Err(AppError::bad_request("limit must be positive")),
        Some(n) => Ok(n.min(config.max_list_limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use billing_reports::{SubscriptionStatus, TransactionStatus};
    use chrono::TimeZone;

    fn config() -> Config {
        Config {
            port: 3000,
            database_url: "postgres://localhost/billing".to_string(),
            environment: "test".to_string(),
            trend_window_days: 30,
            trend_max_buckets: 14,
            default_list_limit: 100,
            max_list_limit: 500,
        }
    }

    #[test]
    fn limit_defaults_and_clamps() {
        let config = config();
        assert_eq!(resolve_limit(None, &config).unwrap(), 100);
        assert_eq!(resolve_limit(Some(20), &config).unwrap(), 20);
        assert_eq!(resolve_limit(Some(10_000), &config).unwrap(), 500);
        assert_eq!(
            resolve_limit(Some(0), &config).unwrap_err().status,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn status_all_means_unfiltered() {
        let params = ListParams {
            status: Some("all".to_string()),
            limit: None,
        };
        assert_eq!(params.status::<TransactionStatus>().unwrap(), None);

        let params = ListParams {
            status: Some("canceled".to_string()),
            limit: None,
        };
        assert_eq!(
            params.status::<SubscriptionStatus>().unwrap(),
            Some(SubscriptionStatus::Canceled)
        );
    }

    #[test]
    fn unknown_status_is_a_bad_request() {
        let params = ListParams {
            status: Some("bogus".to_string()),
            limit: None,
        };
        let err = params.status::<TransactionStatus>().unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn window_uses_explicit_as_of() {
        let as_of = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let params = WindowParams {
            as_of: Some(as_of),
            days: Some(7),
            ..WindowParams::default()
        };

        let window = params.window(30).unwrap();
        assert_eq!(window.end, as_of);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 5, 25, 0, 0, 0).unwrap());
    }

    #[test]
    fn offset_and_buckets_are_bounded() {
        let params = WindowParams {
            tz_offset_minutes: Some(-300),
            buckets: Some(0),
            ..WindowParams::default()
        };
        assert_eq!(params.offset().unwrap().local_minus_utc(), -300 * 60);
        assert!(params.buckets(14).is_err());

        let params = WindowParams {
            tz_offset_minutes: Some(900),
            ..WindowParams::default()
        };
        assert!(params.offset().is_err());
        assert_eq!(params.buckets(14).unwrap(), 14);
    }

    #[test]
    fn buckets_never_exceed_the_trend_limit() {
        let params = WindowParams {
            buckets: Some(7),
            ..WindowParams::default()
        };
        assert_eq!(params.buckets(14).unwrap(), 7);

        let params = WindowParams {
            buckets: Some(15),
            ..WindowParams::default()
        };
        assert_eq!(params.buckets(14).unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn window_before_earliest_date_is_a_bad_request() {
        let params = WindowParams {
            as_of: Some("-262143-01-02T00:00:00Z".parse().unwrap()),
            ..WindowParams::default()
        };
        assert_eq!(params.window(30).unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn snapshot_range_defaults_to_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let (from, to) = SnapshotParams::default().range(today).unwrap();
        assert_eq!(to, today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let inverted = SnapshotParams {
            from: Some(today),
            to: NaiveDate::from_ymd_opt(2024, 6, 1),
        };
        assert!(inverted.range(today).is_err());
    }

    #[test]
    fn snapshot_range_before_earliest_date_is_a_bad_request() {
        let params = SnapshotParams {
            from: None,
            to: Some(NaiveDate::MIN),
        };
        let err = params.range(NaiveDate::MIN).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
