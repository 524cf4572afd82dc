use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ledger::LedgerEntry;
use crate::window::ReportWindow;

pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_TREND_BUCKETS: usize = 14;

/// Revenue for one calendar day in the viewer's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Sum of succeeded amounts on this day.
    pub revenue: i64,
    /// All transactions on this day, whatever their status.
    pub transactions: u64,
}

/// Daily revenue series over `window`, oldest day first.
///
/// The series is sparse: a day appears only when at least one transaction
/// of any status falls on it, so a day with nothing but failures shows up
/// with zero revenue. Only the most recent `max_buckets` days are kept.
pub fn trend_series(
    entries: &[LedgerEntry],
    window: &ReportWindow,
    offset: FixedOffset,
    max_buckets: usize,
) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, TrendPoint> = BTreeMap::new();

    for entry in entries.iter().filter(|e| window.contains(e.created_at)) {
        let date = entry.created_at.with_timezone(&offset).date_naive();
        let point = buckets.entry(date).or_insert(TrendPoint {
            date,
            revenue: 0,
            transactions: 0,
        });
        point.transactions += 1;
        if entry.is_succeeded() {
            point.revenue += entry.amount;
        }
    }

    let skip = buckets.len().saturating_sub(max_buckets);
    if skip > 0 {
        tracing::debug!(dropped = skip, kept = max_buckets, "Trimming trend series to most recent days");
    }
    buckets.into_values().skip(skip).collect()
}
