use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

use crate::ledger::LedgerEntry;
use crate::status::TransactionType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// First day of the month (UTC).
    pub month: NaiveDate,
    pub total_revenue: i64,
    pub total_fees: i64,
    pub net_revenue: i64,
    pub transaction_count: u64,
    pub paying_customers: u64,
}

/// Groups a project's transactions by UTC calendar month, oldest first.
///
/// Mirrors the `monthly_revenue` view: any transaction makes its month
/// appear, only succeeded ones add to the sums, and paying customers are
/// the distinct customers of succeeded payments.
pub fn monthly_revenue(entries: &[LedgerEntry]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<NaiveDate, (MonthlyRevenue, HashSet<Uuid>)> = BTreeMap::new();

    for entry in entries {
        let day = entry.created_at.date_naive();
        let Some(month) = NaiveDate::from_ymd_opt(day.year(), day.month(), 1) else {
            continue;
        };
        let (row, payers) = months.entry(month).or_insert_with(|| {
            (
                MonthlyRevenue {
                    month,
                    total_revenue: 0,
                    total_fees: 0,
                    net_revenue: 0,
                    transaction_count: 0,
                    paying_customers: 0,
                },
                HashSet::new(),
            )
        });

        row.transaction_count += 1;
        if entry.is_succeeded() {
            row.total_revenue += entry.amount;
            row.total_fees += entry.fee_amount;
            row.net_revenue += entry.net_amount();
            if entry.transaction_type == TransactionType::Payment {
                if let Some(customer_id) = entry.customer_id {
                    payers.insert(customer_id);
                }
            }
        }
    }

    months
        .into_values()
        .map(|(mut row, payers)| {
            row.paying_customers = payers.len() as u64;
            row
        })
        .collect()
}
