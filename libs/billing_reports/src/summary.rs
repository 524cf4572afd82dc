use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerEntry, SubscriptionEntry};
use crate::status::{TransactionStatus, TransactionType};
use crate::subscriptions::SubscriptionSummary;

/// Headline figures for a project's dashboard cards.
///
/// Revenue, fees and net only count succeeded transactions, whatever their
/// type. Succeeded refunds are reported separately in `refunded_amount` and
/// are not subtracted from revenue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub total_revenue: i64,
    pub total_fees: i64,
    pub net_revenue: i64,
    pub refunded_amount: i64,
    pub total_transactions: u64,
    pub successful_transactions: u64,
    pub failed_transactions: u64,
    pub mrr: i64,
    pub active_subscriptions: u64,
    pub total_customers: u64,
}

impl RevenueSummary {
    pub fn from_ledger(
        entries: &[LedgerEntry],
        subscriptions: &[SubscriptionEntry],
        total_customers: u64,
    ) -> Self {
        let mut summary = Self {
            total_customers,
            total_transactions: entries.len() as u64,
            ..Self::default()
        };

        for entry in entries {
            match entry.status {
                TransactionStatus::Succeeded => {
                    summary.successful_transactions += 1;
                    summary.total_revenue += entry.amount;
                    summary.total_fees += entry.fee_amount;
                    summary.net_revenue += entry.net_amount();
                    if entry.transaction_type == TransactionType::Refund {
                        summary.refunded_amount += entry.amount;
                    }
                }
                TransactionStatus::Failed => summary.failed_transactions += 1,
                _ => {}
            }
        }

        let subscriptions = SubscriptionSummary::from_entries(subscriptions);
        summary.mrr = subscriptions.mrr;
        summary.active_subscriptions = subscriptions.active_subscriptions;
        summary
    }
}
