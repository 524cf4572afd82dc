use serde::{Deserialize, Serialize};

use crate::ledger::SubscriptionEntry;

/// Active subscription figures: count, MRR and cancellations scheduled
/// for the end of the current period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub active_subscriptions: u64,
    pub mrr: i64,
    pub pending_cancellations: u64,
}

impl SubscriptionSummary {
    pub fn from_entries(entries: &[SubscriptionEntry]) -> Self {
        entries
            .iter()
            .filter(|entry| entry.is_active())
            .fold(Self::default(), |mut acc, entry| {
                acc.active_subscriptions += 1;
                acc.mrr += entry.amount;
                if entry.cancel_at_period_end {
                    acc.pending_cancellations += 1;
                }
                acc
            })
    }
}
