use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::{SubscriptionStatus, TransactionStatus, TransactionType};

/// The fields of a transaction row that revenue aggregation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub customer_id: Option<Uuid>,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    /// Gross amount in minor currency units.
    pub amount: i64,
    pub fee_amount: i64,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn net_amount(&self) -> i64 {
        self.amount - self.fee_amount
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == TransactionStatus::Succeeded
    }
}

/// The fields of a subscription row that MRR aggregation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEntry {
    pub customer_id: Uuid,
    pub status: SubscriptionStatus,
    pub amount: i64,
    pub cancel_at_period_end: bool,
}

impl SubscriptionEntry {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}
