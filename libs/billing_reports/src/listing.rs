use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Currency;
use crate::status::{SubscriptionStatus, TransactionStatus, TransactionType};
use crate::summary::RevenueSummary;
use crate::trend::TrendPoint;
use crate::window::ReportWindow;

/// A transaction row joined with its customer's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionListItem {
    pub id: Uuid,
    pub external_id: String,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub amount: i64,
    pub fee_amount: i64,
    pub net_amount: i64,
    pub currency: Currency,
    pub description: Option<String>,
    pub customer_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A subscription row joined with its customer's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionListItem {
    pub id: Uuid,
    pub external_id: String,
    pub plan_name: String,
    pub status: SubscriptionStatus,
    pub amount: i64,
    pub currency: Currency,
    pub billing_interval: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    pub customer_id: Uuid,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A trend series together with the window it was computed over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    pub window: Option<ReportWindow>,
    pub points: Vec<TrendPoint>,
}

/// Summary cards and trend chart, computed together for one view load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub summary: RevenueSummary,
    pub trend: TrendReport,
}
