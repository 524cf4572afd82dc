//! Rows of the aggregation views defined in the initial migration.

use crate::schema::{active_subscriptions_summary, customer_stats, monthly_revenue};
use billing_reports::SubscriptionSummary;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = monthly_revenue)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MonthlyRevenueRow {
    pub project_id: Uuid,
    pub month: DateTime<Utc>,
    pub currency: String,
    pub total_revenue: i64,
    pub total_fees: i64,
    pub net_revenue: i64,
    pub transaction_count: i64,
    pub paying_customers: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = active_subscriptions_summary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActiveSubscriptionsSummaryRow {
    pub project_id: Uuid,
    pub active_subscriptions: i64,
    pub mrr: i64,
    pub pending_cancellations: i64,
}

impl From<ActiveSubscriptionsSummaryRow> for SubscriptionSummary {
    fn from(row: ActiveSubscriptionsSummaryRow) -> Self {
        SubscriptionSummary {
            active_subscriptions: row.active_subscriptions.max(0) as u64,
            mrr: row.mrr,
            pending_cancellations: row.pending_cancellations.max(0) as u64,
        }
    }
}

/// `new_customers_30d` is computed against the database clock at read time.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = customer_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerStatsRow {
    pub project_id: Uuid,
    pub total_customers: i64,
    pub new_customers_30d: i64,
    pub customers_with_active_subscription: i64,
}
