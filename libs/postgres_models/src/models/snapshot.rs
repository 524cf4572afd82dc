use crate::schema::daily_revenue_snapshots;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pre-aggregated counters for one project and day, written by the
/// ingestion side.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = daily_revenue_snapshots)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DailyRevenueSnapshot {
    pub id: Uuid,
    pub project_id: Uuid,
    pub snapshot_date: NaiveDate,
    pub gross_revenue: i64,
    pub total_fees: i64,
    pub net_revenue: i64,
    pub transaction_count: i32,
    pub successful_transactions: i32,
    pub failed_transactions: i32,
    pub new_customers: i32,
    pub new_subscriptions: i32,
    pub canceled_subscriptions: i32,
    pub mrr: i64,
    pub created_at: DateTime<Utc>,
}
