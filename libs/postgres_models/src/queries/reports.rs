use billing_reports::{
    trend_series, ReportWindow, RevenueSummary, SubscriptionSummary, TrendPoint,
};
use chrono::{FixedOffset, NaiveDate};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::models::{
    ActiveSubscriptionsSummaryRow, CustomerStatsRow, DailyRevenueSnapshot, MonthlyRevenueRow,
};
use crate::queries::{customers, subscriptions, transactions};
use crate::schema::{active_subscriptions_summary, customer_stats, daily_revenue_snapshots, monthly_revenue};
use crate::DbError;

/// Summary cards over every transaction the project has.
///
/// The three reads share one repeatable-read snapshot so the cards agree
/// with each other while rows are being ingested.
pub async fn revenue_summary(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> Result<RevenueSummary, DbError> {
    conn.build_transaction()
        .read_only()
        .repeatable_read()
        .run(move |conn| {
            async move {
                let ledger = transactions::ledger_for_project(conn, project_id, None).await?;
                let active = subscriptions::active_for_project(conn, project_id).await?;
                let total_customers = customers::count_for_project(conn, project_id).await?;
                Ok::<_, DbError>(RevenueSummary::from_ledger(&ledger, &active, total_customers))
            }
            .scope_boxed()
        })
        .await
}

pub async fn revenue_trend(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    window: &ReportWindow,
    offset: FixedOffset,
    max_buckets: usize,
) -> Result<Vec<TrendPoint>, DbError> {
    let ledger = transactions::ledger_for_project(conn, project_id, Some(window)).await?;
    Ok(trend_series(&ledger, window, offset, max_buckets))
}

/// Rows of the `monthly_revenue` view, newest month first.
pub async fn monthly_revenue_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> Result<Vec<MonthlyRevenueRow>, DbError> {
    let rows = monthly_revenue::table
        .filter(monthly_revenue::project_id.eq(project_id))
        .select(MonthlyRevenueRow::as_select())
        .order(monthly_revenue::month.desc())
        .load(conn)
        .await?;
    Ok(rows)
}

/// The `active_subscriptions_summary` row; a project without active
/// subscriptions has no row and gets a zero summary.
pub async fn subscription_summary(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> Result<SubscriptionSummary, DbError> {
    let row = active_subscriptions_summary::table
        .filter(active_subscriptions_summary::project_id.eq(project_id))
        .select(ActiveSubscriptionsSummaryRow::as_select())
        .first(conn)
        .await
        .optional()?;
    Ok(row.map(SubscriptionSummary::from).unwrap_or_default())
}

pub async fn customer_stats_view(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> Result<Option<CustomerStatsRow>, DbError> {
    let row = customer_stats::table
        .filter(customer_stats::project_id.eq(project_id))
        .select(CustomerStatsRow::as_select())
        .first(conn)
        .await
        .optional()?;
    Ok(row)
}

/// Snapshots with `from <= snapshot_date <= to`, oldest first.
pub async fn snapshots(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DailyRevenueSnapshot>, DbError> {
    let rows = daily_revenue_snapshots::table
        .filter(daily_revenue_snapshots::project_id.eq(project_id))
        .filter(daily_revenue_snapshots::snapshot_date.between(from, to))
        .select(DailyRevenueSnapshot::as_select())
        .order(daily_revenue_snapshots::snapshot_date.asc())
        .load(conn)
        .await?;
    Ok(rows)
}
