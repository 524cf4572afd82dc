use axum::{
    extract::{Path, Query},
    Json,
};
use billing_reports::{CustomerStats, DEFAULT_TREND_WINDOW_DAYS};
use postgres_models::{
    models::CustomerStatsRow,
    queries::{customers, reports},
};
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection, v1::params::WindowParams};

/// Customer counts with "new" measured over `[as_of - days, as_of)`.
pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<CustomerStats>> {
    let window = params.window(DEFAULT_TREND_WINDOW_DAYS)?;
    require_project(&mut conn, project_id).await?;
    let stats = customers::stats_for_window(&mut conn, project_id, window).await?;
    Ok(Json(stats))
}

/// The `customer_stats` view as stored. Its 30-day count follows the
/// database clock, so two reads can differ.
pub async fn rolling_handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<CustomerStatsRow>> {
    require_project(&mut conn, project_id).await?;
    let row = reports::customer_stats_view(&mut conn, project_id)
        .await?
        .unwrap_or(CustomerStatsRow {
            project_id,
            total_customers: 0,
            new_customers_30d: 0,
            customers_with_active_subscription: 0,
        });
    Ok(Json(row))
}
