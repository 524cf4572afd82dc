use axum::{
    extract::{Path, Query},
    Json,
};
use chrono::Utc;
use postgres_models::{models::DailyRevenueSnapshot, queries::reports};
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection, v1::params::SnapshotParams};

/// Daily snapshots between `from` and `to` inclusive, oldest first.
pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
    Query(params): Query<SnapshotParams>,
) -> AppResult<Json<Vec<DailyRevenueSnapshot>>> {
    let (from, to) = params.range(Utc::now().date_naive())?;

    require_project(&mut conn, project_id).await?;
    let rows = reports::snapshots(&mut conn, project_id, from, to).await?;
    Ok(Json(rows))
}
