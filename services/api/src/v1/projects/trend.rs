use axum::{
    extract::{Path, Query, State},
    Json,
};
use billing_reports::TrendReport;
use postgres_models::{queries::reports, DbError};
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, v1::params::WindowParams, AppState};

/// Daily revenue over the trailing window, most recent buckets only.
pub async fn handler(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<TrendReport>> {
    let window = params.window(state.config.trend_window_days)?;
    let offset = params.offset()?;
    let buckets = params.buckets(state.config.trend_max_buckets)?;

    let mut conn = state.db_pool.get().await.map_err(DbError::from)?;
    require_project(&mut conn, project_id).await?;
    let points = reports::revenue_trend(&mut conn, project_id, &window, offset, buckets).await?;

    Ok(Json(TrendReport {
        window: Some(window),
        points,
    }))
}
