use axum::{
    extract::{Path, Query, State},
    Json,
};
use billing_reports::{DashboardSnapshot, TrendReport};
use postgres_models::{queries::reports, DbError};
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, v1::params::WindowParams, AppState};

/// Summary cards and trend chart for one view load.
///
/// Both aggregates run concurrently on separate pooled connections. The
/// trend window is taken from `as_of` when given, so repeated calls with the
/// same parameters return the same series.
pub async fn handler(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Query(params): Query<WindowParams>,
) -> AppResult<Json<DashboardSnapshot>> {
    let window = params.window(state.config.trend_window_days)?;
    let offset = params.offset()?;
    let buckets = params.buckets(state.config.trend_max_buckets)?;

    {
        let mut conn = state.db_pool.get().await.map_err(DbError::from)?;
        require_project(&mut conn, project_id).await?;
    }

    let (summary, points) = tokio::try_join!(
        async {
            let mut conn = state.db_pool.get().await?;
            reports::revenue_summary(&mut conn, project_id).await
        },
        async {
            let mut conn = state.db_pool.get().await?;
            reports::revenue_trend(&mut conn, project_id, &window, offset, buckets).await
        },
    )?;

    tracing::debug!(%project_id, buckets = points.len(), "Built dashboard snapshot");

    Ok(Json(DashboardSnapshot {
        summary,
        trend: TrendReport {
            window: Some(window),
            points,
        },
    }))
}
