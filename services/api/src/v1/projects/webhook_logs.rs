use axum::{
    extract::{Path, Query, State},
    Json,
};
use postgres_models::{models::WebhookLog, queries::logs};
use uuid::Uuid;

use super::require_project;
use crate::{
    errors::AppResult,
    extractors::ReadOnlyDatabaseConnection,
    v1::params::{resolve_limit, WebhookLogParams},
    AppState,
};

/// Received webhooks, newest first, optionally only processed or unprocessed ones.
pub async fn handler(
    State(state): State<AppState>,
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
    Query(params): Query<WebhookLogParams>,
) -> AppResult<Json<Vec<WebhookLog>>> {
    let limit = resolve_limit(params.limit, &state.config)?;

    require_project(&mut conn, project_id).await?;
    let rows = logs::webhook_logs_for_project(&mut conn, project_id, params.processed, limit).await?;
    Ok(Json(rows))
}
