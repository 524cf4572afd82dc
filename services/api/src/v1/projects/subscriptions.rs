use axum::{
    extract::{Path, Query, State},
    Json,
};
use billing_reports::{SubscriptionListItem, SubscriptionStatus};
use postgres_models::queries::subscriptions;
use uuid::Uuid;

use super::require_project;
use crate::{
    errors::AppResult, extractors::ReadOnlyDatabaseConnection, v1::params::ListParams, AppState,
};

pub async fn handler(
    State(state): State<AppState>,
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<SubscriptionListItem>>> {
    let status = params.status::<SubscriptionStatus>()?;
    let limit = params.limit(&state.config)?;

    require_project(&mut conn, project_id).await?;
    let rows = subscriptions::list_for_project(&mut conn, project_id, status, limit).await?;
    Ok(Json(rows))
}
