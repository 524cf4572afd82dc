use axum::{
    extract::{Path, Query, State},
    Json,
};
use billing_reports::{TransactionListItem, TransactionStatus};
use postgres_models::queries::transactions;
use uuid::Uuid;

use super::require_project;
use crate::{
    errors::AppResult, extractors::ReadOnlyDatabaseConnection, v1::params::ListParams, AppState,
};

/// Newest-first transactions, optionally filtered by `status` (`all` for none).
pub async fn handler(
    State(state): State<AppState>,
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<TransactionListItem>>> {
    let status = params.status::<TransactionStatus>()?;
    let limit = params.limit(&state.config)?;

    require_project(&mut conn, project_id).await?;
    let rows = transactions::list_for_project(&mut conn, project_id, status, limit).await?;
    Ok(Json(rows))
}
