use axum::{extract::Path, Json};
use billing_reports::SubscriptionSummary;
use postgres_models::queries::reports;
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection};

/// Active subscription count, MRR and scheduled cancellations.
pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<SubscriptionSummary>> {
    require_project(&mut conn, project_id).await?;
    let summary = reports::subscription_summary(&mut conn, project_id).await?;
    Ok(Json(summary))
}
