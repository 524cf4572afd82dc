use axum::{extract::Path, Json};
use billing_reports::RevenueSummary;
use postgres_models::queries::reports;
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection};

pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<RevenueSummary>> {
    require_project(&mut conn, project_id).await?;
    let summary = reports::revenue_summary(&mut conn, project_id).await?;
    Ok(Json(summary))
}
