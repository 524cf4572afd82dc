use axum::{extract::Path, Json};
use postgres_models::{models::MonthlyRevenueRow, queries::reports};
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection};

/// Rows of the monthly revenue view. A project without transactions gets
/// an empty list rather than zero-filled months.
pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<Vec<MonthlyRevenueRow>>> {
    require_project(&mut conn, project_id).await?;
    let rows = reports::monthly_revenue_for_project(&mut conn, project_id).await?;
    Ok(Json(rows))
}
