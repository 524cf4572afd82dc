use axum::{extract::Path, Json};
use postgres_models::{models::PaymentGateway, queries::projects};
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection};

/// Gateways configured for a project. Credentials are never serialized.
pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<Vec<PaymentGateway>>> {
    require_project(&mut conn, project_id).await?;
    let gateways = projects::gateways(&mut conn, project_id).await?;
    Ok(Json(gateways))
}
