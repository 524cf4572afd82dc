use axum::{extract::Path, Json};
use postgres_models::models::Project;
use uuid::Uuid;

use super::require_project;
use crate::{errors::AppResult, extractors::ReadOnlyDatabaseConnection};

pub async fn handler(
    ReadOnlyDatabaseConnection(mut conn): ReadOnlyDatabaseConnection,
    Path(project_id): Path<Uuid>,
) -> AppResult<Json<Project>> {
    let project = require_project(&mut conn, project_id).await?;
    Ok(Json(project))
}
