use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::models::{PaymentGateway, Project};
use crate::schema::{payment_gateways, projects};
use crate::DbError;

pub async fn list(conn: &mut AsyncPgConnection) -> Result<Vec<Project>, DbError> {
    let rows = projects::table
        .select(Project::as_select())
        .order(projects::created_at.desc())
        .load(conn)
        .await?;
    Ok(rows)
}

pub async fn find(conn: &mut AsyncPgConnection, project_id: Uuid) -> Result<Option<Project>, DbError> {
    let project = projects::table
        .find(project_id)
        .select(Project::as_select())
        .first(conn)
        .await
        .optional()?;
    Ok(project)
}

pub async fn gateways(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> Result<Vec<PaymentGateway>, DbError> {
    let rows = payment_gateways::table
        .filter(payment_gateways::project_id.eq(project_id))
        .select(PaymentGateway::as_select())
        .order(payment_gateways::gateway_name.asc())
        .load(conn)
        .await?;
    Ok(rows)
}
