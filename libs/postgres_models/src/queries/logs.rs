use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::models::{AuditLog, WebhookLog};
use crate::schema::{audit_logs, webhook_logs};
use crate::DbError;

pub async fn audit_logs_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    limit: i64,
) -> Result<Vec<AuditLog>, DbError> {
    let rows = audit_logs::table
        .filter(audit_logs::project_id.eq(project_id))
        .select(AuditLog::as_select())
        .order(audit_logs::created_at.desc())
        .limit(limit)
        .load(conn)
        .await?;
    Ok(rows)
}

pub async fn webhook_logs_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    processed: Option<bool>,
    limit: i64,
) -> Result<Vec<WebhookLog>, DbError> {
    let mut query = webhook_logs::table
        .filter(webhook_logs::project_id.eq(project_id))
        .select(WebhookLog::as_select())
        .order(webhook_logs::received_at.desc())
        .limit(limit)
        .into_boxed();

    if let Some(processed) = processed {
        query = query.filter(webhook_logs::processed.eq(processed));
    }

    Ok(query.load(conn).await?)
}
