use billing_reports::{LedgerEntry, ReportWindow, TransactionListItem, TransactionStatus};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel_async::{methods::LoadQuery, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::models::{LedgerRow, Transaction};
use crate::schema::{customers, transactions};
use crate::DbError;

type ListRow = (Transaction, Option<String>, Option<String>);

/// Newest-first transactions with the customer's name and email.
pub async fn list_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    status: Option<TransactionStatus>,
    limit: i64,
) -> Result<Vec<TransactionListItem>, DbError> {
    let rows: Vec<ListRow> = list_query(project_id, status, limit).load(conn).await?;
    rows.into_iter()
        .map(|(transaction, name, email)| {
            transaction
                .into_list_item(name, email)
                .map_err(DbError::invalid_row("transactions"))
        })
        .collect()
}

fn list_query(
    project_id: Uuid,
    status: Option<TransactionStatus>,
    limit: i64,
) -> impl LoadQuery<'static, AsyncPgConnection, ListRow> + QueryFragment<Pg> + Send {
    let mut query = transactions::table
        .left_join(customers::table)
        .filter(transactions::project_id.eq(project_id))
        .select((
            Transaction::as_select(),
            customers::name.nullable(),
            customers::email.nullable(),
        ))
        .order(transactions::created_at.desc())
        .limit(limit)
        .into_boxed::<Pg>();

    if let Some(status) = status {
        query = query.filter(transactions::status.eq(status.as_str()));
    }
    query
}

/// Aggregation input for a project, optionally limited to `window`.
pub async fn ledger_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    window: Option<&ReportWindow>,
) -> Result<Vec<LedgerEntry>, DbError> {
    let mut query = transactions::table
        .filter(transactions::project_id.eq(project_id))
        .select(LedgerRow::as_select())
        .into_boxed();

    if let Some(window) = window {
        query = query
            .filter(transactions::created_at.ge(window.start))
            .filter(transactions::created_at.lt(window.end));
    }

    let rows: Vec<LedgerRow> = query.load(conn).await?;
    tracing::debug!(%project_id, rows = rows.len(), "Loaded ledger rows");

    rows.into_iter()
        .map(|row| LedgerEntry::try_from(row).map_err(DbError::invalid_row("transactions")))
        .collect()
}
