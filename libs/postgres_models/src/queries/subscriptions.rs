use billing_reports::{SubscriptionEntry, SubscriptionListItem, SubscriptionStatus};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel_async::{methods::LoadQuery, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::models::{Subscription, SubscriptionMrrRow};
use crate::schema::{customers, subscriptions};
use crate::DbError;

type ListRow = (Subscription, Option<String>, Option<String>);

pub async fn list_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    status: Option<SubscriptionStatus>,
    limit: i64,
) -> Result<Vec<SubscriptionListItem>, DbError> {
    let rows: Vec<ListRow> = list_query(project_id, status, limit).load(conn).await?;
    rows.into_iter()
        .map(|(subscription, name, email)| {
            subscription
                .into_list_item(name, email)
                .map_err(DbError::invalid_row("subscriptions"))
        })
        .collect()
}

fn list_query(
    project_id: Uuid,
    status: Option<SubscriptionStatus>,
    limit: i64,
) -> impl LoadQuery<'static, AsyncPgConnection, ListRow> + QueryFragment<Pg> + Send {
    let mut query = subscriptions::table
        .inner_join(customers::table)
        .filter(subscriptions::project_id.eq(project_id))
        .select((Subscription::as_select(), customers::name, customers::email))
        .order(subscriptions::created_at.desc())
        .limit(limit)
        .into_boxed::<Pg>();

    if let Some(status) = status {
        query = query.filter(subscriptions::status.eq(status.as_str()));
    }
    query
}

/// MRR input: the project's active subscriptions.
pub async fn active_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
) -> Result<Vec<SubscriptionEntry>, DbError> {
    let rows: Vec<SubscriptionMrrRow> = subscriptions::table
        .filter(subscriptions::project_id.eq(project_id))
        .filter(subscriptions::status.eq(SubscriptionStatus::Active.as_str()))
        .select(SubscriptionMrrRow::as_select())
        .load(conn)
        .await?;

    rows.into_iter()
        .map(|row| SubscriptionEntry::try_from(row).map_err(DbError::invalid_row("subscriptions")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_sql(status: Option<SubscriptionStatus>) -> String {
        diesel::debug_query::<Pg, _>(&list_query(Uuid::new_v4(), status, 50)).to_string()
    }

    #[test]
    fn status_filter_adds_predicate() {
        let sql = list_sql(Some(SubscriptionStatus::PastDue));
        assert!(sql.contains(r#""subscriptions"."status" = $"#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "subscriptions"."created_at" DESC"#), "{sql}");
        assert!(sql.contains(r#""past_due""#), "{sql}");
    }

    #[test]
    fn all_statuses_has_no_predicate() {
        let sql = list_sql(None);
        assert!(!sql.contains(r#""subscriptions"."status" = $"#), "{sql}");
        assert!(sql.contains(r#"ORDER BY "subscriptions"."created_at" DESC"#), "{sql}");
    }
}
