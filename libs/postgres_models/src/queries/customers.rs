use billing_reports::{CustomerStats, ReportWindow, SubscriptionStatus};
use chrono::{DateTime, Utc};
use diesel::dsl::count_distinct;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel_async::{methods::LoadQuery, AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::models::Customer;
use crate::schema::{customers, subscriptions};
use crate::DbError;

pub async fn list_for_project(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    limit: i64,
) -> Result<Vec<Customer>, DbError> {
    let rows = customers::table
        .filter(customers::project_id.eq(project_id))
        .select(Customer::as_select())
        .order(customers::created_at.desc())
        .limit(limit)
        .load(conn)
        .await?;
    Ok(rows)
}

pub async fn count_for_project(conn: &mut AsyncPgConnection, project_id: Uuid) -> Result<u64, DbError> {
    let total: i64 = customers::table
        .filter(customers::project_id.eq(project_id))
        .count()
        .get_result(conn)
        .await?;
    Ok(total.max(0) as u64)
}

/// Customer counts as they stood at `window.end`, with "new" measured over
/// the window instead of the database clock the `customer_stats` view uses.
///
/// Subscription status is only stored as its current value, so the active
/// count covers subscriptions created before `window.end` that are active now.
pub async fn stats_for_window(
    conn: &mut AsyncPgConnection,
    project_id: Uuid,
    window: ReportWindow,
) -> Result<CustomerStats, DbError> {
    let total_customers: i64 = created_before(project_id, window.end).get_result(conn).await?;

    let new_customers: i64 = customers::table
        .filter(customers::project_id.eq(project_id))
        .filter(customers::created_at.ge(window.start))
        .filter(customers::created_at.lt(window.end))
        .count()
        .get_result(conn)
        .await?;

    let with_active: i64 = active_subscribers_before(project_id, window.end)
        .get_result(conn)
        .await?;

    Ok(CustomerStats {
        total_customers: total_customers.max(0) as u64,
        new_customers: new_customers.max(0) as u64,
        customers_with_active_subscription: with_active.max(0) as u64,
        window,
    })
}

fn created_before(
    project_id: Uuid,
    end: DateTime<Utc>,
) -> impl LoadQuery<'static, AsyncPgConnection, i64> + QueryFragment<Pg> + Send {
    customers::table
        .filter(customers::project_id.eq(project_id))
        .filter(customers::created_at.lt(end))
        .count()
}

fn active_subscribers_before(
    project_id: Uuid,
    end: DateTime<Utc>,
) -> impl LoadQuery<'static, AsyncPgConnection, i64> + QueryFragment<Pg> + Send {
    subscriptions::table
        .filter(subscriptions::project_id.eq(project_id))
        .filter(subscriptions::status.eq(SubscriptionStatus::Active.as_str()))
        .filter(subscriptions::created_at.lt(end))
        .select(count_distinct(subscriptions::customer_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sql(query: &impl QueryFragment<Pg>) -> String {
        diesel::debug_query::<Pg, _>(query).to_string()
    }

    #[test]
    fn window_counts_stop_at_window_end() {
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let total = sql(&created_before(Uuid::new_v4(), end));
        assert!(total.contains(r#""customers"."created_at" < $"#), "{total}");

        let active = sql(&active_subscribers_before(Uuid::new_v4(), end));
        assert!(active.contains(r#""subscriptions"."created_at" < $"#), "{active}");
        assert!(active.contains(r#""subscriptions"."status" = $"#), "{active}");
    }
}
