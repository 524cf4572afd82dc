use crate::schema::subscriptions;
use billing_reports::{ParseError, SubscriptionEntry, SubscriptionListItem};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = subscriptions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Subscription {
    pub id: Uuid,
    pub project_id: Uuid,
    pub customer_id: Uuid,
    pub gateway_id: Uuid,
    pub external_id: String,
    pub plan_name: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
    pub billing_interval: String,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    pub canceled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn into_list_item(
        self,
        customer_name: Option<String>,
        customer_email: Option<String>,
    ) -> Result<SubscriptionListItem, ParseError> {
        Ok(SubscriptionListItem {
            id: self.id,
            external_id: self.external_id,
            plan_name: self.plan_name,
            status: self.status.parse()?,
            amount: self.amount,
            currency: self.currency.parse()?,
            billing_interval: self.billing_interval,
            current_period_end: self.current_period_end,
            cancel_at_period_end: self.cancel_at_period_end,
            customer_id: self.customer_id,
            customer_name,
            customer_email,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = subscriptions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubscriptionMrrRow {
    pub customer_id: Uuid,
    pub status: String,
    pub amount: i64,
    pub cancel_at_period_end: bool,
}

impl TryFrom<SubscriptionMrrRow> for SubscriptionEntry {
    type Error = ParseError;

    fn try_from(row: SubscriptionMrrRow) -> Result<Self, Self::Error> {
        Ok(SubscriptionEntry {
            customer_id: row.customer_id,
            status: row.status.parse()?,
            amount: row.amount,
            cancel_at_period_end: row.cancel_at_period_end,
        })
    }
}
