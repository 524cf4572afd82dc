use crate::schema::transactions;
use billing_reports::{LedgerEntry, ParseError, TransactionListItem};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Transaction {
    pub id: Uuid,
    pub project_id: Uuid,
    pub gateway_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub external_id: String,
    pub transaction_type: String,
    pub status: String,
    pub amount: i64,
    pub fee_amount: i64,
    /// Generated by the database as `amount - fee_amount`.
    pub net_amount: i64,
    pub currency: String,
    pub description: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn net_amount_consistent(&self) -> bool {
        self.net_amount == self.amount - self.fee_amount
    }

    pub fn into_list_item(
        self,
        customer_name: Option<String>,
        customer_email: Option<String>,
    ) -> Result<TransactionListItem, ParseError> {
        Ok(TransactionListItem {
            id: self.id,
            external_id: self.external_id,
            transaction_type: self.transaction_type.parse()?,
            status: self.status.parse()?,
            amount: self.amount,
            fee_amount: self.fee_amount,
            net_amount: self.net_amount,
            currency: self.currency.parse()?,
            description: self.description,
            customer_id: self.customer_id,
            customer_name,
            customer_email,
            created_at: self.created_at,
        })
    }
}

/// The columns revenue aggregation needs, without metadata payloads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LedgerRow {
    pub customer_id: Option<Uuid>,
    pub transaction_type: String,
    pub status: String,
    pub amount: i64,
    pub fee_amount: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<LedgerRow> for LedgerEntry {
    type Error = ParseError;

    fn try_from(row: LedgerRow) -> Result<Self, Self::Error> {
        Ok(LedgerEntry {
            customer_id: row.customer_id,
            transaction_type: row.transaction_type.parse()?,
            status: row.status.parse()?,
            amount: row.amount,
            fee_amount: row.fee_amount,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_reports::{TransactionStatus, TransactionType};

    fn transaction(status: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            gateway_id: Uuid::new_v4(),
            customer_id: None,
            external_id: "ch_123".to_string(),
            transaction_type: "payment".to_string(),
            status: status.to_string(),
            amount: 1000,
            fee_amount: 59,
            net_amount: 941,
            currency: "USD".to_string(),
            description: None,
            metadata: serde_json::json!({}),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn list_item_carries_customer_display_fields() {
        let item = transaction("succeeded")
            .into_list_item(Some("Ada".to_string()), Some("ada@example.com".to_string()))
            .unwrap();

        assert_eq!(item.status, TransactionStatus::Succeeded);
        assert_eq!(item.transaction_type, TransactionType::Payment);
        assert_eq!(item.customer_name.as_deref(), Some("Ada"));
        assert_eq!(item.net_amount, 941);
    }

    #[test]
    fn unknown_status_fails_conversion() {
        assert!(transaction("settled").into_list_item(None, None).is_err());
    }

    #[test]
    fn net_amount_consistency() {
        let mut row = transaction("succeeded");
        assert!(row.net_amount_consistent());
        row.net_amount = 1000;
        assert!(!row.net_amount_consistent());
    }
}
