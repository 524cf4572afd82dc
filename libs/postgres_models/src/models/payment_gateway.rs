use crate::schema::payment_gateways;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = payment_gateways)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentGateway {
    pub id: Uuid,
    pub project_id: Uuid,
    pub gateway_name: String,
    /// Gateway secrets. Never leaves the service.
    #[serde(skip_serializing, default)]
    pub credentials: serde_json::Value,
    pub webhook_secret_configured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_are_not_serialized() {
        let gateway = PaymentGateway {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            gateway_name: "stripe".to_string(),
            credentials: json!({ "secret_key": "sk_live_123" }),
            webhook_secret_configured: true,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let body = serde_json::to_value(&gateway).unwrap();
        assert!(body.get("credentials").is_none());
        assert_eq!(body["gateway_name"], "stripe");
    }
}
