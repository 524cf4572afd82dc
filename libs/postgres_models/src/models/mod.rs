pub mod customer;
pub mod logs;
pub mod payment_gateway;
pub mod project;
pub mod snapshot;
pub mod subscription;
pub mod transaction;
pub mod views;

pub use customer::Customer;
pub use logs::{AuditLog, WebhookLog};
pub use payment_gateway::PaymentGateway;
pub use project::Project;
pub use snapshot::DailyRevenueSnapshot;
pub use subscription::{Subscription, SubscriptionMrrRow};
pub use transaction::{LedgerRow, Transaction};
pub use views::{ActiveSubscriptionsSummaryRow, CustomerStatsRow, MonthlyRevenueRow};
