//! Read-only queries. Every query is scoped to one project.

pub mod customers;
pub mod logs;
pub mod projects;
pub mod reports;
pub mod subscriptions;
pub mod transactions;
