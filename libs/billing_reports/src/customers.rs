use serde::{Deserialize, Serialize};

use crate::window::ReportWindow;

/// Customer counts for a project over an explicit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStats {
    /// Customers created before `window.end`.
    pub total_customers: u64,
    /// Customers created inside `window`.
    pub new_customers: u64,
    pub customers_with_active_subscription: u64,
    pub window: ReportWindow,
}
