//! Reporting client for the billing dashboard API.
//!
//! A [`DashboardView`] loads every card of the dashboard concurrently from a
//! [`DashboardSource`]. Failed fetches fall back to empty data, and a load
//! that has been superseded by a newer one never overwrites its result.

pub mod generation;
pub mod http;
pub mod source;
pub mod view;

pub use generation::{FetchGeneration, FetchTicket};
pub use http::{ClientConfig, HttpDashboardSource};
pub use source::{ClientError, DashboardRequest, DashboardSource};
pub use view::{DashboardState, DashboardView, LoadOutcome};
