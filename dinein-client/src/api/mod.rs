//! REST endpoints
//!
//! Thin typed wrappers, one `impl DineInClient` block per area. Workflow
//! logic (validation, local state, persistence) lives in the view-model
//! modules, not here.

mod account;
mod catalog;
mod orders;

pub use orders::OrderListQuery;
