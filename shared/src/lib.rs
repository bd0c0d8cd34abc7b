//! Shared types for the dine-in platform
//!
//! Data models, wire DTOs and identifier helpers used by the client
//! library and its consumers.

pub mod models;
pub mod order_id;
pub mod response;

// Re-exports
pub use order_id::{format_order_id, parse_order_id, OrderIdError};
pub use response::ApiErrorBody;
pub use serde::{Deserialize, Serialize};
