//! Dine-in client library
//!
//! Client for the restaurant ordering and billing backend, plus the view
//! models of the ordering, staff and billing screens:
//!
//! - [`cart`]: three-source cart reconciliation and order submission
//! - [`orders`]: staff order list and per-item status workflow
//! - [`billing`]: surcharges, receipt, cloud upload and share link
//! - [`tables`], [`menu`], [`profile`], [`plans`], [`qr`]: remaining views
//!
//! All persisted state goes through [`Session`].

pub mod api;
pub mod billing;
pub mod cart;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod menu;
pub mod money;
pub mod orders;
pub mod plans;
pub mod profile;
pub mod qr;
pub mod redirect;
pub mod session;
pub mod tables;

// Re-exports
pub use billing::{BillSummary, BillView, BillingSettings};
pub use cart::{CartSession, SubmitOutcome, merge_cart_items};
pub use client::DineInClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use orders::{OrderDetail, OrderFilter, OrderList};
pub use redirect::Redirect;
pub use session::{FileStore, KvStore, MemoryStore, Session};

// Re-export shared types for convenience
pub use shared::models;
