//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Booking state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    Booked,
    Available,
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    #[serde(rename = "tableNumber", alias = "table_number")]
    pub table_number: i64,
    pub status: TableStatus,
}

impl DiningTable {
    pub fn is_booked(&self) -> bool {
        self.status == TableStatus::Booked
    }
}

/// `GET /api/tables/:businessId` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableListResponse {
    #[serde(default)]
    pub tables: Option<Vec<DiningTable>>,
}
