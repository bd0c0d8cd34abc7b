//! Order identifier helpers
//!
//! The backend addresses orders by numeric id while the UI shows the
//! prefixed form `ORD` + five zero-padded digits.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const ORDER_ID_PREFIX: &str = "ORD";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid order id: {0:?}")]
pub struct OrderIdError(pub String);

/// `12` -> `ORD00012`
pub fn format_order_id(id: i64) -> String {
    format!("{}{:05}", ORDER_ID_PREFIX, id)
}

/// `ORD00012` (or a bare `12`) -> `12`
pub fn parse_order_id(value: &str) -> Result<i64, OrderIdError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix(ORDER_ID_PREFIX).unwrap_or(trimmed);
    digits
        .parse::<i64>()
        .map_err(|_| OrderIdError(value.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Num(i64),
    Str(String),
}

/// Accept `12` or `"12"` for optional numeric ids
pub fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumOrString>::deserialize(deserializer)? {
        Some(NumOrString::Num(n)) => Some(n),
        Some(NumOrString::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Accept `12` or `"ORD00012"` for optional ids kept as strings
pub fn de_opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumOrString>::deserialize(deserializer)? {
        Some(NumOrString::Num(n)) => Some(n.to_string()),
        Some(NumOrString::Str(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}
