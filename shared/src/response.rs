//! API error body
//!
//! Failed requests carry a human-readable reason under `error` (coupon,
//! order endpoints) or `message` (list endpoints). Both are accepted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The server's reason, verbatim, if any
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_prefers_error_field() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Coupon expired","message":"Bad Request"}"#).unwrap();
        assert_eq!(body.reason(), Some("Coupon expired"));
    }

    #[test]
    fn test_reason_falls_back_to_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"No orders"}"#).unwrap();
        assert_eq!(body.reason(), Some("No orders"));
        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.reason(), None);
    }
}
