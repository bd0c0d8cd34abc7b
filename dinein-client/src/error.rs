//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every variant is recoverable: the caller shows [`ClientError::user_message`]
/// and returns the view to an interactive state. Nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request with a reason
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Backend failed without giving a reason
    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A view was opened without the data it needs
    #[error("{0}")]
    MissingContext(String),

    /// An order id could not be turned into the numeric backend id
    #[error(transparent)]
    InvalidOrderId(#[from] shared::OrderIdError),

    /// The same line item already has a request outstanding
    #[error("Item {0} is already being updated")]
    InFlight(usize),

    /// Billing percentages were never saved
    #[error("Billing settings must be saved before the receipt is finalized")]
    SettingsRequired,

    /// Receipt upload failed
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Session store I/O error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Text for the transient notification shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) => "Network error. Please try again.".to_string(),
            ClientError::Unauthorized => "Please log in again.".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the backend (rather than local validation) produced this error
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_)
                | ClientError::Api { .. }
                | ClientError::Status { .. }
                | ClientError::Unauthorized
                | ClientError::Forbidden(_)
                | ClientError::NotFound(_)
                | ClientError::InvalidResponse(_)
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
