//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

/// Client configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DINEIN_BASE_URL | http://localhost:4000 | Backend base URL |
/// | DINEIN_TIMEOUT_SECS | 30 | Request timeout |
/// | DINEIN_STORAGE_PATH | (none, in-memory) | JSON file backing the session |
/// | DINEIN_FALLBACK_IMAGE | /assets/CartImg.jpg | Image for cart items without one |
/// | DINEIN_COUNTRY_CODE | 91 | Prefix for WhatsApp share links |
/// | DINEIN_ASSET_UPLOAD_URL | (none) | Receipt upload endpoint |
/// | DINEIN_ASSET_UPLOAD_PRESET | (none) | Unsigned upload preset |
/// | DINEIN_RESTAURANT_NAME | Saoji Dhaba & Family Restaurant | Receipt header fallback |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Session file; `None` keeps the session in memory
    pub storage_path: Option<PathBuf>,

    /// Image assigned to merged cart items that have none
    pub fallback_image: String,

    /// Where a successful order submission sends the user
    pub tracking_path: String,

    /// Delay before that redirect, so the success notice stays visible
    pub redirect_delay: Duration,

    /// Country code prepended to WhatsApp numbers
    pub country_code: String,

    /// Receipt asset store upload URL
    pub asset_upload_url: Option<String>,

    /// Receipt asset store upload preset
    pub asset_upload_preset: Option<String>,

    /// Receipt header when the business profile can't be fetched
    pub restaurant_name: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            storage_path: None,
            fallback_image: "/assets/CartImg.jpg".to_string(),
            tracking_path: "/track-order".to_string(),
            redirect_delay: Duration::from_millis(500),
            country_code: "91".to_string(),
            asset_upload_url: None,
            asset_upload_preset: None,
            restaurant_name: "Saoji Dhaba & Family Restaurant".to_string(),
        }
    }

    /// Load from `DINEIN_*` environment variables, defaults for the rest
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("DINEIN_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".into()),
        );
        if let Some(timeout) = std::env::var("DINEIN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        config.storage_path = std::env::var("DINEIN_STORAGE_PATH").ok().map(PathBuf::from);
        if let Ok(image) = std::env::var("DINEIN_FALLBACK_IMAGE") {
            config.fallback_image = image;
        }
        if let Ok(code) = std::env::var("DINEIN_COUNTRY_CODE") {
            config.country_code = code;
        }
        config.asset_upload_url = std::env::var("DINEIN_ASSET_UPLOAD_URL").ok();
        config.asset_upload_preset = std::env::var("DINEIN_ASSET_UPLOAD_PRESET").ok();
        if let Ok(name) = std::env::var("DINEIN_RESTAURANT_NAME") {
            config.restaurant_name = name;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the session to a JSON file
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    pub fn with_fallback_image(mut self, image: impl Into<String>) -> Self {
        self.fallback_image = image.into();
        self
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    pub fn with_asset_store(mut self, upload_url: impl Into<String>, preset: impl Into<String>) -> Self {
        self.asset_upload_url = Some(upload_url.into());
        self.asset_upload_preset = Some(preset.into());
        self
    }

    pub fn with_restaurant_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = name.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}
