//! Cloud receipt: rasterize, upload, record, share

use crate::http::HttpClient;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Encoded receipt ready for upload
#[derive(Debug, Clone)]
pub struct ReceiptImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
}

/// Turns the rendered receipt into an uploadable file
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, order_id: &str, receipt: &str) -> ClientResult<ReceiptImage>;
}

/// Plain-text snapshot of the receipt
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSnapshot;

impl Rasterizer for TextSnapshot {
    fn rasterize(&self, order_id: &str, receipt: &str) -> ClientResult<ReceiptImage> {
        Ok(ReceiptImage {
            bytes: receipt.as_bytes().to_vec(),
            mime_type: "text/plain".to_string(),
            file_name: format!("bill-{}.txt", order_id),
        })
    }
}

/// Remote store for receipt files
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload and return the public URL
    async fn upload(&self, image: ReceiptImage) -> ClientResult<String>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Unsigned multipart upload (`file` + `upload_preset`), answering `secure_url`
#[derive(Debug, Clone)]
pub struct HttpAssetStore {
    http: HttpClient,
    upload_url: String,
    preset: String,
}

impl HttpAssetStore {
    pub fn new(http: HttpClient, upload_url: impl Into<String>, preset: impl Into<String>) -> Self {
        Self {
            http,
            upload_url: upload_url.into(),
            preset: preset.into(),
        }
    }

    /// Store configured through `ClientConfig::with_asset_store`
    pub fn from_config(http: HttpClient, config: &ClientConfig) -> ClientResult<Self> {
        match (&config.asset_upload_url, &config.asset_upload_preset) {
            (Some(url), Some(preset)) => Ok(Self::new(http, url.clone(), preset.clone())),
            _ => Err(ClientError::Upload("asset store is not configured".into())),
        }
    }
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn upload(&self, image: ReceiptImage) -> ClientResult<String> {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.preset.clone());

        let response: UploadResponse = self
            .http
            .post_multipart_absolute(&self.upload_url, form)
            .await
            .map_err(|e| ClientError::Upload(e.to_string()))?;

        response
            .secure_url
            .or(response.url)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::Upload("upload response carried no URL".into()))
    }
}
