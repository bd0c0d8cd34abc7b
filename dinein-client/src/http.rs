//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, RequestBuilder, StatusCode, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiErrorBody;

/// HTTP client for the restaurant backend
///
/// Tokens are passed per call: staff-scoped and mutating calls attach one,
/// public reads go out without.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(%method, %url, authed = token.is_some(), "request");
        let mut req = self.client.request(method, url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> ClientResult<T> {
        let response = self.request(Method::GET, path, token).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let response = self.request(Method::GET, path, token).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let response = self.request(Method::POST, path, token).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let response = self.request(Method::PUT, path, token).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request, ignoring the response body
    pub async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<()> {
        let response = self.request(Method::PUT, path, token).json(body).send().await?;
        Self::handle_empty(response).await
    }

    /// Make a PATCH request, ignoring the response body
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> ClientResult<()> {
        let response = self.request(Method::PATCH, path, token).json(body).send().await?;
        Self::handle_empty(response).await
    }

    /// Make a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str, token: Option<&str>) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path, token).send().await?;
        Self::handle_empty(response).await
    }

    /// Send a multipart form with the given method, ignoring the response body
    pub async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        form: Form,
        token: Option<&str>,
    ) -> ClientResult<()> {
        let response = self.request(method, path, token).multipart(form).send().await?;
        Self::handle_empty(response).await
    }

    /// POST a multipart form to an absolute URL (third-party asset store)
    pub async fn post_multipart_absolute<T: DeserializeOwned>(&self, url: &str, form: Form) -> ClientResult<T> {
        let response = self.client.post(url).multipart(form).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_from(status, text));
        }
        Ok(response.json().await?)
    }

    async fn handle_empty(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_from(status, text));
        }
        Ok(())
    }

    fn error_from(status: StatusCode, text: String) -> ClientError {
        // 服务端给出原因时原样返回
        if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text)
            && let Some(reason) = body.reason()
        {
            return ClientError::Api {
                status: status.as_u16(),
                message: reason.to_string(),
            };
        }
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            _ => ClientError::Status {
                status: status.as_u16(),
                body: text,
            },
        }
    }
}
