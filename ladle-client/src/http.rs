//! HTTP client for network-based API calls

use crate::{ApiTransport, ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_from(status, &text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map an error status plus body to a `ClientError`
    ///
    /// The backend wraps failures as `{ "message": "..." }`; that message is
    /// kept verbatim so the UI can surface it unchanged.
    pub(crate) fn error_from(status: StatusCode, body: &str) -> ClientError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.to_string());
        tracing::warn!(%status, %message, "request failed");

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }
}

#[async_trait]
impl ApiTransport for HttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_from(status, &text));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_extracts_backend_message() {
        let err = HttpClient::error_from(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Seating capacity is required"}"#,
        );
        match err {
            ClientError::Validation(msg) => assert_eq!(msg, "Seating capacity is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_from_falls_back_to_raw_body() {
        let err = HttpClient::error_from(StatusCode::INTERNAL_SERVER_ERROR, "Bad Gateway");
        match err {
            ClientError::Internal(msg) => assert_eq!(msg, "Bad Gateway"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_discards_body() {
        let err = HttpClient::error_from(StatusCode::UNAUTHORIZED, "{}");
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/api/"));
        assert_eq!(client.url("/tables"), "http://localhost:5000/api/tables");
        assert_eq!(client.url("tables"), "http://localhost:5000/api/tables");
    }
}
