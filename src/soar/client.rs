//! HTTP client for the SOAR REST API
//!
//! Thin JSON wrapper around `reqwest`: every call resolves a path against the
//! configured base URL, attaches the `AppKey` header and turns non-success
//! statuses into [`Error::Http`].

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::SoarConfig;
use crate::errors::{Error, Result};

/// Header carrying the SOAR API key
pub const APP_KEY_HEADER: &str = "AppKey";

/// Authenticated HTTP client for the SOAR API
#[derive(Debug, Clone)]
pub struct SoarClient {
    client: Client,
    base_url: String,
    app_key: Option<String>,
}

impl SoarClient {
    /// Create a new SOAR client with the given configuration
    pub fn new(config: &SoarConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_root().to_string(),
            app_key: config.app_key.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "SOAR request");

        let builder = self.client.request(method, &url);
        match &self.app_key {
            Some(key) => builder.header(APP_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Send a GET request with optional query parameters
    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }

        let response = builder.send().await?;
        self.handle_response(response).await
    }

    /// Send a POST request with a JSON body
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value> {
        self.send_with_body(Method::POST, path, body).await
    }

    /// Send a PATCH request with a JSON body
    pub async fn patch_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value> {
        self.send_with_body(Method::PATCH, path, body).await
    }

    async fn send_with_body<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> Result<Value> {
        if tracing::enabled!(tracing::Level::TRACE) {
            let body_json = serde_json::to_string(body)
                .unwrap_or_else(|_| "<unable to serialize>".to_string());
            trace!(body = %body_json, "Request body");
        }

        let response = self.request(method, path).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Check the status and decode the body; an empty body decodes to `null`
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        debug!(status = %status, "SOAR response");

        if !status.is_success() {
            let error_text =
                response.text().await.unwrap_or_else(|_| "<unable to read error>".to_string());
            trace!(body = %error_text, "Error response");

            let message = match status.canonical_reason() {
                Some(reason) if error_text.trim().is_empty() => reason.to_string(),
                _ => error_text,
            };
            return Err(Error::http(status.as_u16(), message));
        }

        let body = response.text().await?;
        trace!(body = %body, "Response body");

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::serialization(e, "Failed to decode SOAR response body"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> SoarClient {
        let config = SoarConfig::new(format!("{}/", server.uri())).with_app_key("test-key");
        SoarClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_json_sends_app_key_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1p/external/v1/cases"))
            .and(header(APP_KEY_HEADER, "test-key"))
            .and(query_param("pageToken", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cases": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let value = client.get_json("/api/1p/external/v1/cases", &[("pageToken", "abc")]).await.unwrap();
        assert_eq!(value, json!({"cases": []}));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/external/v1/cases/ExecuteManualAction"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .post_json("/api/external/v1/cases/ExecuteManualAction", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("backend exploded"));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/1p/external/v1/cases/5"))
            .and(body_json(json!({"Priority": "PriorityHigh"})))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let value = client
            .patch_json("/api/1p/external/v1/cases/5", &json!({"Priority": "PriorityHigh"}))
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_json_is_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_json("/anything", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }
}
