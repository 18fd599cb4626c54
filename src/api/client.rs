//! HTTP client for the registration endpoint

use super::error::RegistrationError;
use super::traits::RegistrationApi;
use crate::state::RegistrationRequest;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default backend address
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Error body returned by the backend on a rejected submission
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the company registration backend
#[derive(Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, RegistrationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the registration payload to `/companies/register`.
    ///
    /// A non-success status is reported with the `message` field of
    /// the JSON error body when the body parses, and with the status
    /// code otherwise. The success body's shape is unconstrained and
    /// is not inspected.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<(), RegistrationError> {
        let response = self
            .http
            .post(format!("{}/companies/register", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("server returned {status}"),
            };
            warn!("registration rejected: {message}");
            return Err(RegistrationError::Rejected(message));
        }

        debug!("registration accepted for {}", request.company_name);
        Ok(())
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), RegistrationError> {
        RegistrationClient::register(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_request() -> RegistrationRequest {
        RegistrationRequest {
            company_name: "Acme Corp".into(),
            contact_person_full_name: "Jane Doe".into(),
            country: "France".into(),
            city: "Paris".into(),
            phone_number: "+33 600000000".into(),
            industry: "Technology".into(),
            email: "jane@acme.example".into(),
            password: "Str0ng#Pass".into(),
            re_write_password: "Str0ng#Pass".into(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/companies/register"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42
            })))
            .mount(&mock_server)
            .await;

        let client = RegistrationClient::new(mock_server.uri()).unwrap();
        let result = client.register(&sample_request()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_sends_backend_payload_keys() {
        let mock_server = MockServer::start().await;
        let request = sample_request();

        Mock::given(method("POST"))
            .and(path("/companies/register"))
            .and(body_json(serde_json::json!({
                "companyName": "Acme Corp",
                "contactPersonFullName": "Jane Doe",
                "country": "France",
                "city": "Paris",
                "phoneNumber": "+33 600000000",
                "industry": "Technology",
                "email": "jane@acme.example",
                "password": "Str0ng#Pass",
                "reWritePassword": "Str0ng#Pass"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RegistrationClient::new(mock_server.uri()).unwrap();
        assert!(client.register(&request).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_rejected_surfaces_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/companies/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Email taken"
            })))
            .mount(&mock_server)
            .await;

        let client = RegistrationClient::new(mock_server.uri()).unwrap();
        let result = client.register(&sample_request()).await;

        match result {
            Err(RegistrationError::Rejected(message)) => assert_eq!(message, "Email taken"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_rejected_without_message_uses_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/companies/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = RegistrationClient::new(mock_server.uri()).unwrap();
        let result = client.register(&sample_request()).await;

        match result {
            Err(RegistrationError::Rejected(message)) => {
                assert!(message.contains("500"), "unexpected message: {message}")
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_network_failure_is_http_error() {
        // Nothing is listening here
        let client = RegistrationClient::new("http://127.0.0.1:9").unwrap();
        let result = client.register(&sample_request()).await;

        match result {
            Err(RegistrationError::Http(_)) => {}
            other => panic!("expected Http, got {other:?}"),
        }
    }
}
