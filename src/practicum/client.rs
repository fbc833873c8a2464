use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use super::error::ApiError;

/// Anything that can answer "which submissions changed since `from_date`".
pub trait HomeworkSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

pub struct PracticumClient {
    token: String,
    client: Client,
    endpoint: String,
}

impl PracticumClient {
    /// Endpoint is configurable so tests can point it at a local mock.
    pub fn new(
        token: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            token,
            client,
            endpoint,
        })
    }
}

impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        info!(from_date, "requesting homework statuses");
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
                from_date,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received homework statuses");
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PracticumClient {
        PracticumClient::new(
            "practicum-token".into(),
            format!("{}/api/user_api/homework_statuses/", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetch_sends_oauth_header_and_window() {
        let server = MockServer::start().await;
        let body = json!({
            "homeworks": [{"homework_name": "diplom", "status": "approved"}],
            "current_date": 1_700_000_000
        });
        Mock::given(method("GET"))
            .and(path("/api/user_api/homework_statuses/"))
            .and(header("Authorization", "OAuth practicum-token"))
            .and(query_param("from_date", "1699395200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server).fetch(1_699_395_200).await.unwrap();
        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn non_200_is_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(10).await.unwrap_err();
        match err {
            ApiError::UnexpectedStatus {
                status, from_date, ..
            } => {
                assert_eq!(status, 401);
                assert_eq!(from_date, 10);
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected_too() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(0).await.unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 204, .. }));
    }

    #[tokio::test]
    async fn invalid_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(0).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let client = PracticumClient::new(
            "practicum-token".into(),
            "http://127.0.0.1:1/api/".into(),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
