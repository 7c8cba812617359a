use crate::domain::model::UpstreamOutcome;
use crate::domain::ports::UpstreamClient;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed upstream with a fixed per-request timeout and no retries.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let payload: Value = response.error_for_status()?.json().await?;

        extract_message(&payload)
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn fetch_message(&self, url: &str) -> UpstreamOutcome {
        match self.try_fetch(url).await {
            Ok(message) => UpstreamOutcome::Message(message),
            Err(e) => {
                tracing::warn!("Upstream call to {} failed: {}", url, e);
                UpstreamOutcome::Failed(format!("Failed to call API at {}: {}", url, e))
            }
        }
    }
}

/// `message` field when present, otherwise the whole object as JSON text.
/// Anything but a JSON object is rejected.
pub fn extract_message(payload: &Value) -> Result<String> {
    let Value::Object(fields) = payload else {
        return Err(AppError::UnexpectedPayload {
            found: json_kind(payload),
        });
    };

    Ok(match fields.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => payload.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn upstream() -> HttpUpstream {
        HttpUpstream::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_extract_message_prefers_message_field() {
        assert_eq!(extract_message(&json!({"message": "Hi"})).unwrap(), "Hi");
        assert_eq!(extract_message(&json!({"message": 42})).unwrap(), "42");
        assert_eq!(
            extract_message(&json!({"greeting": "Hi"})).unwrap(),
            r#"{"greeting":"Hi"}"#
        );
    }

    #[test]
    fn test_extract_message_rejects_non_objects() {
        for payload in [json!([1, 2]), json!("hi"), json!(7), json!(null)] {
            assert!(matches!(
                extract_message(&payload),
                Err(AppError::UnexpectedPayload { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_fetch_message_array_body_is_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!([1, 2]));
        });

        let url = server.url("/");
        let outcome = upstream().fetch_message(&url).await;

        assert_eq!(
            outcome,
            UpstreamOutcome::Failed(format!(
                "Failed to call API at {}: expected a JSON object, got array",
                url
            ))
        );
    }

    #[tokio::test]
    async fn test_fetch_message_string_body_is_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!("hi"));
        });

        let outcome = upstream().fetch_message(&server.url("/")).await;
        assert!(matches!(outcome, UpstreamOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_fetch_message_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"message": "Hi"}));
        });

        let outcome = upstream().fetch_message(&server.url("/")).await;

        api_mock.assert();
        assert_eq!(outcome, UpstreamOutcome::Message("Hi".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_message_server_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        });

        let url = server.url("/");
        let outcome = upstream().fetch_message(&url).await;

        api_mock.assert();
        match outcome {
            UpstreamOutcome::Failed(error) => {
                assert!(error.starts_with(&format!("Failed to call API at {}", url)));
                assert!(error.contains("500"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_message_malformed_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("not json");
        });

        let outcome = upstream().fetch_message(&server.url("/")).await;
        assert!(matches!(outcome, UpstreamOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_fetch_message_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"message": "late"}));
        });

        let client = HttpUpstream::new(Duration::from_millis(50)).unwrap();
        let outcome = client.fetch_message(&server.url("/")).await;
        assert!(matches!(outcome, UpstreamOutcome::Failed(_)));
    }
}
