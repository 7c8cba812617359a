use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub stage: String,
}

impl HealthResponse {
    pub fn ok(stage: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            stage: stage.into(),
        }
    }
}

/// Result of one call to the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamOutcome {
    Message(String),
    Failed(String),
}

/// Values handed to the page renderer for a single proxy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRenderContext {
    pub upstream_endpoint: String,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ProxyRenderContext {
    pub fn from_outcome(upstream_endpoint: impl Into<String>, outcome: UpstreamOutcome) -> Self {
        let (message, error) = match outcome {
            UpstreamOutcome::Message(message) => (Some(message), None),
            UpstreamOutcome::Failed(error) => (None, Some(error)),
        };

        Self {
            upstream_endpoint: upstream_endpoint.into(),
            message,
            error,
        }
    }
}
