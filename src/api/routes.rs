use crate::config::Settings;
use crate::domain::model::{GreetingResponse, HealthResponse};
use crate::domain::ports::Greeter;
use crate::domain::services::HelloService;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

pub async fn health(State(settings): State<Arc<Settings>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(settings.stage.clone()))
}

/// Hello world. A fresh `HelloService` per request; it carries no state.
pub async fn read_root() -> Json<GreetingResponse> {
    Json(greeting(&HelloService::new()))
}

pub fn greeting(service: &dyn Greeter) -> GreetingResponse {
    GreetingResponse {
        message: service.greet(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGreeter(&'static str);

    impl Greeter for FixedGreeter {
        fn greet(&self) -> String {
            self.0.to_string()
        }
    }

    #[tokio::test]
    async fn test_health_reports_configured_stage() {
        let settings = Arc::new(Settings {
            stage: "staging".to_string(),
            ..Settings::default()
        });

        let Json(body) = health(State(settings)).await;
        assert_eq!(body, HealthResponse::ok("staging"));
    }

    #[tokio::test]
    async fn test_read_root_returns_hello_world() {
        let Json(body) = read_root().await;
        assert_eq!(body.message, "Hello, world");
    }

    #[test]
    fn test_greeting_wraps_any_greeter() {
        assert_eq!(greeting(&FixedGreeter("Kia ora")).message, "Kia ora");
    }
}
