use hello_lambda::{api, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_api(settings: Settings) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = api::router(Arc::new(settings));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_health_returns_ok_and_stage() {
    let settings = Settings {
        stage: "prod".to_string(),
        ..Settings::default()
    };
    let addr = spawn_api(settings).await;

    let response = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok", "stage": "prod"}));
}

#[tokio::test]
async fn test_root_returns_hello_world() {
    let addr = spawn_api(Settings::default()).await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"message": "Hello, world"}));
}

#[tokio::test]
async fn test_unknown_route_is_framework_404() {
    let addr = spawn_api(Settings::default()).await;

    let response = reqwest::get(format!("http://{}/missing", addr)).await.unwrap();
    assert_eq!(response.status(), 404);
}
