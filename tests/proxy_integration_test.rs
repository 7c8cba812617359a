use hello_lambda::proxy::{self, ProxyState};
use hello_lambda::{api, ProxyConfig, Settings};
use httpmock::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn(router: axum::Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

async fn fetch_page(upstream_endpoint: &str) -> (u16, String) {
    let state = ProxyState::new(ProxyConfig::new(upstream_endpoint)).unwrap();
    let addr = spawn(proxy::router(state)).await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    let status = response.status().as_u16();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_renders_upstream_message() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Hi"}));
    });

    let (status, html) = fetch_page(&server.base_url()).await;

    api_mock.assert();
    assert_eq!(status, 200);
    assert!(html.contains(r#"<p class="message">Hi</p>"#));
    assert!(!html.contains(r#"class="error""#));
}

#[tokio::test]
async fn test_renders_whole_body_when_message_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(serde_json::json!({"greeting": "Hi"}));
    });

    let (_, html) = fetch_page(&server.base_url()).await;

    assert!(html.contains("{&quot;greeting&quot;:&quot;Hi&quot;}"));
    assert!(!html.contains(r#"class="error""#));
}

#[tokio::test]
async fn test_unreachable_upstream_renders_error_with_url() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}", dead_addr);
    let (status, html) = fetch_page(&endpoint).await;

    assert_eq!(status, 200);
    assert!(html.contains(&format!("Failed to call API at {}/", endpoint)));
    assert!(!html.contains(r#"class="message""#));
}

#[tokio::test]
async fn test_upstream_server_error_renders_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(500);
    });

    let (status, html) = fetch_page(&server.base_url()).await;

    api_mock.assert();
    assert_eq!(status, 200);
    assert!(html.contains(r#"<p class="error">Failed to call API at "#));
    assert!(!html.contains(r#"class="message""#));
}

#[tokio::test]
async fn test_array_body_renders_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(serde_json::json!([1, 2]));
    });

    let (status, html) = fetch_page(&server.base_url()).await;

    assert_eq!(status, 200);
    assert!(html.contains("expected a JSON object, got array"));
    assert!(!html.contains(r#"class="message""#));
}

#[tokio::test]
async fn test_end_to_end_through_primary_api() {
    let api_addr = spawn(api::router(Arc::new(Settings::default()))).await;

    let (status, html) = fetch_page(&format!("http://{}", api_addr)).await;

    assert_eq!(status, 200);
    assert!(html.contains(r#"<p class="message">Hello, world</p>"#));
}
