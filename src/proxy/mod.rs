//! HTML front-end that calls the primary API and renders its message.

pub mod page;

use crate::adapters::http::HttpUpstream;
use crate::config::ProxyConfig;
use crate::domain::model::ProxyRenderContext;
use crate::domain::ports::UpstreamClient;
use crate::utils::error::Result;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProxyState {
    pub config: Arc<ProxyConfig>,
    pub upstream: Arc<dyn UpstreamClient>,
}

impl ProxyState {
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let upstream = HttpUpstream::new(config.timeout)?;
        Ok(Self::with_upstream(config, Arc::new(upstream)))
    }

    pub fn with_upstream(config: ProxyConfig, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

/// Always answers 200; upstream failures show up in the page instead.
pub async fn index(State(state): State<ProxyState>) -> Html<String> {
    let url = state.config.target_url();
    let outcome = state.upstream.fetch_message(&url).await;
    let context = ProxyRenderContext::from_outcome(state.config.upstream_endpoint.clone(), outcome);

    Html(page::render(&context))
}
