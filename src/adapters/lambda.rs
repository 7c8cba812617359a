use crate::config::{ProxyConfig, Settings};
use crate::proxy::ProxyState;
use lambda_http::{run, Error};
use std::sync::Arc;

/// API Gateway REST stages prefix the path with `/<stage>`; the routers expect `/`.
pub fn ignore_stage_in_path() {
    std::env::set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
}

/// Serves the primary API router through the Lambda HTTP runtime.
pub async fn run_api(settings: Settings) -> Result<(), Error> {
    tracing::info!(
        stage = %settings.stage,
        region = %settings.aws_region,
        "Starting {} on Lambda",
        settings.title()
    );
    run(crate::api::router(Arc::new(settings))).await
}

/// Serves the proxy front-end router through the Lambda HTTP runtime.
pub async fn run_proxy(config: ProxyConfig) -> Result<(), Error> {
    tracing::info!(upstream = %config.upstream_endpoint, "Starting proxy front-end on Lambda");
    let state = ProxyState::new(config)?;
    run(crate::proxy::router(state)).await
}
