use crate::domain::model::UpstreamOutcome;
use async_trait::async_trait;

pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

/// Fetches the display message from the upstream API.
///
/// Implementations never return an error: every failure is folded into
/// [`UpstreamOutcome::Failed`] so the caller can still render a page.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch_message(&self, url: &str) -> UpstreamOutcome;
}
