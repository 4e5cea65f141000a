use async_trait::async_trait;

/// Scroll side effect owned by the thread view. Requested once per batch of
/// newly arrived messages, never while the reader is browsing history.
#[async_trait]
pub trait ThreadViewport: Send + Sync {
    async fn reveal_latest(&self);
}
