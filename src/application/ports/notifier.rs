use async_trait::async_trait;

/// Fire-and-forget user notification channel (toast bar or equivalent).
/// Stores never depend on its outcome.
#[async_trait]
pub trait UserNotifier: Send + Sync {
    async fn success(&self, message: &str);
    async fn error(&self, message: &str);
}
