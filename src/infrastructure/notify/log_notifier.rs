use crate::application::ports::UserNotifier;
use async_trait::async_trait;
use tracing::{error, info};

/// Notification sink for headless contexts; the desktop shell installs its
/// own toast-backed implementation.
pub struct LogNotifier;

#[async_trait]
impl UserNotifier for LogNotifier {
    async fn success(&self, message: &str) {
        info!("{}", message);
    }

    async fn error(&self, message: &str) {
        error!("{}", message);
    }
}
