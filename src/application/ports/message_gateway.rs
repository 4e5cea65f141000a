use crate::domain::entities::ThreadMessage;
use crate::domain::value_objects::RecordId;
use crate::shared::AppError;
use async_trait::async_trait;

/// Remote API contract for an assignment's message thread.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn list_thread(&self, assignment_id: &RecordId) -> Result<Vec<ThreadMessage>, AppError>;
    async fn send_message(
        &self,
        assignment_id: &RecordId,
        body: &str,
    ) -> Result<ThreadMessage, AppError>;
}
