use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::{FilterState, PageMeta, RecordId};
use crate::shared::AppError;
use async_trait::async_trait;
use serde::Deserialize;

/// One page of a listed resource, exactly as the server returned it.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage<R> {
    pub data: Vec<R>,
    pub meta: PageMeta,
}

/// Remote API contract for one resource. The store is the only caller.
#[async_trait]
pub trait ResourceGateway<R: ResourceRecord>: Send + Sync {
    async fn list(&self, page: u32, filters: &FilterState) -> Result<ResourcePage<R>, AppError>;
    async fn get_by_id(&self, id: &RecordId) -> Result<R, AppError>;
    async fn create(&self, payload: &R::Payload) -> Result<R, AppError>;
    async fn update(&self, id: &RecordId, payload: &R::Payload) -> Result<R, AppError>;
    async fn delete(&self, id: &RecordId) -> Result<(), AppError>;
}
