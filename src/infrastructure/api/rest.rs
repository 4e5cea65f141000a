use crate::application::ports::{MessageGateway, ResourceGateway, ResourcePage};
use crate::domain::entities::{ResourceRecord, ThreadMessage};
use crate::domain::value_objects::{FilterState, RecordId};
use crate::infrastructure::api::ApiError;
use crate::shared::config::ApiConfig;
use crate::shared::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::time::Duration;

/// Shared HTTP client for the back-office API.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| AppError::Configuration(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[derive(Deserialize)]
struct ServerError {
    message: String,
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    body: &'a str,
}

/// Rejects non-2xx responses, extracting the server's `message` field when
/// the body carries one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ServerError>().await {
        Ok(body) => body.message,
        Err(_) => format!("request failed with status {}", status),
    };
    Err(ApiError::Status { status, message })
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Body(err.to_string()))
}

/// REST implementation of the per-resource API contract. One instance per
/// resource, routed by `R::RESOURCE`.
pub struct RestResourceGateway<R: ResourceRecord> {
    client: RestClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R: ResourceRecord> RestResourceGateway<R> {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R: ResourceRecord> ResourceGateway<R> for RestResourceGateway<R> {
    async fn list(&self, page: u32, filters: &FilterState) -> Result<ResourcePage<R>, AppError> {
        let mut query = vec![("page".to_string(), page.to_string())];
        query.extend(filters.to_query_pairs());

        let response = self
            .client
            .http
            .get(self.client.url(R::RESOURCE))
            .query(&query)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(decode(check(response).await?).await?)
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<R, AppError> {
        let response = self
            .client
            .http
            .get(self.client.url(&format!("{}/{}", R::RESOURCE, id)))
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(decode(check(response).await?).await?)
    }

    async fn create(&self, payload: &R::Payload) -> Result<R, AppError> {
        let response = self
            .client
            .http
            .post(self.client.url(R::RESOURCE))
            .json(payload)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(decode(check(response).await?).await?)
    }

    async fn update(&self, id: &RecordId, payload: &R::Payload) -> Result<R, AppError> {
        let response = self
            .client
            .http
            .put(self.client.url(&format!("{}/{}", R::RESOURCE, id)))
            .json(payload)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(decode(check(response).await?).await?)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), AppError> {
        let response = self
            .client
            .http
            .delete(self.client.url(&format!("{}/{}", R::RESOURCE, id)))
            .send()
            .await
            .map_err(ApiError::from)?;
        check(response).await?;
        Ok(())
    }
}

/// REST implementation of the assignment message thread contract.
pub struct RestMessageGateway {
    client: RestClient,
}

impl RestMessageGateway {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn thread_url(&self, assignment_id: &RecordId) -> String {
        self.client
            .url(&format!("assignments/{}/messages", assignment_id))
    }
}

#[async_trait]
impl MessageGateway for RestMessageGateway {
    async fn list_thread(&self, assignment_id: &RecordId) -> Result<Vec<ThreadMessage>, AppError> {
        let response = self
            .client
            .http
            .get(self.thread_url(assignment_id))
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(decode(check(response).await?).await?)
    }

    async fn send_message(
        &self,
        assignment_id: &RecordId,
        body: &str,
    ) -> Result<ThreadMessage, AppError> {
        let response = self
            .client
            .http
            .post(self.thread_url(assignment_id))
            .json(&SendMessageBody { body })
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(decode(check(response).await?).await?)
    }
}
