use crate::application::ports::{ResourceGateway, UserNotifier};
use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::{FilterState, PageCursor, RecordId};
use crate::shared::AppError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Point-in-time copy of a store's observable state.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<R> {
    pub items: Vec<R>,
    pub cursor: PageCursor,
    pub filters: FilterState,
    pub current: Option<R>,
    pub loading: bool,
    pub error: Option<String>,
}

struct StoreState<R> {
    items: Vec<R>,
    cursor: PageCursor,
    filters: FilterState,
    current: Option<R>,
    loading: bool,
    error: Option<String>,
}

impl<R> Default for StoreState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: PageCursor::default(),
            filters: FilterState::default(),
            current: None,
            loading: false,
            error: None,
        }
    }
}

/// Single source of truth for one resource's list, pagination, filters,
/// selection, and request lifecycle flags. The only component that talks to
/// the API for that resource.
///
/// The collection always mirrors the most recently fetched server page;
/// mutations never splice it locally, they re-fetch after the server
/// confirms. Concurrent fetches may race on the wire, but each dispatch is
/// tagged with a sequence number and only the latest issued one is allowed
/// to land, so a slow stale response cannot overwrite a fresher page.
pub struct ResourceStore<R: ResourceRecord> {
    gateway: Arc<dyn ResourceGateway<R>>,
    notifier: Arc<dyn UserNotifier>,
    state: Arc<RwLock<StoreState<R>>>,
    fetch_seq: AtomicU64,
}

impl<R: ResourceRecord> ResourceStore<R> {
    pub fn new(gateway: Arc<dyn ResourceGateway<R>>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            gateway,
            notifier,
            state: Arc::new(RwLock::new(StoreState::default())),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Loads one page of the collection. `overrides` merge over the stored
    /// filters; a filter change without an explicit page resets to page 1.
    /// Failures are recorded in the store and notified, never returned:
    /// there is no caller-side recovery for a failed list load.
    pub async fn fetch(&self, page: Option<u32>, overrides: Option<FilterState>) {
        let (seq, page, filters) = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
            if let Some(partial) = overrides {
                state.filters.merge(partial);
                if page.is_none() {
                    state.cursor.current_page = 1;
                }
            }
            if let Some(page) = page {
                state.cursor.current_page = page;
            }
            // Taken under the lock so sequence order matches merge order.
            let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
            (seq, state.cursor.current_page, state.filters.clone())
        };
        debug!(resource = R::RESOURCE, page, seq, "fetching list page");

        let outcome = self.gateway.list(page, &filters).await;

        let failure = {
            let mut state = self.state.write().await;
            // A superseded fetch must not touch anything, loading included:
            // the latest fetch owns the flag until it settles.
            if seq != self.fetch_seq.load(Ordering::SeqCst) {
                debug!(resource = R::RESOURCE, seq, "discarding stale list response");
                return;
            }
            match outcome {
                Ok(fetched) => {
                    state.items = fetched.data;
                    state.cursor = fetched.meta.into();
                    state.loading = false;
                    None
                }
                Err(err) => {
                    let message = err.to_string();
                    warn!(resource = R::RESOURCE, error = %message, "list fetch failed");
                    state.error = Some(message.clone());
                    state.loading = false;
                    Some(message)
                }
            }
        };
        if let Some(message) = failure {
            self.notifier.error(&message).await;
        }
    }

    /// Loads a single record into the selection. The collection is untouched.
    pub async fn fetch_one(&self, id: &RecordId) {
        self.begin_request().await;
        match self.gateway.get_by_id(id).await {
            Ok(record) => {
                let mut state = self.state.write().await;
                state.current = Some(record);
                state.loading = false;
            }
            Err(err) => {
                let message = err.to_string();
                warn!(resource = R::RESOURCE, id = %id, error = %message, "record fetch failed");
                {
                    let mut state = self.state.write().await;
                    state.error = Some(message.clone());
                    state.loading = false;
                }
                self.notifier.error(&message).await;
            }
        }
    }

    pub async fn create(&self, payload: &R::Payload) -> Result<R, AppError> {
        self.begin_request().await;
        match self.gateway.create(payload).await {
            Ok(record) => {
                self.notifier.success("Record created").await;
                self.fetch(None, None).await;
                Ok(record)
            }
            Err(err) => Err(self.fail_mutation(err).await),
        }
    }

    pub async fn update(&self, id: &RecordId, payload: &R::Payload) -> Result<R, AppError> {
        self.begin_request().await;
        match self.gateway.update(id, payload).await {
            Ok(record) => {
                self.notifier.success("Record updated").await;
                self.fetch(None, None).await;
                Ok(record)
            }
            Err(err) => Err(self.fail_mutation(err).await),
        }
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), AppError> {
        self.begin_request().await;
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.notifier.success("Record deleted").await;
                self.fetch(None, None).await;
                Ok(())
            }
            Err(err) => Err(self.fail_mutation(err).await),
        }
    }

    /// Merges partial filter changes. Resets the page to 1 and drops the
    /// selection, since it may fall outside the new scope. Does not fetch:
    /// declaring intent to filter and requesting a load are separate steps.
    pub async fn set_filters(&self, partial: FilterState) {
        let mut state = self.state.write().await;
        state.filters.merge(partial);
        state.cursor.current_page = 1;
        state.current = None;
    }

    /// Moves the page cursor only; filters and selection stay put.
    pub async fn set_page(&self, page: u32) {
        self.state.write().await.cursor.current_page = page;
    }

    pub async fn set_current(&self, record: R) {
        self.state.write().await.current = Some(record);
    }

    /// Called when the owning dialog closes.
    pub async fn clear_current(&self) {
        self.state.write().await.current = None;
    }

    pub async fn snapshot(&self) -> StoreSnapshot<R> {
        let state = self.state.read().await;
        StoreSnapshot {
            items: state.items.clone(),
            cursor: state.cursor.clone(),
            filters: state.filters.clone(),
            current: state.current.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    pub async fn items(&self) -> Vec<R> {
        self.state.read().await.items.clone()
    }

    pub async fn cursor(&self) -> PageCursor {
        self.state.read().await.cursor.clone()
    }

    pub async fn current(&self) -> Option<R> {
        self.state.read().await.current.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    async fn begin_request(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
    }

    async fn fail_mutation(&self, err: AppError) -> AppError {
        let message = err.to_string();
        warn!(resource = R::RESOURCE, error = %message, "mutation failed");
        {
            let mut state = self.state.write().await;
            state.error = Some(message.clone());
            state.loading = false;
        }
        self.notifier.error(&message).await;
        err
    }
}
