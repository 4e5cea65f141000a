use crate::application::services::ResourceStore;
use crate::domain::entities::ResourceRecord;
use crate::domain::value_objects::FilterState;
use crate::shared::Debouncer;
use std::sync::Arc;
use std::time::Duration;

/// Binds a free-text search box to a store. Keystrokes restart the quiet
/// period; only the final settled value becomes a filter change plus fetch,
/// and the filter change resets the page cursor to 1.
pub struct DebouncedSearch<R: ResourceRecord> {
    store: Arc<ResourceStore<R>>,
    debouncer: Debouncer,
}

impl<R: ResourceRecord> DebouncedSearch<R> {
    pub fn new(store: Arc<ResourceStore<R>>, delay: Duration) -> Self {
        Self {
            store,
            debouncer: Debouncer::new(delay),
        }
    }

    pub async fn keystroke(&self, text: &str) {
        let store = Arc::clone(&self.store);
        let settled = text.to_string();
        self.debouncer
            .call(async move {
                store.set_filters(FilterState::with_search(&settled)).await;
                store.fetch(None, None).await;
            })
            .await;
    }

    /// Discards any pending keystroke, e.g. when the list unmounts. A fetch
    /// that already started is left to settle on its own.
    pub async fn cancel(&self) {
        self.debouncer.cancel().await;
    }
}
