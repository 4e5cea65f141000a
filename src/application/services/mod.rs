pub mod list_query;
pub mod resource_store;
pub mod thread_sync_service;

pub use list_query::DebouncedSearch;
pub use resource_store::{ResourceStore, StoreSnapshot};
pub use thread_sync_service::{PollHandle, ThreadSyncService};
