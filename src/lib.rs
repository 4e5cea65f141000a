pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod state;

pub use application::ports::{
    MessageGateway, ResourceGateway, ResourcePage, ThreadViewport, UserNotifier,
};
pub use application::services::{DebouncedSearch, PollHandle, ResourceStore, ThreadSyncService};
pub use domain::value_objects::{FilterState, FilterValue, PageCursor, RecordId};
pub use shared::{AppConfig, AppError, Result};
pub use state::AppState;
