pub mod filters;
pub mod pagination;
pub mod record_id;

pub use filters::{FilterState, FilterValue};
pub use pagination::{PageCursor, PageMeta};
pub use record_id::RecordId;
