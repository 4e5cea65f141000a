pub mod api;
pub mod notify;
