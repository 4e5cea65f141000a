pub mod config;
pub mod debounce;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use debounce::Debouncer;
pub use error::{AppError, Result};
