pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, ANY_ORIGIN};
pub use error::Slide300Error;
pub type Result<T> = std::result::Result<T, Slide300Error>;
