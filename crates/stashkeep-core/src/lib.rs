pub mod config;
pub mod dedup;
pub mod error;
pub mod models;
pub mod storage;

pub use config::AppConfig;
pub use error::{Error, Result};
