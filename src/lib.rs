pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::router, memory_store::InMemoryScoreStore};
pub use config::toml_config::TomlConfig;
pub use core::processor::ReceiptProcessor;
pub use utils::error::{ReceiptError, Result};
