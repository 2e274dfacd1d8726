pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ShopConfig;

pub use adapters::{console::TerminalConsole, storage::CsvCatalogFile};
pub use core::shop::CookieShop;
pub use utils::error::{Result, ShopError};
