pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::StdConsole;
pub use config::CliConfig;
pub use core::catalog::{find_product, load_catalog};
pub use core::shop::ShopEngine;
pub use domain::model::{OrderLine, Preferences, Product};
pub use domain::money::Money;
pub use domain::ports::Console;
pub use utils::error::{Result, ShopError};
