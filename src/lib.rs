pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::TomlConfig;

pub use crate::core::catalog::Catalog;
pub use crate::core::helpers::ViewHelpers;
pub use crate::core::timesince::RelativeTime;
pub use crate::utils::error::{HelperError, Result};
