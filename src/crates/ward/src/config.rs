//! Configuration management for Ward
//!
//! Supports dual-location configuration:
//! - User-level: ~/.ward/ward.toml
//! - Project-level: ./.ward/ward.toml
//!
//! Project-level config overrides user-level config.

mod schema;
mod loader;

pub use schema::{WardConfig, MapConfig, LocationConfig, ReportConfig, LoggingConfig};
pub use loader::ConfigLoader;

use crate::Result;

/// Load configuration from both locations with project config taking precedence
///
/// Priority order:
/// 1. Default values
/// 2. User-level config (~/.ward/ward.toml)
/// 3. Project-level config (./.ward/ward.toml)
pub async fn load_config() -> Result<WardConfig> {
    let loader = ConfigLoader::new();
    loader.load().await
}
