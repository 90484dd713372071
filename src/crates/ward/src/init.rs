//! Initialization module for Ward
//!
//! Handles first-time setup including directory creation and configuration
//! file generation.

use crate::error::{Result, WardError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default configuration directory name
pub const CONFIG_DIR: &str = ".ward";

/// Default configuration file name
pub const CONFIG_FILE: &str = "ward.toml";

/// Default log file name
pub const LOG_FILE: &str = "ward.log";

/// Get the Ward home directory (~/.ward)
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined
pub fn get_ward_home() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR))
        .ok_or_else(|| WardError::Config("Could not determine home directory".to_string()))
}

/// Get the path to the user-level configuration file
pub fn get_user_config_path() -> Result<PathBuf> {
    Ok(get_ward_home()?.join(CONFIG_FILE))
}

/// Get the path to the project-level configuration file
pub fn get_project_config_path() -> Result<PathBuf> {
    Ok(PathBuf::from(".").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Check if Ward is initialized
///
/// Returns true if the ~/.ward directory exists and contains a config file
pub fn is_initialized() -> bool {
    get_ward_home()
        .map(|home| home.exists() && home.join(CONFIG_FILE).exists())
        .unwrap_or(false)
}

/// Initialize Ward directories and configuration
///
/// Creates:
/// - ~/.ward directory
/// - ~/.ward/ward.toml with default configuration
///
/// # Arguments
///
/// * `force` - If true, overwrite existing configuration
///
/// # Errors
///
/// Returns an error if:
/// - Directory creation fails
/// - File write fails
/// - Permissions are insufficient
pub fn initialize(force: bool) -> Result<()> {
    let ward_home = get_ward_home()?;

    info!(path = %ward_home.display(), "Initializing Ward");

    // Create ~/.ward directory
    if !ward_home.exists() {
        fs::create_dir_all(&ward_home)
            .map_err(|e| WardError::Config(format!("Failed to create directory: {}", e)))?;
        info!(path = %ward_home.display(), "Created Ward home directory");
    } else {
        info!(path = %ward_home.display(), "Ward home directory already exists");
    }

    // Create default configuration if it doesn't exist or force is true
    let config_path = ward_home.join(CONFIG_FILE);
    if !config_path.exists() || force {
        create_default_config(&config_path)?;
        info!(path = %config_path.display(), "Created default configuration");
    } else {
        warn!(path = %config_path.display(), "Configuration already exists (use --force to overwrite)");
    }

    // The log file is created lazily when the app starts
    let log_path = ward_home.join(LOG_FILE);
    if !log_path.exists() {
        info!(path = %log_path.display(), "Log file will be created on first run");
    }

    Ok(())
}

/// Create default configuration file
fn create_default_config(path: &Path) -> Result<()> {
    let default_config = r#"# Ward Configuration
#
# This is the user-level configuration file for Ward.
# Project-specific settings can be placed in ./.ward/ward.toml

[map]
# Initial map center (defaults to downtown San Francisco)
center_lat = 37.7749
center_lng = -122.4194

# Initial viewport width in degrees of longitude
span = 0.08

[location]
# Explicit coordinates; set both to skip network detection
# lat = 37.7749
# lng = -122.4194

# Geolocation service endpoint
service_url = "http://ip-api.com/json"

# Lookup timeout in milliseconds
timeout_ms = 3000

# Skip the network lookup entirely
offline = false

[report]
# Display name attached to submitted issues
author = "Anonymous User"

# Display name attached to comments
comment_author = "Current User"

# Artificial delay between submit and store insert, in milliseconds
submit_delay_ms = 1000

[logging]
# Log level: "trace", "debug", "info", "warn", "error"
level = "info"

# Log file path (relative to ~/.ward)
file = "ward.log"
"#;

    fs::write(path, default_config)
        .map_err(|e| WardError::Config(format!("Failed to write configuration: {}", e)))?;

    Ok(())
}
