//! Configuration schema for the Ward terminal client

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use ward_core::{Coordinates, DEFAULT_CENTER};

/// Main Ward configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WardConfig {
    /// Map viewport configuration
    #[serde(default)]
    pub map: MapConfig,

    /// Location detection configuration
    #[serde(default)]
    pub location: LocationConfig,

    /// Issue reporting configuration
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Map viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial center latitude
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Initial center longitude
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    /// Initial viewport width in degrees of longitude
    #[serde(default = "default_span")]
    pub span: f64,
}

fn default_center_lat() -> f64 {
    DEFAULT_CENTER.lat
}

fn default_center_lng() -> f64 {
    DEFAULT_CENTER.lng
}

fn default_span() -> f64 {
    0.08
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            span: default_span(),
        }
    }
}

impl MapConfig {
    /// Configured center as coordinates
    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.center_lat, self.center_lng)
    }
}

/// Location detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Explicit latitude; set together with `lng` to skip detection
    #[serde(default)]
    pub lat: Option<f64>,

    /// Explicit longitude; set together with `lat` to skip detection
    #[serde(default)]
    pub lng: Option<f64>,

    /// Geolocation service endpoint returning JSON coordinates
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Lookup timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Skip the network lookup entirely
    #[serde(default)]
    pub offline: bool,
}

fn default_service_url() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            lat: None,
            lng: None,
            service_url: default_service_url(),
            timeout_ms: default_timeout_ms(),
            offline: false,
        }
    }
}

impl LocationConfig {
    /// Explicit coordinates, when both components are configured
    pub fn override_coords(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// Issue reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Display name attached to submitted issues
    #[serde(default = "default_author")]
    pub author: String,

    /// Display name attached to comments
    #[serde(default = "default_comment_author")]
    pub comment_author: String,

    /// Artificial delay between submit and store insert, in milliseconds
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

fn default_author() -> String {
    "Anonymous User".to_string()
}

fn default_comment_author() -> String {
    "Current User".to_string()
}

fn default_submit_delay_ms() -> u64 {
    1000
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            comment_author: default_comment_author(),
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (relative to ~/.ward or absolute)
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "ward.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl WardConfig {
    /// Merge another config into this one (other takes precedence)
    ///
    /// The loader handles priority: defaults → user → project
    pub fn merge(&mut self, other: WardConfig) {
        // Simple section replacement - serde fills in defaults for missing fields
        self.map = other.map;
        self.location = other.location;
        self.report = other.report;
        self.logging = other.logging;
    }

    /// Get the resolved log file path
    ///
    /// If the path is relative, resolves it relative to ~/.ward
    pub fn log_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.logging.file);

        if path.is_absolute() {
            path
        } else {
            dirs::home_dir()
                .expect("Failed to get home directory")
                .join(".ward")
                .join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WardConfig::default();
        assert_eq!(config.map.center_lat, 37.7749);
        assert_eq!(config.map.center_lng, -122.4194);
        assert_eq!(config.location.timeout_ms, 3000);
        assert!(!config.location.offline);
        assert_eq!(config.report.author, "Anonymous User");
        assert_eq!(config.report.comment_author, "Current User");
        assert_eq!(config.report.submit_delay_ms, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_merge_config() {
        let mut base = WardConfig::default();
        let mut override_config = WardConfig::default();
        override_config.report.author = "Jane Resident".to_string();
        override_config.location.offline = true;

        base.merge(override_config);

        assert_eq!(base.report.author, "Jane Resident");
        assert!(base.location.offline);
        assert_eq!(base.logging.level, "info"); // Unchanged
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let toml = r#"
            [report]
            submit_delay_ms = 250
        "#;

        let config: WardConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.report.submit_delay_ms, 250);
        assert_eq!(config.report.author, "Anonymous User");
        assert_eq!(config.map.span, 0.08);
    }

    #[test]
    fn test_override_coords_requires_both_components() {
        let mut location = LocationConfig::default();
        assert!(location.override_coords().is_none());

        location.lat = Some(40.0);
        assert!(location.override_coords().is_none());

        location.lng = Some(-74.0);
        let coords = location.override_coords().unwrap();
        assert_eq!(coords.lat, 40.0);
        assert_eq!(coords.lng, -74.0);
    }

    #[test]
    fn test_log_path_relative() {
        let config = WardConfig::default();
        let path = config.log_path();

        assert!(path.to_string_lossy().contains(".ward"));
        assert!(path.to_string_lossy().contains("ward.log"));
    }

    #[test]
    fn test_log_path_absolute() {
        let mut config = WardConfig::default();
        config.logging.file = "/tmp/ward-test.log".to_string();

        assert_eq!(config.log_path(), PathBuf::from("/tmp/ward-test.log"));
    }
}
