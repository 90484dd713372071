//! Configuration loader with dual-location support
//!
//! Loads configuration from:
//! 1. Default values
//! 2. User-level config: ~/.ward/ward.toml
//! 3. Project-level config: ./.ward/ward.toml
//!
//! Later configs override earlier ones.

use crate::config::schema::WardConfig;
use crate::error::{Result, WardError};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// Configuration loader that handles both user and project configs
pub struct ConfigLoader {
    user_config_path: PathBuf,
    project_config_path: PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            user_config_path: Self::user_config_path(),
            project_config_path: Self::project_config_path(),
        }
    }

    /// Get user-level config path (~/.ward/ward.toml)
    fn user_config_path() -> PathBuf {
        dirs::home_dir()
            .expect("Failed to get home directory")
            .join(".ward")
            .join("ward.toml")
    }

    /// Get project-level config path (./.ward/ward.toml)
    fn project_config_path() -> PathBuf {
        std::env::current_dir()
            .expect("Failed to get current directory")
            .join(".ward")
            .join("ward.toml")
    }

    /// Load configuration from both locations with project taking precedence
    ///
    /// Priority order:
    /// 1. Default values
    /// 2. User-level config (~/.ward/ward.toml)
    /// 3. Project-level config (./.ward/ward.toml)
    pub async fn load(&self) -> Result<WardConfig> {
        // Start with defaults
        let mut config = WardConfig::default();
        info!("Loading configuration with defaults");

        // Load user-level config if it exists
        match self.load_from_path(&self.user_config_path).await {
            Ok(user_config) => {
                debug!(path = %self.user_config_path.display(), "Loaded user-level config");
                config.merge(user_config);
            }
            Err(e) => {
                debug!(
                    path = %self.user_config_path.display(),
                    error = %e,
                    "User-level config not found, using defaults"
                );
            }
        }

        // Load project-level config if it exists (overrides user config)
        match self.load_from_path(&self.project_config_path).await {
            Ok(project_config) => {
                debug!(path = %self.project_config_path.display(), "Loaded project-level config");
                config.merge(project_config);
            }
            Err(e) => {
                debug!(
                    path = %self.project_config_path.display(),
                    error = %e,
                    "Project-level config not found"
                );
            }
        }

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from a specific path
    async fn load_from_path(&self, path: &PathBuf) -> Result<WardConfig> {
        if !path.exists() {
            return Err(WardError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| WardError::Config(format!("Failed to read config: {}", e)))?;

        let config: WardConfig = toml::from_str(&content)
            .map_err(|e| WardError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Get user config path
    pub fn get_user_config_path(&self) -> &PathBuf {
        &self.user_config_path
    }

    /// Get project config path
    pub fn get_project_config_path(&self) -> &PathBuf {
        &self.project_config_path
    }

    /// Check if user config exists
    pub fn user_config_exists(&self) -> bool {
        self.user_config_path.exists()
    }

    /// Check if project config exists
    pub fn project_config_exists(&self) -> bool {
        self.project_config_path.exists()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths() {
        let loader = ConfigLoader::new();

        let user_path = loader.get_user_config_path();
        assert!(user_path.ends_with(".ward/ward.toml"));

        let project_path = loader.get_project_config_path();
        assert!(project_path.ends_with(".ward/ward.toml"));
    }

    #[tokio::test]
    async fn test_load_returns_defaults_when_no_files() {
        let mut loader = ConfigLoader::new();
        loader.user_config_path = PathBuf::from("/nonexistent/user.toml");
        loader.project_config_path = PathBuf::from("/nonexistent/project.toml");

        let config = loader.load().await.unwrap();

        assert_eq!(config.report.author, "Anonymous User");
        assert_eq!(config.report.submit_delay_ms, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_user_config_overrides_defaults() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let user_config_path = temp_dir.path().join("user.toml");

        let user_toml = r#"
[map]
center_lat = 40.7128
center_lng = -74.0060

[report]
author = "Jane Resident"
"#;
        fs::write(&user_config_path, user_toml).await.unwrap();

        let mut loader = ConfigLoader::new();
        loader.user_config_path = user_config_path;
        loader.project_config_path = PathBuf::from("/nonexistent/project.toml");

        let config = loader.load().await.unwrap();

        // User config should override defaults
        assert_eq!(config.map.center_lat, 40.7128);
        assert_eq!(config.map.center_lng, -74.0060);
        assert_eq!(config.report.author, "Jane Resident");

        // Unspecified fields should remain defaults
        assert_eq!(config.map.span, 0.08);
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_project_config_overrides_user() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let user_config_path = temp_dir.path().join("user.toml");
        let project_config_path = temp_dir.path().join("project.toml");

        let user_toml = r#"
[report]
author = "Jane Resident"
submit_delay_ms = 500

[logging]
level = "debug"
"#;

        let project_toml = r#"
[report]
submit_delay_ms = 0

[location]
offline = true
"#;

        fs::write(&user_config_path, user_toml).await.unwrap();
        fs::write(&project_config_path, project_toml).await.unwrap();

        let mut loader = ConfigLoader::new();
        loader.user_config_path = user_config_path;
        loader.project_config_path = project_config_path;

        let config = loader.load().await.unwrap();

        // Project config should override user config
        assert_eq!(config.report.submit_delay_ms, 0);
        assert!(config.location.offline);

        // Merge replaces whole sections, so project-parsed defaults win for
        // fields and sections the project file left out
        assert_eq!(config.report.author, "Anonymous User");
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_partial_section_keeps_other_defaults() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let user_config_path = temp_dir.path().join("user.toml");

        // Only override logging section
        let user_toml = r#"
[logging]
level = "trace"
"#;

        fs::write(&user_config_path, user_toml).await.unwrap();

        let mut loader = ConfigLoader::new();
        loader.user_config_path = user_config_path;
        loader.project_config_path = PathBuf::from("/nonexistent/project.toml");

        let config = loader.load().await.unwrap();

        // Logging section from user config
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.file, "ward.log");

        // Other sections from defaults
        assert_eq!(config.report.author, "Anonymous User");
        assert_eq!(config.map.span, 0.08);
    }

    #[tokio::test]
    async fn test_empty_config_file_uses_defaults() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let user_config_path = temp_dir.path().join("user.toml");

        // Empty config file (just whitespace/comments)
        let user_toml = r#"
# This is an empty config file
        "#;

        fs::write(&user_config_path, user_toml).await.unwrap();

        let mut loader = ConfigLoader::new();
        loader.user_config_path = user_config_path;
        loader.project_config_path = PathBuf::from("/nonexistent/project.toml");

        let config = loader.load().await.unwrap();

        assert_eq!(config.report.author, "Anonymous User");
        assert_eq!(config.location.timeout_ms, 3000);
    }

    #[tokio::test]
    async fn test_load_from_path_nonexistent_file() {
        let loader = ConfigLoader::new();
        let nonexistent = PathBuf::from("/this/path/does/not/exist/config.toml");

        let result = loader.load_from_path(&nonexistent).await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, WardError::Config(_)));
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("config.toml"));
    }

    #[tokio::test]
    async fn test_load_with_invalid_toml_syntax() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let user_config_path = temp_dir.path().join("user.toml");

        // Invalid TOML syntax
        let invalid_toml = r#"
[map
center_lat = 40.0
"#;

        fs::write(&user_config_path, invalid_toml).await.unwrap();

        let mut loader = ConfigLoader::new();
        loader.user_config_path = user_config_path;
        loader.project_config_path = PathBuf::from("/nonexistent/project.toml");

        // load() skips unreadable configs and falls back to defaults
        let config = loader.load().await.unwrap();
        assert_eq!(config.map.center_lat, 37.7749);
    }

    #[tokio::test]
    async fn test_load_with_malformed_toml_content() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let project_config_path = temp_dir.path().join("project.toml");

        // Syntactically valid TOML but wrong types
        let malformed_toml = r#"
[report]
submit_delay_ms = "should be number not string"
"#;

        fs::write(&project_config_path, malformed_toml).await.unwrap();

        let loader = ConfigLoader::new();
        let result = loader.load_from_path(&project_config_path).await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, WardError::Config(_)));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn test_user_config_exists_when_file_present() {
        use tokio::fs;
        let temp_dir = TempDir::new().unwrap();
        let user_config_path = temp_dir.path().join("user.toml");

        fs::write(&user_config_path, "[map]\n").await.unwrap();

        let mut loader = ConfigLoader::new();
        loader.user_config_path = user_config_path.clone();

        assert!(loader.user_config_exists());
        assert!(user_config_path.exists());
    }
}
