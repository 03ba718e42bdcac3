use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub tui: TuiSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,

    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

fn default_show_icons() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    26
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            show_icons: default_show_icons(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Rolling JSON log file; stderr only when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl FolioConfig {
    /// Loads `path`. A missing file is an error: configuration is only read
    /// when explicitly requested.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: FolioConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tui.sidebar_width < 12 {
            return Err(FolioError::Config(format!(
                "tui.sidebar_width must be at least 12, got {}",
                self.tui.sidebar_width
            )));
        }
        if self.server.host.trim().is_empty() {
            return Err(FolioError::Config("server.host cannot be empty".to_string()));
        }
        Ok(())
    }
}

static TUI_CONFIG: OnceLock<TuiSettings> = OnceLock::new();

/// Publishes TUI settings for the drawing code. Only the first call wins.
pub fn init_tui_config(settings: TuiSettings) {
    let _ = TUI_CONFIG.set(settings);
}

/// TUI settings, defaulted when never initialised.
pub fn tui_config() -> &'static TuiSettings {
    TUI_CONFIG.get_or_init(TuiSettings::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::load_or_default(None).unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.server.port, 4000);
        assert!(config.tui.show_icons);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[server]\nport = 8080\n\n[tui]\nshow_icons = false\n").unwrap();

        let config = FolioConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.tui.show_icons);
        assert_eq!(config.tui.sidebar_width, 26);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = FolioConfig::load(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(matches!(FolioConfig::load(&path), Err(FolioError::Toml(_))));
    }

    #[test]
    fn test_validate_sidebar_width() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[tui]\nsidebar_width = 4\n").unwrap();
        assert!(matches!(FolioConfig::load(&path), Err(FolioError::Config(_))));
    }
}
