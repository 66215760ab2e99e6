use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub position: PositionConfig,
    pub paging: PagingConfig,
    pub logging: LoggingConfig,
}

/// Layout constants for the windowing engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Height of a single row, must be positive
    pub row_height: f64,

    /// Height of the scrollable table viewport
    pub table_height: f64,

    pub table_width: f64,

    pub default_column_width: f64,

    /// Carried in the position state, not used by the windowing engine
    pub infinite_scroll_load_threshold: f64,

    /// Exclusive end index of the window before the first scroll event
    pub initial_rendered_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// When false the whole data set is visible and page moves only
    /// re-slice the window
    pub enabled: bool,

    /// Rows per page, must be positive
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,

    /// Number of log entries kept in memory
    pub buffer_capacity: usize,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            row_height: 25.0,
            table_height: 400.0,
            table_width: 200.0,
            default_column_width: 80.0,
            infinite_scroll_load_threshold: 50.0,
            initial_rendered_rows: 10,
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            page_size: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            buffer_capacity: 1000,
        }
    }
}

impl Config {
    /// Load config from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config from TOML text. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;

        // Zero sizes would make the window math meaningless
        if config.position.row_height <= 0.0 {
            config.position.row_height = PositionConfig::default().row_height;
        }
        if config.paging.page_size == 0 {
            config.paging.page_size = PagingConfig::default().page_size;
        }

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("grid-window").join("config.toml"))
    }
}
