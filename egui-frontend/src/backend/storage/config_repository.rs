//! # Menu Config Repository
//!
//! Reads the menu configuration from a YAML file. The file lives in the
//! platform config directory unless `PARTY_MENU_CONFIG` points elsewhere.
//! A missing file yields the default configuration and nothing is written.
//!
//! ## YAML Format
//!
//! ```yaml
//! default_tab: "MAIN COURSE"
//! include_veg: true
//! include_non_veg: true
//! catalog_path: "/path/to/catalog.json"   # optional
//! ```

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{MealType, MenuFilter};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "PARTY_MENU_CONFIG";

const CONFIG_FILE_NAME: &str = "menu_config.yaml";

/// Startup configuration for the menu screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Tab selected when the app opens
    pub default_tab: MealType,
    pub include_veg: bool,
    pub include_non_veg: bool,
    /// JSON catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_tab: MealType::MainCourse,
            include_veg: true,
            include_non_veg: true,
            catalog_path: None,
        }
    }
}

impl MenuConfig {
    /// Filter state the session starts with
    pub fn initial_filter(&self) -> MenuFilter {
        MenuFilter {
            tab: self.default_tab,
            include_veg: self.include_veg,
            include_non_veg: self.include_non_veg,
            search_text: String::new(),
        }
    }
}

/// Locates and loads `menu_config.yaml`
#[derive(Debug, Clone)]
pub struct MenuConfigRepository {
    path: Option<PathBuf>,
}

impl MenuConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Resolve the config path from the environment or the platform config dir
    pub fn from_environment() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            debug!("Using config path from {}: {}", CONFIG_ENV_VAR, path);
            return Self::new(path);
        }

        let path = ProjectDirs::from("com", "PartyMenu", "PartyMenu")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        if path.is_none() {
            debug!("No platform config directory available, using defaults");
        }
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the config, falling back to defaults when the file does not exist
    pub fn load(&self) -> Result<MenuConfig> {
        let path = match &self.path {
            Some(path) if path.exists() => path,
            Some(path) => {
                info!("No menu config at {:?}, using defaults", path);
                return Ok(MenuConfig::default());
            }
            None => return Ok(MenuConfig::default()),
        };

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu config {:?}", path))?;
        let config: MenuConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse menu config {:?}", path))?;

        info!("Loaded menu config from {:?}", path);
        Ok(config)
    }
}
