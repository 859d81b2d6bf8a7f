// ABOUTME: Command line tool configuration loaded from tokenvars.toml
// ABOUTME: Controls selector wrapping of the rendered blocks and falls back to defaults when absent

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokenvars_logging::{debug, info, warn};

use crate::report::Block;

pub const CONFIG_FILE_NAME: &str = "tokenvars.toml";

/// Selector wrapping the base variables and shortcut aliases
pub const DEFAULT_THEME_SELECTOR: &str = "@theme inline";

/// Selector wrapping the light theme aliases
pub const DEFAULT_LIGHT_SELECTOR: &str = ":root";

/// Selector wrapping the dark theme aliases
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// Output rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Wrap every block in its selector even without `--wrap`
    #[serde(default)]
    pub wrap_selectors: bool,

    #[serde(default = "default_theme_selector")]
    pub theme_selector: String,

    #[serde(default = "default_light_selector")]
    pub light_selector: String,

    #[serde(default = "default_dark_selector")]
    pub dark_selector: String,
}

fn default_theme_selector() -> String {
    DEFAULT_THEME_SELECTOR.to_string()
}

fn default_light_selector() -> String {
    DEFAULT_LIGHT_SELECTOR.to_string()
}

fn default_dark_selector() -> String {
    DEFAULT_DARK_SELECTOR.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            wrap_selectors: false,
            theme_selector: default_theme_selector(),
            light_selector: default_light_selector(),
            dark_selector: default_dark_selector(),
        }
    }
}

impl OutputConfig {
    /// Selector a block is wrapped in
    pub fn selector(&self, block: Block) -> &str {
        match block {
            Block::Base => &self.theme_selector,
            Block::Light => &self.light_selector,
            Block::Dark => &self.dark_selector,
        }
    }

    /// Validate the output configuration
    pub fn validate(&self) -> Result<(), String> {
        for block in Block::ALL {
            if self.selector(block).trim().is_empty() {
                return Err(format!("{} selector must not be empty", block.name()));
            }
        }
        Ok(())
    }

    /// Get a sanitized version of the config with valid values
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        let defaults = Self::default();

        if config.theme_selector.trim().is_empty() {
            warn!(default = DEFAULT_THEME_SELECTOR, "Empty theme selector, using default");
            config.theme_selector = defaults.theme_selector;
        }
        if config.light_selector.trim().is_empty() {
            warn!(default = DEFAULT_LIGHT_SELECTOR, "Empty light selector, using default");
            config.light_selector = defaults.light_selector;
        }
        if config.dark_selector.trim().is_empty() {
            warn!(default = DEFAULT_DARK_SELECTOR, "Empty dark selector, using default");
            config.dark_selector = defaults.dark_selector;
        }

        config
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// `<config_dir>/tokenvars/tokenvars.toml`, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tokenvars").join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_toml_str(&text)
                    .with_context(|| format!("Invalid config file {}", path.display()))
            }
            None => match Self::default_path() {
                Some(path) => Self::load_or_default(&path),
                None => {
                    debug!("No config directory on this platform, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        info!(
            config_path = %path.display(),
            config_exists = path.exists(),
            "Loading configuration"
        );

        if !path.exists() {
            info!("No configuration file found, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse TOML text, replacing invalid values with defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(text)?;

        if let Err(reason) = config.output.validate() {
            warn!(reason = %reason, "Invalid output configuration, sanitizing");
            config.output = config.output.sanitized();
        }

        debug!(
            wrap_selectors = config.output.wrap_selectors,
            theme_selector = %config.output.theme_selector,
            light_selector = %config.output.light_selector,
            dark_selector = %config.output.dark_selector,
            "Loaded output configuration"
        );
        Ok(config)
    }
}
