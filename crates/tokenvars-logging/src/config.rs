// ABOUTME: Logging configuration for tokenvars: level, per-target levels, outputs and log file
// ABOUTME: Built from defaults plus TOKENVARS_LOG* and RUST_LOG environment overrides

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::Level;

/// Level filter applied to every target without an explicit override
pub const ENV_LEVEL: &str = "TOKENVARS_LOG";
/// Fallback directives in `RUST_LOG` syntax, read when `TOKENVARS_LOG` is unset
pub const ENV_RUST_LOG: &str = "RUST_LOG";
pub const ENV_JSON: &str = "TOKENVARS_LOG_JSON";
pub const ENV_NO_CONSOLE: &str = "TOKENVARS_LOG_NO_CONSOLE";
/// Path of the log file; setting it turns file output on
pub const ENV_FILE: &str = "TOKENVARS_LOG_FILE";

/// `tracing::Level` that (de)serializes as a lowercase string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_log_level(&raw)
            .map(LogLevel)
            .map_err(serde::de::Error::custom)
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for every target
    pub level: LogLevel,

    /// Per-target overrides such as `tokenvars_core = "debug"`
    #[serde(default)]
    pub module_levels: BTreeMap<String, LogLevel>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub file: FileConfig,
}

/// Enabled log sinks.
///
/// Console and JSON output go to stderr; stdout is reserved for converted tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub console: bool,
    pub file: bool,
    /// One JSON object per event instead of human-readable lines
    pub json: bool,
    /// Multi-line console events with source locations
    pub pretty_console: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base name of the daily-rolling log file
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // A converter run is quiet unless something needs attention
        Self {
            level: LogLevel(Level::WARN),
            module_levels: BTreeMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Defaults with the process environment applied on top.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        match (lookup(ENV_LEVEL), lookup(ENV_RUST_LOG)) {
            (Some(level), _) => {
                self.level = LogLevel(
                    parse_log_level(&level).with_context(|| format!("Invalid {ENV_LEVEL} value"))?,
                );
            }
            (None, Some(directives)) => self
                .apply_rust_log(&directives)
                .with_context(|| format!("Invalid {ENV_RUST_LOG} value"))?,
            (None, None) => {}
        }

        self.output.json |= lookup(ENV_JSON).is_some();
        if lookup(ENV_NO_CONSOLE).is_some() {
            self.output.console = false;
        }
        if let Some(path) = lookup(ENV_FILE) {
            self.output.file = true;
            self.file.path = PathBuf::from(path);
        }

        Ok(())
    }

    /// Apply `level` and `target=level` directives, comma separated.
    fn apply_rust_log(&mut self, directives: &str) -> Result<()> {
        let directives = directives.split(',').map(str::trim).filter(|d| !d.is_empty());

        for directive in directives {
            match directive.split_once('=') {
                Some((target, level)) => {
                    let level = parse_log_level(level)
                        .with_context(|| format!("in directive for target '{target}'"))?;
                    self.module_levels
                        .insert(target.to_string(), LogLevel(level));
                }
                None => self.level = LogLevel(parse_log_level(directive)?),
            }
        }
        Ok(())
    }
}

/// `<config_dir>/tokenvars/tokenvars.log`, or `tokenvars.log` in the working directory
fn default_log_file_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("tokenvars"))
        .unwrap_or_default()
        .join("tokenvars.log")
}

/// Parse a level name, ignoring case. `warning` is accepted for `warn`.
pub fn parse_log_level(raw: &str) -> Result<Level> {
    let name = raw.trim();
    if name.eq_ignore_ascii_case("warning") {
        return Ok(Level::WARN);
    }
    name.parse::<Level>().map_err(|_| {
        anyhow!("Invalid log level '{raw}', expected one of trace, debug, info, warn, error")
    })
}
