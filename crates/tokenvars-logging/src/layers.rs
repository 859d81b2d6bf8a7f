// ABOUTME: Layer constructors for the console, JSON and file logging outputs
// ABOUTME: Console and JSON layers write to stderr so stdout stays clean for converted tokens

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{FileConfig, LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Create a console output layer writing to stderr.
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console {
        return None;
    }

    let layer = if config.pretty_console {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .pretty()
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .boxed()
    };

    Some(layer)
}

/// Create a JSON output layer for structured logging.
pub fn create_json_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.json {
        return None;
    }

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .boxed();

    Some(layer)
}

/// Split a log file path into the appender's directory and file name prefix
fn split_log_path(path: &Path) -> Result<(&Path, &str)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Log file path has no usable file name: {}", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((directory, file_name))
}

/// Create a daily-rolling file layer.
///
/// The returned guard flushes the background writer when dropped and must outlive logging.
pub fn create_file_layer(config: &FileConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let (directory, file_name) = split_log_path(&config.path)?;
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;

    let (writer, guard) = non_blocking(rolling::daily(directory, file_name));
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .boxed();

    Ok((layer, guard))
}

/// Filter with the default level plus one directive per target override.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    config.module_levels.iter().try_fold(
        EnvFilter::new(config.level.to_string()),
        |filter, (target, level)| -> Result<EnvFilter> {
            let directive = format!("{target}={level}")
                .parse()
                .with_context(|| format!("Invalid filter directive for target '{target}'"))?;
            Ok(filter.add_directive(directive))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileConfig, LogLevel, OutputConfig};
    use tempfile::tempdir;
    use tracing::Level;

    #[test]
    fn test_create_console_layer() {
        let config = OutputConfig {
            console: true,
            pretty_console: true,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_some());

        let config = OutputConfig {
            console: false,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_none());
    }

    #[test]
    fn test_create_json_layer() {
        let config = OutputConfig {
            json: true,
            ..Default::default()
        };
        assert!(create_json_layer(&config).is_some());

        let config = OutputConfig::default();
        assert!(create_json_layer(&config).is_none());
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/tokenvars/run.log")).unwrap();
        assert_eq!(dir, Path::new("/var/log/tokenvars"));
        assert_eq!(name, "run.log");

        let (dir, name) = split_log_path(Path::new("tokenvars.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "tokenvars.log");

        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_create_file_layer_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("test.log");

        let config = FileConfig {
            path: log_path.clone(),
        };

        let result = create_file_layer(&config);
        assert!(result.is_ok());
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_create_env_filter() {
        let mut config = LoggingConfig {
            level: LogLevel(Level::DEBUG),
            ..Default::default()
        };
        config
            .module_levels
            .insert("tokenvars_core".to_string(), LogLevel(Level::TRACE));

        let filter = create_env_filter(&config).unwrap();
        let rendered = filter.to_string().to_lowercase();
        assert!(rendered.contains("debug"));
        assert!(rendered.contains("tokenvars_core=trace"));
    }
}
