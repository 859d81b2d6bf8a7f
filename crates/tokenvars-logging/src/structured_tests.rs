// ABOUTME: Tests running events through the file layer and environment filter together
// ABOUTME: Checks level filtering, per-target overrides and structured fields in written log files

use crate::config::{FileConfig, LogLevel, LoggingConfig};
use crate::layers::{BoxedLayer, create_env_filter, create_file_layer};
use crate::{debug, info, warn};
use std::path::Path;
use tempfile::tempdir;
use tracing::Level;
use tracing_subscriber::prelude::*;

fn file_config(dir: &Path, level: Level) -> LoggingConfig {
    LoggingConfig {
        level: LogLevel(level),
        file: FileConfig {
            path: dir.join("tokenvars.log"),
        },
        ..Default::default()
    }
}

/// Run `emit` under a file-only subscriber built from `config`, then read back what was written
fn capture(config: &LoggingConfig, emit: impl FnOnce()) -> String {
    let (layer, guard) = create_file_layer(&config.file).unwrap();
    let layers: Vec<BoxedLayer> = vec![layer];
    let subscriber = tracing_subscriber::registry()
        .with(layers)
        .with(create_env_filter(config).unwrap());

    tracing::subscriber::with_default(subscriber, emit);
    // Flushes the background writer
    drop(guard);

    let dir = config.file.path.parent().unwrap();
    let mut contents = String::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            contents.push_str(&std::fs::read_to_string(path).unwrap());
        }
    }
    contents
}

#[test]
fn test_default_level_keeps_warnings_only() {
    let dir = tempdir().unwrap();
    let config = file_config(dir.path(), Level::WARN);

    let contents = capture(&config, || {
        info!(light = 9, dark = 9, "Resolved semantic color tokens");
        warn!(
            theme = "dark",
            role = "--bg-highlight",
            hex = "#1d2939",
            "Color token does not match any colorSet entry"
        );
    });

    assert!(contents.contains("Color token does not match any colorSet entry"));
    assert!(contents.contains("--bg-highlight"));
    assert!(contents.contains("#1d2939"));
    assert!(!contents.contains("Resolved semantic color tokens"));
}

#[test]
fn test_target_override_lowers_threshold() {
    let dir = tempdir().unwrap();
    let mut config = file_config(dir.path(), Level::ERROR);
    config.module_levels.insert(
        "tokenvars_logging::structured_tests".to_string(),
        LogLevel(Level::DEBUG),
    );

    let contents = capture(&config, || {
        debug!(base_variables = 10, "Built base color variables");
        warn!(target: "tokenvars_core::transform", "Slow operation detected");
    });

    assert!(contents.contains("Built base color variables"));
    assert!(contents.contains("base_variables"));
    assert!(!contents.contains("Slow operation detected"));
}

#[test]
fn test_file_output_has_no_ansi_codes() {
    let dir = tempdir().unwrap();
    let config = file_config(dir.path(), Level::INFO);

    let contents = capture(&config, || {
        info!(base_variables = 10, shortcuts = 9, "Token document converted");
    });

    assert!(contents.contains("Token document converted"));
    assert!(!contents.contains('\u{1b}'));
}
