// ABOUTME: Entry point of the tokenvars command line tool
// ABOUTME: Sets up logging, runs the conversion on a current-thread runtime and maps outcomes to exit codes

use std::panic;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokenvars::cli::Cli;
use tokenvars_logging::{LoggingConfig, LoggingGuard, error, info, init_logging_with_config};

fn setup_logging(verbosity: u8) -> Result<LoggingGuard> {
    let mut config =
        LoggingConfig::from_env().context("Failed to create logging config from environment")?;

    // Command line verbosity wins over the environment
    if verbosity > 0 {
        let level = match verbosity {
            1 => tokenvars_logging::Level::INFO,
            2 => tokenvars_logging::Level::DEBUG,
            _3_or_more => tokenvars_logging::Level::TRACE,
        };
        config.level = level.into();
    }

    let guard = init_logging_with_config(&config).context("Failed to initialize tokenvars logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting tokenvars");
    Ok(guard)
}

fn install_panic_handler() {
    panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));

        let panic_message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        error!(
            panic_message = %panic_message,
            location = ?location,
            "tokenvars panicked"
        );

        eprintln!("Fatal error: {panic_message}");
        if let Some(loc) = &location {
            eprintln!("Location: {loc}");
        }
    }));
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logging = match setup_logging(cli.verbose) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: {err:#}");
            None
        }
    };
    install_panic_handler();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: failed to start async runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = tokio::io::stdout();
    match runtime.block_on(tokenvars::run(&cli, &mut stdout)) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            error!(error = %format!("{err:#}"), "Conversion failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
