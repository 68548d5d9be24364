use crate::config::AppConfig;
use crate::error::Slide300Error;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Log file name inside the configured log directory
pub const LOG_FILE_NAME: &str = "slide300.log";

/// Initialize logging according to the application config
pub fn init_from_config(config: &AppConfig) -> Result<(), Slide300Error> {
    if config.log_to_file {
        setup_logging(&config.log_dir, &config.log_level)
    } else {
        setup_console_logging(&config.log_level)
    }
}

/// Console plus append-only `slide300.log` in `log_dir`
pub fn setup_logging(log_dir: &Path, log_level: &str) -> Result<(), Slide300Error> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        Slide300Error::config(format!(
            "Failed to create log directory {}: {}",
            log_dir.display(),
            e
        ))
    })?;

    let log_file_path = log_dir.join(LOG_FILE_NAME);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| {
            Slide300Error::config(format!(
                "Failed to open log file {}: {}",
                log_file_path.display(),
                e
            ))
        })?;

    let env_filter = env_filter(log_level);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter.clone());

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(init_error)?;

    tracing::info!("Logging initialized: level={}, log_file={}", log_level, log_file_path.display());

    Ok(())
}

/// Console-only logging on stderr, so prompts printed to stdout stay clean
pub fn setup_console_logging(log_level: &str) -> Result<(), Slide300Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(env_filter(log_level))
        .try_init()
        .map_err(init_error)?;

    tracing::debug!("Console logging initialized: level={}", log_level);

    Ok(())
}

// RUST_LOG takes precedence over the configured level
fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn init_error(e: impl std::fmt::Display) -> Slide300Error {
    Slide300Error::config(format!("Failed to initialize logging: {}", e))
}

/// Plain level name (`warning` accepted), `None` for filter directives
pub fn parse_log_level(level: &str) -> Option<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
