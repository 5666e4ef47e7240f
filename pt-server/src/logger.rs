use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Set up the global logger.
///
/// With `log_file` set, lines are appended to that file in the plain
/// format; otherwise they go to stdout, colored when `colored` is true.
/// Must run before anything else logs.
pub fn initialize(
    log_level: pt_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = log_level.0;

    let sink = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;

            // Color codes are only useful on a terminal; file logs stay plain
            plain_format().chain(file)
        }
        None if colored => colored_format().chain(std::io::stdout()),
        None => plain_format().chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={level:?}, file={}", path.display()),
        None => info!("Logger initialized: level={level:?}, stdout"),
    }

    // sqlx and axum emit tracing events; route them into the log pipeline
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn plain_format() -> Dispatch {
    Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339(SystemTime::now()),
            record.level(),
            message,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    })
}

fn colored_format() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new().format(move |out, message, record| {
        out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339(SystemTime::now()),
            colors.color(record.level()),
            message,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    })
}
