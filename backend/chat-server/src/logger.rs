use crate::error::{Result as ServerErrorResult, ServerError};

use chat_config::LogLevel;

use std::fmt::{Arguments, Display};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
enum Sink {
    File(File),
    /// Terminal with colored levels
    Terminal(ColoredLevelConfig),
    /// Plain stdout for non-TTY (systemd, docker logs)
    Stdout,
}

impl Sink {
    fn open(log_file: Option<&Path>, colored: bool) -> ServerErrorResult<Self> {
        if let Some(path) = log_file {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;
            return Ok(Sink::File(file));
        }

        if colored {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            return Ok(Sink::Terminal(colors));
        }

        Ok(Sink::Stdout)
    }

    fn into_dispatch(self) -> Dispatch {
        match self {
            Sink::File(file) => Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file),
            Sink::Terminal(colors) => Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout()),
            Sink::Stdout => Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(std::io::stdout()),
        }
    }
}

/// `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`
fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

/// Install the global logger.
///
/// `log_file` of `None` logs to stdout; `colored` only applies to stdout.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;
    let sink = Sink::open(log_file.as_deref(), colored)?;

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(sink.into_dispatch())
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    Ok(())
}
