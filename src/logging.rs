use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Install the global subscriber.
///
/// Human-readable logs go to stderr so stdout carries only command output.
/// With `log_file`, structured JSON logs are also appended to a daily
/// rotated file next to that path. `RUST_LOG` overrides the default filter.
///
/// The stderr layer is always installed. If the log file cannot be opened,
/// the error is returned after installation so the caller can log it.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let (appender, file_error) = match log_file.as_deref().map(file_appender).transpose() {
        Ok(appender) => (appender, None),
        Err(e) => (None, Some(e)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = appender.map(|appender| {
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    match file_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("tutgraph={}", level)
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tutgraph.log".to_string());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)?;
    Ok(appender)
}
