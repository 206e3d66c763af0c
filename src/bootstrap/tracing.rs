//! Tracing configuration for the EasyCopy client
//!
//! - `RUST_LOG` wins when set; otherwise `debug` in dev builds, `info` in
//!   release builds.
//! - The terminal only shows warnings and errors unless `RUST_LOG` is set,
//!   so log lines do not interleave with the view.
//! - The log file receives everything the filter lets through.
//! - `log` records from dependencies are bridged through `tracing-log`.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "easycopy.log";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "rustls=warn".to_string(),
        "reqwest=info".to_string(),
        "mockito=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// `logs_dir` enables the file layer; when the directory cannot be created
/// the client logs to the terminal only.
///
/// # Errors
///
/// Returns `Err` if a global subscriber or logger is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(build_filter_directives(is_development()).join(","))
    });

    let stderr_level = if rust_log_set {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(stderr_level);

    let file_layer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer.map(|writer| {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        }),
        Err(err) => {
            eprintln!("Failed to initialize file logging, logging to stderr only: {err}");
            None
        }
    };

    let subscriber = registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert_eq!(dev_directives[0], "debug");
        assert!(dev_directives.contains(&"hyper=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert_eq!(prod_directives[0], "info");
    }

    #[test]
    fn test_filter_directives_parse() {
        let directives = build_filter_directives(false).join(",");
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
