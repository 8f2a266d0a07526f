//! Tracing configuration for the NoteHub client
//!
//! Logs go to stderr so they never interleave with rendered output on
//! stdout. Setting `NOTEHUB_LOG_DIR` additionally writes a daily rolling log
//! file there.

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

pub const LOG_DIR_ENV: &str = "NOTEHUB_LOG_DIR";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Install the global subscriber. Call once, before anything logs.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered or the log directory
/// cannot be created.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(std::io::stderr);

    let file_layer = match std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(dir, "notehub.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if LOG_GUARD.set(guard).is_err() {
                eprintln!("Log guard already initialized");
            }
            Some(
                fmt::layer()
                    .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
        }
        None => None,
    };

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
