use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "hostaudit.log";

/// Keeps the background log writer alive until dropped
#[derive(Default)]
pub struct ObservabilityGuard {
    _log_guard: Option<WorkerGuard>,
}

/// Initialize logging: to stderr, or to `<log_dir>/hostaudit.log`
pub fn init_observability(filter_level: &str, log_dir: Option<&Path>) -> Result<ObservabilityGuard> {
    let mut guard = ObservabilityGuard::default();

    match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE_NAME))?;
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file);
            guard._log_guard = Some(worker_guard);
            init_subscriber_with_writer(non_blocking, false, filter_level)?;
        }
        None => init_subscriber_with_writer(std::io::stderr, true, filter_level)?,
    }

    Ok(guard)
}

/// Create an EnvFilter, with RUST_LOG taking precedence
fn create_env_filter(filter_level: &str) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| filter_level.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!("Failed to parse filter directive: {directive}. Falling back to default: warn");
        EnvFilter::new("warn")
    })
}

fn init_subscriber_with_writer<W>(writer: W, use_ansi: bool, filter_level: &str) -> Result<()>
where
    W: for<'a> fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(use_ansi)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(create_env_filter(filter_level))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))
}
