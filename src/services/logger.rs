use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils;

/// Initialize file logging.
///
/// The terminal belongs to the TUI, so everything goes to
/// `<tmp>/quickplaytui-debug.log`. `--debug` lowers the default level from
/// `info` to `debug`; `RUST_LOG` overrides both.
///
/// The returned guard flushes buffered lines on drop and must be held until
/// the app exits.
pub fn init(debug_enabled: bool) -> Result<WorkerGuard> {
    let log_path = utils::get_debug_log_path();
    let dir = log_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    let file_name = log_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "quickplaytui-debug.log".into());

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if debug_enabled { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn",
            default_level
        ))
    });

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::info!(log_file = %log_path.display(), debug = debug_enabled, "Logger initialized");

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_debug_enabled_writes_log_file() {
        let guard = init(true).expect("logger init");
        tracing::debug!("debug line from test");
        drop(guard);

        assert!(utils::get_debug_log_path().exists());
    }
}
