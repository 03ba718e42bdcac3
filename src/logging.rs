use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
/// * `stderr` - Write to stderr; disabled while the TUI owns the terminal
pub fn init(verbose: bool, log_file: Option<PathBuf>, stderr: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = log_file.map(|log_path| {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file_appender = tracing_appender::rolling::daily(
            log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("folio.log")),
        );

        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json()
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("folio={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;
    use tempfile::TempDir;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "folio=info");
        assert_eq!(default_filter(true), "folio=debug");
    }

    #[test]
    fn test_init_after_global_subscriber_is_noop() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        // A subscriber is already installed; init must not panic.
        init(true, Some(temp_dir.path().join("logs").join("folio.log")), false);
        assert!(temp_dir.path().join("logs").exists());
    }
}
