use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming an optional log file path.
pub const LOG_FILE_ENV: &str = "MOVIESEARCH_LOG";

/// Initialize tracing.
///
/// Filter comes from `RUST_LOG` (default `info`). Output goes to stderr,
/// or to `{MOVIESEARCH_LOG}.{pid}` when that variable is set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        let unique_path = format!("{}.{}", path, std::process::id());
        match std::fs::File::create(&unique_path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to create log file {}: {}", unique_path, e);
                None
            }
        }
    });

    let timer = fmt::time::UtcTime::rfc_3339();

    match log_file {
        Some(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(timer)
                .with_target(true)
                .with_level(true);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(timer)
                .with_target(true)
                .with_level(true);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init();
        }
    }
}
