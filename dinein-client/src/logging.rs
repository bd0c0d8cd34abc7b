//! Logging setup
//!
//! Library code only emits `tracing` events; binaries call one of these
//! once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger
///
/// `RUST_LOG` wins when set; otherwise `log_level` (default `info`) applies
/// to this crate and `warn` to everything else.
pub fn init_logger_with_level(log_level: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dinein_client={level}")));

    // 已初始化时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
