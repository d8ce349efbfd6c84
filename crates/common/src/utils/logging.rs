use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. SQL statements stay quiet unless asked for.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn,sea_orm=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Human-readable compact lines on stdout.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event on stdout, for log shippers.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .json()
        .with_current_span(true)
        .with_writer(io::stdout)
        .try_init();
}
