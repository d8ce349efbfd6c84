use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Recycling the only connection of an in-memory database would drop every row.
pub const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Connect with explicit pool settings.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let opt = connect_options(cfg);
    let db = Database::connect(opt).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = cfg.max_connections,
        "database connected"
    );
    Ok(db)
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    if cfg.is_in_memory() {
        // every pooled connection would otherwise open its own empty database
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}
