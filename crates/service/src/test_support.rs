#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// A migrated connection for the current test.
///
/// Uses `TEST_DATABASE_URL` when set (e.g. a throwaway Postgres), otherwise a
/// private in-memory SQLite database, so each call starts empty.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let mut cfg = DatabaseConfig::with_url(url);
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
