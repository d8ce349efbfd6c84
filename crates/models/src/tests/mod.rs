

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// `TEST_DATABASE_URL` when set, a private in-memory SQLite database otherwise.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let db = crate::db::connect_with_config(&DatabaseConfig::with_url(url)).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
