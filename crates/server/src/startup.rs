use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to the store and apply pending migrations when enabled.
pub async fn connect_db(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!("database migrations applied");
    } else {
        warn!("database.run_migrations is off; schema must already exist");
    }
    Ok(db)
}

/// The complete router over an existing connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: connect, build the app and serve until Ctrl+C.
pub async fn run(mut cfg: AppConfig) -> Result<(), StartupError> {
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let addr = cfg.server.bind_addr();
    let db = connect_db(&cfg).await?;
    let app = build_app(db);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(addr = %listener.local_addr()?, "todo api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn connect_db_migrates_in_memory_sqlite() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        let db = connect_db(&cfg).await.unwrap();
        let rows = models::todo_item::Entity::find().all(&db).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn connect_db_reports_unreachable_store() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite:///nonexistent-dir/for-tests/todo.db?mode=ro".into();
        cfg.database.connect_timeout_secs = 1;
        cfg.database.acquire_timeout_secs = 1;
        assert!(matches!(connect_db(&cfg).await, Err(StartupError::Database(_))));
    }

    #[tokio::test]
    async fn run_rejects_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "mysql://localhost/todo".into();
        assert!(matches!(run(cfg).await, Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn run_reports_bind_failure() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut cfg = AppConfig::default();
        cfg.server.port = taken.local_addr().unwrap().port();
        cfg.database.url = "sqlite::memory:".into();
        assert!(matches!(run(cfg).await, Err(StartupError::Bind { .. })));
    }
}
