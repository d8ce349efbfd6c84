use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::todo::{repo::SeaOrmTodoRepository, TodoService};

/// Shared handler state; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub todos: Arc<TodoService<SeaOrmTodoRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmTodoRepository::new(db));
        Self { todos: Arc::new(TodoService::new(repo)) }
    }
}
