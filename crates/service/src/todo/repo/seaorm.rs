use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder,
};

use models::todo_item::{self, Entity as TodoEntity};

use crate::errors::ServiceError;
use crate::todo::domain::{NewTodo, TodoItem, TodoPatch};
use crate::todo::repository::TodoRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmTodoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Run a single `UPDATE ... WHERE id = ?`; zero matched rows is `None`.
    async fn update_row(&self, am: todo_item::ActiveModel) -> Result<Option<TodoItem>, ServiceError> {
        match am.update(&self.db).await {
            Ok(m) => Ok(Some(m)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn list(&self) -> Result<Vec<TodoItem>, ServiceError> {
        let rows = TodoEntity::find()
            .order_by_asc(todo_item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<TodoItem>, ServiceError> {
        let found = TodoEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn insert(&self, input: NewTodo) -> Result<TodoItem, ServiceError> {
        let created = todo_item::create(&self.db, input.name.as_deref(), input.is_complete).await?;
        Ok(created)
    }

    async fn update(&self, item: TodoItem) -> Result<Option<TodoItem>, ServiceError> {
        let am = todo_item::ActiveModel {
            id: Unchanged(item.id),
            name: Set(item.name),
            is_complete: Set(item.is_complete),
        };
        self.update_row(am).await
    }

    async fn patch(&self, id: i64, patch: TodoPatch) -> Result<Option<TodoItem>, ServiceError> {
        if patch.is_empty() {
            return self.find(id).await;
        }
        let am = todo_item::ActiveModel {
            id: Unchanged(id),
            name: patch.name.map_or(NotSet, |n| Set(Some(n))),
            is_complete: patch.is_complete.map_or(NotSet, Set),
        };
        self.update_row(am).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = TodoEntity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
