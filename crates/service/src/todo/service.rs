use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::{NewTodo, TodoItem, TodoPatch, TodoReplacement};
use super::repository::TodoRepository;
use crate::errors::ServiceError;
use models::todo_item::validate_name;

/// Todo operations, one store call each, independent of the web framework.
pub struct TodoService<R: TodoRepository> {
    repo: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<TodoItem>, ServiceError> {
        let items = self.repo.list().await?;
        debug!(count = items.len(), "todo_list");
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> Result<TodoItem, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("todo item"))
    }

    /// Store a new item and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::todo::{repository::mock::InMemoryTodoRepository, NewTodo, TodoService};
    /// use std::sync::Arc;
    /// let svc = TodoService::new(Arc::new(InMemoryTodoRepository::default()));
    /// let item = tokio_test::block_on(svc.create(NewTodo { name: Some("buy milk".into()), is_complete: false })).unwrap();
    /// assert_eq!(item.id, 1);
    /// assert_eq!(tokio_test::block_on(svc.get(1)).unwrap(), item);
    /// ```
    #[instrument(skip(self, input), fields(name = ?input.name))]
    pub async fn create(&self, input: NewTodo) -> Result<TodoItem, ServiceError> {
        validate_name(input.name.as_deref())?;
        let item = self.repo.insert(input).await?;
        info!(id = item.id, "todo_created");
        Ok(item)
    }

    /// Overwrite every field of `id`. The body must carry the same id.
    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i64, input: TodoReplacement) -> Result<TodoItem, ServiceError> {
        if input.id != Some(id) {
            return Err(ServiceError::bad_request(format!(
                "body id {:?} does not match path id {}",
                input.id, id
            )));
        }
        validate_name(input.name.as_deref())?;
        let item = self
            .repo
            .update(input.into_item(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("todo item"))?;
        info!(id, "todo_replaced");
        Ok(item)
    }

    /// Change only the fields present in `patch`.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: i64, patch: TodoPatch) -> Result<TodoItem, ServiceError> {
        if patch.is_empty() {
            return Err(ServiceError::bad_request("patch contains no changes"));
        }
        validate_name(patch.name.as_deref())?;
        let item = self
            .repo
            .patch(id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found("todo item"))?;
        info!(id, is_complete = item.is_complete, "todo_patched");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("todo item"));
        }
        info!(id, "todo_deleted");
        Ok(())
    }
}
