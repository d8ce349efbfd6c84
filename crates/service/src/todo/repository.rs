use async_trait::async_trait;

use super::domain::{NewTodo, TodoItem, TodoPatch};
use crate::errors::ServiceError;

/// Persistence seam for todo items, keyed by integer id.
///
/// Every method is one store operation; implementations must not add
/// locking or retries on top of what the store gives them.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All items, ascending by id.
    async fn list(&self) -> Result<Vec<TodoItem>, ServiceError>;
    async fn find(&self, id: i64) -> Result<Option<TodoItem>, ServiceError>;
    async fn insert(&self, input: NewTodo) -> Result<TodoItem, ServiceError>;
    /// Overwrite every field of `item.id`; `None` when no such row exists.
    async fn update(&self, item: TodoItem) -> Result<Option<TodoItem>, ServiceError>;
    /// Write only the fields present in `patch`; `None` when no such row exists.
    async fn patch(&self, id: i64, patch: TodoPatch) -> Result<Option<TodoItem>, ServiceError>;
    /// `true` if a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct InMemoryTodoRepository {
        inner: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        items: BTreeMap<i64, TodoItem>,
        last_id: i64,
    }

    impl InMemoryTodoRepository {
        fn state(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.inner.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl TodoRepository for InMemoryTodoRepository {
        async fn list(&self) -> Result<Vec<TodoItem>, ServiceError> {
            Ok(self.state()?.items.values().cloned().collect())
        }

        async fn find(&self, id: i64) -> Result<Option<TodoItem>, ServiceError> {
            Ok(self.state()?.items.get(&id).cloned())
        }

        async fn insert(&self, input: NewTodo) -> Result<TodoItem, ServiceError> {
            let mut state = self.state()?;
            state.last_id += 1;
            let item = TodoItem { id: state.last_id, name: input.name, is_complete: input.is_complete };
            state.items.insert(item.id, item.clone());
            Ok(item)
        }

        async fn update(&self, item: TodoItem) -> Result<Option<TodoItem>, ServiceError> {
            let mut state = self.state()?;
            match state.items.get_mut(&item.id) {
                Some(slot) => {
                    *slot = item.clone();
                    Ok(Some(item))
                }
                None => Ok(None),
            }
        }

        async fn patch(&self, id: i64, patch: TodoPatch) -> Result<Option<TodoItem>, ServiceError> {
            let mut state = self.state()?;
            Ok(state.items.get_mut(&id).map(|slot| {
                patch.apply(slot);
                slot.clone()
            }))
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.state()?.items.remove(&id).is_some())
        }
    }
}
