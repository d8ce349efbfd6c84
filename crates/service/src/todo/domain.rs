use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Stored todo record, serialized as `{id, name, isComplete}`.
pub use models::todo_item::Model as TodoItem;

/// Create input. Any `id` in the body is ignored; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Full replacement of an existing record. `id` must repeat the path id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoReplacement {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoReplacement {
    pub fn into_item(self, id: i64) -> TodoItem {
        TodoItem { id, name: self.name, is_complete: self.is_complete }
    }
}

/// Partial update. Absent (or `null`) fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_complete.is_none()
    }

    /// Fold in an `isComplete` given outside the body (query string).
    pub fn with_is_complete(mut self, is_complete: Option<bool>) -> Result<Self, ServiceError> {
        match (self.is_complete, is_complete) {
            (Some(a), Some(b)) if a != b => Err(ServiceError::bad_request(
                "isComplete given twice with different values",
            )),
            (None, Some(b)) => {
                self.is_complete = Some(b);
                Ok(self)
            }
            _ => Ok(self),
        }
    }

    pub fn apply(&self, item: &mut TodoItem) {
        if let Some(name) = &self.name {
            item.name = Some(name.clone());
        }
        if let Some(done) = self.is_complete {
            item.is_complete = done;
        }
    }
}
