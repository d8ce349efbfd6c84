//! Service layer providing todo CRUD operations on top of models.
//! - `todo::TodoRepository` is the seam to the store.
//! - `todo::TodoService` holds the request rules (id checks, validation, not-found).

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod todo;
