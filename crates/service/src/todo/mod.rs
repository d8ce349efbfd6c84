//! Todo items: domain inputs, the store seam, and the service on top of it.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewTodo, TodoItem, TodoPatch, TodoReplacement};
pub use repository::TodoRepository;
pub use service::TodoService;
