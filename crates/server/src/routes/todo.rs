use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use service::todo::{NewTodo, TodoItem, TodoPatch, TodoReplacement};

use crate::{errors::JsonApiError, state::ServerState};

pub const WELCOME: &str = "Welcome to the Todo API. Operations:
- GET /todo/list (list all todo's)
- GET /todo/id (get a todo item)
- POST /todo (add a new todo item)
- PUT /todo/id (update a todo item)
- PATCH /todo/id (change fields of a todo item, e.g. isComplete)
- DELETE /todo/id (delete a todo item)";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PatchQuery {
    /// Shorthand for `{"isComplete": <bool>}`.
    pub is_complete: Option<bool>,
}

fn todo_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, JsonApiError> {
    let Path(id) = path?;
    Ok(id)
}

#[utoipa::path(
    get, path = "/todo", tag = "todo",
    responses((status = 200, description = "Capability summary", body = String, content_type = "text/plain"))
)]
pub async fn welcome() -> &'static str {
    WELCOME
}

#[utoipa::path(
    get, path = "/todo/list", tag = "todo",
    responses(
        (status = 200, description = "All todo items", body = [crate::openapi::TodoItemDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<TodoItem>>, JsonApiError> {
    Ok(Json(state.todos.list().await?))
}

#[utoipa::path(
    get, path = "/todo/{id}", tag = "todo",
    params(("id" = i64, Path, description = "Todo item id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TodoItemDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<TodoItem>, JsonApiError> {
    let id = todo_id(path)?;
    Ok(Json(state.todos.get(id).await?))
}

#[utoipa::path(
    post, path = "/todo", tag = "todo",
    request_body = crate::openapi::NewTodoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TodoItemDoc,
            headers(("location" = String, description = "URL of the new item"))),
        (status = 400, description = "Malformed body or Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<NewTodo>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = body?;
    let item = state.todos.create(input).await?;
    let location = format!("/todo/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

#[utoipa::path(
    put, path = "/todo/{id}", tag = "todo",
    params(("id" = i64, Path, description = "Todo item id")),
    request_body = crate::openapi::TodoItemDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Body id differs from path id, malformed body, or Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<TodoReplacement>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = todo_id(path)?;
    let Json(input) = body?;
    state.todos.replace(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Body and `?isComplete=` are both optional, but together must change something.
#[utoipa::path(
    patch, path = "/todo/{id}", tag = "todo",
    params(("id" = i64, Path, description = "Todo item id"), PatchQuery),
    request_body = crate::openapi::TodoPatchDoc,
    responses(
        (status = 200, description = "Updated item", body = crate::openapi::TodoItemDoc),
        (status = 400, description = "Invalid patch"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PatchQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<TodoItem>, JsonApiError> {
    let id = todo_id(path)?;
    let Query(q) = query?;
    let patch = parse_patch(&body)?.with_is_complete(q.is_complete)?;
    Ok(Json(state.todos.patch(id, patch).await?))
}

fn parse_patch(body: &[u8]) -> Result<TodoPatch, JsonApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TodoPatch::default());
    }
    serde_json::from_slice(body).map_err(|e| JsonApiError::bad_request(format!("invalid patch: {e}")))
}

#[utoipa::path(
    delete, path = "/todo/{id}", tag = "todo",
    params(("id" = i64, Path, description = "Todo item id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = todo_id(path)?;
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_body_is_default() {
        assert_eq!(parse_patch(b"").unwrap(), TodoPatch::default());
        assert_eq!(parse_patch(b"  \n").unwrap(), TodoPatch::default());
    }

    #[test]
    fn patch_body_parses() {
        let p = parse_patch(br#"{"isComplete": true}"#).unwrap();
        assert_eq!(p.is_complete, Some(true));
    }

    #[test]
    fn malformed_patch_body_is_bad_request() {
        let err = parse_patch(b"{not json").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let err = parse_patch(br#"{"color": "red"}"#).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn welcome_lists_every_operation() {
        for op in ["GET /todo/list", "POST /todo", "PUT /todo/id", "PATCH /todo/id", "DELETE /todo/id"] {
            assert!(WELCOME.contains(op), "missing {op}");
        }
    }
}
