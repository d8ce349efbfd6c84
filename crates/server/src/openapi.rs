use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored todo item.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TodoItemDoc {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "buy milk", max_length = 256)]
    pub name: Option<String>,
    #[schema(default = false)]
    pub is_complete: bool,
}

/// Create body; `id`, if sent, is ignored.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NewTodoDoc {
    #[schema(example = "buy milk", max_length = 256)]
    pub name: Option<String>,
    #[schema(default = false)]
    pub is_complete: Option<bool>,
}

/// Partial update; only the given fields change.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TodoPatchDoc {
    pub name: Option<String>,
    pub is_complete: Option<bool>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todo::welcome,
        crate::routes::todo::list,
        crate::routes::todo::get,
        crate::routes::todo::create,
        crate::routes::todo::replace,
        crate::routes::todo::patch,
        crate::routes::todo::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TodoItemDoc,
            NewTodoDoc,
            TodoPatchDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todo")
    )
)]
pub struct ApiDoc;
