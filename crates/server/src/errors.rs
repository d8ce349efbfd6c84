use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body returned by every todo endpoint: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, message: self.message.as_deref() };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::BadRequest(msg) => JsonApiError::bad_request(msg),
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            other => {
                error!(err = %other, "todo store failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { JsonApiError::bad_request(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { JsonApiError::bad_request(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { JsonApiError::bad_request(r.body_text()) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_statuses() {
        let cases = [
            (ServiceError::not_found("todo item"), StatusCode::NOT_FOUND, "Not Found"),
            (ServiceError::bad_request("id mismatch"), StatusCode::BAD_REQUEST, "Bad Request"),
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST, "Validation Error"),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ];
        for (err, status, title) in cases {
            let api = JsonApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.error, title);
        }
    }

    #[test]
    fn validation_message_reaches_the_body() {
        let api = JsonApiError::from(ServiceError::from(models::errors::ModelError::Validation(
            "name must not be blank".into(),
        )));
        assert_eq!(api.error, "Validation Error");
        assert_eq!(api.message.as_deref(), Some("name must not be blank"));
    }

    #[test]
    fn store_failures_do_not_leak_details() {
        let api = JsonApiError::from(ServiceError::Db("password=hunter2".into()));
        assert!(api.message.is_none());
    }

    #[test]
    fn response_carries_status() {
        let resp = JsonApiError::bad_request("nope").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
