use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use usersvc_core::DomainError;
use usersvc_infra::StoreError;

pub const USER_NOT_FOUND: &str = "user not found";
pub const METHOD_INVALID: &str = "method invalid";
pub const MISSING_ID: &str = "missing query param: id";

/// Every failure a handler can return, already tied to its HTTP status.
///
/// Bodies are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    MethodNotAllowed,
    Internal(String),
}

impl ApiError {
    pub fn invalid_json(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("invalid JSON: {err}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::Internal(msg) => msg,
            Self::NotFound => USER_NOT_FOUND,
            Self::MethodNotAllowed => METHOD_INVALID,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            // An id that cannot exist is reported like one that does not.
            DomainError::InvalidId(_) => Self::NotFound,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::Database(msg) => Self::Internal(format!("db error: {msg}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        text_error(self.status(), self.message())
    }
}

pub fn text_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message.into(),
    )
        .into_response()
}
