use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct AppErrorResponse {
    code: u16,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("auth required")]
    Unauthorized(Option<String>),

    #[error("internal server error")]
    InternalServerError,

    #[error("bad request")]
    BadRequest(Option<String>),

    #[error("resource not found")]
    NotFound,

    #[error("request was rejected")]
    Rejected(Option<String>),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> Option<String> {
        match self {
            Self::Unauthorized(message) => message.clone(),
            Self::BadRequest(message) => message.clone(),
            Self::Rejected(message) => message.clone(),
            Self::NotFound | Self::InternalServerError => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(AppErrorResponse {
                code: self.status_code().as_u16(),
                status: self.to_string(),
                message: self.message(),
            }),
        )
            .into_response()
    }
}

pub fn internal_error<E: ToString>(err: E) -> AppError {
    tracing::error!("{}", err.to_string());
    AppError::InternalServerError
}

pub fn bad_request() -> AppError {
    AppError::BadRequest(None)
}

pub fn not_found() -> AppError {
    AppError::NotFound
}

pub fn invalid_credentials() -> AppError {
    AppError::Unauthorized(Some("invalid credentials".to_string()))
}
