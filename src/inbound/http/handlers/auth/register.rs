use crate::core::application::ApplicationServices;
use crate::domain::auth::{AuthService, ServiceRegisterError, ServiceRegisterParams};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::user::UserResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

pub async fn auth_register<S: ApplicationServices>(
    State(state): State<S>,
    session: Session,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = state.auth_service();

    let result = auth_service
        .register(ServiceRegisterParams {
            session,
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(|e| match e {
            ServiceRegisterError::SessionError(e) => internal_error(e),
            ServiceRegisterError::DirectoryError(e) => internal_error(e),
        })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(result.user))))
}
