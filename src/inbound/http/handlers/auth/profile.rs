use crate::core::application::ApplicationServices;
use crate::domain::auth::{AuthService, ServiceProfileError, ServiceProfileParams};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::user::UserResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tower_sessions::Session;

pub async fn auth_profile<S: ApplicationServices>(
    State(state): State<S>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = state.auth_service();
    let profile = auth_service
        .profile(ServiceProfileParams { session })
        .await
        .map_err(|e| match e {
            ServiceProfileError::Unauthenticated => AppError::Unauthorized(None),
            ServiceProfileError::SessionError(e) => internal_error(e),
        })?;

    Ok(Json(UserResponse::from(profile)))
}
