use crate::core::application::ApplicationServices;
use crate::domain::workbench::{ListUsersError, WorkbenchService};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::user::{UserList, UserResponse};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn users_list<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let users = workbench_service.list_users().await.map_err(|e| match e {
        ListUsersError::StoreError(e) => internal_error(e),
    })?;

    Ok(Json(Vec::<UserResponse>::from(UserList(users))))
}
