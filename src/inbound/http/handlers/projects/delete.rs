use crate::core::application::ApplicationServices;
use crate::domain::workbench::{DeleteProjectError, DeleteProjectParams, WorkbenchService};
use crate::errors::{AppError, internal_error};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use http::StatusCode;
use uuid::Uuid;

pub async fn projects_delete<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    workbench_service
        .delete_project(DeleteProjectParams { project_id })
        .await
        .map_err(|e| match e {
            DeleteProjectError::StoreError(e) => internal_error(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
