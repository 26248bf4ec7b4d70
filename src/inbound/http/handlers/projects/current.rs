use crate::core::application::ApplicationServices;
use crate::domain::workbench::{
    CurrentProjectError, SelectProjectError, SelectProjectParams, WorkbenchService,
};
use crate::errors::{AppError, internal_error, not_found};
use crate::inbound::http::responses::project::ProjectResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct SelectProjectBody {
    project_id: Option<Uuid>,
}

/// The detail-view selection. `null` body clears it.
pub async fn projects_select<S: ApplicationServices>(
    State(state): State<S>,
    Json(body): Json<SelectProjectBody>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    workbench_service
        .select_project(SelectProjectParams {
            project_id: body.project_id,
        })
        .await
        .map_err(|e| match e {
            SelectProjectError::NotFound => not_found(),
            SelectProjectError::StoreError(e) => internal_error(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn projects_current<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let project = workbench_service
        .current_project()
        .await
        .map_err(|e| match e {
            CurrentProjectError::StoreError(e) => internal_error(e),
        })?;

    Ok(Json(project.map(ProjectResponse::from)))
}
