use crate::core::application::ApplicationServices;
use crate::domain::workbench::{GetProjectsError, WorkbenchService};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::project::{ProjectList, ProjectResponse};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn projects_list<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();
    let result = workbench_service.get_projects().await.map_err(|e| match e {
        GetProjectsError::StoreError(e) => internal_error(e),
    })?;

    let projects: Vec<ProjectResponse> = ProjectList(result.projects).into();
    Ok(Json(projects))
}
