use crate::core::application::ApplicationServices;
use crate::domain::workbench::{GetProjectTasksError, GetProjectTasksParams, WorkbenchService};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::task::{TaskList, TaskResponse};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use uuid::Uuid;

pub async fn projects_tasks<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let tasks = workbench_service
        .get_project_tasks(GetProjectTasksParams { project_id })
        .await
        .map_err(|e| match e {
            GetProjectTasksError::StoreError(e) => internal_error(e),
        })?;

    let tasks: Vec<TaskResponse> = TaskList(tasks).into();
    Ok(Json(tasks))
}
