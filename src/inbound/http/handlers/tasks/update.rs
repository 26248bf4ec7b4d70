use crate::core::application::ApplicationServices;
use crate::domain::workbench::{
    TaskChanges, TaskPriority, TaskStatus, UpdateTaskError, UpdateTaskParams, WorkbenchService,
};
use crate::errors::{AppError, internal_error, not_found};
use crate::inbound::http::responses::task::TaskResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateTaskBody {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    assignee_id: Option<Uuid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    due_date: Option<OffsetDateTime>,
}

pub async fn tasks_update<S: ApplicationServices>(
    State(state): State<S>,
    Path(task_id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let task = workbench_service
        .update_task(UpdateTaskParams {
            task_id,
            changes: TaskChanges {
                title: body.title,
                description: body.description,
                status: body.status,
                priority: body.priority,
                assignee_id: body.assignee_id.map(Some),
                due_date: body.due_date.map(Some),
            },
        })
        .await
        .map_err(|e| match e {
            UpdateTaskError::NotFound => not_found(),
            UpdateTaskError::StoreError(e) => internal_error(e),
        })?;

    Ok(Json(TaskResponse::from(task)))
}
