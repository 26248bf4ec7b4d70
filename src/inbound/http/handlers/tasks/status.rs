use crate::core::application::ApplicationServices;
use crate::domain::workbench::{MoveTaskError, MoveTaskParams, TaskStatus, WorkbenchService};
use crate::errors::{AppError, internal_error, not_found};
use crate::inbound::http::responses::task::TaskResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct MoveTaskBody {
    status: TaskStatus,
}

/// Kanban drop target: moves a task to another column.
pub async fn tasks_move<S: ApplicationServices>(
    State(state): State<S>,
    Path(task_id): Path<Uuid>,
    Json(body): Json<MoveTaskBody>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let task = workbench_service
        .move_task(MoveTaskParams {
            task_id,
            status: body.status,
        })
        .await
        .map_err(|e| match e {
            MoveTaskError::NotFound => not_found(),
            MoveTaskError::StoreError(e) => internal_error(e),
        })?;

    Ok(Json(TaskResponse::from(task)))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::{
        MockWorkbenchService, MoveTaskError, Task, TaskPriority, TaskStatus,
    };
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use serde_json::json;
    use std::future;
    use time::OffsetDateTime;
    use tower_sessions::MemoryStore;
    use uuid::Uuid;

    fn server_with(workbench_service: MockWorkbenchService) -> TestServer {
        let app = Application::<MockAuthService, MockWorkbenchService>::mock_instance(
            MockAppInstanceParameters {
                config: None,
                auth_service: None,
                workbench_service: Some(workbench_service),
            },
        );
        TestServer::new(router(app, MemoryStore::default())).unwrap()
    }

    #[tokio::test]
    async fn test_tasks_move() {
        let task_id = Uuid::now_v7();
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_move_task()
            .times(1)
            .withf(move |params| {
                params.task_id == task_id && params.status == TaskStatus::Done
            })
            .returning(move |_| {
                let now = OffsetDateTime::now_utc();
                Box::pin(future::ready(Ok(Task {
                    id: task_id,
                    title: "Design Homepage Layout".to_string(),
                    description: "".to_string(),
                    status: TaskStatus::Done,
                    priority: TaskPriority::High,
                    assignee_id: None,
                    project_id: Uuid::now_v7(),
                    created_at: now,
                    updated_at: now,
                    due_date: None,
                })))
            });

        let server = server_with(workbench_service);
        let response = server
            .put(&format!("/api/tasks/{task_id}/status"))
            .json(&json!({"status": "done"}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!("done", body["status"]);
    }

    #[tokio::test]
    async fn test_tasks_move_unknown() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_move_task()
            .times(1)
            .returning(|_| Box::pin(future::ready(Err(MoveTaskError::NotFound))));

        let server = server_with(workbench_service);
        let response = server
            .put(&format!("/api/tasks/{}/status", Uuid::now_v7()))
            .json(&json!({"status": "in_progress"}))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_tasks_move_rejects_unknown_status() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service.expect_move_task().times(0);

        let server = server_with(workbench_service);
        let response = server
            .put(&format!("/api/tasks/{}/status", Uuid::now_v7()))
            .json(&json!({"status": "blocked"}))
            .await;

        response.assert_status_unprocessable_entity();
    }
}
