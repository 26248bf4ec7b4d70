use crate::core::application::ApplicationServices;
use crate::domain::workbench::{
    CreateTaskError, CreateTaskParams, TaskPriority, TaskStatus, WorkbenchService,
};
use crate::errors::{AppError, internal_error, not_found};
use crate::inbound::http::responses::task::TaskResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTaskBody {
    title: String,
    #[serde(default)]
    description: String,
    project_id: Uuid,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    assignee_id: Option<Uuid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    due_date: Option<OffsetDateTime>,
}

pub async fn tasks_create<S: ApplicationServices>(
    State(state): State<S>,
    Json(body): Json<CreateTaskBody>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let task = workbench_service
        .create_task(CreateTaskParams {
            title: body.title,
            description: body.description,
            project_id: body.project_id,
            status: body.status,
            priority: body.priority,
            assignee_id: body.assignee_id,
            due_date: body.due_date,
        })
        .await
        .map_err(|e| match e {
            CreateTaskError::ProjectNotFound => not_found(),
            CreateTaskError::StoreError(e) => internal_error(e),
        })?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::{
        CreateTaskError, MockWorkbenchService, Task, TaskPriority, TaskStatus,
    };
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use http::StatusCode;
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
    async fn test_tasks_create_defaults_to_todo() {
        let project_id = Uuid::now_v7();
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_create_task()
            .times(1)
            .withf(move |params| params.project_id == project_id && params.status.is_none())
            .returning(move |params| {
                let now = OffsetDateTime::now_utc();
                Box::pin(future::ready(Ok(Task {
                    id: Uuid::now_v7(),
                    title: params.title,
                    description: params.description,
                    status: TaskStatus::Todo,
                    priority: TaskPriority::Medium,
                    assignee_id: None,
                    project_id,
                    created_at: now,
                    updated_at: now,
                    due_date: None,
                })))
            });

        let server = server_with(workbench_service);
        let response = server
            .post("/api/tasks")
            .json(&json!({"title": "Write Content", "project_id": project_id}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!("todo", body["status"]);
    }

    #[tokio::test]
    async fn test_tasks_create_unknown_project() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_create_task()
            .times(1)
            .returning(|_| Box::pin(future::ready(Err(CreateTaskError::ProjectNotFound))));

        let server = server_with(workbench_service);
        let response = server
            .post("/api/tasks")
            .json(&json!({"title": "Orphan", "project_id": Uuid::now_v7()}))
            .await;

        response.assert_status_not_found();
    }
}
