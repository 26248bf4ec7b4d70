use crate::core::application::ApplicationServices;
use crate::domain::workbench::{
    CreateProjectError, CreateProjectParams, ProjectStatus, WorkbenchService,
};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::project::ProjectResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct CreateProjectBody {
    name: String,
    #[serde(default)]
    description: String,
    status: Option<ProjectStatus>,
    progress: Option<u8>,
    #[serde(default)]
    member_ids: Vec<Uuid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    due_date: Option<OffsetDateTime>,
}

pub async fn projects_create<S: ApplicationServices>(
    State(state): State<S>,
    Json(body): Json<CreateProjectBody>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let project = workbench_service
        .create_project(CreateProjectParams {
            name: body.name,
            description: body.description,
            status: body.status,
            progress: body.progress,
            member_ids: body.member_ids,
            due_date: body.due_date,
        })
        .await
        .map_err(|e| match e {
            CreateProjectError::InvalidProgress => {
                AppError::Rejected(Some("progress must be between 0 and 100".to_string()))
            }
            CreateProjectError::StoreError(e) => internal_error(e),
        })?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::{
        CreateProjectError, MockWorkbenchService, Project, ProjectStatus,
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
    async fn test_projects_create_defaults() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_create_project()
            .times(1)
            .withf(|params| {
                params.name == "Demo" && params.description.is_empty() && params.status.is_none()
            })
            .returning(|params| {
                let now = OffsetDateTime::now_utc();
                Box::pin(future::ready(Ok(Project {
                    id: Uuid::now_v7(),
                    name: params.name,
                    description: params.description,
                    status: ProjectStatus::Active,
                    progress: 0,
                    member_ids: vec![],
                    created_at: now,
                    updated_at: now,
                    due_date: None,
                })))
            });

        let server = server_with(workbench_service);
        let response = server
            .post("/api/projects")
            .json(&json!({"name": "Demo", "description": ""}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!("Demo", body["name"]);
        assert_eq!("active", body["status"]);
        assert_eq!(0, body["progress"]);
    }

    #[tokio::test]
    async fn test_projects_create_invalid_progress() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_create_project()
            .times(1)
            .returning(|_| Box::pin(future::ready(Err(CreateProjectError::InvalidProgress))));

        let server = server_with(workbench_service);
        let response = server
            .post("/api/projects")
            .json(&json!({"name": "Demo", "progress": 101}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
