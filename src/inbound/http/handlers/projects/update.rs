use crate::core::application::ApplicationServices;
use crate::domain::workbench::{
    ProjectChanges, ProjectStatus, UpdateProjectError, UpdateProjectParams, WorkbenchService,
};
use crate::errors::{AppError, internal_error, not_found};
use crate::inbound::http::responses::project::ProjectResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateProjectBody {
    name: Option<String>,
    description: Option<String>,
    status: Option<ProjectStatus>,
    progress: Option<u8>,
    member_ids: Option<Vec<Uuid>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    due_date: Option<OffsetDateTime>,
}

pub async fn projects_update<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<UpdateProjectBody>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let project = workbench_service
        .update_project(UpdateProjectParams {
            project_id,
            changes: ProjectChanges {
                name: body.name,
                description: body.description,
                status: body.status,
                progress: body.progress,
                member_ids: body.member_ids,
                due_date: body.due_date.map(Some),
            },
        })
        .await
        .map_err(|e| match e {
            UpdateProjectError::NotFound => not_found(),
            UpdateProjectError::InvalidProgress => {
                AppError::Rejected(Some("progress must be between 0 and 100".to_string()))
            }
            UpdateProjectError::StoreError(e) => internal_error(e),
        })?;

    Ok(Json(ProjectResponse::from(project)))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::{
        MockWorkbenchService, Project, ProjectStatus, UpdateProjectError,
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
    async fn test_projects_update_partial() {
        let project_id = Uuid::now_v7();
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_update_project()
            .times(1)
            .withf(move |params| {
                params.project_id == project_id
                    && params.changes.progress == Some(80)
                    && params.changes.name.is_none()
            })
            .returning(move |_| {
                let now = OffsetDateTime::now_utc();
                Box::pin(future::ready(Ok(Project {
                    id: project_id,
                    name: "Website Redesign".to_string(),
                    description: "".to_string(),
                    status: ProjectStatus::Active,
                    progress: 80,
                    member_ids: vec![],
                    created_at: now,
                    updated_at: now,
                    due_date: None,
                })))
            });

        let server = server_with(workbench_service);
        let response = server
            .put(&format!("/api/projects/{project_id}"))
            .json(&json!({"progress": 80}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(80, body["progress"]);
    }

    #[tokio::test]
    async fn test_projects_update_unknown() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_update_project()
            .times(1)
            .returning(|_| Box::pin(future::ready(Err(UpdateProjectError::NotFound))));

        let server = server_with(workbench_service);
        let response = server
            .put(&format!("/api/projects/{}", Uuid::now_v7()))
            .json(&json!({"name": "Renamed"}))
            .await;

        response.assert_status_not_found();
    }
}
