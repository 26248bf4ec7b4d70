use crate::core::application::ApplicationServices;
use crate::domain::workbench::{GetProjectByIdError, GetProjectByIdParams, WorkbenchService};
use crate::errors::{AppError, internal_error, not_found};
use crate::inbound::http::responses::project::ProjectResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use uuid::Uuid;

pub async fn projects_get<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let result = workbench_service
        .get_project_by_id(GetProjectByIdParams { project_id })
        .await
        .map_err(|e| match e {
            GetProjectByIdError::StoreError(e) => internal_error(e),
        })?;

    let project = result.project.ok_or(not_found())?;
    Ok(Json(ProjectResponse::from(project)))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::{
        GetProjectByIdResult, MockWorkbenchService, Project, ProjectStatus,
    };
    use crate::inbound::http::router;
    use axum_test::TestServer;
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
    async fn test_projects_get() {
        let project_id = Uuid::now_v7();
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_get_project_by_id()
            .times(1)
            .withf(move |params| params.project_id == project_id)
            .returning(move |_| {
                let now = OffsetDateTime::now_utc();
                Box::pin(future::ready(Ok(GetProjectByIdResult {
                    project: Some(Project {
                        id: project_id,
                        name: "Database Migration".to_string(),
                        description: "".to_string(),
                        status: ProjectStatus::Active,
                        progress: 90,
                        member_ids: vec![],
                        created_at: now,
                        updated_at: now,
                        due_date: None,
                    }),
                })))
            });

        let server = server_with(workbench_service);
        let response = server.get(&format!("/api/projects/{project_id}")).await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(90, body["progress"]);
    }

    #[tokio::test]
    async fn test_projects_get_unknown() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_get_project_by_id()
            .times(1)
            .returning(|_| {
                Box::pin(future::ready(Ok(GetProjectByIdResult { project: None })))
            });

        let server = server_with(workbench_service);
        let response = server.get(&format!("/api/projects/{}", Uuid::now_v7())).await;

        response.assert_status_not_found();
    }
}
