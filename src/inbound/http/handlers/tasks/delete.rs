use crate::core::application::ApplicationServices;
use crate::domain::workbench::{DeleteTaskError, DeleteTaskParams, WorkbenchService};
use crate::errors::{AppError, internal_error};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use http::StatusCode;
use uuid::Uuid;

pub async fn tasks_delete<S: ApplicationServices>(
    State(state): State<S>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    workbench_service
        .delete_task(DeleteTaskParams { task_id })
        .await
        .map_err(|e| match e {
            DeleteTaskError::StoreError(e) => internal_error(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::MockWorkbenchService;
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use http::StatusCode;
    use std::future;
    use tower_sessions::MemoryStore;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_tasks_delete() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_delete_task()
            .times(1)
            .returning(|_| Box::pin(future::ready(Ok(()))));

        let app = Application::<MockAuthService, MockWorkbenchService>::mock_instance(
            MockAppInstanceParameters {
                config: None,
                auth_service: None,
                workbench_service: Some(workbench_service),
            },
        );
        let server = TestServer::new(router(app, MemoryStore::default())).unwrap();

        let response = server.delete(&format!("/api/tasks/{}", Uuid::now_v7())).await;

        response.assert_status(StatusCode::NO_CONTENT);
    }
}
