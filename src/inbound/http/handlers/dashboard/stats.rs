use crate::core::application::ApplicationServices;
use crate::domain::workbench::{GetStatsError, WorkbenchService};
use crate::errors::{AppError, internal_error};
use crate::inbound::http::responses::stats::StatsResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn dashboard_stats<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let workbench_service = state.workbench_service();

    let stats = workbench_service.get_stats().await.map_err(|e| match e {
        GetStatsError::StoreError(e) => internal_error(e),
    })?;

    Ok(Json(StatsResponse::from(stats)))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::MockAuthService;
    use crate::domain::workbench::{DashboardStats, MockWorkbenchService};
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use std::future;
    use tower_sessions::MemoryStore;

    #[tokio::test]
    async fn test_dashboard_stats() {
        let mut workbench_service = MockWorkbenchService::new();
        workbench_service
            .expect_get_stats()
            .times(1)
            .returning(|| {
                Box::pin(future::ready(Ok(DashboardStats {
                    total_projects: 5,
                    active_projects: 3,
                    completed_projects: 1,
                    total_tasks: 4,
                    completed_tasks: 1,
                    in_progress_tasks: 1,
                    overdue_tasks: 1,
                })))
            });

        let app = Application::<MockAuthService, MockWorkbenchService>::mock_instance(
            MockAppInstanceParameters {
                config: None,
                auth_service: None,
                workbench_service: Some(workbench_service),
            },
        );
        let server = TestServer::new(router(app, MemoryStore::default())).unwrap();

        let response = server.get("/api/stats").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(5, body["total_projects"]);
        assert_eq!(1, body["overdue_tasks"]);
    }
}
