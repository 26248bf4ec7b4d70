use crate::core::application::ApplicationServices;
use crate::domain::auth::{AuthService, ServiceLogoutError, ServiceLogoutParams};
use crate::errors::{AppError, internal_error};
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;
use tower_sessions::Session;

pub async fn auth_logout<S: ApplicationServices>(
    State(state): State<S>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = state.auth_service();

    auth_service
        .logout(ServiceLogoutParams { session })
        .await
        .map_err(|e| match e {
            ServiceLogoutError::SessionError(e) => internal_error(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::{MockAuthService, ServiceLogoutError};
    use crate::domain::session::SessionError;
    use crate::domain::workbench::MockWorkbenchService;
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use http::StatusCode;
    use std::future;
    use tower_sessions::MemoryStore;

    fn server_with(auth_service: MockAuthService) -> TestServer {
        let app = Application::<MockAuthService, MockWorkbenchService>::mock_instance(
            MockAppInstanceParameters {
                config: None,
                auth_service: Some(auth_service),
                workbench_service: None,
            },
        );
        let session_store = MemoryStore::default();
        TestServer::new(router(app, session_store)).unwrap()
    }

    #[tokio::test]
    async fn test_auth_logout() {
        let mut auth_service = MockAuthService::new();
        auth_service
            .expect_logout()
            .times(1)
            .returning(|_| Box::pin(future::ready(Ok(()))));

        let server = server_with(auth_service);
        let response = server.post("/api/auth/logout").await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_auth_logout_session_error() {
        let mut auth_service = MockAuthService::new();
        auth_service.expect_logout().times(1).returning(|_| {
            Box::pin(future::ready(Err(ServiceLogoutError::SessionError(
                SessionError::WriteSessionError,
            ))))
        });

        let server = server_with(auth_service);
        let response = server.post("/api/auth/logout").await;

        response.assert_status_internal_server_error();
    }
}
