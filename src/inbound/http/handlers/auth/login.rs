use crate::core::application::ApplicationServices;
use crate::domain::auth::{AuthService, ServiceLoginError, ServiceLoginParams};
use crate::errors::{AppError, internal_error, invalid_credentials};
use crate::inbound::http::responses::user::UserResponse;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    email: String,
    password: String,
}

pub async fn auth_login<S: ApplicationServices>(
    State(state): State<S>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = state.auth_service();

    let result = auth_service
        .login(ServiceLoginParams {
            session,
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(|e| match e {
            ServiceLoginError::InvalidCredentials => invalid_credentials(),
            ServiceLoginError::SessionError(e) => internal_error(e),
            ServiceLoginError::DirectoryError(e) => internal_error(e),
            ServiceLoginError::VerifierError(e) => internal_error(e),
        })?;

    tracing::debug!(user_id = %result.user.id, "login successful");
    Ok((StatusCode::OK, Json(UserResponse::from(result.user))))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::auth::{MockAuthService, ServiceLoginError, ServiceLoginResult};
    use crate::domain::workbench::{MockWorkbenchService, User};
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use serde_json::json;
    use std::future;
    use tower_sessions::MemoryStore;
    use uuid::Uuid;

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
    async fn test_auth_login() {
        let mut auth_service = MockAuthService::new();
        auth_service.expect_login().times(1).returning(|_| {
            Box::pin(future::ready(Ok(ServiceLoginResult {
                user: User {
                    id: Uuid::now_v7(),
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    avatar_url: None,
                },
            })))
        });

        let server = server_with(auth_service);
        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "jane@example.com", "password": "anything"}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!("Jane Smith", body["name"]);
    }

    #[tokio::test]
    async fn test_auth_login_invalid_credentials() {
        let mut auth_service = MockAuthService::new();
        auth_service
            .expect_login()
            .times(1)
            .returning(|_| Box::pin(future::ready(Err(ServiceLoginError::InvalidCredentials))));

        let server = server_with(auth_service);
        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "nobody@example.com", "password": "anything"}))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_auth_login_missing_body() {
        let mut auth_service = MockAuthService::new();
        auth_service.expect_login().times(0);

        let server = server_with(auth_service);
        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "jane@example.com"}))
            .await;

        response.assert_status_unprocessable_entity();
    }
}
