use crate::domain::auth::{
    AuthService, CreateUserParams, CredentialVerifier, FindUserByEmailParams,
    ServiceAuthenticatedError, ServiceAuthenticatedParams, ServiceLoginError, ServiceLoginParams,
    ServiceLoginResult, ServiceLogoutError, ServiceLogoutParams, ServiceProfileError,
    ServiceProfileParams, ServiceProfileResult, ServiceRegisterError, ServiceRegisterParams,
    ServiceRegisterResult, UserDirectoryPort, VerifyCredentialsParams,
};
use crate::domain::session::{SessionPort, UserSession};
use crate::outbound::session::SessionFactory;
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Service<SESSION, DIRECTORY, VERIFIER, F>
where
    SESSION: SessionPort + Send + Sync + 'static,
    DIRECTORY: UserDirectoryPort + Send + Sync + 'static,
    VERIFIER: CredentialVerifier + Send + Sync + 'static,
    F: SessionFactory<SESSION> + Send + Sync + 'static,
{
    directory: Arc<DIRECTORY>,
    verifier: Arc<VERIFIER>,
    session_factory: F,
    _session: PhantomData<SESSION>,
}

impl<SESSION, DIRECTORY, VERIFIER, F> Service<SESSION, DIRECTORY, VERIFIER, F>
where
    SESSION: SessionPort + Send + Sync + 'static,
    DIRECTORY: UserDirectoryPort + Send + Sync + 'static,
    VERIFIER: CredentialVerifier + Send + Sync + 'static,
    F: SessionFactory<SESSION> + Send + Sync + 'static,
{
    pub fn new(directory: DIRECTORY, verifier: VERIFIER, session_adapter_factory: F) -> Self {
        Self {
            directory: Arc::new(directory),
            verifier: Arc::new(verifier),
            session_factory: session_adapter_factory,
            _session: PhantomData,
        }
    }
}

fn placeholder_avatar(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();

    format!("https://ui-avatars.com/api/?name={encoded}&background=3b82f6&color=fff")
}

#[async_trait]
impl<SESSION, DIRECTORY, VERIFIER, F> AuthService for Service<SESSION, DIRECTORY, VERIFIER, F>
where
    SESSION: SessionPort + Send + Sync + 'static,
    DIRECTORY: UserDirectoryPort + Send + Sync + 'static,
    VERIFIER: CredentialVerifier + Send + Sync + 'static,
    F: SessionFactory<SESSION> + Send + Sync + 'static,
{
    async fn login(
        &self,
        params: ServiceLoginParams,
    ) -> Result<ServiceLoginResult, ServiceLoginError> {
        let session = self.session_factory.build(params.session);

        let user = self
            .directory
            .find_user_by_email(FindUserByEmailParams {
                email: params.email.clone(),
            })
            .await?
            .ok_or(ServiceLoginError::InvalidCredentials)?;

        let verified = self
            .verifier
            .verify(VerifyCredentialsParams {
                email: params.email,
                password: params.password,
            })
            .await?;

        if !verified {
            return Err(ServiceLoginError::InvalidCredentials);
        }

        // drop any previous session before authenticating
        session.flush().await?;
        session
            .write_user_session(UserSession {
                user_id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                avatar_url: user.avatar_url.clone(),
            })
            .await?;

        Ok(ServiceLoginResult { user })
    }

    async fn logout(&self, params: ServiceLogoutParams) -> Result<(), ServiceLogoutError> {
        let session = self.session_factory.build(params.session);
        session.flush().await?;

        Ok(())
    }

    async fn register(
        &self,
        params: ServiceRegisterParams,
    ) -> Result<ServiceRegisterResult, ServiceRegisterError> {
        let session = self.session_factory.build(params.session);

        let avatar_url = placeholder_avatar(params.name.as_str());
        let user = self
            .directory
            .create_user(CreateUserParams {
                name: params.name,
                email: params.email,
                avatar_url: Some(avatar_url),
            })
            .await?;

        session.flush().await?;
        session
            .write_user_session(UserSession {
                user_id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                avatar_url: user.avatar_url.clone(),
            })
            .await?;

        Ok(ServiceRegisterResult { user })
    }

    async fn authenticated(
        &self,
        params: ServiceAuthenticatedParams,
    ) -> Result<bool, ServiceAuthenticatedError> {
        let session = self.session_factory.build(params.session);

        Ok(session.get_user_session().await?.is_some())
    }

    async fn profile(
        &self,
        params: ServiceProfileParams,
    ) -> Result<ServiceProfileResult, ServiceProfileError> {
        let session = self.session_factory.build(params.session);

        if let Some(user_session) = session.get_user_session().await? {
            return Ok(ServiceProfileResult {
                user_id: user_session.user_id,
                name: user_session.name,
                email: user_session.email,
                avatar_url: user_session.avatar_url,
            });
        }

        Err(ServiceProfileError::Unauthenticated)
    }
}
