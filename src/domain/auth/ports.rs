use crate::domain::session::SessionError;
use crate::domain::workbench::User;
use crate::outbound::store::error::Error as StoreError;
use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tower_sessions::Session;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Service
////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    async fn login(
        &self,
        params: ServiceLoginParams,
    ) -> Result<ServiceLoginResult, ServiceLoginError>;
    async fn logout(&self, params: ServiceLogoutParams) -> Result<(), ServiceLogoutError>;
    async fn register(
        &self,
        params: ServiceRegisterParams,
    ) -> Result<ServiceRegisterResult, ServiceRegisterError>;
    async fn authenticated(
        &self,
        params: ServiceAuthenticatedParams,
    ) -> Result<bool, ServiceAuthenticatedError>;
    async fn profile(
        &self,
        params: ServiceProfileParams,
    ) -> Result<ServiceProfileResult, ServiceProfileError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Ports
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Credential checking is a seam: the shipped adapter accepts any password
/// for a known email, a real verifier plugs in without touching call sites.
#[async_trait]
#[automock]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, params: VerifyCredentialsParams) -> Result<bool, VerifyError>;
}

#[async_trait]
#[automock]
pub trait UserDirectoryPort: Send + Sync {
    async fn find_user_by_email(
        &self,
        params: FindUserByEmailParams,
    ) -> Result<Option<User>, StoreError>;
    async fn create_user(&self, params: CreateUserParams) -> Result<User, StoreError>;
}

//------------------------------------------------------------------------------
// Verify Credentials
//------------------------------------------------------------------------------

pub struct VerifyCredentialsParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("credential verifier unavailable")]
    VerifierUnavailable,
}

//------------------------------------------------------------------------------
// Find User by Email
//------------------------------------------------------------------------------

pub struct FindUserByEmailParams {
    pub email: String,
}

//------------------------------------------------------------------------------
// Create User
//------------------------------------------------------------------------------

pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Results
////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ServiceLoginParams {
    pub session: Session,
    pub email: String,
    pub password: String,
}

pub struct ServiceLoginResult {
    pub user: User,
}

#[derive(Debug, Error)]
pub enum ServiceLoginError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    SessionError(#[from] SessionError),

    #[error(transparent)]
    DirectoryError(#[from] StoreError),

    #[error(transparent)]
    VerifierError(#[from] VerifyError),
}

pub struct ServiceLogoutParams {
    pub session: Session,
}

#[derive(Debug, Error)]
pub enum ServiceLogoutError {
    #[error(transparent)]
    SessionError(#[from] SessionError),
}

pub struct ServiceRegisterParams {
    pub session: Session,
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct ServiceRegisterResult {
    pub user: User,
}

#[derive(Debug, Error)]
pub enum ServiceRegisterError {
    #[error(transparent)]
    SessionError(#[from] SessionError),

    #[error(transparent)]
    DirectoryError(#[from] StoreError),
}

pub struct ServiceAuthenticatedParams {
    pub session: Session,
}

#[derive(Debug, Error)]
pub enum ServiceAuthenticatedError {
    #[error(transparent)]
    SessionError(#[from] SessionError),
}

pub struct ServiceProfileParams {
    pub session: Session,
}

pub struct ServiceProfileResult {
    pub user_id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ServiceProfileError {
    #[error("no authenticated user")]
    Unauthenticated,

    #[error(transparent)]
    SessionError(#[from] SessionError),
}
