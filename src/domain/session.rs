use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("error writing session")]
    WriteSessionError,

    #[error("error reading session")]
    ReadSessionError,
    #[error(transparent)]
    TowerSessionsError(#[from] tower_sessions::session::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[async_trait]
#[automock]
pub trait SessionPort: Send + Sync {
    async fn write_user_session(&self, params: UserSession) -> Result<(), SessionError>;
    async fn get_user_session(&self) -> Result<Option<UserSession>, SessionError>;
    async fn flush(&self) -> Result<(), SessionError>;
}
