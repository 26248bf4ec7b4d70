use crate::domain::auth::ServiceProfileResult;
use crate::domain::workbench::User;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            avatar_url: value.avatar_url,
        }
    }
}

impl From<ServiceProfileResult> for UserResponse {
    fn from(value: ServiceProfileResult) -> Self {
        Self {
            id: value.user_id,
            name: value.name,
            email: value.email,
            avatar_url: value.avatar_url,
        }
    }
}

pub struct UserList(pub Vec<User>);

impl From<UserList> for Vec<UserResponse> {
    fn from(value: UserList) -> Self {
        value.0.into_iter().map(|user| user.into()).collect()
    }
}
