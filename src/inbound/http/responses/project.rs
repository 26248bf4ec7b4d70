use crate::domain::workbench::{Project, ProjectStatus};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub progress: u8,
    pub member_ids: Vec<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
}

impl From<Project> for ProjectResponse {
    fn from(value: Project) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            status: value.status,
            progress: value.progress,
            member_ids: value.member_ids,
            created_at: value.created_at,
            updated_at: value.updated_at,
            due_date: value.due_date,
        }
    }
}

pub struct ProjectList(pub Vec<Project>);

impl From<ProjectList> for Vec<ProjectResponse> {
    fn from(value: ProjectList) -> Self {
        value.0.into_iter().map(|project| project.into()).collect()
    }
}
