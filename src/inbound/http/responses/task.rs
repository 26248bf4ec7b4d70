use crate::domain::workbench::{Task, TaskPriority, TaskStatus};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<Uuid>,
    pub project_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
}

impl From<Task> for TaskResponse {
    fn from(value: Task) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            status: value.status,
            priority: value.priority,
            assignee_id: value.assignee_id,
            project_id: value.project_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            due_date: value.due_date,
        }
    }
}

pub struct TaskList(pub Vec<Task>);

impl From<TaskList> for Vec<TaskResponse> {
    fn from(value: TaskList) -> Self {
        value.0.into_iter().map(|task| task.into()).collect()
    }
}
