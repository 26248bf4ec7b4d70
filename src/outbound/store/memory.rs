use crate::domain::auth::{CreateUserParams, FindUserByEmailParams, UserDirectoryPort};
use crate::domain::workbench::{
    CreateProjectStoreParams, CreateTaskStoreParams, DeleteProjectStoreParams,
    DeleteTaskStoreParams, FindProjectStoreParams, FindTaskStoreParams,
    ListTasksByProjectStoreParams, Project, StoreRepository, Task, UpdateProjectStoreParams,
    UpdateTaskStoreParams, User,
};
use crate::outbound::store::error::Error;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Default)]
struct State {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    current_project: Option<Uuid>,
}

/// In-memory store owning all collections. Insertion order is the listing
/// order, matching the original dict-backed backend.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, Error> {
        self.state.read().map_err(|_| Error::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, Error> {
        self.state.write().map_err(|_| Error::LockPoisoned)
    }
}

#[async_trait]
impl StoreRepository for MemoryRepository {
    async fn create_project(
        &self,
        params: CreateProjectStoreParams,
    ) -> Result<Project, Error> {
        let now = OffsetDateTime::now_utc();
        let project = Project {
            id: Uuid::now_v7(),
            name: params.name,
            description: params.description,
            status: params.status,
            progress: params.progress,
            member_ids: params.member_ids,
            created_at: now,
            updated_at: now,
            due_date: params.due_date,
        };

        let mut state = self.write()?;
        state.projects.push(project.clone());

        Ok(project)
    }

    async fn update_project(
        &self,
        params: UpdateProjectStoreParams,
    ) -> Result<Project, Error> {
        let mut state = self.write()?;
        let project = state
            .projects
            .iter_mut()
            .find(|project| project.id == params.project_id)
            .ok_or(Error::NotFound)?;

        let changes = params.changes;
        if let Some(name) = changes.name {
            project.name = name;
        }
        if let Some(description) = changes.description {
            project.description = description;
        }
        if let Some(status) = changes.status {
            project.status = status;
        }
        if let Some(progress) = changes.progress {
            project.progress = progress;
        }
        if let Some(member_ids) = changes.member_ids {
            project.member_ids = member_ids;
        }
        if let Some(due_date) = changes.due_date {
            project.due_date = due_date;
        }
        project.updated_at = OffsetDateTime::now_utc();

        Ok(project.clone())
    }

    async fn delete_project(&self, params: DeleteProjectStoreParams) -> Result<bool, Error> {
        let mut state = self.write()?;
        let before = state.projects.len();
        state
            .projects
            .retain(|project| project.id != params.project_id);

        if state.projects.len() == before {
            return Ok(false);
        }

        // cascade to dependent tasks and the selection
        state.tasks.retain(|task| task.project_id != params.project_id);
        if state.current_project == Some(params.project_id) {
            state.current_project = None;
        }

        Ok(true)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, Error> {
        Ok(self.read()?.projects.clone())
    }

    async fn find_project_by_id(
        &self,
        params: FindProjectStoreParams,
    ) -> Result<Option<Project>, Error> {
        let state = self.read()?;
        let project = state
            .projects
            .iter()
            .find(|project| project.id == params.project_id)
            .cloned();

        Ok(project)
    }

    async fn set_current_project(&self, project_id: Option<Uuid>) -> Result<(), Error> {
        self.write()?.current_project = project_id;

        Ok(())
    }

    async fn current_project(&self) -> Result<Option<Project>, Error> {
        let state = self.read()?;
        let project = state.current_project.and_then(|id| {
            state
                .projects
                .iter()
                .find(|project| project.id == id)
                .cloned()
        });

        Ok(project)
    }

    async fn create_task(&self, params: CreateTaskStoreParams) -> Result<Task, Error> {
        let now = OffsetDateTime::now_utc();
        let task = Task {
            id: Uuid::now_v7(),
            title: params.title,
            description: params.description,
            status: params.status,
            priority: params.priority,
            assignee_id: params.assignee_id,
            project_id: params.project_id,
            created_at: now,
            updated_at: now,
            due_date: params.due_date,
        };

        let mut state = self.write()?;
        state.tasks.push(task.clone());

        Ok(task)
    }

    async fn update_task(&self, params: UpdateTaskStoreParams) -> Result<Task, Error> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == params.task_id)
            .ok_or(Error::NotFound)?;

        let changes = params.changes;
        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = description;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(assignee_id) = changes.assignee_id {
            task.assignee_id = assignee_id;
        }
        if let Some(due_date) = changes.due_date {
            task.due_date = due_date;
        }
        task.updated_at = OffsetDateTime::now_utc();

        Ok(task.clone())
    }

    async fn delete_task(&self, params: DeleteTaskStoreParams) -> Result<bool, Error> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != params.task_id);

        Ok(state.tasks.len() != before)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, Error> {
        Ok(self.read()?.tasks.clone())
    }

    async fn list_tasks_by_project(
        &self,
        params: ListTasksByProjectStoreParams,
    ) -> Result<Vec<Task>, Error> {
        let state = self.read()?;
        let tasks = state
            .tasks
            .iter()
            .filter(|task| task.project_id == params.project_id)
            .cloned()
            .collect();

        Ok(tasks)
    }

    async fn find_task_by_id(
        &self,
        params: FindTaskStoreParams,
    ) -> Result<Option<Task>, Error> {
        let state = self.read()?;
        let task = state
            .tasks
            .iter()
            .find(|task| task.id == params.task_id)
            .cloned();

        Ok(task)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.read()?.users.clone())
    }
}

#[async_trait]
impl UserDirectoryPort for MemoryRepository {
    async fn find_user_by_email(
        &self,
        params: FindUserByEmailParams,
    ) -> Result<Option<User>, Error> {
        let state = self.read()?;
        let user = state
            .users
            .iter()
            .find(|user| user.email == params.email)
            .cloned();

        Ok(user)
    }

    async fn create_user(&self, params: CreateUserParams) -> Result<User, Error> {
        let user = User {
            id: Uuid::now_v7(),
            name: params.name,
            email: params.email,
            avatar_url: params.avatar_url,
        };

        let mut state = self.write()?;
        state.users.push(user.clone());

        Ok(user)
    }
}
