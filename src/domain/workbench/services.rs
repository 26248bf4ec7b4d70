use crate::domain::workbench::{
    CreateProjectError, CreateProjectParams, CreateProjectStoreParams, CreateTaskError,
    CreateTaskParams, CreateTaskStoreParams, CurrentProjectError, DashboardStats,
    DeleteProjectError, DeleteProjectParams, DeleteProjectStoreParams, DeleteTaskError,
    DeleteTaskParams, DeleteTaskStoreParams, FindProjectStoreParams, FindTaskStoreParams,
    GetProjectByIdError, GetProjectByIdParams, GetProjectByIdResult, GetProjectTasksError,
    GetProjectTasksParams, GetProjectsError, GetProjectsResult, GetStatsError,
    ListTasksByProjectStoreParams, ListUsersError, MoveTaskError, MoveTaskParams, Project,
    ProjectStatus, SelectProjectError, SelectProjectParams, StoreRepository, Task, TaskChanges,
    TaskPriority, TaskStatus, UpdateProjectError, UpdateProjectParams, UpdateProjectStoreParams,
    UpdateTaskError, UpdateTaskParams, UpdateTaskStoreParams, User, WorkbenchService,
};
use crate::outbound::store::error::Error as StoreError;
use async_trait::async_trait;
use time::OffsetDateTime;

const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone)]
pub struct Service<DB>
where
    DB: StoreRepository,
{
    store: DB,
}

impl<DB> Service<DB>
where
    DB: StoreRepository,
{
    pub fn new(store: DB) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<DB> WorkbenchService for Service<DB>
where
    DB: StoreRepository,
{
    async fn get_projects(&self) -> Result<GetProjectsResult, GetProjectsError> {
        let projects = self.store.list_projects().await?;

        Ok(GetProjectsResult { projects })
    }

    async fn get_project_by_id(
        &self,
        params: GetProjectByIdParams,
    ) -> Result<GetProjectByIdResult, GetProjectByIdError> {
        let project = self
            .store
            .find_project_by_id(FindProjectStoreParams {
                project_id: params.project_id,
            })
            .await?;

        Ok(GetProjectByIdResult { project })
    }

    async fn create_project(
        &self,
        params: CreateProjectParams,
    ) -> Result<Project, CreateProjectError> {
        let progress = params.progress.unwrap_or(0);
        if progress > MAX_PROGRESS {
            return Err(CreateProjectError::InvalidProgress);
        }

        let project = self
            .store
            .create_project(CreateProjectStoreParams {
                name: params.name,
                description: params.description,
                status: params.status.unwrap_or(ProjectStatus::Active),
                progress,
                member_ids: params.member_ids,
                due_date: params.due_date,
            })
            .await?;

        Ok(project)
    }

    async fn update_project(
        &self,
        params: UpdateProjectParams,
    ) -> Result<Project, UpdateProjectError> {
        if let Some(progress) = params.changes.progress
            && progress > MAX_PROGRESS
        {
            return Err(UpdateProjectError::InvalidProgress);
        }

        self.store
            .update_project(UpdateProjectStoreParams {
                project_id: params.project_id,
                changes: params.changes,
            })
            .await
            .map_err(|e| match e {
                StoreError::NotFound => UpdateProjectError::NotFound,
                e => UpdateProjectError::StoreError(e),
            })
    }

    async fn delete_project(&self, params: DeleteProjectParams) -> Result<(), DeleteProjectError> {
        let removed = self
            .store
            .delete_project(DeleteProjectStoreParams {
                project_id: params.project_id,
            })
            .await?;

        if !removed {
            tracing::debug!(project_id = %params.project_id, "delete of unknown project ignored");
        }

        Ok(())
    }

    async fn select_project(&self, params: SelectProjectParams) -> Result<(), SelectProjectError> {
        if let Some(project_id) = params.project_id {
            let found = self
                .store
                .find_project_by_id(FindProjectStoreParams { project_id })
                .await
                .map_err(SelectProjectError::StoreError)?;

            if found.is_none() {
                return Err(SelectProjectError::NotFound);
            }
        }

        self.store
            .set_current_project(params.project_id)
            .await
            .map_err(SelectProjectError::StoreError)
    }

    async fn current_project(&self) -> Result<Option<Project>, CurrentProjectError> {
        let project = self.store.current_project().await?;

        Ok(project)
    }

    async fn get_project_tasks(
        &self,
        params: GetProjectTasksParams,
    ) -> Result<Vec<Task>, GetProjectTasksError> {
        let tasks = self
            .store
            .list_tasks_by_project(ListTasksByProjectStoreParams {
                project_id: params.project_id,
            })
            .await?;

        Ok(tasks)
    }

    async fn create_task(&self, params: CreateTaskParams) -> Result<Task, CreateTaskError> {
        let project = self
            .store
            .find_project_by_id(FindProjectStoreParams {
                project_id: params.project_id,
            })
            .await?;

        if project.is_none() {
            return Err(CreateTaskError::ProjectNotFound);
        }

        let task = self
            .store
            .create_task(CreateTaskStoreParams {
                title: params.title,
                description: params.description,
                project_id: params.project_id,
                status: params.status.unwrap_or(TaskStatus::Todo),
                priority: params.priority.unwrap_or(TaskPriority::Medium),
                assignee_id: params.assignee_id,
                due_date: params.due_date,
            })
            .await?;

        Ok(task)
    }

    async fn update_task(&self, params: UpdateTaskParams) -> Result<Task, UpdateTaskError> {
        self.store
            .update_task(UpdateTaskStoreParams {
                task_id: params.task_id,
                changes: params.changes,
            })
            .await
            .map_err(|e| match e {
                StoreError::NotFound => UpdateTaskError::NotFound,
                e => UpdateTaskError::StoreError(e),
            })
    }

    async fn delete_task(&self, params: DeleteTaskParams) -> Result<(), DeleteTaskError> {
        let _ = self
            .store
            .delete_task(DeleteTaskStoreParams {
                task_id: params.task_id,
            })
            .await?;

        Ok(())
    }

    async fn move_task(&self, params: MoveTaskParams) -> Result<Task, MoveTaskError> {
        let task = self
            .store
            .find_task_by_id(FindTaskStoreParams {
                task_id: params.task_id,
            })
            .await
            .map_err(MoveTaskError::StoreError)?
            .ok_or(MoveTaskError::NotFound)?;

        // dropping a card on its own column is not a mutation
        if task.status == params.status {
            return Ok(task);
        }

        self.store
            .update_task(UpdateTaskStoreParams {
                task_id: params.task_id,
                changes: TaskChanges {
                    status: Some(params.status),
                    ..Default::default()
                },
            })
            .await
            .map_err(|e| match e {
                StoreError::NotFound => MoveTaskError::NotFound,
                e => MoveTaskError::StoreError(e),
            })
    }

    async fn get_stats(&self) -> Result<DashboardStats, GetStatsError> {
        let projects = self.store.list_projects().await?;
        let tasks = self.store.list_tasks().await?;
        let now = OffsetDateTime::now_utc();

        Ok(DashboardStats {
            total_projects: projects.len() as u64,
            active_projects: count(&projects, |p| p.status == ProjectStatus::Active),
            completed_projects: count(&projects, |p| p.status == ProjectStatus::Completed),
            total_tasks: tasks.len() as u64,
            completed_tasks: count(&tasks, |t| t.status == TaskStatus::Done),
            in_progress_tasks: count(&tasks, |t| t.status == TaskStatus::InProgress),
            overdue_tasks: count(&tasks, |t| {
                t.status != TaskStatus::Done && t.due_date.is_some_and(|due| due < now)
            }),
        })
    }

    async fn list_users(&self) -> Result<Vec<User>, ListUsersError> {
        let users = self.store.list_users().await?;

        Ok(users)
    }
}

fn count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> u64 {
    items.iter().filter(|item| predicate(item)).count() as u64
}
