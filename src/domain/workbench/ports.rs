use crate::domain::workbench::{
    DashboardStats, Project, ProjectStatus, Task, TaskPriority, TaskStatus, User,
};
use crate::outbound::store::error::Error as StoreError;
use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Service
////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait WorkbenchService: Send + Sync {
    async fn get_projects(&self) -> Result<GetProjectsResult, GetProjectsError>;
    async fn get_project_by_id(
        &self,
        params: GetProjectByIdParams,
    ) -> Result<GetProjectByIdResult, GetProjectByIdError>;
    async fn create_project(
        &self,
        params: CreateProjectParams,
    ) -> Result<Project, CreateProjectError>;
    async fn update_project(
        &self,
        params: UpdateProjectParams,
    ) -> Result<Project, UpdateProjectError>;
    async fn delete_project(&self, params: DeleteProjectParams) -> Result<(), DeleteProjectError>;
    async fn select_project(&self, params: SelectProjectParams) -> Result<(), SelectProjectError>;
    async fn current_project(&self) -> Result<Option<Project>, CurrentProjectError>;
    async fn get_project_tasks(
        &self,
        params: GetProjectTasksParams,
    ) -> Result<Vec<Task>, GetProjectTasksError>;
    async fn create_task(&self, params: CreateTaskParams) -> Result<Task, CreateTaskError>;
    async fn update_task(&self, params: UpdateTaskParams) -> Result<Task, UpdateTaskError>;
    async fn delete_task(&self, params: DeleteTaskParams) -> Result<(), DeleteTaskError>;
    async fn move_task(&self, params: MoveTaskParams) -> Result<Task, MoveTaskError>;
    async fn get_stats(&self) -> Result<DashboardStats, GetStatsError>;
    async fn list_users(&self) -> Result<Vec<User>, ListUsersError>;
}

//------------------------------------------------------------------------------
// Get Projects
//------------------------------------------------------------------------------

pub struct GetProjectsResult {
    pub projects: Vec<Project>,
}

#[derive(Debug, Error)]
pub enum GetProjectsError {
    #[error("failed to get projects because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Get Project by ID
//------------------------------------------------------------------------------

pub struct GetProjectByIdParams {
    pub project_id: Uuid,
}

pub struct GetProjectByIdResult {
    pub project: Option<Project>,
}

#[derive(Debug, Error)]
pub enum GetProjectByIdError {
    #[error("failed to get project because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Create Project
//------------------------------------------------------------------------------

pub struct CreateProjectParams {
    pub name: String,
    pub description: String,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub member_ids: Vec<Uuid>,
    pub due_date: Option<OffsetDateTime>,
}

#[derive(Debug, Error)]
pub enum CreateProjectError {
    #[error("progress must be between 0 and 100")]
    InvalidProgress,

    #[error("failed to create project because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Update Project
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub member_ids: Option<Vec<Uuid>>,
    pub due_date: Option<Option<OffsetDateTime>>,
}

pub struct UpdateProjectParams {
    pub project_id: Uuid,
    pub changes: ProjectChanges,
}

#[derive(Debug, Error)]
pub enum UpdateProjectError {
    #[error("project not found")]
    NotFound,

    #[error("progress must be between 0 and 100")]
    InvalidProgress,

    #[error("failed to update project because of store error")]
    StoreError(StoreError),
}

//------------------------------------------------------------------------------
// Delete Project
//------------------------------------------------------------------------------

pub struct DeleteProjectParams {
    pub project_id: Uuid,
}

#[derive(Debug, Error)]
pub enum DeleteProjectError {
    #[error("failed to delete project because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Select Project
//------------------------------------------------------------------------------

pub struct SelectProjectParams {
    pub project_id: Option<Uuid>,
}

#[derive(Debug, Error)]
pub enum SelectProjectError {
    #[error("project not found")]
    NotFound,

    #[error("failed to select project because of store error")]
    StoreError(StoreError),
}

//------------------------------------------------------------------------------
// Current Project
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CurrentProjectError {
    #[error("failed to read selection because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Get Project Tasks
//------------------------------------------------------------------------------

pub struct GetProjectTasksParams {
    pub project_id: Uuid,
}

#[derive(Debug, Error)]
pub enum GetProjectTasksError {
    #[error("failed to get tasks because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Create Task
//------------------------------------------------------------------------------

pub struct CreateTaskParams {
    pub title: String,
    pub description: String,
    pub project_id: Uuid,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<OffsetDateTime>,
}

#[derive(Debug, Error)]
pub enum CreateTaskError {
    #[error("project not found")]
    ProjectNotFound,

    #[error("failed to create task because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Update Task
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<Option<Uuid>>,
    pub due_date: Option<Option<OffsetDateTime>>,
}

pub struct UpdateTaskParams {
    pub task_id: Uuid,
    pub changes: TaskChanges,
}

#[derive(Debug, Error)]
pub enum UpdateTaskError {
    #[error("task not found")]
    NotFound,

    #[error("failed to update task because of store error")]
    StoreError(StoreError),
}

//------------------------------------------------------------------------------
// Delete Task
//------------------------------------------------------------------------------

pub struct DeleteTaskParams {
    pub task_id: Uuid,
}

#[derive(Debug, Error)]
pub enum DeleteTaskError {
    #[error("failed to delete task because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// Move Task
//------------------------------------------------------------------------------

pub struct MoveTaskParams {
    pub task_id: Uuid,
    pub status: TaskStatus,
}

#[derive(Debug, Error)]
pub enum MoveTaskError {
    #[error("task not found")]
    NotFound,

    #[error("failed to move task because of store error")]
    StoreError(StoreError),
}

//------------------------------------------------------------------------------
// Dashboard Stats
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum GetStatsError {
    #[error("failed to compute stats because of store error")]
    StoreError(#[from] StoreError),
}

//------------------------------------------------------------------------------
// List Users
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ListUsersError {
    #[error("failed to list users because of store error")]
    StoreError(#[from] StoreError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Store Repository
////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait StoreRepository: Send + Sync + 'static {
    async fn create_project(&self, params: CreateProjectStoreParams)
    -> Result<Project, StoreError>;
    async fn update_project(&self, params: UpdateProjectStoreParams)
    -> Result<Project, StoreError>;

    /// Returns whether a project was actually removed. Dependent tasks are
    /// removed with it and a matching selection is cleared.
    async fn delete_project(&self, params: DeleteProjectStoreParams) -> Result<bool, StoreError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn find_project_by_id(
        &self,
        params: FindProjectStoreParams,
    ) -> Result<Option<Project>, StoreError>;

    async fn set_current_project(&self, project_id: Option<Uuid>) -> Result<(), StoreError>;
    async fn current_project(&self) -> Result<Option<Project>, StoreError>;

    async fn create_task(&self, params: CreateTaskStoreParams) -> Result<Task, StoreError>;
    async fn update_task(&self, params: UpdateTaskStoreParams) -> Result<Task, StoreError>;
    async fn delete_task(&self, params: DeleteTaskStoreParams) -> Result<bool, StoreError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
    async fn list_tasks_by_project(
        &self,
        params: ListTasksByProjectStoreParams,
    ) -> Result<Vec<Task>, StoreError>;
    async fn find_task_by_id(
        &self,
        params: FindTaskStoreParams,
    ) -> Result<Option<Task>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

//------------------------------------------------------------------------------
// Create Project (store)
//------------------------------------------------------------------------------

pub struct CreateProjectStoreParams {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub progress: u8,
    pub member_ids: Vec<Uuid>,
    pub due_date: Option<OffsetDateTime>,
}

//------------------------------------------------------------------------------
// Update Project (store)
//------------------------------------------------------------------------------

pub struct UpdateProjectStoreParams {
    pub project_id: Uuid,
    pub changes: ProjectChanges,
}

//------------------------------------------------------------------------------
// Delete Project (store)
//------------------------------------------------------------------------------

pub struct DeleteProjectStoreParams {
    pub project_id: Uuid,
}

//------------------------------------------------------------------------------
// Find Project (store)
//------------------------------------------------------------------------------

pub struct FindProjectStoreParams {
    pub project_id: Uuid,
}

//------------------------------------------------------------------------------
// Create Task (store)
//------------------------------------------------------------------------------

pub struct CreateTaskStoreParams {
    pub title: String,
    pub description: String,
    pub project_id: Uuid,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<OffsetDateTime>,
}

//------------------------------------------------------------------------------
// Update Task (store)
//------------------------------------------------------------------------------

pub struct UpdateTaskStoreParams {
    pub task_id: Uuid,
    pub changes: TaskChanges,
}

//------------------------------------------------------------------------------
// Delete Task (store)
//------------------------------------------------------------------------------

pub struct DeleteTaskStoreParams {
    pub task_id: Uuid,
}

//------------------------------------------------------------------------------
// List Tasks by Project (store)
//------------------------------------------------------------------------------

pub struct ListTasksByProjectStoreParams {
    pub project_id: Uuid,
}

//------------------------------------------------------------------------------
// Find Task (store)
//------------------------------------------------------------------------------

pub struct FindTaskStoreParams {
    pub task_id: Uuid,
}
