mod auth;
mod dashboard;
mod projects;
mod server;
mod tasks;
mod users;

pub use auth::{auth_login, auth_logout, auth_profile, auth_register};
pub use dashboard::dashboard_stats;
pub use projects::{
    projects_create, projects_current, projects_delete, projects_get, projects_list,
    projects_select, projects_tasks, projects_update,
};
pub use server::server_health;
pub use tasks::{tasks_create, tasks_delete, tasks_move, tasks_update};
pub use users::users_list;
