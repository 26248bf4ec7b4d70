mod create;
mod current;
mod delete;
mod get;
mod list;
mod tasks;
mod update;

pub use create::projects_create;
pub use current::{projects_current, projects_select};
pub use delete::projects_delete;
pub use get::projects_get;
pub use list::projects_list;
pub use tasks::projects_tasks;
pub use update::projects_update;
