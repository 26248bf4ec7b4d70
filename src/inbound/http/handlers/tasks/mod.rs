mod create;
mod delete;
mod status;
mod update;

pub use create::tasks_create;
pub use delete::tasks_delete;
pub use status::tasks_move;
pub use update::tasks_update;
