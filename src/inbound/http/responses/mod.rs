pub mod health;
pub mod project;
pub mod shared;
pub mod stats;
pub mod task;
pub mod user;
