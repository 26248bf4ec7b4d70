pub mod auth;
pub mod session;
pub mod workbench;
