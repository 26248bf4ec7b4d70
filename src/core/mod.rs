pub mod application;
pub mod config;
