pub mod app_state;
pub mod config;
pub mod data;
pub mod error;
pub mod logger;
pub mod money;
