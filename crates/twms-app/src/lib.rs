//! Application service layer - use cases, config, input validation

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
