// src/infrastructure/mod.rs
pub mod backend;
pub mod config;

pub use backend::LocalBackend;
pub use config::Config;
