// src/application/mod.rs
pub mod controller;
pub mod data_client;

pub use controller::NotesController;
pub use data_client::{ApiError, ApiOutcome, DataClient};
