// src/domain/mod.rs
pub mod draft;
pub mod error;
pub mod identity;
pub mod note;

pub use draft::Draft;
pub use error::DomainError;
pub use identity::Identity;
pub use note::Note;
