// src/domain/note.rs
use serde::Serialize;

/// A persisted note record. The id is assigned by the backend at creation
/// and immutable thereafter. `image` is a storage key naming a blob that is
/// expected, but not guaranteed, to exist in the blob store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
}
