// src/application/data_client.rs
use crate::domain::{DomainError, Note};
use std::path::Path;

/// A single backend-reported failure, e.g. a rejected field or a missing
/// record. Carried in an [`ApiOutcome`] rather than raised.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result pair returned by record and blob operations.
///
/// The backend answers validation failures alongside an absent result instead
/// of raising; a non-empty `errors` means "operation not completed". Transport
/// failures surface as `Err(DomainError::Transport)` on the outer `Result`.
#[derive(Debug)]
pub struct ApiOutcome<T> {
    pub data: Option<T>,
    pub errors: Vec<ApiError>,
}

impl<T> ApiOutcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<ApiError>) -> Self {
        Self { data: None, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl ApiOutcome<()> {
    pub fn done() -> Self {
        Self::ok(())
    }
}

/// CRUD façade over the note record store and the key-addressed blob store.
///
/// Records and blobs are separate consistency domains: records can be listed
/// and deleted, blobs can only be addressed by key (the blob store exposes no
/// list and no delete). Implementations must keep the two apart.
pub trait DataClient {
    /// Fetch the full current set of notes. No pagination and no ordering
    /// contract; result order is whatever the backend returns.
    fn list_notes(&mut self) -> Result<ApiOutcome<Vec<Note>>, DomainError>;

    /// Insert a new note record; the backend assigns the id. `image_key` is
    /// stored as a plain reference, the blob itself is not uploaded here.
    /// No precondition is enforced: an empty name is accepted.
    fn create_note(
        &mut self,
        name: &str,
        description: &str,
        image_key: Option<&str>,
    ) -> Result<ApiOutcome<Note>, DomainError>;

    /// Remove the note with the given id. A nonexistent id yields a
    /// backend-defined error in the outcome. The referenced blob, if any,
    /// is never deleted.
    fn delete_note(&mut self, id: &str) -> Result<ApiOutcome<()>, DomainError>;

    /// Upload the file at `source` under `key`. No content-type validation,
    /// no size limit, no retry.
    fn put_blob(&mut self, key: &str, source: &Path) -> Result<ApiOutcome<()>, DomainError>;

    /// Derive a fetchable URL for a stored blob. Pure derivation; existence
    /// is not verified, so a dangling key yields a URL that fails at render
    /// time.
    fn blob_url(&self, key: &str) -> String;
}
