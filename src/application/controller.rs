// src/application/controller.rs
use crate::application::DataClient;
use crate::domain::{Draft, Identity, Note};
use tracing::{debug, error, info};

/// Orchestrates the note list against the backend: load on startup, create
/// from the current draft, delete by id. Owns the in-memory list and the
/// draft; the identity is injected at construction.
///
/// Every operation boundary is terminal: backend and transport failures are
/// logged and swallowed, nothing propagates past this controller. On any
/// failure the visible state is simply left as it was.
pub struct NotesController<C: DataClient> {
    client: C,
    identity: Identity,
    notes: Vec<Note>,
    draft: Draft,
}

impl<C: DataClient> NotesController<C> {
    pub fn new(client: C, identity: Identity) -> Self {
        Self {
            client,
            identity,
            notes: Vec::new(),
            draft: Draft::new(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The last fetched note list. Entirely replaced on every reload, never
    /// merged.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Fetchable URL for a note's attached image, if it has one.
    pub fn image_url(&self, note: &Note) -> Option<String> {
        note.image.as_deref().map(|key| self.client.blob_url(key))
    }

    /// Fetch all notes and replace the local list. On any failure the
    /// previously displayed list is left unchanged.
    pub fn load(&mut self) {
        debug!("Fetching all notes");
        match self.client.list_notes() {
            Ok(outcome) => {
                if outcome.has_errors() {
                    error!(errors = ?outcome.errors, "Error fetching notes");
                } else if let Some(notes) = outcome.data {
                    debug!(count = notes.len(), "Replacing local note list");
                    self.notes = notes;
                }
            }
            Err(err) => error!(%err, "Error fetching notes"),
        }
    }

    /// Submit the current draft: create the record, then upload the selected
    /// image (if any), then reset the draft and reload the list.
    ///
    /// The record create and the blob upload are independent writes, not a
    /// transaction. If the create is rejected, nothing else happens. An
    /// upload failure after a successful create is logged only; the note
    /// keeps its image reference either way.
    pub fn create(&mut self) {
        debug!(draft = ?self.draft, "Creating note from draft");
        let image_key = self.draft.image_key();

        match self.client.create_note(
            &self.draft.name,
            &self.draft.description,
            image_key.as_deref(),
        ) {
            Ok(outcome) => {
                if outcome.has_errors() {
                    error!(errors = ?outcome.errors, "Error creating note");
                    return;
                }

                if let (Some(key), Some(path)) = (image_key, self.draft.image.clone()) {
                    match self.client.put_blob(&key, &path) {
                        Ok(upload) if upload.has_errors() => {
                            error!(errors = ?upload.errors, key = %key, "Image upload rejected")
                        }
                        Err(err) => error!(%err, key = %key, "Image upload failed"),
                        Ok(_) => info!(key = %key, "Uploaded image"),
                    }
                }

                self.draft.reset();
                self.load();
            }
            Err(err) => error!(%err, "Error creating note"),
        }
    }

    /// Delete a note by id, then reload the list. A backend-reported error
    /// (e.g. unknown id) is logged but does not skip the reload; only a
    /// transport failure does.
    pub fn delete(&mut self, id: &str) {
        match self.client.delete_note(id) {
            Ok(outcome) => {
                if outcome.has_errors() {
                    error!(errors = ?outcome.errors, note_id = id, "Error deleting note");
                } else {
                    info!(note_id = id, "Deleted note");
                }
                self.load();
            }
            Err(err) => error!(%err, note_id = id, "Error deleting note"),
        }
    }
}
