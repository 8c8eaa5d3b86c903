// src/domain/draft.rs
use std::path::PathBuf;

/// The note-in-progress held by the form: name, description, and an optional
/// handle to a selected local image file. Pure value container with no
/// validation; exists only while composing and is never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub image: Option<PathBuf>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_image(&mut self, image: Option<PathBuf>) {
        self.image = image;
    }

    /// Storage key the selected image would be uploaded under: its file name.
    pub fn image_key(&self) -> Option<String> {
        self.image
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Clear all fields back to `("", "", None)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
