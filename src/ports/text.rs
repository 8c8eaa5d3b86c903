// src/ports/text.rs
use crate::application::{DataClient, NotesController};

/// Renders the controller's current state for the terminal: a welcome line
/// for the resolved identity followed by the note list. Image references are
/// shown as derived blob URLs; a dangling reference still renders, it just
/// points at a missing file.
#[derive(Debug)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render<C: DataClient>(&self, controller: &NotesController<C>) -> String {
        let mut out = format!(
            "Notes\nWelcome, {}\n",
            controller.identity().display_name
        );

        if controller.notes().is_empty() {
            out.push_str("\nNo notes yet.\n");
            return out;
        }

        for note in controller.notes() {
            out.push_str(&format!("\n[{}] {}\n", note.id, note.name));
            if !note.description.is_empty() {
                out.push_str(&format!("    {}\n", note.description));
            }
            if let Some(url) = controller.image_url(note) {
                out.push_str(&format!("    image: {url}\n"));
            }
        }

        out
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}
