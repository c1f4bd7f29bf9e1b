//! Private notes.

use uuid::Uuid;

#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;
#[cfg(target_arch = "wasm32")]
use web_time::SystemTime;

/// Title used when a note is saved without one.
pub const UNTITLED_NOTE: &str = "Untitled Thought";

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: SystemTime,
}

/// Notes list, newest first, plus the new-note form.
#[derive(Debug, Clone, Default)]
pub struct PrivateNotes {
    notes: Vec<Note>,
    /// Whether the new-note form is open.
    pub composing: bool,
}

impl PrivateNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn open_form(&mut self) {
        self.composing = true;
    }

    pub fn cancel(&mut self) {
        self.composing = false;
    }

    /// Save a note. Blank content is ignored and returns `None`; a blank
    /// title becomes [`UNTITLED_NOTE`].
    pub fn save(&mut self, title: &str, content: &str) -> Option<&Note> {
        if content.trim().is_empty() {
            return None;
        }

        let title = match title.trim() {
            "" => UNTITLED_NOTE,
            t => t,
        };
        self.notes.insert(
            0,
            Note {
                id: Uuid::new_v4(),
                title: title.to_string(),
                content: content.to_string(),
                created_at: SystemTime::now(),
            },
        );
        self.composing = false;
        self.notes.first()
    }

    /// Delete a note by id. Returns false if no such note exists.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }
}
