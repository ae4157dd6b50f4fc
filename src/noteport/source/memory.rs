use super::NoteSource;
use crate::error::{ExportError, Result};
use crate::model::Note;

/// Serves a fixed list of notes without any external application.
/// Exists for tests and for library users who already hold their notes.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    notes: Vec<Note>,
}

impl InMemorySource {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl NoteSource for InMemorySource {
    fn fetch_all(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }
}

/// Always fails the fetch, for exercising error paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingSource;

impl NoteSource for FailingSource {
    fn fetch_all(&self) -> Result<Vec<Note>> {
        Err(ExportError::FetchFailed(
            "injected source failure".to_string(),
        ))
    }
}
