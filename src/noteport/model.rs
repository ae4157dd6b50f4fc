use serde::Deserialize;

/// A single note as handed over by the notes application.
///
/// Transient: notes have no identity beyond their title and are never
/// persisted by noteport itself. `modified` is kept verbatim in whatever
/// format the source system produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub modified: String,
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        modified: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            modified: modified.into(),
        }
    }
}
