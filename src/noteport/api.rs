//! # API Facade
//!
//! Single entry point for all noteport operations, regardless of the UI in
//! front of it. Thin dispatch only: business logic lives in `commands`, and
//! nothing here touches stdout or assumes a terminal.
//!
//! `Exporter<S, L>` is generic over the note source and logger:
//! - Production: `Exporter<AppleNotesSource, LogFacade>`
//! - Testing: `Exporter<InMemorySource, MemoryLogger>`

use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::Result;
use crate::logging::Logger;
use crate::perms::PermissionReport;
use crate::source::NoteSource;

/// The main facade. Holds the injected capabilities; one instance handles
/// one export at a time (callers are expected not to re-enter while a run
/// is in flight).
pub struct Exporter<S: NoteSource, L: Logger> {
    source: S,
    logger: L,
}

impl<S: NoteSource, L: Logger> Exporter<S, L> {
    pub fn new(source: S, logger: L) -> Self {
        Self { source, logger }
    }

    /// Export every note into `destination` (or the default documents
    /// location when `None`), returning how many notes were written.
    pub fn export(&self, destination: Option<PathBuf>) -> Result<usize> {
        commands::export::run(&self.source, &self.logger, destination.as_deref())
    }

    /// Diagnostic permission snapshot for a prospective destination.
    pub fn inspect(&self, path: &Path) -> PermissionReport {
        PermissionReport::inspect(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;
    use crate::model::Note;
    use crate::source::memory::InMemorySource;

    #[test]
    fn test_export_dispatches_to_command() {
        let temp = tempfile::tempdir().unwrap();
        let dest = temp.path().join("out");
        let source = InMemorySource::new(vec![Note::new("A", "b", "2024-01-01T00:00:00Z")]);
        let exporter = Exporter::new(source, MemoryLogger::new());

        assert_eq!(exporter.export(Some(dest.clone())).unwrap(), 1);
        assert!(dest.join("A.txt").exists());
    }

    #[test]
    fn test_inspect_reports_on_existing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(InMemorySource::empty(), MemoryLogger::new());

        let report = exporter.inspect(temp.path());
        assert!(report.writable);
    }
}
