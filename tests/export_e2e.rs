use noteport::api::Exporter;
use noteport::error::ExportError;
use noteport::logging::MemoryLogger;
use noteport::model::Note;
use noteport::source::memory::{FailingSource, InMemorySource};

#[test]
fn exports_every_note_into_a_fresh_directory() {
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("notes");

    let source = InMemorySource::new(vec![
        Note::new("Groceries", "milk\neggs", "2024-05-01T10:00:00Z"),
        Note::new("Ideas", "write more tests", "2024-05-02T11:30:00Z"),
    ]);
    let exporter = Exporter::new(source, MemoryLogger::new());

    let count = exporter.export(Some(dest.clone())).unwrap();
    assert_eq!(count, 2);

    let content = std::fs::read_to_string(dest.join("Groceries.txt")).unwrap();
    assert_eq!(
        content,
        "Title: Groceries\nModified: 2024-05-01T10:00:00Z\n\nContent:\nmilk\neggs\n"
    );
    assert!(dest.join("Ideas.txt").exists());
}

#[test]
fn titles_with_separators_become_safe_filenames() {
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("notes");

    let source = InMemorySource::new(vec![
        Note::new("recipes/dinner", "pasta", "2024-05-01T10:00:00Z"),
        Note::new("   ", "a note with no usable title", "2024-05-01T10:05:00Z"),
    ]);
    let exporter = Exporter::new(source, MemoryLogger::new());

    assert_eq!(exporter.export(Some(dest.clone())).unwrap(), 2);
    assert!(dest.join("recipes-dinner.txt").exists());
    assert!(dest.join("Untitled Note.txt").exists());
}

#[test]
fn empty_source_fails_with_no_notes_and_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("notes");
    let exporter = Exporter::new(InMemorySource::empty(), MemoryLogger::new());

    let err = exporter.export(Some(dest.clone())).unwrap_err();
    assert!(matches!(err, ExportError::NoNotes));
    assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 0);
}

#[test]
fn fetch_failure_propagates_as_fetch_failed() {
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("notes");
    let exporter = Exporter::new(FailingSource, MemoryLogger::new());

    let err = exporter.export(Some(dest)).unwrap_err();
    assert!(matches!(err, ExportError::FetchFailed(_)));
}

#[test]
fn reruns_land_in_suffixed_directories() {
    let temp = tempfile::tempdir().unwrap();
    let dest = temp.path().join("notes");
    let source = InMemorySource::new(vec![Note::new("Only", "body", "2024-05-01T10:00:00Z")]);

    let first = Exporter::new(source.clone(), MemoryLogger::new());
    let second = Exporter::new(source, MemoryLogger::new());

    first.export(Some(dest.clone())).unwrap();
    second.export(Some(dest.clone())).unwrap();

    assert!(dest.join("Only.txt").exists());
    assert!(temp.path().join("notes_1").join("Only.txt").exists());
}
