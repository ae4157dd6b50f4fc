use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{ExportError, Result};
use crate::logging::Logger;
use crate::model::Note;
use crate::perms::PermissionReport;
use crate::source::NoteSource;

/// Directory created under the user's documents folder when the caller does
/// not name a destination.
const DEFAULT_EXPORT_DIR: &str = "Notes Export";
const FILE_EXT: &str = ".txt";
const FALLBACK_TITLE: &str = "Untitled Note";

/// Run a full export: every note the source yields becomes one text file in
/// a fresh destination directory. Returns how many notes were written.
///
/// Exactly one taxonomy error (or the count) terminates the call. A single
/// note failing to write is logged and skipped, never fatal.
pub fn run<S: NoteSource, L: Logger>(
    source: &S,
    logger: &L,
    requested: Option<&Path>,
) -> Result<usize> {
    // 1. Settle on a destination directory that does not exist yet
    let destination = uniquify(&resolve_destination(requested, logger));

    // 2. Create it, gating on writability of its parent
    prepare_directory(&destination, logger)?;

    // 3. Pull everything out of the source
    let notes = source.fetch_all()?;
    if notes.is_empty() {
        return Err(ExportError::NoNotes);
    }
    logger.debug(&format!("fetched {} note(s)", notes.len()));

    // 4. One file per note; a failed write skips that note only
    let mut seen = HashSet::new();
    let mut written = 0;
    for note in &notes {
        let filename = deduplicate(sanitize_filename(&note.title), &mut seen);
        match write_note(note, &destination.join(&filename)) {
            Ok(()) => written += 1,
            Err(e) => logger.error(&format!("skipping '{}': {}", note.title, e)),
        }
    }

    Ok(written)
}

/// The requested directory verbatim, or `<documents>/Notes Export` when the
/// caller named none. The default is created if absent; a creation failure
/// here is only logged, since `prepare_directory` will raise the real error.
fn resolve_destination<L: Logger>(requested: Option<&Path>, logger: &L) -> PathBuf {
    if let Some(path) = requested {
        return path.to_path_buf();
    }

    let documents = directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    let default = documents.join(DEFAULT_EXPORT_DIR);

    if !default.exists() {
        if let Err(e) = fs::create_dir_all(&default) {
            logger.warn(&format!(
                "could not create default export directory {}: {}",
                default.display(),
                e
            ));
        }
    }

    default
}

/// Append `_1`, `_2`, ... to the last path component until the name is
/// unused. Returns the input unchanged when it does not exist. Not atomic:
/// another process could claim the name between check and create, which is
/// acceptable for a single-user tool.
fn uniquify(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());

    let mut counter = 1;
    loop {
        let candidate = path.with_file_name(format!("{}_{}", name, counter));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Gate on writability of the parent, then create the directory tree.
/// Permission problems carry the full rendered report so the caller can
/// show actionable guidance without re-querying the filesystem.
fn prepare_directory<L: Logger>(path: &Path, logger: &L) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let report = PermissionReport::inspect(parent);
    if !report.writable {
        logger.error(&format!("destination parent {} is not writable", parent.display()));
        return Err(ExportError::PermissionDenied(report.to_string()));
    }

    fs::create_dir_all(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            ExportError::PermissionDenied(PermissionReport::inspect(parent).to_string())
        }
        _ => ExportError::ExportFailed(format!("could not create {}: {}", path.display(), e)),
    })
}

/// Turn a note title into a usable filename: path separators become `-`,
/// surrounding whitespace goes, an empty result falls back to a stand-in
/// title, and the `.txt` extension is appended.
fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        format!("{}{}", FALLBACK_TITLE, FILE_EXT)
    } else {
        format!("{}{}", cleaned, FILE_EXT)
    }
}

/// Keep filenames unique within one run: collisions get `_1`, `_2`, ...
/// between the stem and the extension. The chosen name is recorded in
/// `seen`.
fn deduplicate(filename: String, seen: &mut HashSet<String>) -> String {
    if seen.insert(filename.clone()) {
        return filename;
    }

    let (stem, ext) = match filename.rfind('.') {
        Some(idx) => (&filename[..idx], &filename[idx..]),
        None => (filename.as_str(), ""),
    };

    let mut counter = 1;
    loop {
        let candidate = format!("{}_{}{}", stem, counter, ext);
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

/// Write one note as UTF-8 text. The temp-file-then-persist dance keeps the
/// write atomic: readers never observe a half-written note.
fn write_note(note: &Note, path: &Path) -> std::io::Result<()> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let body = format!(
        "Title: {}\nModified: {}\n\nContent:\n{}\n",
        note.title, note.modified, note.body
    );

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(body.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
