use super::NoteSource;
use crate::error::{ExportError, Result};
use crate::model::Note;

/// JXA payload run through `osascript -l JavaScript`. Returns the full note
/// list as a JSON array so the Rust side only has to decode, not scrape.
#[cfg(target_os = "macos")]
const FETCH_SCRIPT: &str = r#"
(() => {
    const notes = Application("Notes").notes();
    const records = [];
    for (const note of notes) {
        records.push({
            title: note.name(),
            body: note.plaintext(),
            modified: note.modificationDate().toISOString(),
        });
    }
    return JSON.stringify(records);
})()
"#;

/// Fetches notes from Apple Notes through the osascript automation bridge.
///
/// macOS prompts for automation consent the first time the bridge is used;
/// a refusal surfaces as [`ExportError::AccessDenied`]. There is no timeout:
/// if Notes hangs, the fetch hangs with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppleNotesSource;

impl AppleNotesSource {
    pub fn new() -> Self {
        Self
    }
}

impl NoteSource for AppleNotesSource {
    fn fetch_all(&self) -> Result<Vec<Note>> {
        #[cfg(target_os = "macos")]
        {
            fetch_macos()
        }

        #[cfg(not(target_os = "macos"))]
        {
            Err(ExportError::FetchFailed(
                "the notes bridge is only available on macOS".to_string(),
            ))
        }
    }
}

#[cfg(target_os = "macos")]
fn fetch_macos() -> Result<Vec<Note>> {
    use std::process::Command;

    let output = Command::new("osascript")
        .args(["-l", "JavaScript", "-e", FETCH_SCRIPT])
        .output()
        .map_err(|e| ExportError::FetchFailed(format!("failed to run osascript: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        // -1743: the user declined automation access for this process.
        if stderr.contains("-1743") || stderr.contains("Not authorized") {
            return Err(ExportError::AccessDenied);
        }
        return Err(ExportError::FetchFailed(format!(
            "osascript exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    decode_records(&String::from_utf8_lossy(&output.stdout))
}

/// Decode the bridge payload. The payload must be a JSON list; entries that
/// do not carry all three fields are dropped without comment.
#[cfg(any(target_os = "macos", test))]
fn decode_records(payload: &str) -> Result<Vec<Note>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(payload.trim())
        .map_err(|e| ExportError::FetchFailed(format!("malformed bridge payload: {}", e)))?;

    Ok(records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect())
}
