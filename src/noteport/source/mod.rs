//! # Note Retrieval Layer
//!
//! The notes application sits behind an automation bridge, which makes it a
//! capability boundary rather than a library call. This module abstracts it
//! behind the [`NoteSource`] trait so the export routine can run against
//! different backends.
//!
//! ## Implementations
//!
//! - [`apple::AppleNotesSource`]: Production source. Shells out to
//!   `osascript` and asks Apple Notes for every note's title, plain-text
//!   body, and modification date.
//!
//! - [`memory::InMemorySource`]: In-memory source for testing. No external
//!   application, no platform requirements.
//!
//! ## Contract
//!
//! `fetch_all` returns the complete list of notes or fails as a whole.
//! Individual records the bridge hands back without all three fields are
//! dropped before they ever become a [`Note`]; a dropped record is not an
//! error and is not counted.

use crate::error::Result;
use crate::model::Note;

pub mod apple;
pub mod memory;

/// Abstract interface to the external notes application.
pub trait NoteSource {
    /// Return every note the application holds.
    fn fetch_all(&self) -> Result<Vec<Note>>;
}
