//! # Noteport Architecture
//!
//! Noteport is a **UI-agnostic export library**. The binary in `main.rs` is a
//! thin CLI client; everything with decision-making power lives here and makes
//! no assumptions about terminals, stdout, or exit codes.
//!
//! ## Layers
//!
//! ```text
//! CLI Layer (main.rs, args.rs)
//!   - Parses arguments, colors output, owns stderr and exit codes
//!          │
//!          ▼
//! API Layer (api.rs)
//!   - Thin facade: wires a note source and a logger into the commands
//!          │
//!          ▼
//! Command Layer (commands/)
//!   - The export routine: destination resolution, sanitization,
//!     de-duplication, file writing
//!          │
//!          ▼
//! Capability Layer (source/, perms.rs, logging.rs)
//!   - NoteSource trait: osascript bridge (production), in-memory (tests)
//!   - Permission diagnostics and the injected logging capability
//! ```
//!
//! ## Key Principle: Capabilities Are Injected
//!
//! The notes application is reached over an automation bridge, which is a
//! capability boundary rather than a library call. The export routine only
//! ever sees the [`source::NoteSource`] trait, so the whole pipeline runs
//! against [`source::memory::InMemorySource`] in tests without Apple Notes
//! (or macOS) being present. Logging works the same way: the core reports
//! through the [`logging::Logger`] trait, never through a hidden global.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for the export routine
//! - [`source`]: Note retrieval abstraction and implementations
//! - [`perms`]: Filesystem permission snapshots and remediation hints
//! - [`model`]: Core data types (`Note`)
//! - [`config`]: Configuration management
//! - [`logging`]: The injected logging capability
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod perms;
pub mod source;
