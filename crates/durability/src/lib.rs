//! Durability layer for shortcut files
//!
//! This crate handles everything that touches disk:
//!
//! - Format: the byte layout of a shortcut movie atom
//! - File system seam: every file operation the writer performs
//! - Writer: delete/create/write/truncate/close/flush replace sequence
//! - Modes: volume flush and replace strategy
//! - Config: `shortcut.toml` loading
//! - Fault injection testing infrastructure

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config; // Writer configuration and shortcut.toml
pub mod format; // Binary on-disk format (shortcut movie atom)
pub mod fs; // File system seam (std-backed implementation)
pub mod mode; // Durability mode and replace strategy
pub mod testing; // Fault injection harness
pub mod writer; // Crash-consistent file writer

// === Re-exports ===
pub use config::{ShortcutConfig, WriterConfig, CONFIG_FILE_NAME};
pub use format::{build_shortcut_atom, ShortcutLayout};
pub use fs::{CreationHints, FileSystem, StdFileSystem, WritableFile};
pub use mode::{DurabilityMode, ReplaceStrategy};
pub use writer::{write_file_atomic, AtomicFileWriter, OutputFile};
