//! shortcut-movie - minimal QuickTime shortcut (reference) movie files
//!
//! A shortcut movie holds no media. It is a single movie atom wrapping one
//! data reference (a URL, a file alias) so that opening the shortcut opens
//! whatever the reference points at.
//!
//! # Quick Start
//!
//! ```ignore
//! use shortcut_movie::{create_shortcut_file, OutputFile, TypedReference};
//!
//! let reference = TypedReference::url("http://example.com/movie.mov");
//! create_shortcut_file(&reference, &OutputFile::shortcut("movie-link.mov"))?;
//! ```
//!
//! # Architecture
//!
//! Building the bytes ([`build_shortcut_atom`]) and getting them onto disk
//! ([`AtomicFileWriter`]) are separate steps. A [`ShortcutStrategy`] ties
//! them together; callers with a platform-native shortcut API can supply
//! their own strategy and pick between the two once, up front, with
//! [`select_strategy`].

mod strategy;

pub use strategy::{create_shortcut_file, select_strategy, ManualStrategy, ShortcutStrategy};

pub use shortcut_core::{
    FourCC, Result, ShortcutError, TypedReference, WriteStage, SHORTCUT_PREFIX_SIZE,
};
pub use shortcut_durability::{
    build_shortcut_atom, write_file_atomic, AtomicFileWriter, CreationHints, DurabilityMode,
    OutputFile, ReplaceStrategy, ShortcutConfig, ShortcutLayout, WriterConfig, CONFIG_FILE_NAME,
};
