//! Core types for shortcut movie files
//!
//! This crate defines the foundational types shared by the builder, the
//! writer and the command-line driver:
//! - FourCC: four-character type codes (atom types, data reference kinds)
//! - TypedReference: an opaque data reference plus its type tag
//! - ShortcutError: the error taxonomy for building and writing shortcuts
//! - Limits: size constants of the shortcut layout

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fourcc;
pub mod limits;
pub mod reference;

pub use error::{Result, ShortcutError, WriteStage};
pub use fourcc::FourCC;
pub use limits::{ATOM_HEADER_SIZE, MAX_REFERENCE_LEN, SHORTCUT_PREFIX_SIZE};
pub use reference::TypedReference;
