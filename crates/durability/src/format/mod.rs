//! On-disk byte formats.
//!
//! This module centralizes the serialization of shortcut files. Keeping
//! the byte layout separate from the write sequence (how the bytes reach
//! disk) keeps each side testable without the other.
//!
//! # Module Structure
//!
//! - `shortcut`: three-header movie atom wrapping one data reference

pub mod shortcut;

pub use shortcut::{build_shortcut_atom, ShortcutLayout};
