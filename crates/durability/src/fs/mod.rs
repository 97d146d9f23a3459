//! File system seam for the writer
//!
//! The writer never calls `std::fs` directly. Every step goes through a
//! `FileSystem` so that tests can inject a failure at any single step and
//! observe which later steps were attempted.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync` so one writer can be shared.
//! Nothing here serializes access to a given path: concurrent writes to
//! the same target are the caller's problem.

mod std_fs;

pub use std_fs::{StdFile, StdFileSystem};

use std::io;
use std::path::Path;

use shortcut_core::FourCC;

/// Platform creation hints for a new file
///
/// Finder type and creator codes have no portable equivalent. They are
/// handed to `FileSystem::create` untouched; a file system that cannot
/// store them ignores them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreationHints {
    /// File type code, e.g. `'MooV'`
    pub file_type: Option<FourCC>,
    /// Creator code, e.g. `'TVOD'`
    pub creator: Option<FourCC>,
}

impl CreationHints {
    /// Hints for a shortcut movie file (`'MooV'` / `'TVOD'`)
    pub fn shortcut_movie() -> Self {
        CreationHints {
            file_type: Some(FourCC::MOVIE_FILE_TYPE),
            creator: Some(FourCC::SHORTCUT_CREATOR),
        }
    }
}

/// An open read/write file handle
pub trait WritableFile: Send {
    /// Move the file offset to `offset` bytes from the start.
    fn seek_to(&mut self, offset: u64) -> io::Result<()>;

    /// Write all of `data` at the current offset.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Set the file length, truncating or extending as needed.
    fn set_len(&mut self, len: u64) -> io::Result<()>;

    /// Flush file data and release the handle.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// File operations used by the writer
pub trait FileSystem: Send + Sync {
    /// Remove the file at `path`.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Create a new, empty file at `path`.
    ///
    /// Fails if a file already exists there.
    fn create(&self, path: &Path, hints: &CreationHints) -> io::Result<()>;

    /// Open an existing file for reading and writing.
    fn open_read_write(&self, path: &Path) -> io::Result<Box<dyn WritableFile>>;

    /// Rename `from` to `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Make directory entries and data under `path`'s volume durable.
    fn sync_volume(&self, path: &Path) -> io::Result<()>;
}
