//! Error types for shortcut creation
//!
//! Every failure in the builder or the writer surfaces as a `ShortcutError`.
//! We use `thiserror` for the `Display` and `Error` implementations.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for shortcut operations
pub type Result<T> = std::result::Result<T, ShortcutError>;

/// A numbered step of the file write sequence.
///
/// Ordered the same way the writer executes them, so `Ord` reflects
/// how far the sequence got before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WriteStage {
    /// Removing a pre-existing file. Failures here are absorbed.
    Delete,
    /// Creating the new, empty file.
    Create,
    /// Opening the created file for read/write.
    Open,
    /// Positioning the file offset at the start before writing.
    Seek,
    /// Writing the payload.
    Write,
    /// Positioning the file offset at the end of the payload.
    SeekEnd,
    /// Truncating the file to the payload length.
    Truncate,
    /// Closing the handle (flushes file data).
    Close,
    /// Renaming a temporary file over the target.
    Rename,
    /// Flushing the containing volume.
    Flush,
}

impl WriteStage {
    /// Lowercase stage name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStage::Delete => "delete",
            WriteStage::Create => "create",
            WriteStage::Open => "open",
            WriteStage::Seek => "seek",
            WriteStage::Write => "write",
            WriteStage::SeekEnd => "seek-end",
            WriteStage::Truncate => "truncate",
            WriteStage::Close => "close",
            WriteStage::Rename => "rename",
            WriteStage::Flush => "flush",
        }
    }

    /// Whether payload bytes may have reached the file when this stage failed.
    ///
    /// Failures before `Write` leave at most an empty file behind.
    pub fn may_have_written(&self) -> bool {
        *self >= WriteStage::Write
    }
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for building and writing shortcut files
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// Caller supplied an argument the operation cannot accept
    /// (empty write payload, oversized reference, malformed code).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Memory for the atom buffer could not be reserved
    #[error("Resource exhausted: could not allocate {requested} bytes")]
    ResourceExhausted {
        /// Number of bytes requested
        requested: usize,
    },

    /// A file system step of the writer failed
    #[error("File system error during {stage}: {source}")]
    FileSystem {
        /// Step that failed; later steps were not attempted
        stage: WriteStage,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShortcutError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ShortcutError::InvalidArgument(msg.into())
    }

    /// Wrap an I/O error with the writer stage it came from
    pub fn file_system(stage: WriteStage, source: io::Error) -> Self {
        ShortcutError::FileSystem { stage, source }
    }

    /// The failed writer stage, if this is a file system error
    pub fn stage(&self) -> Option<WriteStage> {
        match self {
            ShortcutError::FileSystem { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
