//! Crash-consistent file writer
//!
//! Replaces whatever is at a target path with exactly the given bytes and
//! flushes the result to durable storage before returning.
//!
//! # Write Sequence (in-place)
//!
//! 1. Delete the existing file (every failure is absorbed)
//! 2. Create a new, empty file with the creation hints
//! 3. Open it read/write
//! 4. Seek to offset 0
//! 5. Write the payload
//! 6. Seek to the end of the payload
//! 7. Truncate to the payload length
//! 8. Close the handle
//! 9. Flush the containing volume
//!
//! The first failing step from 2 on stops the sequence and is reported with
//! its `WriteStage`. Nothing is rolled back and nothing is retried: after a
//! failure the target may be missing, empty, or partially written.
//!
//! With `ReplaceStrategy::TempRename`, steps 1–8 run against a sibling
//! temporary file which is then renamed over the target before step 9.

use std::io;
use std::path::{Path, PathBuf};

use shortcut_core::{Result, ShortcutError, WriteStage};
use tracing::{debug, trace};

use crate::config::WriterConfig;
use crate::fs::{CreationHints, FileSystem, StdFileSystem};
use crate::mode::ReplaceStrategy;

/// Target of a write: a path plus creation hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    path: PathBuf,
    hints: CreationHints,
}

impl OutputFile {
    /// Target with no creation hints
    pub fn new(path: impl Into<PathBuf>) -> Self {
        OutputFile {
            path: path.into(),
            hints: CreationHints::default(),
        }
    }

    /// Target carrying the shortcut movie type and creator
    pub fn shortcut(path: impl Into<PathBuf>) -> Self {
        OutputFile::new(path).with_hints(CreationHints::shortcut_movie())
    }

    /// Set creation hints
    pub fn with_hints(mut self, hints: CreationHints) -> Self {
        self.hints = hints;
        self
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creation hints passed to file creation
    pub fn hints(&self) -> &CreationHints {
        &self.hints
    }

    /// Sibling path used by `ReplaceStrategy::TempRename`
    pub fn temp_path(&self) -> Result<PathBuf> {
        let name = self.path.file_name().ok_or_else(|| {
            ShortcutError::invalid_argument(format!(
                "target '{}' has no file name",
                self.path.display()
            ))
        })?;
        let mut temp_name = std::ffi::OsString::from(".");
        temp_name.push(name);
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

/// Writer that replaces files through a `FileSystem`
pub struct AtomicFileWriter {
    fs: Box<dyn FileSystem>,
    config: WriterConfig,
}

impl std::fmt::Debug for AtomicFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomicFileWriter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for AtomicFileWriter {
    fn default() -> Self {
        AtomicFileWriter::new(WriterConfig::default())
    }
}

impl AtomicFileWriter {
    /// Create a writer over the real file system
    pub fn new(config: WriterConfig) -> Self {
        AtomicFileWriter::with_file_system(Box::new(StdFileSystem), config)
    }

    /// Create a writer over a custom file system
    pub fn with_file_system(fs: Box<dyn FileSystem>, config: WriterConfig) -> Self {
        AtomicFileWriter { fs, config }
    }

    /// Writer configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Replace the file at `target` with exactly `data`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `data` is empty; the file system is not touched
    /// - `FileSystem { stage, .. }` for the first step that failed
    pub fn write(&self, data: &[u8], target: &OutputFile) -> Result<()> {
        if data.is_empty() {
            return Err(ShortcutError::invalid_argument(
                "refusing to write a zero-length file",
            ));
        }

        match self.config.strategy {
            ReplaceStrategy::InPlace => {
                self.remove_existing(target.path());
                self.write_new_file(target.path(), target.hints(), data)?;
            }
            ReplaceStrategy::TempRename => {
                let temp_path = target.temp_path()?;
                self.remove_existing(&temp_path);
                self.write_new_file(&temp_path, target.hints(), data)?;
                self.fs
                    .rename(&temp_path, target.path())
                    .map_err(|e| stage_error(WriteStage::Rename, e))?;
                debug!(
                    from = %temp_path.display(),
                    to = %target.path().display(),
                    "renamed temporary file over target"
                );
            }
        }

        if self.config.durability.requires_volume_flush() {
            self.fs
                .sync_volume(target.path())
                .map_err(|e| stage_error(WriteStage::Flush, e))?;
            trace!(path = %target.path().display(), "volume flushed");
        }

        Ok(())
    }

    /// Best-effort delete; a later create surfaces any real problem.
    fn remove_existing(&self, path: &Path) {
        match self.fs.remove(path) {
            Ok(()) => trace!(path = %path.display(), "removed existing file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => debug!(
                path = %path.display(),
                error = %e,
                "ignoring delete failure"
            ),
        }
    }

    /// Steps 2–8: create, open, seek, write, seek, truncate, close.
    fn write_new_file(&self, path: &Path, hints: &CreationHints, data: &[u8]) -> Result<()> {
        let len = data.len() as u64;

        self.fs
            .create(path, hints)
            .map_err(|e| stage_error(WriteStage::Create, e))?;

        let mut file = self
            .fs
            .open_read_write(path)
            .map_err(|e| stage_error(WriteStage::Open, e))?;

        file.seek_to(0)
            .map_err(|e| stage_error(WriteStage::Seek, e))?;
        file.write_all(data)
            .map_err(|e| stage_error(WriteStage::Write, e))?;
        file.seek_to(len)
            .map_err(|e| stage_error(WriteStage::SeekEnd, e))?;
        file.set_len(len)
            .map_err(|e| stage_error(WriteStage::Truncate, e))?;
        file.close()
            .map_err(|e| stage_error(WriteStage::Close, e))?;

        trace!(path = %path.display(), bytes = len, "file written");
        Ok(())
    }
}

fn stage_error(stage: WriteStage, source: io::Error) -> ShortcutError {
    debug!(stage = %stage, error = %source, "write step failed");
    ShortcutError::file_system(stage, source)
}

/// Replace the file at `target` with `data` using the default writer.
///
/// Equivalent to `AtomicFileWriter::default().write(data, target)`.
pub fn write_file_atomic(data: &[u8], target: &OutputFile) -> Result<()> {
    AtomicFileWriter::default().write(data, target)
}
