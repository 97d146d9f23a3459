//! `std::fs` backed file system

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::trace;

use super::{CreationHints, FileSystem, WritableFile};

/// File system backed by `std::fs`
///
/// Creation hints are accepted and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn create(&self, path: &Path, hints: &CreationHints) -> io::Result<()> {
        trace!(
            path = %path.display(),
            file_type = ?hints.file_type,
            creator = ?hints.creator,
            "creating file"
        );
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
    }

    fn open_read_write(&self, path: &Path) -> io::Result<Box<dyn WritableFile>> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Box::new(StdFile { file }))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    #[cfg(unix)]
    fn sync_volume(&self, path: &Path) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        File::open(dir)?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_volume(&self, _path: &Path) -> io::Result<()> {
        // Directories cannot be opened for sync here; file data was
        // already flushed on close.
        Ok(())
    }
}

/// Handle returned by `StdFileSystem::open_read_write`
#[derive(Debug)]
pub struct StdFile {
    file: File,
}

impl WritableFile for StdFile {
    fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset)).map(drop)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        self.file.set_len(len)
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        // Dropping a File discards close errors; sync first so they surface
        self.file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_makes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.mov");

        StdFileSystem.create(&path, &CreationHints::default()).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_create_fails_if_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exists.mov");
        std::fs::write(&path, b"old").unwrap();

        let err = StdFileSystem
            .create(&path, &CreationHints::shortcut_movie())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = StdFileSystem.remove(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_seek_truncate_close() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, vec![0xEEu8; 64]).unwrap();

        let mut file = StdFileSystem.open_read_write(&path).unwrap();
        file.seek_to(0).unwrap();
        file.write_all(b"abcd").unwrap();
        file.seek_to(4).unwrap();
        file.set_len(4).unwrap();
        file.close().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"abcd");
    }

    #[test]
    fn test_open_missing_fails() {
        let dir = tempdir().unwrap();
        assert!(StdFileSystem
            .open_read_write(&dir.path().join("absent"))
            .is_err());
    }

    #[test]
    fn test_sync_volume() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("synced.mov");
        std::fs::write(&path, b"x").unwrap();
        StdFileSystem.sync_volume(&path).unwrap();
    }
}
