//! Fault-injecting file system
//!
//! Wraps `StdFileSystem`, forwarding every operation to the real disk
//! except the one named by the `FailPoint`, which returns an error instead.
//! Every attempted operation is appended to a shared `OperationLog`, so a
//! test can check both which error surfaced and which steps never ran.

use std::io;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use shortcut_core::WriteStage;

use crate::fs::{CreationHints, FileSystem, StdFileSystem, WritableFile};

/// Where the injected failure happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailPoint {
    /// Step that fails
    pub stage: WriteStage,
    /// Kind of the injected error
    pub kind: io::ErrorKind,
}

impl FailPoint {
    /// Fail `stage` with a generic error
    pub fn at(stage: WriteStage) -> Self {
        FailPoint {
            stage,
            kind: io::ErrorKind::Other,
        }
    }

    /// Fail `stage` with a specific error kind
    pub fn with_kind(stage: WriteStage, kind: io::ErrorKind) -> Self {
        FailPoint { stage, kind }
    }

    fn error(&self) -> io::Error {
        io::Error::new(self.kind, format!("injected {} failure", self.stage))
    }
}

/// Ordered record of attempted steps, shared with the file system
#[derive(Debug, Clone, Default)]
pub struct OperationLog {
    entries: Arc<Mutex<Vec<WriteStage>>>,
}

impl OperationLog {
    fn record(&self, stage: WriteStage) {
        self.entries.lock().push(stage);
    }

    /// Steps attempted so far, in order (including the failed one)
    pub fn attempted(&self) -> Vec<WriteStage> {
        self.entries.lock().clone()
    }

    /// Whether `stage` was attempted
    pub fn contains(&self, stage: WriteStage) -> bool {
        self.entries.lock().contains(&stage)
    }
}

/// File system that fails at one injected step
#[derive(Debug, Clone, Default)]
pub struct FaultyFileSystem {
    inner: StdFileSystem,
    fail_point: Option<FailPoint>,
    log: OperationLog,
}

impl FaultyFileSystem {
    /// File system failing at `fail_point`
    pub fn new(fail_point: FailPoint) -> Self {
        FaultyFileSystem {
            inner: StdFileSystem,
            fail_point: Some(fail_point),
            log: OperationLog::default(),
        }
    }

    /// File system that never fails but still records operations
    pub fn recording() -> Self {
        FaultyFileSystem::default()
    }

    /// Handle to the operation log
    pub fn log(&self) -> OperationLog {
        self.log.clone()
    }

    fn step(&self, stage: WriteStage) -> io::Result<()> {
        check(self.fail_point, &self.log, stage)
    }
}

fn check(fail_point: Option<FailPoint>, log: &OperationLog, stage: WriteStage) -> io::Result<()> {
    log.record(stage);
    match fail_point {
        Some(point) if point.stage == stage => Err(point.error()),
        _ => Ok(()),
    }
}

impl FileSystem for FaultyFileSystem {
    fn remove(&self, path: &Path) -> io::Result<()> {
        self.step(WriteStage::Delete)?;
        self.inner.remove(path)
    }

    fn create(&self, path: &Path, hints: &CreationHints) -> io::Result<()> {
        self.step(WriteStage::Create)?;
        self.inner.create(path, hints)
    }

    fn open_read_write(&self, path: &Path) -> io::Result<Box<dyn WritableFile>> {
        self.step(WriteStage::Open)?;
        let inner = self.inner.open_read_write(path)?;
        Ok(Box::new(FaultyFile {
            inner,
            fail_point: self.fail_point,
            log: self.log.clone(),
            written: false,
        }))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.step(WriteStage::Rename)?;
        self.inner.rename(from, to)
    }

    fn sync_volume(&self, path: &Path) -> io::Result<()> {
        self.step(WriteStage::Flush)?;
        self.inner.sync_volume(path)
    }
}

struct FaultyFile {
    inner: Box<dyn WritableFile>,
    fail_point: Option<FailPoint>,
    log: OperationLog,
    written: bool,
}

impl FaultyFile {
    fn step(&self, stage: WriteStage) -> io::Result<()> {
        check(self.fail_point, &self.log, stage)
    }
}

impl WritableFile for FaultyFile {
    fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        // seeks before the payload and after it are distinct steps
        let stage = if self.written {
            WriteStage::SeekEnd
        } else {
            WriteStage::Seek
        };
        self.step(stage)?;
        self.inner.seek_to(offset)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.step(WriteStage::Write)?;
        self.inner.write_all(data)?;
        self.written = true;
        Ok(())
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        self.step(WriteStage::Truncate)?;
        self.inner.set_len(len)
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        self.step(WriteStage::Close)?;
        self.inner.close()
    }
}
