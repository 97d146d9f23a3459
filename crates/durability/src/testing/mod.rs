//! Testing utilities for the writer
//!
//! This module provides tools for exercising failure paths:
//!
//! - **Fault injection**: a file system that fails one chosen step and
//!   records every step the writer attempted
//!
//! # Example
//!
//! ```ignore
//! use shortcut_durability::testing::{FailPoint, FaultyFileSystem};
//!
//! let fs = FaultyFileSystem::new(FailPoint::at(WriteStage::Open));
//! let log = fs.log();
//! let writer = AtomicFileWriter::with_file_system(Box::new(fs), WriterConfig::default());
//! ```

mod fault_injection;

pub use fault_injection::{FailPoint, FaultyFileSystem, OperationLog};
