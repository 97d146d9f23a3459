//! Shortcut creation strategies
//!
//! The manual strategy builds the atom bytes itself and writes them with
//! an `AtomicFileWriter`. Hosts that have a native "create shortcut movie"
//! call wrap it in their own `ShortcutStrategy`; the choice between the
//! two is made once by the caller, never inside the builder or writer.

use shortcut_core::{Result, TypedReference};
use shortcut_durability::{build_shortcut_atom, AtomicFileWriter, OutputFile, WriterConfig};
use tracing::info;

/// Something that can turn a data reference into a shortcut file
pub trait ShortcutStrategy: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Create (or replace) the shortcut file at `target` for `reference`.
    fn create_shortcut(&self, reference: &TypedReference, target: &OutputFile) -> Result<()>;
}

/// Builds the shortcut bytes and writes them through an `AtomicFileWriter`
#[derive(Debug, Default)]
pub struct ManualStrategy {
    writer: AtomicFileWriter,
}

impl ManualStrategy {
    /// Manual strategy over the real file system
    pub fn new(config: WriterConfig) -> Self {
        ManualStrategy {
            writer: AtomicFileWriter::new(config),
        }
    }

    /// Manual strategy with a prepared writer
    pub fn with_writer(writer: AtomicFileWriter) -> Self {
        ManualStrategy { writer }
    }
}

impl ShortcutStrategy for ManualStrategy {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn create_shortcut(&self, reference: &TypedReference, target: &OutputFile) -> Result<()> {
        let atom = build_shortcut_atom(reference)?;
        self.writer.write(&atom, target)?;
        info!(
            path = %target.path().display(),
            kind = %reference.kind,
            bytes = atom.len(),
            "created shortcut movie"
        );
        Ok(())
    }
}

/// Pick the strategy for this process.
///
/// Returns `native` when the host supplied one, the manual pipeline with
/// `config` otherwise.
pub fn select_strategy(
    native: Option<Box<dyn ShortcutStrategy>>,
    config: WriterConfig,
) -> Box<dyn ShortcutStrategy> {
    match native {
        Some(strategy) => strategy,
        None => Box::new(ManualStrategy::new(config)),
    }
}

/// Create a shortcut with the manual strategy and default configuration.
pub fn create_shortcut_file(reference: &TypedReference, target: &OutputFile) -> Result<()> {
    ManualStrategy::default().create_shortcut(reference, target)
}
