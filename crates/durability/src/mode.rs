//! Write modes
//!
//! Two independent knobs control how the writer replaces a file:
//! whether the volume is flushed after the write, and whether the target
//! is deleted and rewritten in place or replaced by renaming a temporary.

/// Durability mode for a write
///
/// | Mode | volume flush | Survives crash after return |
/// |------|--------------|-----------------------------|
/// | Always | Yes | Yes |
/// | Cache | No | Not guaranteed |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurabilityMode {
    /// Flush the containing volume after closing the file (the default)
    #[default]
    Always,

    /// Skip the volume flush
    ///
    /// File data is still flushed on close. Use for tests and scratch
    /// output where the directory entry need not survive a crash.
    Cache,
}

impl DurabilityMode {
    /// Check if this mode flushes the volume after the write
    pub fn requires_volume_flush(&self) -> bool {
        matches!(self, DurabilityMode::Always)
    }

    /// Config file spelling of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            DurabilityMode::Always => "always",
            DurabilityMode::Cache => "cache",
        }
    }

    /// Parse the config file spelling (`"always"` or `"cache"`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "always" => Some(DurabilityMode::Always),
            "cache" => Some(DurabilityMode::Cache),
            _ => None,
        }
    }
}

/// How an existing target file is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceStrategy {
    /// Delete the target, then create and write it in place (the default)
    ///
    /// A crash between delete and the end of the write can leave no file
    /// or a partial one.
    #[default]
    InPlace,

    /// Write a sibling `.<name>.tmp`, then rename it over the target
    ///
    /// The target holds either the old or the new contents at every point.
    TempRename,
}

impl ReplaceStrategy {
    /// Config file spelling of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplaceStrategy::InPlace => "in-place",
            ReplaceStrategy::TempRename => "temp-rename",
        }
    }

    /// Parse the config file spelling (`"in-place"` or `"temp-rename"`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in-place" => Some(ReplaceStrategy::InPlace),
            "temp-rename" => Some(ReplaceStrategy::TempRename),
            _ => None,
        }
    }
}
