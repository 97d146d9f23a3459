//! Writer configuration
//!
//! `WriterConfig` is the in-process form, built with presets and `with_*`
//! methods. `ShortcutConfig` is the on-disk form, read from a
//! `shortcut.toml` file:
//!
//! ```toml
//! durability = "always"
//! strategy = "in-place"
//! file_type = "MooV"
//! creator = "TVOD"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shortcut_core::{FourCC, Result, ShortcutError};

use crate::fs::CreationHints;
use crate::mode::{DurabilityMode, ReplaceStrategy};

/// Config file name looked up by the command-line driver.
pub const CONFIG_FILE_NAME: &str = "shortcut.toml";

/// Writer configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Whether the volume is flushed after the write
    pub durability: DurabilityMode,
    /// How an existing target is replaced
    pub strategy: ReplaceStrategy,
}

impl WriterConfig {
    /// Create config for testing
    ///
    /// Skips the volume flush.
    pub fn for_testing() -> Self {
        WriterConfig {
            durability: DurabilityMode::Cache,
            strategy: ReplaceStrategy::InPlace,
        }
    }

    /// Set durability mode
    pub fn with_durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }

    /// Set replace strategy
    pub fn with_strategy(mut self, strategy: ReplaceStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Configuration loaded from `shortcut.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortcutConfig {
    /// Durability mode: `"always"` or `"cache"`
    #[serde(default = "default_durability_str")]
    pub durability: String,
    /// Replace strategy: `"in-place"` or `"temp-rename"`
    #[serde(default = "default_strategy_str")]
    pub strategy: String,
    /// File type code for created files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FourCC>,
    /// Creator code for created files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<FourCC>,
}

fn default_durability_str() -> String {
    DurabilityMode::default().as_str().to_string()
}

fn default_strategy_str() -> String {
    ReplaceStrategy::default().as_str().to_string()
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        ShortcutConfig {
            durability: default_durability_str(),
            strategy: default_strategy_str(),
            file_type: Some(FourCC::MOVIE_FILE_TYPE),
            creator: Some(FourCC::SHORTCUT_CREATOR),
        }
    }
}

impl ShortcutConfig {
    /// Parse the durability string into a `DurabilityMode`.
    pub fn durability_mode(&self) -> Result<DurabilityMode> {
        DurabilityMode::parse(&self.durability).ok_or_else(|| {
            ShortcutError::invalid_argument(format!(
                "Invalid durability mode '{}'. Expected \"always\" or \"cache\".",
                self.durability
            ))
        })
    }

    /// Parse the strategy string into a `ReplaceStrategy`.
    pub fn replace_strategy(&self) -> Result<ReplaceStrategy> {
        ReplaceStrategy::parse(&self.strategy).ok_or_else(|| {
            ShortcutError::invalid_argument(format!(
                "Invalid strategy '{}'. Expected \"in-place\" or \"temp-rename\".",
                self.strategy
            ))
        })
    }

    /// Build the writer configuration.
    pub fn writer_config(&self) -> Result<WriterConfig> {
        Ok(WriterConfig {
            durability: self.durability_mode()?,
            strategy: self.replace_strategy()?,
        })
    }

    /// Creation hints for files written with this configuration.
    pub fn creation_hints(&self) -> CreationHints {
        CreationHints {
            file_type: self.file_type,
            creator: self.creator,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Shortcut writer configuration
#
# Durability mode: "always" (default) or "cache"
#   "always" = flush the volume after every write
#   "cache"  = skip the volume flush, file data is still flushed on close
durability = "always"

# Replace strategy: "in-place" (default) or "temp-rename"
#   "in-place"    = delete the target, then create and write it
#   "temp-rename" = write a temporary file and rename it over the target
strategy = "in-place"

# Finder type and creator codes passed to file creation
file_type = "MooV"
creator = "TVOD"
"#
    }

    /// Parse config from TOML text, validating mode and strategy eagerly.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShortcutConfig = toml::from_str(content)
            .map_err(|e| ShortcutError::Config(format!("Failed to parse config: {}", e)))?;
        config.writer_config()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShortcutError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                ShortcutError::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
