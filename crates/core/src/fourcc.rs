//! Four-character codes
//!
//! Atom types, data reference kinds and Finder type/creator codes are all
//! 32-bit values conventionally spelled as four ASCII characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShortcutError;

/// A 32-bit four-character code
///
/// Serialized as its four-character spelling (`"moov"`), so config files
/// can name codes directly. Codes with bytes outside printable ASCII use
/// the `"0x%08x"` hex form instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FourCC(u32);

impl FourCC {
    /// Movie atom, the top-level container of a shortcut
    pub const MOVIE_ATOM: FourCC = FourCC::from_bytes(*b"moov");
    /// Movie data reference alias atom
    pub const MOVIE_DATA_REF_ALIAS: FourCC = FourCC::from_bytes(*b"mdra");
    /// Data reference atom, holds the reference kind and bytes
    pub const DATA_REF: FourCC = FourCC::from_bytes(*b"dref");
    /// URL data reference kind
    pub const URL_DATA_REF: FourCC = FourCC::from_bytes(*b"url ");
    /// File alias data reference kind
    pub const ALIAS_DATA_REF: FourCC = FourCC::from_bytes(*b"alis");
    /// Movie file type
    pub const MOVIE_FILE_TYPE: FourCC = FourCC::from_bytes(*b"MooV");
    /// Creator code written on shortcut files
    pub const SHORTCUT_CREATOR: FourCC = FourCC::from_bytes(*b"TVOD");

    /// Create a code from its numeric value
    pub const fn new(value: u32) -> Self {
        FourCC(value)
    }

    /// Create a code from its four bytes, most significant first
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        FourCC(u32::from_be_bytes(bytes))
    }

    /// Numeric value of the code
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Big-endian byte representation
    pub const fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Whether all four bytes are printable ASCII
    pub fn is_printable(&self) -> bool {
        self.to_be_bytes().iter().all(|b| (0x20..0x7f).contains(b))
    }
}

impl From<u32> for FourCC {
    fn from(value: u32) -> Self {
        FourCC(value)
    }
}

impl From<FourCC> for u32 {
    fn from(code: FourCC) -> Self {
        code.0
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_printable() {
            let bytes = self.to_be_bytes();
            // printable ASCII is always valid UTF-8
            let s = std::str::from_utf8(&bytes).map_err(|_| fmt::Error)?;
            write!(f, "'{}'", s)
        } else {
            write!(f, "{:#010x}", self.0)
        }
    }
}

impl FromStr for FourCC {
    type Err = ShortcutError;

    /// Parse a four-character spelling such as `"url "`, or the ten-character
    /// hex form `"0xa9414243"` that `Display` uses for unprintable codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix("0x").filter(|_| s.len() == 10) {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ShortcutError::invalid_argument(format!(
                    "four-character code {:?} is not valid hex",
                    s
                )));
            }
            return u32::from_str_radix(hex, 16)
                .map(FourCC)
                .map_err(|e| ShortcutError::invalid_argument(e.to_string()));
        }
        let bytes: [u8; 4] = s.as_bytes().try_into().map_err(|_| {
            ShortcutError::invalid_argument(format!(
                "four-character code must be exactly 4 bytes, got {:?} ({} bytes)",
                s,
                s.len()
            ))
        })?;
        if !bytes.iter().all(|b| b.is_ascii()) {
            return Err(ShortcutError::invalid_argument(format!(
                "four-character code must be ASCII, got {:?}",
                s
            )));
        }
        Ok(FourCC::from_bytes(bytes))
    }
}

impl TryFrom<String> for FourCC {
    type Error = ShortcutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FourCC> for String {
    fn from(code: FourCC) -> Self {
        if code.is_printable() {
            code.to_be_bytes().iter().map(|&b| b as char).collect()
        } else {
            format!("{:#010x}", code.0)
        }
    }
}
