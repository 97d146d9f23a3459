//! Typed data references
//!
//! A data reference says where a movie's data lives (a file alias, a URL)
//! without containing that data. The bytes are opaque here: they are
//! copied into the shortcut verbatim and never interpreted.

use crate::fourcc::FourCC;

/// An opaque data reference plus its type tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedReference {
    /// Reference type, e.g. `'url '` or `'alis'`
    pub kind: FourCC,
    /// Raw reference bytes
    pub bytes: Vec<u8>,
}

impl TypedReference {
    /// Create a reference from a kind and raw bytes
    pub fn new(kind: impl Into<FourCC>, bytes: impl Into<Vec<u8>>) -> Self {
        TypedReference {
            kind: kind.into(),
            bytes: bytes.into(),
        }
    }

    /// Create a URL data reference
    ///
    /// URL references are stored as C strings: the URL bytes followed by
    /// one NUL terminator.
    pub fn url(url: &str) -> Self {
        let mut bytes = Vec::with_capacity(url.len() + 1);
        bytes.extend_from_slice(url.as_bytes());
        bytes.push(0);
        TypedReference {
            kind: FourCC::URL_DATA_REF,
            bytes,
        }
    }

    /// Length of the reference bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the reference bytes are empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
