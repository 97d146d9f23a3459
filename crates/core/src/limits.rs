//! Size constants of the shortcut layout
//!
//! A shortcut file is three 8-byte atom headers, the 4-byte reference
//! kind, then the reference bytes. Every length field is a `u32`, which
//! bounds the largest reference that can be encoded.

/// Size of one atom header: 4-byte length + 4-byte type
pub const ATOM_HEADER_SIZE: usize = 8;

/// Number of atom headers preceding the payload
pub const ATOM_NESTING_DEPTH: usize = 3;

/// Size of the reference kind stored before the reference bytes
pub const REFERENCE_KIND_SIZE: usize = 4;

/// Bytes preceding the reference bytes in a shortcut file (28)
pub const SHORTCUT_PREFIX_SIZE: usize =
    ATOM_NESTING_DEPTH * ATOM_HEADER_SIZE + REFERENCE_KIND_SIZE;

/// Largest reference payload whose container length still fits in a `u32`
pub const MAX_REFERENCE_LEN: usize = u32::MAX as usize - SHORTCUT_PREFIX_SIZE;
