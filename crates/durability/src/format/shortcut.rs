//! Shortcut movie atom layout.
//!
//! A shortcut is a movie atom containing exactly one movie data reference
//! alias atom, which contains exactly one data reference atom holding the
//! reference kind and bytes:
//!
//! ```text
//! moov -> mdra -> dref(kind, bytes)
//! ```
//!
//! # Binary Format (28 + L bytes, all integers big-endian)
//!
//! ```text
//! container_len(4) + 'moov'(4)
//! + alias_len(4) + 'mdra'(4)
//! + reference_len(4) + 'dref'(4)
//! + kind(4) + bytes(L)
//! ```
//!
//! The three headers are emitted back to back before the payload. Since
//! each atom holds exactly one child and nothing else, this is the same
//! byte stream a recursive writer would produce, so the lengths are
//! computed directly from the payload size instead.

use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};
use shortcut_core::limits::{ATOM_HEADER_SIZE, REFERENCE_KIND_SIZE};
use shortcut_core::{FourCC, Result, ShortcutError, TypedReference};
use shortcut_core::{MAX_REFERENCE_LEN, SHORTCUT_PREFIX_SIZE};

/// Length fields of a shortcut for a given reference payload size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutLayout {
    /// Length of the `'moov'` atom, equal to the whole file size
    pub container_len: u32,
    /// Length of the `'mdra'` atom
    pub alias_len: u32,
    /// Length of the `'dref'` atom
    pub reference_len: u32,
}

impl ShortcutLayout {
    /// Compute the layout for a reference of `payload_len` bytes.
    ///
    /// Fails with `InvalidArgument` when the container length would not
    /// fit in its 32-bit field.
    pub fn for_payload(payload_len: usize) -> Result<Self> {
        if payload_len > MAX_REFERENCE_LEN {
            return Err(ShortcutError::invalid_argument(format!(
                "reference of {} bytes exceeds the maximum of {} bytes",
                payload_len, MAX_REFERENCE_LEN
            )));
        }

        let content_len = (REFERENCE_KIND_SIZE + payload_len) as u32;
        let header = ATOM_HEADER_SIZE as u32;
        Ok(ShortcutLayout {
            container_len: 3 * header + content_len,
            alias_len: 2 * header + content_len,
            reference_len: header + content_len,
        })
    }

    /// Total serialized size in bytes
    pub fn total_len(&self) -> usize {
        self.container_len as usize
    }
}

/// Build the shortcut movie atom for a data reference.
///
/// The returned buffer is exactly `28 + reference.len()` bytes. Building is
/// deterministic: identical references always give identical bytes.
///
/// # Errors
///
/// - `ResourceExhausted` if the buffer cannot be allocated
/// - `InvalidArgument` if the reference is too large for 32-bit lengths
pub fn build_shortcut_atom(reference: &TypedReference) -> Result<Vec<u8>> {
    let layout = ShortcutLayout::for_payload(reference.bytes.len())?;
    let total = layout.total_len();

    let mut buf = Vec::new();
    buf.try_reserve_exact(total)
        .map_err(|_| ShortcutError::ResourceExhausted { requested: total })?;

    write_prefix(&mut buf, &layout, reference.kind)
        .map_err(|_| ShortcutError::ResourceExhausted { requested: total })?;
    buf.extend_from_slice(&reference.bytes);

    debug_assert_eq!(buf.len(), SHORTCUT_PREFIX_SIZE + reference.bytes.len());
    Ok(buf)
}

/// Three atom headers followed by the reference kind.
fn write_prefix<W: Write>(writer: &mut W, layout: &ShortcutLayout, kind: FourCC) -> io::Result<()> {
    write_header(writer, layout.container_len, FourCC::MOVIE_ATOM)?;
    write_header(writer, layout.alias_len, FourCC::MOVIE_DATA_REF_ALIAS)?;
    write_header(writer, layout.reference_len, FourCC::DATA_REF)?;
    writer.write_u32::<BigEndian>(kind.value())
}

fn write_header<W: Write>(writer: &mut W, len: u32, atom_type: FourCC) -> io::Result<()> {
    writer.write_u32::<BigEndian>(len)?;
    writer.write_u32::<BigEndian>(atom_type.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn be_u32(buf: &[u8], offset: usize) -> u32 {
        u32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_url_shortcut_layout() {
        let reference =
            TypedReference::new(0x5552_4C20u32, b"http://example.com/movie.mov\0".to_vec());
        let buf = build_shortcut_atom(&reference).unwrap();

        assert_eq!(buf.len(), 57);
        assert_eq!(be_u32(&buf, 0), 57);
        assert_eq!(be_u32(&buf, 8), 49);
        assert_eq!(be_u32(&buf, 16), 41);
        assert_eq!(be_u32(&buf, 24), 0x5552_4C20);
        assert_eq!(&buf[28..57], b"http://example.com/movie.mov\0");
    }

    #[test]
    fn test_atom_types() {
        let buf = build_shortcut_atom(&TypedReference::url("rtsp://host/a.mov")).unwrap();
        assert_eq!(&buf[4..8], b"moov");
        assert_eq!(&buf[12..16], b"mdra");
        assert_eq!(&buf[20..24], b"dref");
        assert_eq!(&buf[24..28], b"url ");
    }

    #[test]
    fn test_empty_reference() {
        let reference = TypedReference::new(FourCC::ALIAS_DATA_REF, Vec::new());
        let buf = build_shortcut_atom(&reference).unwrap();

        assert_eq!(buf.len(), 28);
        assert_eq!(be_u32(&buf, 0), 28);
        assert_eq!(be_u32(&buf, 8), 20);
        assert_eq!(be_u32(&buf, 16), 12);
        assert_eq!(&buf[24..28], b"alis");
    }

    #[test]
    fn test_big_endian_kind() {
        let reference = TypedReference::new(0x0102_0304u32, vec![0xAA]);
        let buf = build_shortcut_atom(&reference).unwrap();
        assert_eq!(&buf[24..28], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(buf[28], 0xAA);
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let reference = TypedReference::url("file:///Volumes/Media/clip.mov");
        let first = build_shortcut_atom(&reference).unwrap();
        let second = build_shortcut_atom(&reference).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_prefix_write_error_is_propagated() {
        let layout = ShortcutLayout::for_payload(0).unwrap();
        let mut short = [0u8; 10];
        let result = write_prefix(&mut &mut short[..], &layout, FourCC::URL_DATA_REF);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::WriteZero);
        // the first header still landed before the slice ran out
        assert_eq!(&short[4..8], b"moov");
    }

    #[test]
    fn test_layout_size_consistency() {
        let layout = ShortcutLayout::for_payload(100).unwrap();
        assert_eq!(layout.container_len, layout.alias_len + 8);
        assert_eq!(layout.container_len, layout.reference_len + 16);
        assert_eq!(layout.reference_len, 8 + 4 + 100);
        assert_eq!(layout.total_len(), 128);
    }

    #[test]
    fn test_layout_rejects_oversized_payload() {
        assert!(ShortcutLayout::for_payload(MAX_REFERENCE_LEN).is_ok());
        let err = ShortcutLayout::for_payload(MAX_REFERENCE_LEN + 1).unwrap_err();
        assert!(matches!(err, ShortcutError::InvalidArgument(_)));
    }

    #[test]
    fn test_max_layout_container_len() {
        let layout = ShortcutLayout::for_payload(MAX_REFERENCE_LEN).unwrap();
        assert_eq!(layout.container_len, u32::MAX);
    }
}
