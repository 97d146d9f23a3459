//! Shortcut layout and write tests
//!
//! Layout properties are checked for arbitrary kinds and payloads, then the
//! built bytes are pushed through the writer and read back from disk.

use proptest::prelude::*;
use shortcut_core::{FourCC, TypedReference};
use shortcut_durability::{build_shortcut_atom, write_file_atomic, OutputFile, ShortcutLayout};
use tempfile::TempDir;

fn be_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap())
}

proptest! {
    #[test]
    fn prop_layout_matches_formulas(
        kind in any::<u32>(),
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let len = bytes.len();
        let reference = TypedReference::new(kind, bytes.clone());
        let buf = build_shortcut_atom(&reference).unwrap();

        prop_assert_eq!(buf.len(), 28 + len);
        prop_assert_eq!(be_u32(&buf, 0) as usize, 24 + 4 + len);
        prop_assert_eq!(&buf[4..8], b"moov");
        prop_assert_eq!(be_u32(&buf, 8) as usize, 16 + 4 + len);
        prop_assert_eq!(&buf[12..16], b"mdra");
        prop_assert_eq!(be_u32(&buf, 16) as usize, 8 + 4 + len);
        prop_assert_eq!(&buf[20..24], b"dref");
        prop_assert_eq!(be_u32(&buf, 24), kind);
        prop_assert_eq!(&buf[28..], &bytes[..]);
    }

    #[test]
    fn prop_size_consistency(len in 0usize..100_000) {
        let layout = ShortcutLayout::for_payload(len).unwrap();
        prop_assert_eq!(layout.container_len, layout.alias_len + 8);
        prop_assert_eq!(layout.container_len, layout.reference_len + 16);
        prop_assert_eq!(layout.reference_len as usize, 8 + 4 + len);
    }

    #[test]
    fn prop_rebuild_is_deterministic(
        kind in any::<u32>(),
        bytes in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let reference = TypedReference::new(kind, bytes);
        prop_assert_eq!(
            build_shortcut_atom(&reference).unwrap(),
            build_shortcut_atom(&reference).unwrap()
        );
    }
}

#[test]
fn test_url_shortcut_written_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let target = OutputFile::shortcut(temp_dir.path().join("example.mov"));
    let reference = TypedReference::new(
        FourCC::from_bytes(*b"URL "),
        b"http://example.com/movie.mov\0".to_vec(),
    );

    let buf = build_shortcut_atom(&reference).unwrap();
    write_file_atomic(&buf, &target).unwrap();

    let data = std::fs::read(target.path()).unwrap();
    assert_eq!(data.len(), 57);
    assert_eq!(be_u32(&data, 0), 57);
    assert_eq!(be_u32(&data, 16), 41);
    assert_eq!(be_u32(&data, 24), 0x5552_4C20);
    assert_eq!(&data[28..57], b"http://example.com/movie.mov\0");
}

#[test]
fn test_overwrite_larger_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = OutputFile::new(temp_dir.path().join("overwrite.mov"));
    std::fs::write(target.path(), vec![0xABu8; 500]).unwrap();

    let b1: Vec<u8> = (0..100).map(|i| (i * 7 % 256) as u8).collect();
    write_file_atomic(&b1, &target).unwrap();

    let data = std::fs::read(target.path()).unwrap();
    assert_eq!(data.len(), 100);
    assert_eq!(data, b1);
}

#[test]
fn test_delete_absent_tolerance() {
    let temp_dir = TempDir::new().unwrap();
    let fresh = OutputFile::new(temp_dir.path().join("fresh.mov"));
    let replaced = OutputFile::new(temp_dir.path().join("replaced.mov"));
    std::fs::write(replaced.path(), b"something else entirely").unwrap();

    let payload = build_shortcut_atom(&TypedReference::url("http://example.com/a.mov")).unwrap();
    write_file_atomic(&payload, &fresh).unwrap();
    write_file_atomic(&payload, &replaced).unwrap();

    assert_eq!(
        std::fs::read(fresh.path()).unwrap(),
        std::fs::read(replaced.path()).unwrap()
    );
}

#[test]
fn test_rewrite_same_target() {
    let temp_dir = TempDir::new().unwrap();
    let target = OutputFile::shortcut(temp_dir.path().join("again.mov"));

    for url in ["http://a.example/1.mov", "http://b.example/two.mov", "x"] {
        let payload = build_shortcut_atom(&TypedReference::url(url)).unwrap();
        write_file_atomic(&payload, &target).unwrap();
        assert_eq!(std::fs::read(target.path()).unwrap(), payload);
    }
}
