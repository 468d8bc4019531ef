//! Tests for bounded signature reading

use std::fs;
use std::path::PathBuf;

use crate::format::matcher::{read_signature, MAX_SIGNATURE_LEN};

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("formatkit_matcher_{}", name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_signature_read_is_bounded() {
    let path = temp_file("large.bin", &vec![0xABu8; 4096]);

    let prefix = read_signature(&path).unwrap();
    assert_eq!(prefix.len(), MAX_SIGNATURE_LEN);
    assert!(prefix.iter().all(|&b| b == 0xAB));
}

#[test]
fn test_signature_read_short_file() {
    let path = temp_file("short.bin", b"abc");

    let prefix = read_signature(&path).unwrap();
    assert_eq!(prefix, b"abc");
}

#[test]
fn test_signature_read_empty_file() {
    let path = temp_file("empty.bin", b"");

    let prefix = read_signature(&path).unwrap();
    assert!(prefix.is_empty());
}

#[test]
fn test_signature_read_missing_file() {
    let path = std::env::temp_dir().join("formatkit_matcher_does_not_exist.bin");
    let _ = fs::remove_file(&path);

    assert!(read_signature(&path).is_err());
}
