use std::fs;

use cloudboard_engine::{decode_utf8, load_text_file, DecodeError, UploadError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn reads_utf8_text_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, "héllo wörld\nsecond line").unwrap();

    let uploaded = load_text_file(&path).unwrap();
    assert_eq!(uploaded.name, "notes.txt");
    assert_eq!(uploaded.text, "héllo wörld\nsecond line");
}

#[test]
fn strips_utf8_bom() {
    let decoded = decode_utf8(b"\xEF\xBB\xBFabc").unwrap();
    assert_eq!(decoded.text, "abc");
    assert!(decoded.had_bom);
}

#[test]
fn invalid_utf8_is_reported_with_offset() {
    assert_eq!(
        decode_utf8(b"ok \xFF\xFE bytes"),
        Err(DecodeError::InvalidUtf8 { offset: 3 })
    );
    assert_eq!(
        decode_utf8(b"abc\xC3\x28"),
        Err(DecodeError::InvalidUtf8 { offset: 3 })
    );
}

#[test]
fn utf16_files_are_rejected() {
    assert_eq!(
        decode_utf8(b"\xFF\xFEa\x00"),
        Err(DecodeError::UnsupportedEncoding {
            encoding: "UTF-16LE".to_string()
        })
    );
}

#[test]
fn binary_upload_is_a_decode_failure() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("image.txt");
    fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xFF]).unwrap();

    match load_text_file(&path) {
        Err(UploadError::Decode(DecodeError::InvalidUtf8 { offset })) => assert_eq!(offset, 0),
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[test]
fn only_txt_files_are_accepted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.md");
    fs::write(&path, "text").unwrap();
    assert!(matches!(
        load_text_file(&path),
        Err(UploadError::UnsupportedFileType)
    ));

    let upper = temp.path().join("NOTES.TXT");
    fs::write(&upper, "text").unwrap();
    assert_eq!(load_text_file(&upper).unwrap().text, "text");
}

#[test]
fn missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        load_text_file(&temp.path().join("absent.txt")),
        Err(UploadError::NotFound)
    ));
}
