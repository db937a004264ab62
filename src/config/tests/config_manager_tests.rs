// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crate::config::{
    decode_text, encode_text, ConfigError, ConfigManager, PayloadKind, TextEncoding,
};
use crate::core::error::ErrorKind;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper: Creates a temporary config file for testing.
fn create_test_config(bytes: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("autotype.txt");
    fs::write(&config_path, bytes).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_decode_utf8_with_and_without_bom() {
    assert_eq!(decode_text(b"abc", TextEncoding::Auto).unwrap(), "abc");
    assert_eq!(
        decode_text(b"\xEF\xBB\xBFabc", TextEncoding::Auto).unwrap(),
        "abc"
    );
    assert_eq!(
        decode_text(b"\xEF\xBB\xBFabc", TextEncoding::Utf8).unwrap(),
        "abc"
    );
}

#[test]
fn test_decode_utf16le() {
    let bytes = encode_text("LCtrl+0x41|ä", TextEncoding::Utf16Le);
    assert_eq!(&bytes[..2], &[0xFF, 0xFE]);

    assert_eq!(
        decode_text(&bytes, TextEncoding::Auto).unwrap(),
        "LCtrl+0x41|ä"
    );
    assert_eq!(
        decode_text(&bytes, TextEncoding::Utf16Le).unwrap(),
        "LCtrl+0x41|ä"
    );
}

#[test]
fn test_decode_errors() {
    assert!(decode_text(b"\xFF\xFEa", TextEncoding::Auto).is_err());
    assert!(decode_text(b"\xC3\x28", TextEncoding::Utf8).is_err());
}

#[test]
fn test_read_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(temp_dir.path().join("missing.txt"), TextEncoding::Auto);

    assert!(matches!(manager.read_text(), Err(ConfigError::NotFound(_))));
}

#[test]
fn test_read_invalid_bytes_reports_decode_error() {
    let (_temp_dir, config_path) = create_test_config(b"\xC3\x28");
    let manager = ConfigManager::new(config_path, TextEncoding::Utf8);

    assert!(matches!(
        manager.read_text(),
        Err(ConfigError::Decode { encoding: "UTF-8", .. })
    ));
}

#[test]
fn test_load_literal_config() {
    let (_temp_dir, config_path) =
        create_test_config(b"# snippets\r\nLCtrl+LAlt+0x53|Kind regards\r\n");
    let manager = ConfigManager::new(config_path, TextEncoding::Auto);

    let doc = manager.load(PayloadKind::Literal).unwrap();
    assert_eq!(doc.entries().len(), 1);
}

#[test]
fn test_load_wraps_parse_errors() {
    let (_temp_dir, config_path) = create_test_config(b"# empty\n");
    let manager = ConfigManager::new(config_path.clone(), TextEncoding::Auto);

    match manager.load(PayloadKind::Credential) {
        Err(ConfigError::Parse { path, error }) => {
            assert_eq!(path, config_path);
            assert_eq!(error.kind(), ErrorKind::EmptyDocument);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_write_new_file_creates_no_backup() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("new.txt");
    let manager = ConfigManager::new(config_path.clone(), TextEncoding::Utf8);

    let backup = manager.write_text("LCtrl+0x41|hi\n").unwrap();

    assert!(backup.is_none());
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "LCtrl+0x41|hi\n");
    assert!(!manager.backup_dir().exists());
}

#[test]
fn test_write_existing_file_creates_backup() {
    let (_temp_dir, config_path) = create_test_config(b"LCtrl+0x41|old\n");
    let manager = ConfigManager::new(config_path.clone(), TextEncoding::Utf8);

    let backup_path = manager.write_text("LCtrl+0x41|new\n").unwrap().unwrap();

    // Verify: Backup is in the backup directory
    assert_eq!(backup_path.parent().unwrap(), manager.backup_dir());

    // Verify: Filename format "autotype.txt.YYYY-MM-DD_HHMMSS"
    let filename = backup_path.file_name().unwrap().to_str().unwrap();
    let timestamp = filename.strip_prefix("autotype.txt.").unwrap();
    let parsed = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d_%H%M%S");
    assert!(parsed.is_ok(), "Timestamp should be valid: {}", timestamp);

    // Verify: Backup holds the old content, config the new
    assert_eq!(fs::read_to_string(&backup_path).unwrap(), "LCtrl+0x41|old\n");
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "LCtrl+0x41|new\n");
}

#[test]
fn test_utf16_write_then_auto_read() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wide.txt");

    let writer = ConfigManager::new(config_path.clone(), TextEncoding::Utf16Le);
    writer.write_text("LCtrl+0x41|日本語\n").unwrap();

    let reader = ConfigManager::new(config_path, TextEncoding::Auto);
    assert_eq!(reader.read_text().unwrap(), "LCtrl+0x41|日本語\n");
}
