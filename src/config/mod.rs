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


//! Configuration file handling
//!
//! This module turns config files into validated `ConfigDocument`s and
//! back. Key features:
//!
//! - **Encoding detection**: UTF-8 (with or without BOM) and UTF-16LE
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Overwriting a file first saves a timestamped copy
//! - **Fail-fast parsing**: Any bad line rejects the whole file
//! - **Atomic reloads**: `ConfigStore` swaps whole snapshots
//!
//! # Example
//!
//! ```no_run
//! use hotkey_autotype::config::{ConfigManager, PayloadKind, TextEncoding};
//!
//! let manager = ConfigManager::new("/home/user/autotype.txt".into(), TextEncoding::Auto);
//! let document = manager.load(PayloadKind::Literal)?;
//! println!("{} entries", document.entries().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod entry;
pub mod error;
pub mod line;
pub mod store;
pub mod watcher;

pub use document::ConfigDocument;
pub use entry::{ConfigEntry, CredentialPair, EntrySummary, Field, Payload, PayloadKind};
pub use error::{ConfigError, ParseError};
pub use store::{ConfigStore, Dispatcher, Fired};
pub use watcher::ConfigWatcher;

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use std::{
    fs,
    io::{ErrorKind as IoErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Text encoding of a config file on disk
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextEncoding {
    /// UTF-16LE if the file starts with `FF FE`, otherwise UTF-8
    #[default]
    Auto,
    Utf8,
    /// Written with a BOM so `Auto` detects it on the next read
    Utf16Le,
}

impl TextEncoding {
    fn name(self) -> &'static str {
        match self {
            TextEncoding::Auto => "auto",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
        }
    }

    /// Concrete encoding for `bytes`
    fn resolve(self, bytes: &[u8]) -> TextEncoding {
        match self {
            TextEncoding::Auto if bytes.starts_with(UTF16LE_BOM) => TextEncoding::Utf16Le,
            TextEncoding::Auto => TextEncoding::Utf8,
            other => other,
        }
    }
}

/// Decode raw file bytes into text, dropping any byte-order mark
///
/// Returns the reason as a string on failure; callers attach the path.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String, String> {
    match encoding.resolve(bytes) {
        TextEncoding::Utf16Le => {
            let body = bytes.strip_prefix(UTF16LE_BOM).unwrap_or(bytes);
            if body.len() % 2 != 0 {
                return Err(format!("odd byte length {}", body.len()));
            }

            let units: Vec<u16> = body
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();

            String::from_utf16(&units).map_err(|e| e.to_string())
        }
        _ => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            String::from_utf8(body.to_vec()).map_err(|e| e.to_string())
        }
    }
}

/// Encode text for writing; `Auto` writes plain UTF-8
pub fn encode_text(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf16Le => {
            let mut bytes = UTF16LE_BOM.to_vec();
            bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
            bytes
        }
        TextEncoding::Auto | TextEncoding::Utf8 => text.as_bytes().to_vec(),
    }
}

/// Reads, writes and parses one config file.
///
/// This is the crate's only file-system boundary for configs. Writes are
/// atomic and back up any existing file first.
#[derive(Clone, Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    encoding: TextEncoding,
    backup_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `config_path`.
    ///
    /// Backups go to a `backups/` directory next to the file, created on
    /// first write.
    pub fn new(config_path: PathBuf, encoding: TextEncoding) -> Self {
        let backup_dir = config_path
            .parent()
            .map(|parent| parent.join("backups"))
            .unwrap_or_else(|| PathBuf::from("backups"));

        Self {
            config_path,
            encoding,
            backup_dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Reads and decodes the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist and
    /// `ConfigError::Decode` if its bytes are invalid for the encoding.
    pub fn read_text(&self) -> Result<String, ConfigError> {
        let bytes = fs::read(&self.config_path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => ConfigError::NotFound(self.config_path.clone()),
            _ => ConfigError::Io(e),
        })?;

        debug!(path = %self.config_path.display(), bytes = bytes.len(), "read config");

        decode_text(&bytes, self.encoding).map_err(|reason| ConfigError::Decode {
            path: self.config_path.clone(),
            encoding: self.encoding.resolve(&bytes).name(),
            reason,
        })
    }

    /// Writes `text` atomically, backing up any existing file first.
    ///
    /// Returns the backup path when one was created.
    pub fn write_text(&self, text: &str) -> Result<Option<PathBuf>, ConfigError> {
        let backup = if self.config_path.exists() {
            Some(self.create_timestamped_backup()?)
        } else {
            None
        };

        let mut file = AtomicWriteFile::options()
            .open(&self.config_path)
            .map_err(|e| {
                ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(&encode_text(text, self.encoding))
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        info!(path = %self.config_path.display(), "config written");
        Ok(backup)
    }

    /// Reads and parses the config file.
    pub fn load(&self, kind: PayloadKind) -> Result<ConfigDocument, ConfigError> {
        let text = self.read_text()?;

        ConfigDocument::parse(&text, kind).map_err(|error| ConfigError::Parse {
            path: self.config_path.clone(),
            error,
        })
    }

    fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        if !self.backup_dir.exists() {
            fs::create_dir_all(&self.backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(self.backup_dir.clone()))?;
        }

        // Generate timestamp in YYYY-MM-DD_HHMMSS format
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .config_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config".to_string());

        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", original_name, timestamp));

        // Raw copy keeps the original encoding
        fs::copy(&self.config_path, &backup_path)?;

        debug!(backup = %backup_path.display(), "created config backup");
        Ok(backup_path)
    }
}

#[cfg(test)]
mod tests;
