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


//! Configuration error types
//!
//! - `ParseError`: a config line or document was rejected. Every variant
//!   carries enough context (1-based line number, original line text) to
//!   be shown to the user as-is.
//! - `ConfigError`: anything that can go wrong loading or saving a config
//!   file, including a `ParseError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::entry::{Field, PayloadKind};
use crate::config::line::DELIM;
use crate::core::error::{ErrorKind, HotkeyParseError};

/// Errors raised while parsing config text
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    #[error("Line #{line}: Failed to find delim [{delim}]: [{text}]", delim = DELIM)]
    DelimiterMissing { line: usize, text: String },

    #[error("Line #{line}: Found multiple delim [{delim}]: [{text}]", delim = DELIM)]
    DelimiterRepeated { line: usize, text: String },

    #[error("Line #{line}: Empty {field}: [{text}]")]
    EmptyField {
        line: usize,
        field: Field,
        text: String,
    },

    #[error("Line #{line}: {error}")]
    Hotkey {
        line: usize,
        error: HotkeyParseError,
    },

    /// The first substantive line of a credential config is not a hotkey
    #[error(
        "Line #{line}: Missing shortcut key: First line must be a shortcut key, e.g., [LCtrl+LShift+LAlt+0x50]"
    )]
    MissingDocumentHotkey { line: usize },

    #[error("Found zero {0} entries")]
    EmptyDocument(PayloadKind),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::DelimiterMissing { .. } => ErrorKind::DelimiterMissing,
            ParseError::DelimiterRepeated { .. } => ErrorKind::DelimiterRepeated,
            ParseError::EmptyField { .. } => ErrorKind::EmptyField,
            ParseError::Hotkey { error, .. } => error.kind(),
            ParseError::MissingDocumentHotkey { .. } => ErrorKind::MissingDocumentHotkey,
            ParseError::EmptyDocument(_) => ErrorKind::EmptyDocument,
        }
    }

    /// 1-based line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::DelimiterMissing { line, .. }
            | ParseError::DelimiterRepeated { line, .. }
            | ParseError::EmptyField { line, .. }
            | ParseError::Hotkey { line, .. }
            | ParseError::MissingDocumentHotkey { line } => Some(*line),
            ParseError::EmptyDocument(_) => None,
        }
    }
}

/// Errors that can occur loading or saving a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Config file bytes are not valid in the requested encoding.
    #[error("Failed to decode {path} as {encoding}: {reason}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
        reason: String,
    },

    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Config text was read but rejected.
    #[error("Invalid config {path}: {error}")]
    Parse { path: PathBuf, error: ParseError },

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
