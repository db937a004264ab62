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


//! src/config/document.rs
//!
//! Whole-file config parser
//!
//! Handles:
//! - `\n` and `\r\n` line endings
//! - Blank lines and `#` comments (after leading whitespace)
//! - The document hotkey on the first substantive line (credential shape)
//! - Line numbers for error reporting
//!
//! Parsing is fail-fast: the first bad line aborts the whole document and
//! no partially parsed document is ever returned.

use tracing::{debug, trace};

use crate::config::entry::{ConfigEntry, PayloadKind};
use crate::config::error::ParseError;
use crate::config::line::{LineParser, DELIM};
use crate::core::conflict::{Conflict, ConflictDetector};
use crate::core::parser::parse_hotkey;
use crate::core::types::Hotkey;

/// Comment marker, recognised after leading whitespace
const BOM: char = '\u{feff}';

pub const COMMENT: char = '#';

/// An immutable, validated config
///
/// Built once from a snapshot of file text; never edited afterwards.
/// Reloading builds a new document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigDocument {
    kind: PayloadKind,
    hotkey: Option<Hotkey>,
    entries: Vec<ConfigEntry>,
}

impl ConfigDocument {
    /// Parse complete config text
    ///
    /// # Example
    /// ```
    /// use hotkey_autotype::config::{ConfigDocument, PayloadKind};
    ///
    /// let text = "# vault\nLCtrl+LShift+LAlt+0x50\nalice|s3cret\nbob|hunter2\n";
    /// let doc = ConfigDocument::parse(text, PayloadKind::Credential)?;
    /// assert_eq!(doc.entries().len(), 2);
    /// assert_eq!(doc.hotkey().unwrap().to_string(), "LCtrl+LShift+LAlt+0x50");
    /// # Ok::<(), hotkey_autotype::config::ParseError>(())
    /// ```
    pub fn parse(text: &str, kind: PayloadKind) -> Result<Self, ParseError> {
        let mut hotkey = None;
        let mut entries = Vec::new();
        let mut parser = match kind {
            PayloadKind::Literal => Some(LineParser::literal()),
            PayloadKind::Credential => None,
        };

        // Text handed over without going through `decode_text` may still
        // carry a byte-order mark
        let text = text.strip_prefix(BOM).unwrap_or(text);

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1; // Human-readable numbers start at 1

            // Skip empty lines and comments
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                trace!(line, "skipping blank or comment line");
                continue;
            }

            match parser {
                Some(line_parser) => entries.push(line_parser.parse_line(line, raw)?),
                None => {
                    // Credential shape: first substantive line is the hotkey.
                    // An entry here means the hotkey line was left out.
                    if trimmed.contains(DELIM) {
                        return Err(ParseError::MissingDocumentHotkey { line });
                    }

                    let document_hotkey =
                        parse_hotkey(raw).map_err(|error| ParseError::Hotkey { line, error })?;
                    debug!(line, hotkey = %document_hotkey, "parsed document hotkey");

                    hotkey = Some(document_hotkey);
                    parser = Some(LineParser::credential(document_hotkey));
                }
            }
        }

        if entries.is_empty() {
            return Err(ParseError::EmptyDocument(kind));
        }

        debug!(entries = entries.len(), ?kind, "config document parsed");

        Ok(Self {
            kind,
            hotkey,
            entries,
        })
    }

    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Document-wide hotkey; `Some` exactly for credential documents
    pub fn hotkey(&self) -> Option<Hotkey> {
        self.hotkey
    }

    /// Entries in file order
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// First entry bound to `hotkey`, in file order
    pub fn find(&self, hotkey: &Hotkey) -> Option<&ConfigEntry> {
        self.entries.iter().find(|entry| entry.hotkey == *hotkey)
    }

    /// Distinct hotkeys the host should register, in first-use order
    pub fn hotkeys(&self) -> Vec<Hotkey> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.hotkey) {
                seen.push(entry.hotkey);
            }
        }
        seen
    }

    /// Hotkeys bound on more than one line (literal shape only)
    ///
    /// Credential entries all share the document hotkey by construction,
    /// so they never count as conflicts.
    pub fn conflicts(&self) -> Vec<Conflict> {
        if self.kind == PayloadKind::Credential {
            return Vec::new();
        }

        let mut detector = ConflictDetector::new();
        for entry in &self.entries {
            detector.add_binding(entry.hotkey, entry.line);
        }

        detector.find_conflicts()
    }
}
