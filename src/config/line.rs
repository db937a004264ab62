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


//! Config line parser
//!
//! Splits one substantive config line on `|` into a left and right field.
//! Exactly one delimiter is required.
//!
//! | Shape      | Left field          | Right field                    |
//! |------------|---------------------|--------------------------------|
//! | Credential | username (trimmed)  | password (trimmed)             |
//! | Literal    | hotkey (full parse) | text, kept verbatim            |
//!
//! Trimming only strips the ends of a field; internal whitespace is never
//! collapsed. Literal text is not trimmed at all and may be whitespace.

use tracing::debug;

use crate::config::entry::{ConfigEntry, CredentialPair, Field, Payload, PayloadKind};
use crate::config::error::ParseError;
use crate::core::parser::parse_hotkey;
use crate::core::types::Hotkey;

/// Field delimiter
pub const DELIM: char = '|';

/// Parses entry lines for one document shape
#[derive(Clone, Copy, Debug)]
pub struct LineParser {
    shape: Shape,
}

#[derive(Clone, Copy, Debug)]
enum Shape {
    /// Every credential line triggers on the document hotkey
    Credential(Hotkey),
    Literal,
}

impl LineParser {
    /// Parser for `username|password` lines bound to `hotkey`
    pub fn credential(hotkey: Hotkey) -> Self {
        Self {
            shape: Shape::Credential(hotkey),
        }
    }

    /// Parser for `hotkey|text` lines
    pub fn literal() -> Self {
        Self {
            shape: Shape::Literal,
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self.shape {
            Shape::Credential(_) => PayloadKind::Credential,
            Shape::Literal => PayloadKind::Literal,
        }
    }

    /// Parse one non-blank, non-comment line
    ///
    /// # Arguments
    /// * `line` - 1-based line number, for error messages
    /// * `text` - The line without its terminator
    ///
    /// # Example
    /// ```
    /// use hotkey_autotype::config::line::LineParser;
    /// use hotkey_autotype::config::entry::Payload;
    ///
    /// let entry = LineParser::literal().parse_line(1, "LCtrl+LAlt+0x41|Hello, world")?;
    /// assert_eq!(entry.payload, Payload::Literal("Hello, world".to_string()));
    /// # Ok::<(), hotkey_autotype::config::ParseError>(())
    /// ```
    pub fn parse_line(&self, line: usize, text: &str) -> Result<ConfigEntry, ParseError> {
        let (left, right) = split_fields(line, text)?;

        let entry = match self.shape {
            Shape::Credential(hotkey) => {
                let username = require_field(left.trim(), Field::Username, line, text)?;
                let password = require_field(right.trim(), Field::Password, line, text)?;

                ConfigEntry {
                    line,
                    hotkey,
                    payload: Payload::Credential(CredentialPair { username, password }),
                }
            }
            Shape::Literal => {
                require_field(left.trim(), Field::Hotkey, line, text)?;
                let hotkey =
                    parse_hotkey(left).map_err(|error| ParseError::Hotkey { line, error })?;
                let literal = require_field(right, Field::Text, line, text)?;

                ConfigEntry {
                    line,
                    hotkey,
                    payload: Payload::Literal(literal),
                }
            }
        };

        debug!(line, hotkey = %entry.hotkey, kind = ?self.kind(), "parsed config entry");
        Ok(entry)
    }
}

/// Split on the single delimiter, rejecting zero or several
fn split_fields(line: usize, text: &str) -> Result<(&str, &str), ParseError> {
    let Some((left, right)) = text.split_once(DELIM) else {
        return Err(ParseError::DelimiterMissing {
            line,
            text: text.to_string(),
        });
    };

    if right.contains(DELIM) {
        return Err(ParseError::DelimiterRepeated {
            line,
            text: text.to_string(),
        });
    }

    Ok((left, right))
}

fn require_field(value: &str, field: Field, line: usize, text: &str) -> Result<String, ParseError> {
    if value.is_empty() {
        return Err(ParseError::EmptyField {
            line,
            field,
            text: text.to_string(),
        });
    }

    Ok(value.to_string())
}
