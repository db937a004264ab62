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


//! Config entry types
//!
//! A config file comes in one of two shapes, chosen once at load time:
//! - **Credential vault:** first line is a hotkey, then `username|password`
//! - **Literal text:** every line is `hotkey|text to type`
//!
//! Both produce `ConfigEntry` values; only the payload differs.

use serde::Serialize;
use std::fmt;

use crate::core::keystroke::{self, KeystrokeEvent};
use crate::core::types::Hotkey;

/// Which of the two config shapes a document uses
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    /// Document hotkey on the first line, `username|password` after it
    Credential,
    /// `hotkey|text` on every line
    Literal,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Credential => write!(f, "username and password"),
            PayloadKind::Literal => write!(f, "shortcut key and text"),
        }
    }
}

/// Field of a config line, named in `EmptyField` errors
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Username,
    Password,
    Hotkey,
    Text,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => write!(f, "username"),
            Field::Password => write!(f, "password"),
            Field::Hotkey => write!(f, "shortcut key"),
            Field::Text => write!(f, "text"),
        }
    }
}

/// A stored username and password, both non-empty
#[derive(Clone, Eq, PartialEq)]
pub struct CredentialPair {
    pub username: String,
    pub password: String,
}

/// Never prints the password
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What a config line asks to be typed
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    Credential(CredentialPair),
    Literal(String),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Credential(_) => PayloadKind::Credential,
            Payload::Literal(_) => PayloadKind::Literal,
        }
    }
}

/// One parsed, validated config line
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigEntry {
    /// 1-based line number in the source text
    pub line: usize,

    /// Hotkey that triggers the entry (the document hotkey for credentials)
    pub hotkey: Hotkey,

    pub payload: Payload,
}

impl ConfigEntry {
    /// Keystrokes for a literal payload, computed on demand
    ///
    /// Credential entries return `None`; which field to type is decided by
    /// the host when the user picks an entry.
    pub fn literal_keystrokes(&self) -> Option<Vec<KeystrokeEvent>> {
        match &self.payload {
            Payload::Literal(text) => Some(keystroke::encode(text)),
            Payload::Credential(_) => None,
        }
    }

    /// Display-safe view of the entry (passwords masked)
    pub fn summary(&self) -> EntrySummary {
        let (kind, label) = match &self.payload {
            Payload::Credential(pair) => (PayloadKind::Credential, pair.username.clone()),
            Payload::Literal(text) => (PayloadKind::Literal, text.clone()),
        };

        EntrySummary {
            line: self.line,
            hotkey: self.hotkey,
            kind,
            label,
        }
    }
}

/// Serializable, secret-free description of an entry
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntrySummary {
    pub line: usize,
    pub hotkey: Hotkey,
    pub kind: PayloadKind,
    /// Username for credentials, the full text for literals
    pub label: String,
}
