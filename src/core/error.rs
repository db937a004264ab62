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


//! Hotkey error types
//!
//! `HotkeyError` describes why one hotkey specification was rejected.
//! `HotkeyParseError` pairs it with the full original specification, which
//! is what ends up in front of the user.
//!
//! `ErrorKind` is the machine-readable classification shared by every
//! parse error in the crate, including the config-level ones.

use thiserror::Error;

use crate::core::modifiers::{Modifier, ModifierFamily};
use crate::core::types::{MAX_KEY, MIN_KEY};

/// Machine-readable classification of configuration errors
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    UnknownModifierToken,
    AmbiguousModifierFamily,
    ZeroModifiers,
    MalformedKeyCode,
    KeyCodeOutOfRange,
    DelimiterMissing,
    DelimiterRepeated,
    EmptyField,
    MissingDocumentHotkey,
    EmptyDocument,
}

/// Why a single hotkey specification was rejected
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HotkeyError {
    /// Bare family name such as `Ctrl`
    #[error(
        "Shortcut key modifier [{token}] is not supported: Please use [{}] or [{}]",
        .family.left(),
        .family.right()
    )]
    AmbiguousModifier {
        token: String,
        family: ModifierFamily,
    },

    /// Token matches neither a canonical spelling nor a family name
    #[error(
        "Shortcut key modifier [{token}] is not supported: {}",
        unknown_modifier_hint(.suggestion)
    )]
    UnknownModifier {
        token: String,
        suggestion: Option<ModifierFamily>,
    },

    #[error("Zero key modifiers found, e.g., [LCtrl+]")]
    ZeroModifiers,

    #[error("Failed to parse virtual key code [{token}]: Expected hexadecimal integer, e.g., 0x50")]
    MalformedKeyCode { token: String },

    /// `hex` holds the significant digits, upper-cased
    #[error(
        "Invalid virtual key code [{token}]->0x{hex}: Min: 0x{min:02X}, Max: 0x{max:02X}",
        min = MIN_KEY,
        max = MAX_KEY
    )]
    KeyCodeOutOfRange { token: String, hex: String },
}

fn unknown_modifier_hint(suggestion: &Option<ModifierFamily>) -> String {
    match suggestion {
        Some(family) => format!("Please use [{}] or [{}]", family.left(), family.right()),
        None => {
            let expected = Modifier::DISPLAY_ORDER
                .iter()
                .map(|m| format!("[{}]", m))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Unsupported modifier, expected one of {}", expected)
        }
    }
}

impl HotkeyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HotkeyError::AmbiguousModifier { .. } => ErrorKind::AmbiguousModifierFamily,
            HotkeyError::UnknownModifier { .. } => ErrorKind::UnknownModifierToken,
            HotkeyError::ZeroModifiers => ErrorKind::ZeroModifiers,
            HotkeyError::MalformedKeyCode { .. } => ErrorKind::MalformedKeyCode,
            HotkeyError::KeyCodeOutOfRange { .. } => ErrorKind::KeyCodeOutOfRange,
        }
    }
}

/// A rejected hotkey specification, quoted in full
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Failed to parse shortcut key [{spec}]: {reason}")]
pub struct HotkeyParseError {
    /// The original, untrimmed specification
    pub spec: String,
    pub reason: HotkeyError,
}

impl HotkeyParseError {
    pub fn kind(&self) -> ErrorKind {
        self.reason.kind()
    }
}
