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


//! src/core/types.rs
//!
//! Core type definitions for hotkey handling
//!
//! This module defines the value types every other module builds on:
//! - `ModifierFlags`: Bitmask of the six side-specific modifier keys
//! - `KeyCode`: A virtual-key code in the range 0x01..=0xFE
//! - `Hotkey`: A non-empty modifier set plus a key code
//!
//! Left and right variants of a modifier are distinct flags and are never
//! folded together, so `LShift` and `RShift` may both be set at once.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::error::HotkeyError;
use crate::core::modifiers::Modifier;
use crate::core::vk;

/// Smallest accepted virtual-key code (0x00 is reserved)
pub const MIN_KEY: u8 = 0x01;

/// Largest accepted virtual-key code (0xFF is reserved)
pub const MAX_KEY: u8 = 0xFE;

bitflags! {
    /// Side-specific modifier keys held for a hotkey.
    ///
    /// Flags combine with `|`. An empty set is a valid intermediate value
    /// while parsing but never a valid final hotkey.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ModifierFlags: u8 {
        /// Left Shift (LShift)
        const SHIFT_LEFT = 0x01;
        /// Right Shift (RShift)
        const SHIFT_RIGHT = 0x02;
        /// Left Control (LCtrl)
        const CTRL_LEFT = 0x04;
        /// Right Control (RCtrl)
        const CTRL_RIGHT = 0x08;
        /// Left Alt (LAlt)
        const ALT_LEFT = 0x10;
        /// Right Alt (RAlt)
        const ALT_RIGHT = 0x20;
    }
}

impl ModifierFlags {
    /// Individual modifiers contained in this set, in display order
    /// (Ctrl, Shift, Alt; left before right).
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::DISPLAY_ORDER
            .into_iter()
            .filter(move |m| self.contains(m.flag()))
    }
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self
            .modifiers()
            .map(Modifier::token)
            .collect::<Vec<_>>()
            .join("+");
        write!(f, "{}", tokens)
    }
}

/// A virtual-key code within `MIN_KEY..=MAX_KEY`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct KeyCode(u8);

impl KeyCode {
    /// Returns `None` when `value` lies outside `MIN_KEY..=MAX_KEY`.
    pub fn new(value: u32) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|code| (MIN_KEY..=MAX_KEY).contains(code))
            .map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Human-readable key name (e.g. "P", "F1"), if the code has one
    pub fn name(self) -> Option<&'static str> {
        vk::key_name(self.0)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// A complete hotkey: at least one modifier plus a key code
///
/// The invariant `!modifiers.is_empty()` is enforced by `Hotkey::new`,
/// which is the only way to build one.
///
/// # Example
/// ```
/// use hotkey_autotype::core::{Hotkey, KeyCode, ModifierFlags};
///
/// let key = KeyCode::new(0x50).unwrap();
/// let hotkey = Hotkey::new(ModifierFlags::CTRL_LEFT | ModifierFlags::ALT_LEFT, key).unwrap();
/// assert_eq!(hotkey.to_string(), "LCtrl+LAlt+0x50");
/// assert_eq!(hotkey.describe(), "LCtrl+LAlt+P");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Hotkey {
    modifiers: ModifierFlags,
    key: KeyCode,
}

impl Hotkey {
    /// Creates a hotkey, rejecting an empty modifier set
    pub fn new(modifiers: ModifierFlags, key: KeyCode) -> Result<Self, HotkeyError> {
        if modifiers.is_empty() {
            return Err(HotkeyError::ZeroModifiers);
        }

        Ok(Self { modifiers, key })
    }

    pub fn modifiers(&self) -> ModifierFlags {
        self.modifiers
    }

    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// Friendly rendering using the key name where one is known
    pub fn describe(&self) -> String {
        match self.key.name() {
            Some(name) => format!("{}+{}", self.modifiers, name),
            None => self.to_string(),
        }
    }
}

/// Canonical form, re-parseable by `parse_hotkey`
impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.modifiers, self.key)
    }
}

impl Serialize for Hotkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
