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


//! src/core/modifiers.rs
//!
//! Modifier token table
//!
//! Static, bidirectional mapping between the six canonical modifier
//! spellings and their flags. Lookup is ASCII case-insensitive.
//!
//! Bare family names (`Shift`, `Ctrl`, `Alt`) are deliberately absent from
//! the canonical set. They are reported as `ModifierLookup::Ambiguous` so
//! the caller can suggest the left/right pair instead of a generic error.

use std::fmt;

use crate::core::types::ModifierFlags;

/// One side-specific modifier key
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Modifier {
    LShift,
    RShift,
    LCtrl,
    RCtrl,
    LAlt,
    RAlt,
}

/// A modifier family with a left and a right key
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModifierFamily {
    Shift,
    Ctrl,
    Alt,
}

/// Result of looking a token up in the modifier table
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModifierLookup {
    /// One of the six canonical spellings
    Canonical(Modifier),
    /// A bare family name such as `Ctrl`
    Ambiguous(ModifierFamily),
    /// Anything else
    Unknown,
}

impl Modifier {
    /// All modifiers, in the order `Hotkey` renders them
    pub const DISPLAY_ORDER: [Modifier; 6] = [
        Modifier::LCtrl,
        Modifier::RCtrl,
        Modifier::LShift,
        Modifier::RShift,
        Modifier::LAlt,
        Modifier::RAlt,
    ];

    /// Canonical spelling used in config files
    pub fn token(self) -> &'static str {
        match self {
            Modifier::LShift => "LShift",
            Modifier::RShift => "RShift",
            Modifier::LCtrl => "LCtrl",
            Modifier::RCtrl => "RCtrl",
            Modifier::LAlt => "LAlt",
            Modifier::RAlt => "RAlt",
        }
    }

    pub fn flag(self) -> ModifierFlags {
        match self {
            Modifier::LShift => ModifierFlags::SHIFT_LEFT,
            Modifier::RShift => ModifierFlags::SHIFT_RIGHT,
            Modifier::LCtrl => ModifierFlags::CTRL_LEFT,
            Modifier::RCtrl => ModifierFlags::CTRL_RIGHT,
            Modifier::LAlt => ModifierFlags::ALT_LEFT,
            Modifier::RAlt => ModifierFlags::ALT_RIGHT,
        }
    }

    pub fn family(self) -> ModifierFamily {
        match self {
            Modifier::LShift | Modifier::RShift => ModifierFamily::Shift,
            Modifier::LCtrl | Modifier::RCtrl => ModifierFamily::Ctrl,
            Modifier::LAlt | Modifier::RAlt => ModifierFamily::Alt,
        }
    }

    /// Side-specific Win32 virtual-key code (VK_LSHIFT .. VK_RMENU)
    pub fn virtual_key(self) -> u8 {
        match self {
            Modifier::LShift => 0xA0,
            Modifier::RShift => 0xA1,
            Modifier::LCtrl => 0xA2,
            Modifier::RCtrl => 0xA3,
            Modifier::LAlt => 0xA4,
            Modifier::RAlt => 0xA5,
        }
    }

    /// Reverse of `virtual_key`
    pub fn from_virtual_key(code: u8) -> Option<Self> {
        Self::DISPLAY_ORDER
            .into_iter()
            .find(|m| m.virtual_key() == code)
    }

    /// Reverse of `flag`; `None` unless exactly one flag is set
    pub fn from_flag(flag: ModifierFlags) -> Option<Self> {
        Self::DISPLAY_ORDER.into_iter().find(|m| m.flag() == flag)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl ModifierFamily {
    /// Bare family spelling, e.g. "Ctrl"
    pub fn name(self) -> &'static str {
        match self {
            ModifierFamily::Shift => "Shift",
            ModifierFamily::Ctrl => "Ctrl",
            ModifierFamily::Alt => "Alt",
        }
    }

    pub fn left(self) -> Modifier {
        match self {
            ModifierFamily::Shift => Modifier::LShift,
            ModifierFamily::Ctrl => Modifier::LCtrl,
            ModifierFamily::Alt => Modifier::LAlt,
        }
    }

    pub fn right(self) -> Modifier {
        match self {
            ModifierFamily::Shift => Modifier::RShift,
            ModifierFamily::Ctrl => Modifier::RCtrl,
            ModifierFamily::Alt => Modifier::RAlt,
        }
    }

    /// Best-effort guess at the family a misspelt token was aiming for
    ///
    /// Recognises longer spellings users commonly type, such as
    /// `LeftShift`, `Control` or `RMenu`. Returns `None` when the token
    /// gives no honest hint.
    pub fn infer(token: &str) -> Option<Self> {
        let lower = token.to_ascii_lowercase();

        if lower.contains("shift") {
            Some(ModifierFamily::Shift)
        } else if lower.contains("ctrl") || lower.contains("control") {
            Some(ModifierFamily::Ctrl)
        } else if lower.contains("alt") || lower.contains("menu") {
            Some(ModifierFamily::Alt)
        } else {
            None
        }
    }
}

impl fmt::Display for ModifierFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const FAMILIES: [ModifierFamily; 3] = [
    ModifierFamily::Shift,
    ModifierFamily::Ctrl,
    ModifierFamily::Alt,
];

/// Looks up a single (already trimmed) modifier token
pub fn lookup(token: &str) -> ModifierLookup {
    if let Some(modifier) = Modifier::DISPLAY_ORDER
        .into_iter()
        .find(|m| m.token().eq_ignore_ascii_case(token))
    {
        return ModifierLookup::Canonical(modifier);
    }

    match FAMILIES
        .into_iter()
        .find(|family| family.name().eq_ignore_ascii_case(token))
    {
        Some(family) => ModifierLookup::Ambiguous(family),
        None => ModifierLookup::Unknown,
    }
}
