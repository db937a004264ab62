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


//! src/core/parser.rs
//!
//! Hotkey specification parser
//!
//! Grammar (ASCII case-insensitive, whitespace around `+` ignored):
//!
//! ```text
//! hotkey   := modifier ('+' modifier)* '+' keycode
//! modifier := ('L' | 'R') ('Shift' | 'Ctrl' | 'Alt')
//! keycode  := ('0x' | '0X') hexdigit+
//! ```
//!
//! # Evaluation order
//! 1. Split on `+` and trim every token
//! 2. Resolve every token but the last as a modifier, left to right
//! 3. Reject an empty modifier set
//! 4. Parse the last token as a hexadecimal key code (nom)
//! 5. Range-check the key code against `MIN_KEY..=MAX_KEY`
//!
//! The first failing step wins, so `"0xZZ"` reports zero modifiers rather
//! than a malformed key code.

use nom::{
    bytes::complete::tag_no_case,
    character::complete::hex_digit1,
    combinator::all_consuming,
    sequence::preceded,
    IResult, Parser,
};

use crate::core::error::{HotkeyError, HotkeyParseError};
use crate::core::modifiers::{self, ModifierFamily, ModifierLookup};
use crate::core::types::{Hotkey, KeyCode, ModifierFlags};

/// Separator between modifier and key-code tokens
pub const TOKEN_SEPARATOR: char = '+';

/// Parse a complete hotkey specification
///
/// # Example
/// ```
/// use hotkey_autotype::core::{parser::parse_hotkey, ModifierFlags};
///
/// let hotkey = parse_hotkey("LCtrl+LShift+LAlt+0x50")?;
/// assert_eq!(
///     hotkey.modifiers(),
///     ModifierFlags::CTRL_LEFT | ModifierFlags::SHIFT_LEFT | ModifierFlags::ALT_LEFT
/// );
/// assert_eq!(hotkey.key().value(), 0x50);
/// # Ok::<(), hotkey_autotype::core::HotkeyParseError>(())
/// ```
pub fn parse_hotkey(spec: &str) -> Result<Hotkey, HotkeyParseError> {
    parse_tokens(spec).map_err(|reason| HotkeyParseError {
        spec: spec.to_string(),
        reason,
    })
}

fn parse_tokens(spec: &str) -> Result<Hotkey, HotkeyError> {
    let tokens: Vec<&str> = spec.split(TOKEN_SEPARATOR).map(str::trim).collect();

    // `split` always yields at least one token
    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(HotkeyError::ZeroModifiers);
    };

    let mut modifiers = ModifierFlags::empty();
    for token in modifier_tokens {
        modifiers |= parse_modifier(token)?;
    }

    if modifiers.is_empty() {
        return Err(HotkeyError::ZeroModifiers);
    }

    let key = parse_key_code(key_token)?;

    Hotkey::new(modifiers, key)
}

/// Resolve one trimmed modifier token to its flag
///
/// Repeating a modifier is harmless since flags are OR-ed together.
pub fn parse_modifier(token: &str) -> Result<ModifierFlags, HotkeyError> {
    match modifiers::lookup(token) {
        ModifierLookup::Canonical(modifier) => Ok(modifier.flag()),
        ModifierLookup::Ambiguous(family) => Err(HotkeyError::AmbiguousModifier {
            token: token.to_string(),
            family,
        }),
        ModifierLookup::Unknown => Err(HotkeyError::UnknownModifier {
            token: token.to_string(),
            suggestion: ModifierFamily::infer(token),
        }),
    }
}

/// `0x` / `0X` prefix followed by at least one hex digit
fn hex_literal(input: &str) -> IResult<&str, &str> {
    preceded(tag_no_case("0x"), hex_digit1).parse(input)
}

/// Parse and range-check a trimmed key-code token
pub fn parse_key_code(token: &str) -> Result<KeyCode, HotkeyError> {
    let digits = match all_consuming(hex_literal).parse(token) {
        Ok((_, digits)) => digits,
        Err(_) => {
            return Err(HotkeyError::MalformedKeyCode {
                token: token.to_string(),
            })
        }
    };

    // Keep the significant digits so arbitrarily long literals still
    // produce a faithful range error instead of an overflow
    let significant = digits.trim_start_matches('0');
    let hex = if significant.is_empty() { "0" } else { significant };
    let hex = hex.to_ascii_uppercase();

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(KeyCode::new)
        .ok_or_else(|| HotkeyError::KeyCodeOutOfRange {
            token: token.to_string(),
            hex,
        })
}
