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


//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the pure, I/O-free logic of the crate:
//! - Type definitions for modifiers, key codes and hotkeys
//! - The modifier token table and virtual-key names
//! - Hotkey specification parsing with user-facing diagnostics
//! - Text to keystroke-event encoding
//! - Duplicate hotkey detection
//!
//! Nothing here touches the file system or the operating system, so all of
//! it is unit tested without a desktop session.

pub mod conflict;
pub mod error;
pub mod keystroke;
pub mod modifiers;
pub mod parser;
pub mod types;
pub mod vk;

pub use conflict::{Conflict, ConflictDetector};
pub use error::{ErrorKind, HotkeyError, HotkeyParseError};
pub use keystroke::{KeyPhase, KeystrokeEvent, KeystrokeSink};
pub use modifiers::{Modifier, ModifierFamily};
pub use parser::parse_hotkey;
pub use types::*;

#[cfg(test)]
mod tests;
