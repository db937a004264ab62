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


//! Hotkey Auto-Type
//!
//! Binds global hotkeys to automatic typing of saved credentials or fixed
//! text. This crate holds everything except the OS glue: the hotkey
//! grammar, the config file model and the keystroke encoding.
//!
//! # Features
//!
//! - **Strict Hotkey Grammar:** `LCtrl+LShift+LAlt+0x50`, side-specific
//!   modifiers only, with corrective diagnostics for near misses
//! - **Two Config Shapes:** credential vault or per-line literal text
//! - **Fail-Fast Loading:** any invalid line rejects the whole file
//! - **Unicode Typing:** one down/up event pair per UTF-16 code unit
//! - **Atomic Reloads:** readers always see one complete snapshot
//!
//! # Architecture
//!
//! - **`core`:** Pure logic (types, modifier table, parser, encoder)
//! - **`config`:** Config lines, documents, file I/O and reloads
//! - **`logging`:** tracing subscriber setup
//!
//! # Examples
//!
//! ## Parsing a hotkey
//!
//! ```
//! use hotkey_autotype::core::parse_hotkey;
//!
//! let err = parse_hotkey("Ctrl+0x50").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Failed to parse shortcut key [Ctrl+0x50]: \
//!      Shortcut key modifier [Ctrl] is not supported: Please use [LCtrl] or [RCtrl]"
//! );
//! ```
//!
//! ## Loading a config and typing an entry
//!
//! ```
//! use hotkey_autotype::config::{ConfigDocument, PayloadKind};
//! use hotkey_autotype::core::keystroke::encode;
//!
//! let doc = ConfigDocument::parse("LCtrl+LAlt+0x53|Kind regards\n", PayloadKind::Literal)?;
//! let entry = &doc.entries()[0];
//! let events = entry.literal_keystrokes().unwrap();
//! assert_eq!(events, encode("Kind regards"));
//! # Ok::<(), hotkey_autotype::config::ParseError>(())
//! ```

pub mod config;
pub mod core;
pub mod logging;

// Re-export commonly used types for convenience
pub use crate::config::{ConfigDocument, ConfigEntry, Payload, PayloadKind};
pub use crate::core::{Hotkey, KeyCode, ModifierFlags};
