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


//! Text to synthetic keystroke encoding
//!
//! Every UTF-16 code unit of the input becomes one key-down event followed
//! by one key-up event, both flagged as Unicode injection. Addressing by
//! code unit rather than by key identity is what lets arbitrary text be
//! typed regardless of the target's keyboard layout.
//!
//! Surrogate pairs are not merged: a character outside the Basic
//! Multilingual Plane produces two independent down/up pairs.
//!
//! Delivery to the operating system is behind the `KeystrokeSink` trait.

use bitflags::bitflags;
use serde::Serialize;
use thiserror::Error;

/// Whether an event presses or releases its key
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum KeyPhase {
    Down,
    Up,
}

bitflags! {
    /// Injection flags, numerically equal to Win32 `KEYEVENTF_*`
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct KeyEventFlags: u32 {
        const KEYUP = 0x0002;
        const UNICODE = 0x0004;
    }
}

/// One synthetic keyboard event carrying a UTF-16 code unit
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct KeystrokeEvent {
    pub code_unit: u16,
    pub phase: KeyPhase,
}

impl KeystrokeEvent {
    pub fn down(code_unit: u16) -> Self {
        Self {
            code_unit,
            phase: KeyPhase::Down,
        }
    }

    pub fn up(code_unit: u16) -> Self {
        Self {
            code_unit,
            phase: KeyPhase::Up,
        }
    }

    /// Always includes `UNICODE`; release events add `KEYUP`
    pub fn flags(&self) -> KeyEventFlags {
        match self.phase {
            KeyPhase::Down => KeyEventFlags::UNICODE,
            KeyPhase::Up => KeyEventFlags::UNICODE | KeyEventFlags::KEYUP,
        }
    }
}

/// Lazily encode `text`, yielding `2 * text.encode_utf16().count()` events
pub fn encode_iter(text: &str) -> impl Iterator<Item = KeystrokeEvent> + '_ {
    text.encode_utf16()
        .flat_map(|unit| [KeystrokeEvent::down(unit), KeystrokeEvent::up(unit)])
}

/// Encode `text` into its full event sequence
///
/// # Example
/// ```
/// use hotkey_autotype::core::keystroke::{encode, KeyPhase};
///
/// let events = encode("ab");
/// assert_eq!(events.len(), 4);
/// assert_eq!(events[0].code_unit, u16::from(b'a'));
/// assert_eq!(events[1].phase, KeyPhase::Up);
/// ```
pub fn encode(text: &str) -> Vec<KeystrokeEvent> {
    encode_iter(text).collect()
}

/// Rebuild the typed text from an event sequence (key-down events only)
pub fn decode(events: &[KeystrokeEvent]) -> String {
    let units: Vec<u16> = events
        .iter()
        .filter(|event| event.phase == KeyPhase::Down)
        .map(|event| event.code_unit)
        .collect();

    String::from_utf16_lossy(&units)
}

/// Errors raised while delivering events
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Keystroke injection failed: {0}")]
    Failed(String),
}

/// Destination for synthetic keystrokes
///
/// Platform backends implement this; `RecordingSink` keeps events in
/// memory for dry runs and tests.
pub trait KeystrokeSink {
    fn send(&mut self, events: &[KeystrokeEvent]) -> Result<(), SinkError>;
}

/// In-memory sink that records everything it is sent
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<KeystrokeEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[KeystrokeEvent] {
        &self.events
    }

    /// Text the recorded events would have typed
    pub fn typed_text(&self) -> String {
        decode(&self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl KeystrokeSink for RecordingSink {
    fn send(&mut self, events: &[KeystrokeEvent]) -> Result<(), SinkError> {
        tracing::trace!(count = events.len(), "recording keystroke events");
        self.events.extend_from_slice(events);
        Ok(())
    }
}
