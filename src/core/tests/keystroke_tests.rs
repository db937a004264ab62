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


//! Keystroke encoding tests
//!
//! - Event order and count
//! - Surrogate pair handling
//! - Injection flags
//! - Recording sink

use crate::core::keystroke::*;

#[test]
fn test_encode_abc() {
    let events = encode("abc");
    let expected: Vec<KeystrokeEvent> = "abc"
        .bytes()
        .flat_map(|b| {
            let unit = u16::from(b);
            [KeystrokeEvent::down(unit), KeystrokeEvent::up(unit)]
        })
        .collect();

    assert_eq!(events, expected);
    assert_eq!(events.len(), 6);
    assert_eq!(events[0], KeystrokeEvent::down(0x61));
    assert_eq!(events[5], KeystrokeEvent::up(0x63));
}

#[test]
fn test_encode_empty() {
    assert!(encode("").is_empty());
}

#[test]
fn test_encode_length_and_positions() {
    for text in ["hello world", "  spaced  out ", "päßwörd", "日本語テキスト", "tab\there"] {
        let units: Vec<u16> = text.encode_utf16().collect();
        let events = encode(text);

        assert_eq!(events.len(), 2 * units.len(), "text: {:?}", text);
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(events[2 * i].code_unit, *unit);
            assert_eq!(events[2 * i].phase, KeyPhase::Down);
            assert_eq!(events[2 * i + 1].code_unit, *unit);
            assert_eq!(events[2 * i + 1].phase, KeyPhase::Up);
        }
    }
}

#[test]
fn test_surrogate_pairs_stay_separate() {
    // U+1F600 is outside the BMP: 0xD83D 0xDE00
    let events = encode("\u{1F600}");
    assert_eq!(
        events,
        vec![
            KeystrokeEvent::down(0xD83D),
            KeystrokeEvent::up(0xD83D),
            KeystrokeEvent::down(0xDE00),
            KeystrokeEvent::up(0xDE00),
        ]
    );
}

#[test]
fn test_encode_is_deterministic() {
    let text = "Same input, same output \u{1F511}";
    assert_eq!(encode(text), encode(text));
    assert_eq!(encode(text), encode_iter(text).collect::<Vec<_>>());
}

#[test]
fn test_event_flags() {
    let down = KeystrokeEvent::down(0x41);
    let up = KeystrokeEvent::up(0x41);

    assert_eq!(down.flags(), KeyEventFlags::UNICODE);
    assert_eq!(up.flags(), KeyEventFlags::UNICODE | KeyEventFlags::KEYUP);
    assert_eq!(up.flags().bits(), 0x0006);
}

#[test]
fn test_decode_restores_text() {
    let text = "Grüße \u{1F600}!";
    assert_eq!(decode(&encode(text)), text);
}

#[test]
fn test_recording_sink() {
    let mut sink = RecordingSink::new();
    sink.send(&encode("hi")).unwrap();
    sink.send(&encode("!")).unwrap();

    assert_eq!(sink.events().len(), 6);
    assert_eq!(sink.typed_text(), "hi!");

    sink.clear();
    assert!(sink.events().is_empty());
}
