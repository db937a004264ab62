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


//! Virtual-key display names
//!
//! Immutable lookup from Win32 virtual-key codes to the short names shown
//! to users (`0x50` → `P`, `0x70` → `F1`). Codes with no common name, and
//! reserved or OEM-specific gaps, have no entry.

/// Sorted by code so lookup can binary search
const KEY_NAMES: &[(u8, &str)] = &[
    (0x01, "LButton"),
    (0x02, "RButton"),
    (0x03, "Cancel"),
    (0x04, "MButton"),
    (0x05, "XButton1"),
    (0x06, "XButton2"),
    (0x08, "Backspace"),
    (0x09, "Tab"),
    (0x0C, "Clear"),
    (0x0D, "Enter"),
    (0x10, "Shift"),
    (0x11, "Ctrl"),
    (0x12, "Alt"),
    (0x13, "Pause"),
    (0x14, "CapsLock"),
    (0x1B, "Esc"),
    (0x20, "Space"),
    (0x21, "PageUp"),
    (0x22, "PageDown"),
    (0x23, "End"),
    (0x24, "Home"),
    (0x25, "Left"),
    (0x26, "Up"),
    (0x27, "Right"),
    (0x28, "Down"),
    (0x29, "Select"),
    (0x2A, "Print"),
    (0x2B, "Execute"),
    (0x2C, "PrintScreen"),
    (0x2D, "Insert"),
    (0x2E, "Delete"),
    (0x2F, "Help"),
    (0x30, "0"),
    (0x31, "1"),
    (0x32, "2"),
    (0x33, "3"),
    (0x34, "4"),
    (0x35, "5"),
    (0x36, "6"),
    (0x37, "7"),
    (0x38, "8"),
    (0x39, "9"),
    (0x41, "A"),
    (0x42, "B"),
    (0x43, "C"),
    (0x44, "D"),
    (0x45, "E"),
    (0x46, "F"),
    (0x47, "G"),
    (0x48, "H"),
    (0x49, "I"),
    (0x4A, "J"),
    (0x4B, "K"),
    (0x4C, "L"),
    (0x4D, "M"),
    (0x4E, "N"),
    (0x4F, "O"),
    (0x50, "P"),
    (0x51, "Q"),
    (0x52, "R"),
    (0x53, "S"),
    (0x54, "T"),
    (0x55, "U"),
    (0x56, "V"),
    (0x57, "W"),
    (0x58, "X"),
    (0x59, "Y"),
    (0x5A, "Z"),
    (0x5B, "LWin"),
    (0x5C, "RWin"),
    (0x5D, "Apps"),
    (0x5F, "Sleep"),
    (0x60, "Num0"),
    (0x61, "Num1"),
    (0x62, "Num2"),
    (0x63, "Num3"),
    (0x64, "Num4"),
    (0x65, "Num5"),
    (0x66, "Num6"),
    (0x67, "Num7"),
    (0x68, "Num8"),
    (0x69, "Num9"),
    (0x6A, "Multiply"),
    (0x6B, "Add"),
    (0x6C, "Separator"),
    (0x6D, "Subtract"),
    (0x6E, "Decimal"),
    (0x6F, "Divide"),
    (0x70, "F1"),
    (0x71, "F2"),
    (0x72, "F3"),
    (0x73, "F4"),
    (0x74, "F5"),
    (0x75, "F6"),
    (0x76, "F7"),
    (0x77, "F8"),
    (0x78, "F9"),
    (0x79, "F10"),
    (0x7A, "F11"),
    (0x7B, "F12"),
    (0x7C, "F13"),
    (0x7D, "F14"),
    (0x7E, "F15"),
    (0x7F, "F16"),
    (0x80, "F17"),
    (0x81, "F18"),
    (0x82, "F19"),
    (0x83, "F20"),
    (0x84, "F21"),
    (0x85, "F22"),
    (0x86, "F23"),
    (0x87, "F24"),
    (0x90, "NumLock"),
    (0x91, "ScrollLock"),
    (0xA0, "LShift"),
    (0xA1, "RShift"),
    (0xA2, "LCtrl"),
    (0xA3, "RCtrl"),
    (0xA4, "LAlt"),
    (0xA5, "RAlt"),
    (0xA6, "BrowserBack"),
    (0xA7, "BrowserForward"),
    (0xA8, "BrowserRefresh"),
    (0xA9, "BrowserStop"),
    (0xAA, "BrowserSearch"),
    (0xAB, "BrowserFavorites"),
    (0xAC, "BrowserHome"),
    (0xAD, "VolumeMute"),
    (0xAE, "VolumeDown"),
    (0xAF, "VolumeUp"),
    (0xB0, "MediaNext"),
    (0xB1, "MediaPrev"),
    (0xB2, "MediaStop"),
    (0xB3, "MediaPlayPause"),
    (0xB4, "LaunchMail"),
    (0xB5, "LaunchMedia"),
    (0xB6, "LaunchApp1"),
    (0xB7, "LaunchApp2"),
    (0xBA, "Semicolon"),
    (0xBB, "Plus"),
    (0xBC, "Comma"),
    (0xBD, "Minus"),
    (0xBE, "Period"),
    (0xBF, "Slash"),
    (0xC0, "Backquote"),
    (0xDB, "LBracket"),
    (0xDC, "Backslash"),
    (0xDD, "RBracket"),
    (0xDE, "Quote"),
    (0xE2, "OemBackslash"),
    (0xFA, "Play"),
    (0xFB, "Zoom"),
];

/// Returns the display name for a virtual-key code, if it has one
pub fn key_name(code: u8) -> Option<&'static str> {
    KEY_NAMES
        .binary_search_by_key(&code, |&(key, _)| key)
        .ok()
        .map(|index| KEY_NAMES[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(KEY_NAMES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_common_names() {
        assert_eq!(key_name(0x50), Some("P"));
        assert_eq!(key_name(0x30), Some("0"));
        assert_eq!(key_name(0x70), Some("F1"));
        assert_eq!(key_name(0x0D), Some("Enter"));
        assert_eq!(key_name(0xA2), Some("LCtrl"));
    }

    #[test]
    fn test_unnamed_codes() {
        assert_eq!(key_name(0x00), None);
        assert_eq!(key_name(0x3A), None);
        assert_eq!(key_name(0xFF), None);
    }
}
