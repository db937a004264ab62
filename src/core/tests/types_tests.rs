use crate::core::{
    error::HotkeyError,
    modifiers::Modifier,
    parser::parse_hotkey,
    types::{Hotkey, KeyCode, ModifierFlags, MAX_KEY, MIN_KEY},
};

#[test]
fn test_key_code_range() {
    assert!(KeyCode::new(0).is_none());
    assert!(KeyCode::new(u32::from(MIN_KEY)).is_some());
    assert!(KeyCode::new(u32::from(MAX_KEY)).is_some());
    assert!(KeyCode::new(0xFF).is_none());
    assert!(KeyCode::new(0x432A).is_none());
}

#[test]
fn test_key_code_display() {
    let key = KeyCode::new(0x5).unwrap();
    assert_eq!(format!("{}", key), "0x05");
    assert_eq!(key.name(), Some("XButton1"));
    assert_eq!(KeyCode::new(0x06).unwrap().name(), Some("XButton2"));
}

#[test]
fn test_hotkey_rejects_empty_modifiers() {
    let key = KeyCode::new(0x41).unwrap();
    assert_eq!(
        Hotkey::new(ModifierFlags::empty(), key),
        Err(HotkeyError::ZeroModifiers)
    );
}

#[test]
fn test_modifier_flags_display_order() {
    let flags = ModifierFlags::ALT_RIGHT | ModifierFlags::SHIFT_LEFT | ModifierFlags::CTRL_LEFT;
    assert_eq!(format!("{}", flags), "LCtrl+LShift+RAlt");

    let modifiers: Vec<Modifier> = flags.modifiers().collect();
    assert_eq!(
        modifiers,
        vec![Modifier::LCtrl, Modifier::LShift, Modifier::RAlt]
    );
}

#[test]
fn test_hotkey_describe_uses_key_name() {
    let hotkey = parse_hotkey("LCtrl+LShift+LAlt+0x50").unwrap();
    assert_eq!(hotkey.describe(), "LCtrl+LShift+LAlt+P");

    // No name for 0x3A, so fall back to hex
    let hotkey = parse_hotkey("RCtrl+0x3A").unwrap();
    assert_eq!(hotkey.describe(), "RCtrl+0x3A");
}

#[test]
fn test_hotkey_serializes_as_canonical_string() {
    let hotkey = parse_hotkey("lalt+0x70").unwrap();
    let json = serde_json::to_string(&hotkey).unwrap();
    assert_eq!(json, "\"LAlt+0x70\"");
}

#[test]
fn test_equal_hotkeys_hash_equal() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(parse_hotkey("LCtrl+LAlt+0x41").unwrap());
    set.insert(parse_hotkey("lalt + lctrl + 0x041").unwrap());
    assert_eq!(set.len(), 1);
}
