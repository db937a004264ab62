//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Hotkey parser tests (grammar, modifiers, key codes, diagnostics)
//! - Keystroke encoding tests
//! - Duplicate hotkey detection tests
//! - Type tests (ModifierFlags, KeyCode, Hotkey)

#[cfg(test)]
mod keystroke_tests;
#[cfg(test)]
mod types_tests;
