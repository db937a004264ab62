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


//! Store and dispatch tests
//!
//! - Reloads swap whole snapshots
//! - Failed reloads keep the previous snapshot
//! - Fired hotkeys reach the keystroke sink

use std::sync::Arc;
use std::thread;

use crate::config::{
    document::ConfigDocument,
    entry::{Payload, PayloadKind},
    store::{ConfigStore, Dispatcher, Fired},
};
use crate::core::{
    error::ErrorKind,
    keystroke::{KeystrokeEvent, KeystrokeSink, RecordingSink, SinkError},
    parser::parse_hotkey,
};

fn literal_store(text: &str) -> Arc<ConfigStore> {
    let doc = ConfigDocument::parse(text, PayloadKind::Literal).unwrap();
    Arc::new(ConfigStore::new(doc))
}

/// Sink that rejects everything
struct FailingSink;

impl KeystrokeSink for FailingSink {
    fn send(&mut self, _events: &[KeystrokeEvent]) -> Result<(), SinkError> {
        Err(SinkError::Failed("input desktop locked".to_string()))
    }
}

#[test]
fn test_reload_swaps_snapshot() {
    let store = literal_store("LCtrl+0x41|old\n");
    let before = store.snapshot();

    store.reload("LCtrl+0x41|new\nLCtrl+0x42|more\n").unwrap();
    let after = store.snapshot();

    // Old snapshot is untouched for anyone still holding it
    assert_eq!(before.entries().len(), 1);
    assert_eq!(after.entries().len(), 2);
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn test_reload_returns_the_document_it_installed() {
    let store = literal_store("LCtrl+0x41|old\n");

    let installed = store.reload("LCtrl+0x41|new\n").unwrap();
    let later = store.reload("LCtrl+0x42|newer\n").unwrap();

    assert_eq!(installed.entries()[0].payload, Payload::Literal("new".to_string()));
    assert!(!Arc::ptr_eq(&installed, &later));
    assert!(Arc::ptr_eq(&later, &store.snapshot()));
}

#[test]
fn test_failed_reload_keeps_previous_snapshot() {
    let store = literal_store("LCtrl+0x41|old\n");
    let before = store.snapshot();

    let err = store.reload("Ctrl+0x41|broken\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousModifierFamily);

    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_reload_keeps_payload_kind() {
    let doc = ConfigDocument::parse("LCtrl+0x50\na|b\n", PayloadKind::Credential).unwrap();
    let store = ConfigStore::new(doc);

    store.reload("RCtrl+0x50\nc|d\n").unwrap();
    assert_eq!(store.snapshot().kind(), PayloadKind::Credential);
}

#[test]
fn test_concurrent_readers_see_whole_documents() {
    let store = literal_store("LCtrl+0x41|a\n");

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = store.snapshot();
                    let count = snapshot.entries().len();
                    assert!(count == 1 || count == 3, "partial document: {}", count);
                }
            })
        })
        .collect();

    for i in 0..50 {
        let text = if i % 2 == 0 {
            "LCtrl+0x41|a\nLCtrl+0x42|b\nLCtrl+0x43|c\n"
        } else {
            "LCtrl+0x41|a\n"
        };
        store.reload(text).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn test_dispatch_types_literal_text() {
    let store = literal_store("LCtrl+LAlt+0x53|Kind regards\n");
    let mut dispatcher = Dispatcher::new(Arc::clone(&store), RecordingSink::new());

    let fired = dispatcher
        .fire(&parse_hotkey("LCtrl+LAlt+0x53").unwrap())
        .unwrap();

    assert_eq!(fired, Fired::Typed { line: 1, events: 24 });
    assert_eq!(dispatcher.sink().typed_text(), "Kind regards");
}

#[test]
fn test_dispatch_unbound_hotkey() {
    let store = literal_store("LCtrl+0x41|a\n");
    let mut dispatcher = Dispatcher::new(store, RecordingSink::new());

    let fired = dispatcher.fire(&parse_hotkey("RCtrl+0x41").unwrap()).unwrap();
    assert_eq!(fired, Fired::Unbound);
    assert!(dispatcher.sink().events().is_empty());
}

#[test]
fn test_dispatch_follows_reload() {
    let store = literal_store("LCtrl+0x41|before\n");
    let mut dispatcher = Dispatcher::new(Arc::clone(&store), RecordingSink::new());
    let hotkey = parse_hotkey("LCtrl+0x41").unwrap();

    store.reload("LCtrl+0x41|after\n").unwrap();
    dispatcher.fire(&hotkey).unwrap();

    assert_eq!(dispatcher.sink().typed_text(), "after");
}

#[test]
fn test_dispatch_credential_vault() {
    let doc = ConfigDocument::parse("LCtrl+0x50\na|1\nb|2\n", PayloadKind::Credential).unwrap();
    let store = Arc::new(ConfigStore::new(doc));
    let mut dispatcher = Dispatcher::new(store, RecordingSink::new());

    let fired = dispatcher.fire(&parse_hotkey("LCtrl+0x50").unwrap()).unwrap();
    assert_eq!(fired, Fired::ChooseCredential { entries: 2 });

    let fired = dispatcher.fire(&parse_hotkey("LCtrl+0x51").unwrap()).unwrap();
    assert_eq!(fired, Fired::Unbound);
    assert!(dispatcher.sink().events().is_empty());
}

#[test]
fn test_dispatch_surfaces_sink_errors() {
    let store = literal_store("LCtrl+0x41|a\n");
    let mut dispatcher = Dispatcher::new(store, FailingSink);

    let result = dispatcher.fire(&parse_hotkey("LCtrl+0x41").unwrap());
    assert!(matches!(result, Err(SinkError::Failed(_))));
}
