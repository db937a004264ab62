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


//! Shared config snapshot and hotkey dispatch
//!
//! Hotkeys may fire on one thread while a reload runs on another.
//! `ConfigStore` never edits a document in place: a reload parses the new
//! text completely, then swaps the `Arc` under a short write lock. Readers
//! clone the `Arc` and keep one consistent snapshot for as long as they
//! need it.

use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use crate::config::document::ConfigDocument;
use crate::config::entry::{Payload, PayloadKind};
use crate::config::error::ParseError;
use crate::core::keystroke::{self, KeystrokeSink, SinkError};
use crate::core::types::Hotkey;

/// Atomically replaceable config snapshot
#[derive(Debug)]
pub struct ConfigStore {
    current: RwLock<Arc<ConfigDocument>>,
}

impl ConfigStore {
    pub fn new(document: ConfigDocument) -> Self {
        Self {
            current: RwLock::new(Arc::new(document)),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<ConfigDocument> {
        // A poisoned lock still holds a complete document
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in an already parsed document
    pub fn replace(&self, document: ConfigDocument) -> Arc<ConfigDocument> {
        self.swap(Arc::new(document))
    }

    /// Install `next`, returning the snapshot it displaced
    fn swap(&self, next: Arc<ConfigDocument>) -> Arc<ConfigDocument> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, next)
    }

    /// Parse `text` and swap it in; on error the old snapshot stays live
    pub fn reload(&self, text: &str) -> Result<Arc<ConfigDocument>, ParseError> {
        let kind = self.snapshot().kind();

        match ConfigDocument::parse(text, kind) {
            Ok(document) => {
                info!(entries = document.entries().len(), "config reloaded");
                let next = Arc::new(document);
                self.swap(Arc::clone(&next));
                Ok(next)
            }
            Err(e) => {
                warn!(error = %e, "config reload rejected, keeping previous snapshot");
                Err(e)
            }
        }
    }
}

/// What happened when a hotkey fired
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fired {
    /// A literal entry was typed; `line` identifies it
    Typed { line: usize, events: usize },

    /// The vault hotkey fired; the host should let the user pick one of
    /// `entries` credentials
    ChooseCredential { entries: usize },

    /// No entry is bound to this hotkey
    Unbound,
}

/// Routes fired hotkeys to keystroke output
pub struct Dispatcher<S: KeystrokeSink> {
    store: Arc<ConfigStore>,
    sink: S,
}

impl<S: KeystrokeSink> Dispatcher<S> {
    pub fn new(store: Arc<ConfigStore>, sink: S) -> Self {
        Self { store, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle one hotkey press against the current snapshot
    pub fn fire(&mut self, hotkey: &Hotkey) -> Result<Fired, SinkError> {
        // One snapshot for the whole injection, even if a reload lands
        let document = self.store.snapshot();

        if document.kind() == PayloadKind::Credential {
            return Ok(match document.hotkey() {
                Some(vault_hotkey) if vault_hotkey == *hotkey => Fired::ChooseCredential {
                    entries: document.entries().len(),
                },
                _ => Fired::Unbound,
            });
        }

        let Some(entry) = document.find(hotkey) else {
            debug!(%hotkey, "no entry bound to hotkey");
            return Ok(Fired::Unbound);
        };

        let Payload::Literal(text) = &entry.payload else {
            return Ok(Fired::Unbound);
        };

        let events = keystroke::encode(text);
        debug!(%hotkey, line = entry.line, events = events.len(), "typing literal entry");
        self.sink.send(&events)?;

        Ok(Fired::Typed {
            line: entry.line,
            events: events.len(),
        })
    }
}
