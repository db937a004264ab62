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


//! File system watcher for live config reloads
//!
//! Uses OS-level file watching via the notify crate. Zero CPU overhead
//! while the file is unchanged; the caller polls `check_for_changes` and
//! re-parses through `ConfigStore::reload`.
//!
//! The parent directory is watched rather than the file itself, because
//! atomic saves replace the file's inode and a file watch would go quiet.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    ffi::OsString,
    path::Path,
    sync::mpsc::{channel, Receiver},
};
use tracing::warn;

/// Watches one config file for modifications
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    file_name: Option<OsString>,
}

impl ConfigWatcher {
    pub fn new(path: &Path) -> notify::Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                // Receiver gone means the watcher is being dropped
                if tx.send(res).is_err() {
                    warn!("config watcher channel closed");
                }
            },
            Config::default(),
        )?;

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher.watch(directory, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
            file_name: path.file_name().map(OsString::from),
        })
    }

    /// Drains pending events; true if any modified or recreated the file
    /// (non-blocking)
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            match event_result {
                Ok(event) => {
                    if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
                        && self.concerns_config(&event)
                    {
                        changed = true;
                    }
                }
                Err(e) => warn!(error = %e, "config watcher error"),
            }
        }

        changed
    }

    fn concerns_config(&self, event: &Event) -> bool {
        event
            .paths
            .iter()
            .any(|path| path.file_name() == self.file_name.as_deref())
    }
}
