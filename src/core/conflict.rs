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


//! Duplicate hotkey detection
//!
//! A literal-text config may bind the same hotkey on several lines; only
//! one of them can ever fire. This module groups bindings by hotkey using
//! a HashMap and reports every hotkey used more than once.
//!
//! # Performance
//! - Add binding: O(1) average case
//! - List all conflicts: O(n log n), sorted for stable output

use std::collections::HashMap;

use crate::core::types::Hotkey;

/// Groups config lines by the hotkey they bind
#[derive(Debug, Default)]
pub struct ConflictDetector {
    /// Maps each hotkey to the 1-based lines binding it
    bindings: HashMap<Hotkey, Vec<usize>>,
}

/// A hotkey bound on two or more lines
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    pub hotkey: Hotkey,

    /// Lines binding this hotkey, in file order (always 2 or more)
    pub lines: Vec<usize>,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `line` binds `hotkey`.
    pub fn add_binding(&mut self, hotkey: Hotkey, line: usize) {
        self.bindings.entry(hotkey).or_default().push(line);
    }

    /// Finds all hotkeys bound more than once, ordered by first line.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .bindings
            .iter()
            .filter(|(_, lines)| lines.len() > 1)
            .map(|(hotkey, lines)| Conflict {
                hotkey: *hotkey,
                lines: lines.clone(),
            })
            .collect();

        conflicts.sort_by_key(|conflict| conflict.lines[0]);
        conflicts
    }

    pub fn has_conflict(&self, hotkey: &Hotkey) -> bool {
        self.bindings
            .get(hotkey)
            .is_some_and(|lines| lines.len() > 1)
    }

    /// Total number of bindings tracked
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }
}
