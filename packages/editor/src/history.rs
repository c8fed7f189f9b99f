//! # Undo/Redo History
//!
//! Snapshot-based history over the component sequence.
//!
//! ## Design
//!
//! - Each entry is a fully-materialized copy of the component sequence,
//!   not a command/inverse pair
//! - A cursor marks the entry representing current state
//! - Committing truncates any redo tail, then appends (one linear
//!   timeline, no branches)
//! - Capacity is bounded at 50 entries; the oldest entry is evicted on
//!   overflow
//! - The log is seeded with the empty sequence so undo never underflows
//!   below the initial state
//!
//! Site settings and the canvas background are deliberately not captured;
//! only the component sequence travels through undo/redo.

use pagecanvas_model::Component;
use std::collections::VecDeque;

/// Maximum number of retained snapshots
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Bounded linear snapshot ring
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Vec<Component>>,
    cursor: usize,
}

impl History {
    /// Create a history seeded with the empty component sequence
    pub fn new() -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(Vec::new());

        Self { entries, cursor: 0 }
    }

    /// Record a snapshot as the new current state.
    ///
    /// Discards any redo tail, then evicts the oldest entry if the ring is
    /// full. The stored snapshot is an independent copy; later mutation of
    /// the live sequence never alters it.
    pub fn commit(&mut self, components: &[Component]) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(components.to_vec());

        if self.entries.len() > MAX_HISTORY_ENTRIES {
            self.entries.pop_front();
        }

        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry; `None` at the seed entry
    pub fn undo(&mut self) -> Option<Vec<Component>> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        Some(self.entries[self.cursor].clone())
    }

    /// Step forward one entry; `None` at the newest entry
    pub fn redo(&mut self) -> Option<Vec<Component>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }

        self.cursor += 1;
        Some(self.entries[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
