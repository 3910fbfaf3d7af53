//! History stack: linear, branch-truncating undo/redo over state snapshots.
//!
//! The log holds whole-state snapshots plus a cursor marking the current
//! point. Pushing while the cursor sits below the top discards the redo
//! branch above it. Snapshots are deep copies (`CanvasState` owns all of its
//! data), so a later live-state edit can never corrupt a stored snapshot.
//! Undo and redo move only the cursor; the log itself is push-only.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::MAX_HISTORY;
use crate::doc::CanvasState;

/// Snapshot log with a cursor. `cursor == None` means nothing has been
/// pushed yet; the first push establishes position zero.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    snapshots: Vec<CanvasState>,
    cursor: Option<usize>,
}

impl HistoryStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot of `state` as the new current point.
    ///
    /// Any redo branch beyond the cursor is discarded first. When the log
    /// exceeds [`MAX_HISTORY`] the oldest snapshot is dropped.
    pub fn push(&mut self, state: &CanvasState) {
        match self.cursor {
            Some(cursor) => self.snapshots.truncate(cursor + 1),
            None => self.snapshots.clear(),
        }
        self.snapshots.push(state.clone());
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
        }
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step the cursor back and return the snapshot there.
    ///
    /// Returns `None` at the bottom of the stack (or when empty); the caller
    /// leaves the live state untouched in that case.
    pub fn undo(&mut self) -> Option<&CanvasState> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.snapshots.get(cursor - 1)
    }

    /// Step the cursor forward and return the snapshot there.
    ///
    /// Returns `None` at the top of the stack (or when empty).
    pub fn redo(&mut self) -> Option<&CanvasState> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.snapshots.get(cursor + 1)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor + 1 < self.snapshots.len())
    }

    /// Number of snapshots currently in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Position of the current point in the log, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}
