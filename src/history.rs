use crate::model::Gesture;
use crate::surface::{Snapshot, Surface};
use anyhow::Result;

/// A completed gesture and the full raster content after it rendered.
/// Created once at gesture finalization, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    snapshot: Snapshot,
    gesture: Gesture,
}

impl HistoryEntry {
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }
}

/// Linear undo/redo over full-raster snapshots. The cursor designates the
/// entry for the current visible state; `None` is the cleared/initial
/// state. Recording after an undo truncates the stale redo branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl HistoryStack {
    /// Captures the surface (whose strokes are already live-rendered) and
    /// appends an entry for `gesture`. Empty gestures are a no-op.
    pub fn record(&mut self, gesture: Gesture, surface: &Surface) -> bool {
        if gesture.is_empty() {
            return false;
        }
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(HistoryEntry {
            snapshot: surface.snapshot(),
            gesture,
        });
        self.cursor = Some(self.entries.len() - 1);
        tracing::debug!(entries = self.entries.len(), "gesture recorded");
        true
    }

    /// Steps back one entry, restoring the previous snapshot (or the
    /// cleared state from the first entry). At the initial state this is
    /// a no-op returning `Ok(false)`. The cursor only moves once the
    /// surface operation has succeeded.
    pub fn undo(&mut self, surface: &mut Surface) -> Result<bool> {
        let Some(current) = self.cursor else {
            return Ok(false);
        };
        if current == 0 {
            surface.reset_to_cleared();
            self.cursor = None;
        } else {
            surface.restore(self.entries[current - 1].snapshot())?;
            self.cursor = Some(current - 1);
        }
        tracing::debug!(cursor = self.cursor_step(), "undo applied");
        Ok(true)
    }

    /// Steps forward one entry, restoring its snapshot. Past the newest
    /// entry this is a no-op returning `Ok(false)`.
    pub fn redo(&mut self, surface: &mut Surface) -> Result<bool> {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next >= self.entries.len() {
            return Ok(false);
        }
        surface.restore(self.entries[next].snapshot())?;
        self.cursor = Some(next);
        tracing::debug!(cursor = self.cursor_step(), "redo applied");
        Ok(true)
    }

    /// Drops every entry and resets the surface to its cleared state.
    pub fn clear(&mut self, surface: &mut Surface) {
        self.entries.clear();
        self.cursor = None;
        surface.reset_to_cleared();
        tracing::debug!("history cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |i| i + 1) < self.entries.len()
    }

    /// Cursor as a step index, `-1` for the cleared/initial state.
    pub fn cursor_step(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }
}
