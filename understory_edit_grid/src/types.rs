// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: cell keys, registry entries, edit states, intents, and policies.

use alloc::string::String;

/// Identity of one mounted editable cell.
///
/// Issued by [`EditContext::register_cell`](crate::EditContext::register_cell) and never
/// reused by the same context, so a key held by an unmounted cell cannot alias a newer cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CellKey(pub(crate) u64);

/// Whether a cell is currently being edited.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EditState {
    /// Displaying its value.
    #[default]
    Idle,
    /// Showing its editor.
    Editing,
}

/// A registry entry for one mounted cell.
///
/// Entries are kept in mount order, which the host must keep equal to visual
/// reading order (row-major, left to right).
#[derive(Clone, Debug, PartialEq)]
pub struct CellEntry<R> {
    /// Identity of the cell.
    pub key: CellKey,
    /// The data row this cell edits, compared by equality.
    pub row: R,
    /// Column / property the cell edits.
    pub field: String,
    /// Current edit state.
    pub state: EditState,
}

impl<R> CellEntry<R> {
    /// True if this cell is the one being edited.
    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }
}

/// Result of [`EditContext::navigate`](crate::EditContext::navigate).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavOutcome {
    /// Editing moved to another cell.
    Moved,
    /// A new row was appended and the jump to its first cell waits for that cell to mount.
    Deferred,
    /// No target; the active cell is unchanged.
    Stayed,
}

/// Whether committing forward past the last cell appends a row.
///
/// Set with [`EditContext::set_row_append_policy`](crate::EditContext::set_row_append_policy).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RowAppendPolicy {
    /// Append a new row and continue editing in its first cell.
    #[default]
    Append,
    /// Stay on the last cell.
    Never,
}
