// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-level navigation built on the selectors.
//!
//! - Commit and advance: next cell; past the last cell, append a row and park a
//!   jump to its first cell until that cell mounts.
//! - Commit and reverse: previous cell.
//! - Column moves: nearest cell above or below in the same field. These never
//!   create rows.

use crate::context::EditContext;
use crate::host::GridHost;
use crate::selector::{FirstCellOfRow, NextCell, NextCellInColumn, PrevCell, PrevCellInColumn};
use crate::types::{CellKey, NavOutcome, RowAppendPolicy};

/// A navigation request raised by an editing cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavIntent {
    /// Confirm and move forward in reading order.
    CommitAndAdvance,
    /// Confirm and move backward in reading order.
    CommitAndReverse,
    /// Move down within the column.
    NextInColumn,
    /// Move up within the column.
    PreviousInColumn,
}

impl NavIntent {
    /// Map a key code (DOM `KeyboardEvent.code` naming) and shift state to an intent.
    ///
    /// | Key | Intent |
    /// |---|---|
    /// | `Enter`, `NumpadEnter`, `Tab`, Shift+`ArrowRight` | advance |
    /// | Shift+`Tab`, Shift+`ArrowLeft` | reverse |
    /// | Shift+`ArrowDown` | next in column |
    /// | Shift+`ArrowUp` | previous in column |
    ///
    /// Plain arrows stay with the cell editor.
    pub fn from_key(code: &str, shift: bool) -> Option<Self> {
        match (code, shift) {
            ("Enter" | "NumpadEnter", _) | ("Tab", false) | ("ArrowRight", true) => {
                Some(Self::CommitAndAdvance)
            }
            ("Tab" | "ArrowLeft", true) => Some(Self::CommitAndReverse),
            ("ArrowDown", true) => Some(Self::NextInColumn),
            ("ArrowUp", true) => Some(Self::PreviousInColumn),
            _ => None,
        }
    }
}

impl<R, H> EditContext<R, H>
where
    R: Clone + PartialEq + 'static,
    H: GridHost<R>,
{
    /// Move editing away from `from` according to `intent`.
    ///
    /// Returns [`NavOutcome::Stayed`] if `from` is not registered or there is no
    /// target. Only [`NavIntent::CommitAndAdvance`] can append a row, and only
    /// under [`RowAppendPolicy::Append`].
    pub fn navigate(&mut self, from: CellKey, intent: NavIntent) -> NavOutcome {
        if self.cell(from).is_none() {
            return NavOutcome::Stayed;
        }
        let moved = match intent {
            NavIntent::CommitAndAdvance => return self.advance(from),
            NavIntent::CommitAndReverse => self.start_edit_with(PrevCell(from), false),
            NavIntent::NextInColumn => self.start_edit_with(NextCellInColumn(from), false),
            NavIntent::PreviousInColumn => self.start_edit_with(PrevCellInColumn(from), false),
        };
        if moved {
            NavOutcome::Moved
        } else {
            NavOutcome::Stayed
        }
    }

    fn advance(&mut self, from: CellKey) -> NavOutcome {
        if self.start_edit_with(NextCell(from), false) {
            return NavOutcome::Moved;
        }
        if self.row_append_policy() == RowAppendPolicy::Never {
            return NavOutcome::Stayed;
        }
        let row = self.add_row();
        if self.start_edit_with(FirstCellOfRow(row), true) {
            NavOutcome::Moved
        } else {
            NavOutcome::Deferred
        }
    }
}
