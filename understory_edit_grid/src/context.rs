// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit context: cell registry, edit session, and deferred navigation.
//!
//! ## Session rules
//!
//! - At most one registered cell is [`Editing`](EditState::Editing) at any time.
//!   Starting an edit always ends the previous one first.
//! - Unmounting the edited cell clears the session; nothing is re-targeted.
//! - At most one navigation request is parked. It is retried on each cell
//!   registration and dropped once it resolves, or when any later navigation
//!   request is issued.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::host::GridHost;
use crate::selector::CellSelector;
use crate::types::{CellEntry, CellKey, EditState, RowAppendPolicy};

/// Coordinates in-place editing across the mounted cells of one grid.
///
/// ## Usage
///
/// - Cells call [`register_cell`](Self::register_cell) when they mount and
///   [`unregister_cell`](Self::unregister_cell) when they unmount, in visual order.
/// - A click calls [`start_edit`](Self::start_edit); keyboard navigation calls
///   [`navigate`](Self::navigate) or [`start_edit_with`](Self::start_edit_with).
/// - The host `H` receives row creation, field access, row selection, and
///   per-cell edit state changes.
pub struct EditContext<R, H> {
    cells: Vec<CellEntry<R>>,
    active: Option<CellKey>,
    pending: Option<Box<dyn CellSelector<R>>>,
    next_key: u64,
    host: H,
    row_policy: RowAppendPolicy,
}

impl<R, H> core::fmt::Debug for EditContext<R, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditContext")
            .field("cells", &self.cells.len())
            .field("active", &self.active)
            .field("pending", &self.pending.is_some())
            .field("row_policy", &self.row_policy)
            .finish_non_exhaustive()
    }
}

impl<R, H> EditContext<R, H>
where
    R: Clone + PartialEq + 'static,
    H: GridHost<R>,
{
    /// Create a context with no cells, driving `host`.
    pub fn new(host: H) -> Self {
        Self {
            cells: Vec::new(),
            active: None,
            pending: None,
            next_key: 0,
            host,
            row_policy: RowAppendPolicy::default(),
        }
    }

    /// Choose whether committing forward past the last cell appends a row.
    pub fn set_row_append_policy(&mut self, policy: RowAppendPolicy) {
        self.row_policy = policy;
    }

    /// Current row append policy.
    pub fn row_append_policy(&self) -> RowAppendPolicy {
        self.row_policy
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the context, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Registered cells in mount order.
    pub fn cells(&self) -> &[CellEntry<R>] {
        &self.cells
    }

    /// Number of registered cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cells are registered.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Registry entry of `key`.
    pub fn cell(&self, key: CellKey) -> Option<&CellEntry<R>> {
        self.cells.iter().find(|c| c.key == key)
    }

    /// Edit state of `key`, or `None` if not registered.
    pub fn edit_state(&self, key: CellKey) -> Option<EditState> {
        self.cell(key).map(|c| c.state)
    }

    /// The cell being edited.
    pub fn active_cell(&self) -> Option<CellKey> {
        self.active
    }

    /// True if a navigation request is parked awaiting a registration.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Register a newly mounted cell at the end of the registry.
    ///
    /// If a navigation request is parked and now resolves, editing starts on
    /// its target and the request is dropped.
    pub fn register_cell(&mut self, row: R, field: impl Into<String>) -> CellKey {
        let key = CellKey(self.next_key);
        self.next_key += 1;
        self.cells.push(CellEntry {
            key,
            row,
            field: field.into(),
            state: EditState::Idle,
        });

        let target = self.pending.as_ref().and_then(|s| s.select(&self.cells));
        if let Some(target) = target {
            #[cfg(feature = "tracing")]
            tracing::debug!(?target, "parked navigation resolved");
            self.pending = None;
            self.start_edit(target);
        }
        key
    }

    /// Remove an unmounted cell.
    ///
    /// If it was being edited, the session is cleared without notifying the
    /// host. Returns the removed entry.
    pub fn unregister_cell(&mut self, key: CellKey) -> Option<CellEntry<R>> {
        let i = self.cells.iter().position(|c| c.key == key)?;
        if self.active == Some(key) {
            self.active = None;
        }
        Some(self.cells.remove(i))
    }

    /// Start editing `key`, ending the previous edit first.
    ///
    /// The host is told to select the cell's row. Returns false if `key` is
    /// not registered, in which case nothing changes.
    pub fn start_edit(&mut self, key: CellKey) -> bool {
        let Some(i) = self.cells.iter().position(|c| c.key == key) else {
            return false;
        };
        if self.active != Some(key) {
            self.end_edit();
            self.active = Some(key);
            self.cells[i].state = EditState::Editing;
            #[cfg(feature = "tracing")]
            tracing::trace!(cell = ?key, field = %self.cells[i].field, "edit started");
            self.host.edit_state_changed(key, EditState::Editing);
        }
        self.host.select_row(&self.cells[i].row);
        true
    }

    /// End the current edit, if any, returning the cell that was edited.
    pub fn end_edit(&mut self) -> Option<CellKey> {
        let key = self.active.take()?;
        if let Some(c) = self.cells.iter_mut().find(|c| c.key == key) {
            c.state = EditState::Idle;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(cell = ?key, "edit ended");
        self.host.edit_state_changed(key, EditState::Idle);
        Some(key)
    }

    /// Start editing the cell `selector` resolves to.
    ///
    /// Returns true and drops any parked request if the selector resolves.
    /// Otherwise returns false; with `keep` the selector is parked and retried
    /// on the next registrations, without it any parked request is dropped.
    pub fn start_edit_with<S>(&mut self, selector: S, keep: bool) -> bool
    where
        S: CellSelector<R> + 'static,
    {
        match selector.select(&self.cells) {
            Some(target) => {
                self.pending = None;
                self.start_edit(target)
            }
            None if keep => {
                #[cfg(feature = "tracing")]
                tracing::debug!("navigation parked until a matching cell registers");
                self.pending = Some(Box::new(selector));
                false
            }
            None => {
                self.pending = None;
                false
            }
        }
    }

    /// Create a row through the host and append it to the backing collection.
    pub fn add_row(&mut self) -> R {
        let row = self.host.append_new_row();
        #[cfg(feature = "tracing")]
        tracing::debug!("row appended");
        row
    }

    /// Read a field through the host.
    pub fn field_value(&self, row: &R, field: &str) -> Option<H::Value> {
        self.host.field_value(row, field)
    }

    /// Write a field through the host.
    pub fn set_field_value(&mut self, row: &R, field: &str, value: H::Value) -> bool {
        self.host.set_field_value(row, field, value)
    }
}
