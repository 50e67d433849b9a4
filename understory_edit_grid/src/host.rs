// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: row creation, field access, and side channels into the grid.

use alloc::vec::Vec;

use crate::types::{CellKey, EditState};

/// The grid host an [`EditContext`](crate::EditContext) drives.
///
/// `R` is the row handle the cells refer to; the context compares rows by equality.
pub trait GridHost<R> {
    /// Value type exchanged through the field bridge.
    type Value;

    /// Produce a new default row and append it to the backing collection.
    ///
    /// Returns the handle cells of that row will be registered with.
    fn append_new_row(&mut self) -> R;

    /// Read `field` of `row`.
    fn field_value(&self, row: &R, field: &str) -> Option<Self::Value>;

    /// Write `field` of `row`. Returns false if the row or field is unknown.
    fn set_field_value(&mut self, row: &R, field: &str, value: Self::Value) -> bool;

    /// Keep the grid's highlighted row in sync with the edited cell.
    fn select_row(&mut self, _row: &R) {}

    /// A cell entered or left edit mode.
    fn edit_state_changed(&mut self, _cell: CellKey, _state: EditState) {}
}

/// Per-record field access, implemented by the host for its row type.
pub trait FieldAccess {
    /// Value type of fields.
    type Value;

    /// Read a field by name.
    fn field_value(&self, field: &str) -> Option<Self::Value>;

    /// Write a field by name. Returns false if the field is unknown.
    fn set_field_value(&mut self, field: &str, value: Self::Value) -> bool;
}

/// Position of a record in a [`VecGrid`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RowIndex(pub usize);

/// A [`GridHost`] over a plain `Vec` of records.
///
/// Rows are addressed by [`RowIndex`]. New rows come from a factory function
/// (by default [`Default::default`]). The last row passed to
/// [`select_row`](GridHost::select_row) is tracked as the selected row.
pub struct VecGrid<T> {
    rows: Vec<T>,
    factory: fn() -> T,
    selected: Option<RowIndex>,
}

impl<T> core::fmt::Debug for VecGrid<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VecGrid")
            .field("rows", &self.rows.len())
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl<T: Default> VecGrid<T> {
    /// Wrap `rows`, creating new rows with `T::default()`.
    pub fn new(rows: Vec<T>) -> Self {
        Self::with_factory(rows, T::default)
    }
}

impl<T> VecGrid<T> {
    /// Wrap `rows`, creating new rows with `factory`.
    pub fn with_factory(rows: Vec<T>, factory: fn() -> T) -> Self {
        Self {
            rows,
            factory,
            selected: None,
        }
    }

    /// The backing records.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Handles of all rows in order.
    pub fn row_indices(&self) -> impl Iterator<Item = RowIndex> + '_ {
        (0..self.rows.len()).map(RowIndex)
    }

    /// Record at `row`.
    pub fn get(&self, row: RowIndex) -> Option<&T> {
        self.rows.get(row.0)
    }

    /// Last row selected by the edit context.
    pub fn selected(&self) -> Option<RowIndex> {
        self.selected
    }

    /// Consume the grid, returning the records.
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T: FieldAccess> GridHost<RowIndex> for VecGrid<T> {
    type Value = T::Value;

    fn append_new_row(&mut self) -> RowIndex {
        self.rows.push((self.factory)());
        RowIndex(self.rows.len() - 1)
    }

    fn field_value(&self, row: &RowIndex, field: &str) -> Option<T::Value> {
        self.rows.get(row.0)?.field_value(field)
    }

    fn set_field_value(&mut self, row: &RowIndex, field: &str, value: T::Value) -> bool {
        self.rows
            .get_mut(row.0)
            .is_some_and(|r| r.set_field_value(field, value))
    }

    fn select_row(&mut self, row: &RowIndex) {
        self.selected = Some(*row);
    }
}
