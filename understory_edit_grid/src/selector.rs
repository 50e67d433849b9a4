// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation selectors: pure traversal rules over the cell registry.
//!
//! Each selector looks at the registry in mount order and names the cell that
//! editing should move to, or `None` when there is no such cell. A selector
//! whose reference cell is no longer registered resolves to `None`.
//!
//! | Selector | Target |
//! |---|---|
//! | [`NextCell`] | next entry; none after the last |
//! | [`PrevCell`] | previous entry; none before the first |
//! | [`NextCellInColumn`] | nearest following entry with the same field |
//! | [`PrevCellInColumn`] | nearest preceding entry with the same field |
//! | [`FirstCellOfRow`] | first entry whose row equals the given row |
//!
//! Custom rules can be written as closures over the registry slice.

use crate::types::{CellEntry, CellKey};

/// A navigation rule resolving a target cell from the registry.
pub trait CellSelector<R> {
    /// Pick the target cell, or `None` if the rule has no target.
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey>;
}

impl<R, F> CellSelector<R> for F
where
    F: Fn(&[CellEntry<R>]) -> Option<CellKey>,
{
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey> {
        self(cells)
    }
}

fn position<R>(cells: &[CellEntry<R>], key: CellKey) -> Option<usize> {
    cells.iter().position(|c| c.key == key)
}

/// The cell after the reference cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NextCell(pub CellKey);

impl<R> CellSelector<R> for NextCell {
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey> {
        let i = position(cells, self.0)?;
        cells.get(i + 1).map(|c| c.key)
    }
}

/// The cell before the reference cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrevCell(pub CellKey);

impl<R> CellSelector<R> for PrevCell {
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey> {
        let i = position(cells, self.0)?;
        i.checked_sub(1).map(|j| cells[j].key)
    }
}

/// The nearest following cell editing the same field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NextCellInColumn(pub CellKey);

impl<R> CellSelector<R> for NextCellInColumn {
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey> {
        let i = position(cells, self.0)?;
        let field = &cells[i].field;
        cells[i + 1..]
            .iter()
            .find(|c| c.field == *field)
            .map(|c| c.key)
    }
}

/// The nearest preceding cell editing the same field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrevCellInColumn(pub CellKey);

impl<R> CellSelector<R> for PrevCellInColumn {
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey> {
        let i = position(cells, self.0)?;
        let field = &cells[i].field;
        cells[..i]
            .iter()
            .rev()
            .find(|c| c.field == *field)
            .map(|c| c.key)
    }
}

/// The first mounted cell of a row.
///
/// Used with `keep = true` to jump into a row whose cells have not mounted yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstCellOfRow<R>(pub R);

impl<R: PartialEq> CellSelector<R> for FirstCellOfRow<R> {
    fn select(&self, cells: &[CellEntry<R>]) -> Option<CellKey> {
        cells.iter().find(|c| c.row == self.0).map(|c| c.key)
    }
}
