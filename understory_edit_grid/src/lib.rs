// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_edit_grid --heading-base-level=0

//! Understory Edit Grid: headless cell navigation and edit sessions for in-place grid editing.
//!
//! ## Overview
//!
//! This crate tracks which cell of a data grid is being edited and decides where editing goes next.
//! It does not render cells or capture keys.
//! The host mounts cells, forwards clicks and navigation keys, and receives the resulting state changes.
//!
//! ## Cells and order
//!
//! Each mounted editable cell registers with the [`EditContext`] and gets a [`CellKey`].
//! The registry keeps mount order, which the host must keep equal to visual reading order (row-major, left to right).
//! The context cannot check this; navigation is only as correct as the mount order.
//!
//! ## Edit session
//!
//! At most one cell is [`Editing`](EditState::Editing).
//! Starting an edit ends the previous one, tells the host which cell changed, and asks it to select the cell's row.
//!
//! ## Selectors
//!
//! Navigation rules implement [`CellSelector`]: [`NextCell`], [`PrevCell`], [`NextCellInColumn`],
//! [`PrevCellInColumn`], and [`FirstCellOfRow`]. A rule that finds no target is a no-op, not an error.
//! With `keep`, [`EditContext::start_edit_with`] parks the rule and retries it on each new
//! registration, which is how editing continues into a row whose cells have not mounted yet.
//!
//! ## Workflow
//!
//! ```
//! use understory_edit_grid::{
//!     EditContext, FieldAccess, NavIntent, NavOutcome, RowIndex, VecGrid,
//! };
//!
//! #[derive(Default)]
//! struct Forecast {
//!     summary: String,
//! }
//!
//! impl FieldAccess for Forecast {
//!     type Value = String;
//!     fn field_value(&self, field: &str) -> Option<String> {
//!         (field == "summary").then(|| self.summary.clone())
//!     }
//!     fn set_field_value(&mut self, field: &str, value: String) -> bool {
//!         if field != "summary" {
//!             return false;
//!         }
//!         self.summary = value;
//!         true
//!     }
//! }
//!
//! let mut cx = EditContext::new(VecGrid::new(vec![Forecast::default()]));
//! let cell = cx.register_cell(RowIndex(0), "summary");
//! cx.start_edit(cell);
//!
//! // Enter on the last cell appends a row; editing moves there once it mounts.
//! let intent = NavIntent::from_key("Enter", false).unwrap();
//! assert_eq!(cx.navigate(cell, intent), NavOutcome::Deferred);
//! let next = cx.register_cell(RowIndex(1), "summary");
//! assert_eq!(cx.active_cell(), Some(next));
//! ```
//!
//! ## Threading
//!
//! Every call runs to completion synchronously; the parked request is retried on registration
//! events, not on a timer. Drive a context from one UI event loop.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for edit starts/ends, parked navigation, and row creation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod host;
mod navigate;
mod selector;
mod types;

pub use context::EditContext;
pub use host::{FieldAccess, GridHost, RowIndex, VecGrid};
pub use navigate::NavIntent;
pub use selector::{
    CellSelector, FirstCellOfRow, NextCell, NextCellInColumn, PrevCell, PrevCellInColumn,
};
pub use types::{CellEntry, CellKey, EditState, NavOutcome, RowAppendPolicy};
