// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_toggle_tree --heading-base-level=0

//! Understory Toggle Tree: a headless tri-state check tree.
//!
//! This crate keeps the selection state behind a checkable tree view.
//! It does not draw anything and does not capture input; the host renders nodes and calls in on clicks.
//!
//! - Builds the tree in bulk from nested input or from flat input with parent-id references.
//! - Toggling a node forces its whole subtree to the new state and recomputes ancestors upward.
//! - Ancestors aggregate as checked (all children checked), unchecked (all unchecked), or indeterminate.
//! - Each node can be bound to one external view handle, which receives a [`ViewUpdate`] whenever the node's state changes.
//!
//! ## API overview
//!
//! - [`CheckTree`]: node store, builders, propagation, and view bindings.
//! - [`CheckState`]: the tri-state value.
//! - [`IndeterminatePolicy`]: what toggling an indeterminate node does (checked by default).
//! - [`ViewUpdate`], [`NodeViewSink`], [`deliver`]: state pushes to host views.
//! - [`TreeError`]: build and lookup failures.
//!
//! Key operations:
//! - [`CheckTree::fill_from_hierarchy`] / [`CheckTree::fill_from_flat`]
//! - [`CheckTree::toggle`] → view updates
//! - [`CheckTree::selected`] → payloads of checked nodes
//! - [`CheckTree::register_view`] → replay of the current state
//!
//! ## Example
//!
//! ```
//! use understory_toggle_tree::{CheckState, CheckTree};
//!
//! struct Folder {
//!     name: &'static str,
//!     children: Vec<Folder>,
//! }
//!
//! let data = vec![Folder {
//!     name: "A",
//!     children: vec![
//!         Folder { name: "B", children: vec![] },
//!         Folder { name: "C", children: vec![] },
//!     ],
//! }];
//!
//! let mut tree: CheckTree<Folder> = CheckTree::new();
//! tree.fill_from_hierarchy(data, |f| f.name.into(), |f| std::mem::take(&mut f.children))
//!     .unwrap();
//!
//! tree.toggle("B").unwrap();
//! tree.toggle("C").unwrap();
//! assert_eq!(tree.state("A"), Some(CheckState::Checked));
//!
//! tree.toggle("B").unwrap();
//! assert_eq!(tree.state("A"), Some(CheckState::Indeterminate));
//!
//! let selected: Vec<_> = tree.selected().map(|f| f.name).collect();
//! assert_eq!(selected, ["C"]);
//! ```
//!
//! ## Threading
//!
//! All operations run to completion synchronously. The tree is meant to be driven by a single
//! UI event loop; hosts sharing it across threads must serialize access themselves.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for rebuilds, toggles, and individual state changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod build;
mod error;
mod toggle;
mod tree;
mod types;
mod view;

pub use error::TreeError;
pub use tree::CheckTree;
pub use types::{CheckState, IndeterminatePolicy, NodeId};
pub use view::{NodeViewSink, ViewUpdate, deliver};
