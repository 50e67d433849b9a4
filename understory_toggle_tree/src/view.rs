// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View bindings: state notifications for externally owned node views.
//!
//! The tree never owns a view. A node is bound to at most one view *handle*
//! `W` (for example a widget id), and every state change of a bound node is
//! reported as a [`ViewUpdate`]. Hosts push those to their view objects, either
//! by hand or through a [`NodeViewSink`] with [`deliver`].
//!
//! ```
//! use understory_toggle_tree::{CheckState, CheckTree, deliver};
//!
//! let mut tree: CheckTree<&str, u32> = CheckTree::new();
//! tree.fill_from_flat(["root"], |s| (*s).into(), |_| None).unwrap();
//!
//! let mut seen = Vec::new();
//! let replay = tree.register_view("root", 7).unwrap();
//! deliver([replay], &mut |w: &u32, s| seen.push((*w, s)));
//! let updates = tree.toggle("root").unwrap();
//! deliver(updates, &mut |w: &u32, s| seen.push((*w, s)));
//!
//! assert_eq!(seen, [(7, CheckState::Unchecked), (7, CheckState::Checked)]);
//! ```

use crate::types::{CheckState, NodeId};

/// A state notification addressed to a bound view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViewUpdate<W> {
    /// View handle the node is bound to.
    pub view: W,
    /// Node whose state is reported.
    pub node: NodeId,
    /// The node's new (or, on attach, current) state.
    pub state: CheckState,
}

/// Host-side receiver of view state pushes.
///
/// Implemented for any `FnMut(&W, CheckState)`.
pub trait NodeViewSink<W> {
    /// Push `state` to the view identified by `view`.
    fn set_state(&mut self, view: &W, state: CheckState);
}

impl<W, F: FnMut(&W, CheckState)> NodeViewSink<W> for F {
    fn set_state(&mut self, view: &W, state: CheckState) {
        self(view, state);
    }
}

/// Push every update, in order, to `sink`.
pub fn deliver<W, S>(updates: impl IntoIterator<Item = ViewUpdate<W>>, sink: &mut S)
where
    S: NodeViewSink<W> + ?Sized,
{
    for u in updates {
        sink.set_state(&u.view, u.state);
    }
}
