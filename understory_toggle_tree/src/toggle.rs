// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tri-state propagation.
//!
//! Setting a node to a definite state forces every descendant to that state,
//! then walks the ancestor chain recomputing each ancestor from its children.
//! The walk stops at the first ancestor whose recomputed state equals its stored
//! state, so the upward part costs at most the node's depth.
//!
//! Only assignments that change a stored state produce a [`ViewUpdate`], and
//! only for nodes with a bound view. Updates are ordered: the node itself, its
//! descendants in pre-order, then ancestors from inner-most to outer-most.

use alloc::vec::Vec;

use crate::error::TreeError;
use crate::tree::CheckTree;
use crate::types::{CheckState, NodeId};
use crate::view::ViewUpdate;

impl<T, W: Clone> CheckTree<T, W> {
    /// Flip the state of node `id` and propagate.
    ///
    /// Checked becomes unchecked and unchecked becomes checked. An indeterminate
    /// node follows the [`IndeterminatePolicy`](crate::IndeterminatePolicy)
    /// (checked by default).
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownIdentifier`] if `id` is not in the tree.
    pub fn toggle(&mut self, id: &str) -> Result<Vec<ViewUpdate<W>>, TreeError> {
        let node = self.lookup(id)?;
        let target = self.node(node).state.toggled(self.policy);
        #[cfg(feature = "tracing")]
        tracing::debug!(id, from = ?self.node(node).state, to = ?target, "toggle");
        Ok(self.apply(node, target))
    }

    /// Set node `id` checked or unchecked and propagate, as a toggle would.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownIdentifier`] if `id` is not in the tree.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<Vec<ViewUpdate<W>>, TreeError> {
        let node = self.lookup(id)?;
        let target = if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        };
        Ok(self.apply(node, target))
    }

    fn apply(&mut self, node: NodeId, state: CheckState) -> Vec<ViewUpdate<W>> {
        let mut updates = Vec::new();
        self.assign(node, state, &mut updates);
        self.force_descendants(node, state, &mut updates);
        self.recompute_ancestors(node, &mut updates);
        updates
    }

    /// Store `state` on `node`, recording a view update if it changed.
    fn assign(&mut self, node: NodeId, state: CheckState, updates: &mut Vec<ViewUpdate<W>>) {
        let n = self.node_mut(node);
        if n.state == state {
            return;
        }
        n.state = state;
        #[cfg(feature = "tracing")]
        tracing::trace!(id = %n.id, ?state, "state changed");
        if let Some(view) = &n.view {
            updates.push(ViewUpdate {
                view: view.clone(),
                node,
                state,
            });
        }
    }

    fn force_descendants(
        &mut self,
        node: NodeId,
        state: CheckState,
        updates: &mut Vec<ViewUpdate<W>>,
    ) {
        // Indeterminate never propagates downward.
        if !state.is_definite() {
            return;
        }
        let mut stack: Vec<NodeId> = self.node(node).children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            self.assign(n, state, updates);
            stack.extend(self.node(n).children.iter().rev().copied());
        }
    }

    fn recompute_ancestors(&mut self, node: NodeId, updates: &mut Vec<ViewUpdate<W>>) {
        let mut current = self.node(node).parent;
        while let Some(p) = current {
            let aggregate =
                CheckState::aggregate(self.node(p).children.iter().map(|c| self.node(*c).state));
            if aggregate == self.node(p).state {
                break;
            }
            self.assign(p, aggregate, updates);
            current = self.node(p).parent;
        }
    }
}
