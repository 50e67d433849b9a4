// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node store: slots, identifier index, structural accessors, and view bindings.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::TreeError;
use crate::types::{CheckState, IndeterminatePolicy, NodeId};
use crate::view::ViewUpdate;

#[derive(Clone, Debug)]
pub(crate) struct Node<T, W> {
    pub(crate) id: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) payload: T,
    pub(crate) state: CheckState,
    pub(crate) view: Option<W>,
}

/// A tri-state check tree over caller payloads `T`, with optional view handles `W`.
///
/// Nodes are created in bulk by [`fill_from_hierarchy`](Self::fill_from_hierarchy) or
/// [`fill_from_flat`](Self::fill_from_flat); each call replaces the whole tree.
/// Nodes are addressed by their string identifier or by [`NodeId`].
pub struct CheckTree<T, W = ()> {
    pub(crate) nodes: Vec<Node<T, W>>,
    pub(crate) index: BTreeMap<String, NodeId>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) generation: u32,
    pub(crate) policy: IndeterminatePolicy,
}

impl<T, W> core::fmt::Debug for CheckTree<T, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let checked = self
            .nodes
            .iter()
            .filter(|n| n.state == CheckState::Checked)
            .count();
        let bound = self.nodes.iter().filter(|n| n.view.is_some()).count();
        f.debug_struct("CheckTree")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots.len())
            .field("checked", &checked)
            .field("bound_views", &bound)
            .field("generation", &self.generation)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<T, W> Default for CheckTree<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> CheckTree<T, W> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
            roots: Vec::new(),
            generation: 1,
            policy: IndeterminatePolicy::default(),
        }
    }

    /// Drop every node and view binding.
    ///
    /// Outstanding [`NodeId`]s become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.roots.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Choose what toggling an indeterminate node does.
    pub fn set_indeterminate_policy(&mut self, policy: IndeterminatePolicy) {
        self.policy = policy;
    }

    /// Current indeterminate toggle policy.
    pub fn indeterminate_policy(&self) -> IndeterminatePolicy {
        self.policy
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if a node with identifier `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns true if `node` was issued by the current build and is in range.
    pub fn is_alive(&self, node: NodeId) -> bool {
        node.1 == self.generation && node.idx() < self.nodes.len()
    }

    /// Resolve an identifier to its node handle.
    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Identifier of a live node.
    pub fn id_of(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|n| n.id.as_str())
    }

    /// Root nodes in input order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Parent of a live node; `None` for roots and stale handles.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    /// Children of a live node in order; empty for stale handles.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// State of the node with identifier `id`.
    pub fn state(&self, id: &str) -> Option<CheckState> {
        self.node_id(id).map(|n| self.node(n).state)
    }

    /// Payload of the node with identifier `id`.
    pub fn payload(&self, id: &str) -> Option<&T> {
        self.node_id(id).map(|n| &self.node(n).payload)
    }

    /// Payloads of all nodes whose state is exactly [`CheckState::Checked`].
    ///
    /// Indeterminate nodes are excluded. Yields in node creation order.
    pub fn selected(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.state == CheckState::Checked)
            .map(|n| &n.payload)
    }

    /// Identifiers of all checked nodes, in node creation order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.state == CheckState::Checked)
            .map(|n| n.id.as_str())
    }

    /// Bind `view` to the node `id`, replacing any previous binding.
    ///
    /// Returns the replay of the node's current state so a late-mounting view
    /// starts consistent.
    pub fn register_view(&mut self, id: &str, view: W) -> Result<ViewUpdate<W>, TreeError>
    where
        W: Clone,
    {
        let node = self.lookup(id)?;
        let n = self.node_mut(node);
        n.view = Some(view.clone());
        Ok(ViewUpdate {
            view,
            node,
            state: n.state,
        })
    }

    /// Detach the view bound to node `id`, returning it.
    pub fn unregister_view(&mut self, id: &str) -> Result<Option<W>, TreeError> {
        let node = self.lookup(id)?;
        Ok(self.node_mut(node).view.take())
    }

    /// View handle bound to node `id`, if any.
    pub fn view(&self, id: &str) -> Option<&W> {
        self.node_id(id).and_then(|n| self.node(n).view.as_ref())
    }

    // --- internals ---

    pub(crate) fn lookup(&self, id: &str) -> Result<NodeId, TreeError> {
        self.node_id(id)
            .ok_or_else(|| TreeError::UnknownIdentifier(id.to_string()))
    }

    fn get(&self, node: NodeId) -> Option<&Node<T, W>> {
        if node.1 != self.generation {
            return None;
        }
        self.nodes.get(node.idx())
    }

    /// Access a node; panics if `node` is out of range.
    pub(crate) fn node(&self, node: NodeId) -> &Node<T, W> {
        &self.nodes[node.idx()]
    }

    pub(crate) fn node_mut(&mut self, node: NodeId) -> &mut Node<T, W> {
        &mut self.nodes[node.idx()]
    }

    /// Allocate a detached node and index it.
    pub(crate) fn push_node(&mut self, id: String, payload: T) -> Result<NodeId, TreeError> {
        if self.index.contains_key(&id) {
            return Err(TreeError::DuplicateIdentifier(id));
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let node = NodeId::new(self.nodes.len() as u32, self.generation);
        self.index.insert(id.clone(), node);
        self.nodes.push(Node {
            id,
            parent: None,
            children: Vec::new(),
            payload,
            state: CheckState::Unchecked,
            view: None,
        });
        Ok(node)
    }

    /// Append `child` to `parent`'s children, or to the roots.
    pub(crate) fn link(&mut self, parent: Option<NodeId>, child: NodeId) {
        match parent {
            Some(p) => {
                self.node_mut(p).children.push(child);
                self.node_mut(child).parent = Some(p);
            }
            None => self.roots.push(child),
        }
    }
}
