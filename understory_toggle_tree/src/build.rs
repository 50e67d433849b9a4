// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk construction from nested or flat (parent-id referenced) input.
//!
//! Both modes replace the entire tree. All nodes start [`Unchecked`](crate::CheckState::Unchecked)
//! and unbound. If a build fails, the tree is left empty.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::TreeError;
use crate::tree::CheckTree;
use crate::types::NodeId;

impl<T, W> CheckTree<T, W> {
    /// Rebuild the tree from nested input.
    ///
    /// `id_of` extracts an item's identifier and `children_of` extracts (takes)
    /// its child items. Nodes are built depth-first; a node is appended to its
    /// parent only once its own subtree is complete. Sibling order follows the
    /// input. Identifiers are indexed as nodes are created, before their
    /// children, so a duplicate is reported at its first repeat in depth-first
    /// order.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateIdentifier`] if two items share an identifier.
    pub fn fill_from_hierarchy<I, F, C, CI>(
        &mut self,
        roots: I,
        mut id_of: F,
        mut children_of: C,
    ) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> String,
        C: FnMut(&mut T) -> CI,
        CI: IntoIterator<Item = T>,
    {
        self.clear();
        let result = self.build_nested(None, roots, &mut id_of, &mut children_of);
        self.finish_build(result)
    }

    /// Rebuild the tree from flat input where each item names its parent.
    ///
    /// `parent_id_of` returns `None` for roots. Items may reference parents that
    /// appear later in the input; those are queued and attached after the single
    /// pass over the input. Children keep their input order regardless of
    /// whether their parent came first.
    ///
    /// # Errors
    ///
    /// - [`TreeError::DuplicateIdentifier`] if two items share an identifier.
    /// - [`TreeError::UnresolvedParent`] if a parent id never appears.
    /// - [`TreeError::CyclicParent`] if parent links loop without reaching a root.
    pub fn fill_from_flat<I, F, P>(
        &mut self,
        items: I,
        mut id_of: F,
        mut parent_id_of: P,
    ) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> String,
        P: FnMut(&T) -> Option<String>,
    {
        self.clear();
        let result = self.build_flat(items, &mut id_of, &mut parent_id_of);
        self.finish_build(result)
    }

    fn finish_build(&mut self, result: Result<(), TreeError>) -> Result<(), TreeError> {
        match result {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    nodes = self.nodes.len(),
                    roots = self.roots.len(),
                    "check tree rebuilt"
                );
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "check tree build failed");
                self.clear();
                Err(e)
            }
        }
    }

    fn build_nested<I, F, C, CI>(
        &mut self,
        parent: Option<NodeId>,
        items: I,
        id_of: &mut F,
        children_of: &mut C,
    ) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> String,
        C: FnMut(&mut T) -> CI,
        CI: IntoIterator<Item = T>,
    {
        for mut item in items {
            let id = id_of(&item);
            let children = children_of(&mut item);
            let node = self.push_node(id, item)?;
            // Parent is known before descending so children can link upward.
            self.node_mut(node).parent = parent;
            self.build_nested(Some(node), children, id_of, children_of)?;
            match parent {
                Some(p) => self.node_mut(p).children.push(node),
                None => self.roots.push(node),
            }
        }
        Ok(())
    }

    fn build_flat<I, F, P>(
        &mut self,
        items: I,
        id_of: &mut F,
        parent_id_of: &mut P,
    ) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> String,
        P: FnMut(&T) -> Option<String>,
    {
        let mut unassigned: Vec<(String, NodeId)> = Vec::new();
        for item in items {
            let id = id_of(&item);
            let parent_id = parent_id_of(&item);
            // Resolve before inserting so a self-reference is queued, not attached.
            let parent = parent_id.as_deref().and_then(|p| self.node_id(p));
            let node = self.push_node(id, item)?;
            match (parent_id, parent) {
                (None, _) => self.link(None, node),
                (Some(_), Some(p)) => self.link(Some(p), node),
                (Some(pid), None) => unassigned.push((pid, node)),
            }
        }

        let mut late_parents: Vec<NodeId> = Vec::new();
        for (pid, node) in unassigned {
            let Some(p) = self.node_id(&pid) else {
                return Err(TreeError::UnresolvedParent {
                    id: self.node(node).id.clone(),
                    parent: pid,
                });
            };
            self.link(Some(p), node);
            late_parents.push(p);
        }
        // Late attachments land after early ones; restore input order.
        late_parents.sort_unstable_by_key(|p| p.0);
        late_parents.dedup();
        for p in late_parents {
            self.node_mut(p).children.sort_unstable_by_key(|c| c.0);
        }

        self.check_reachable()
    }

    /// Every node must be reachable from a root; the rest sit on parent cycles.
    fn check_reachable(&self) -> Result<(), TreeError> {
        let mut seen = alloc::vec![false; self.nodes.len()];
        let mut stack: Vec<NodeId> = self.roots.clone();
        while let Some(n) = stack.pop() {
            seen[n.idx()] = true;
            stack.extend_from_slice(&self.node(n).children);
        }
        match seen.iter().position(|s| !s) {
            Some(i) => Err(TreeError::CyclicParent(self.nodes[i].id.clone())),
            None => Ok(()),
        }
    }
}
