// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the check tree: node handles, tri-state values, and policies.

/// Handle for a node in a [`CheckTree`](crate::CheckTree).
///
/// A `NodeId` consists of a slot index and the build generation of the tree it
/// was issued by. Every rebuild ([`fill_from_hierarchy`](crate::CheckTree::fill_from_hierarchy),
/// [`fill_from_flat`](crate::CheckTree::fill_from_flat), or [`clear`](crate::CheckTree::clear))
/// starts a new generation, so handles from an older tree never alias nodes of a newer one.
///
/// Use [`CheckTree::is_alive`](crate::CheckTree::is_alive) to check a handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Tri-state selection value of a node.
///
/// `Indeterminate` means some, but not all, of the node's descendants are checked.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CheckState {
    /// Node and its whole subtree are selected.
    Checked,
    /// Node and its whole subtree are not selected.
    #[default]
    Unchecked,
    /// Mixed subtree.
    Indeterminate,
}

impl CheckState {
    /// True for [`Checked`](Self::Checked) and [`Unchecked`](Self::Unchecked).
    pub const fn is_definite(self) -> bool {
        !matches!(self, Self::Indeterminate)
    }

    /// The state a user toggle moves to from `self`.
    ///
    /// `Indeterminate` resolves according to `policy`.
    pub const fn toggled(self, policy: IndeterminatePolicy) -> Self {
        match self {
            Self::Checked => Self::Unchecked,
            Self::Unchecked => Self::Checked,
            Self::Indeterminate => match policy {
                IndeterminatePolicy::Check => Self::Checked,
                IndeterminatePolicy::Uncheck => Self::Unchecked,
            },
        }
    }

    /// Aggregate the states of a node's children.
    ///
    /// Checked if every child is checked, unchecked if every child is unchecked,
    /// indeterminate otherwise. An empty set aggregates to `Unchecked`.
    pub fn aggregate(children: impl IntoIterator<Item = Self>) -> Self {
        let mut all_checked = true;
        let mut all_unchecked = true;
        for s in children {
            all_checked &= s == Self::Checked;
            all_unchecked &= s == Self::Unchecked;
            if !all_checked && !all_unchecked {
                return Self::Indeterminate;
            }
        }
        if all_unchecked {
            Self::Unchecked
        } else {
            Self::Checked
        }
    }
}

/// What toggling an [`Indeterminate`](CheckState::Indeterminate) node does.
///
/// Set with [`CheckTree::set_indeterminate_policy`](crate::CheckTree::set_indeterminate_policy).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum IndeterminatePolicy {
    /// Indeterminate is treated as "not fully on" and toggles to checked.
    #[default]
    Check,
    /// Indeterminate toggles to unchecked.
    Uncheck,
}
