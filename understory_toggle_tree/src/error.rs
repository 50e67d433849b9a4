// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building or addressing a check tree.

use alloc::string::String;

/// Failure of a tree build or of an operation addressed by identifier.
///
/// Build errors are fatal to that build call: the tree is left empty.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// Two input items share an identifier.
    #[error("duplicate node identifier '{0}'")]
    DuplicateIdentifier(String),
    /// A flat-mode item references a parent identifier that never appears.
    #[error("parent id '{parent}' of node '{id}' not found")]
    UnresolvedParent {
        /// Identifier of the orphaned item.
        id: String,
        /// The missing parent identifier.
        parent: String,
    },
    /// Flat-mode parent links form a cycle that never reaches a root.
    #[error("node '{0}' is part of a parent cycle")]
    CyclicParent(String),
    /// No node with this identifier exists in the current tree.
    #[error("unknown node identifier '{0}'")]
    UnknownIdentifier(String),
}
