// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for tri-state propagation.
//!
//! 1. After any toggle sequence, every node agrees with the leaves below it.
//! 2. A toggle forces the whole subtree of the toggled node.
//! 3. Attaching a view replays exactly the current state.
//! 4. Flat input order does not change the resulting shape.

use proptest::prelude::*;
use proptest::sample::Index;
use understory_toggle_tree::{CheckState, CheckTree, NodeId};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Flat forest description: `parents[i]` is `None` or an index `< i`.
fn forest_strategy() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec((any::<bool>(), any::<Index>()), 1..40).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (root, pick))| {
                if i == 0 || root {
                    None
                } else {
                    Some(pick.index(i))
                }
            })
            .collect()
    })
}

fn build(parents: &[Option<usize>], order: &[usize]) -> CheckTree<usize, usize> {
    let mut tree = CheckTree::new();
    tree.fill_from_flat(
        order.iter().copied(),
        |i| i.to_string(),
        |i| parents[*i].map(|p| p.to_string()),
    )
    .expect("generated forests are well formed");
    tree
}

fn leaf_aggregate(tree: &CheckTree<usize, usize>, node: NodeId) -> CheckState {
    let children = tree.children(node);
    if children.is_empty() {
        let id = tree.id_of(node).unwrap();
        return tree.state(id).unwrap();
    }
    CheckState::aggregate(children.iter().map(|c| leaf_aggregate(tree, *c)))
}

fn subtree(tree: &CheckTree<usize, usize>, node: NodeId, out: &mut Vec<NodeId>) {
    for c in tree.children(node) {
        out.push(*c);
        subtree(tree, *c, out);
    }
}

fn state_of(tree: &CheckTree<usize, usize>, node: NodeId) -> CheckState {
    tree.state(tree.id_of(node).unwrap()).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Every node agrees with its leaves
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn states_agree_with_leaves(
        parents in forest_strategy(),
        toggles in prop::collection::vec(any::<Index>(), 0..30),
    ) {
        let order: Vec<usize> = (0..parents.len()).collect();
        let mut tree = build(&parents, &order);
        for t in toggles {
            let id = t.index(parents.len()).to_string();
            tree.toggle(&id).unwrap();
            for i in 0..parents.len() {
                let node = tree.node_id(&i.to_string()).unwrap();
                prop_assert_eq!(
                    state_of(&tree, node),
                    leaf_aggregate(&tree, node),
                    "node {} disagrees with its leaves", i
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Toggle forces the subtree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggle_forces_subtree(
        parents in forest_strategy(),
        warmup in prop::collection::vec(any::<Index>(), 0..10),
        target in any::<Index>(),
    ) {
        let order: Vec<usize> = (0..parents.len()).collect();
        let mut tree = build(&parents, &order);
        for t in warmup {
            tree.toggle(&t.index(parents.len()).to_string()).unwrap();
        }
        let id = target.index(parents.len()).to_string();
        tree.toggle(&id).unwrap();
        let node = tree.node_id(&id).unwrap();
        let state = state_of(&tree, node);
        prop_assert!(state.is_definite());
        let mut below = Vec::new();
        subtree(&tree, node, &mut below);
        for d in below {
            prop_assert_eq!(state_of(&tree, d), state);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. View replay on attach
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn register_replays_current_state(
        parents in forest_strategy(),
        toggles in prop::collection::vec(any::<Index>(), 0..10),
        target in any::<Index>(),
    ) {
        let order: Vec<usize> = (0..parents.len()).collect();
        let mut tree = build(&parents, &order);
        for t in toggles {
            tree.toggle(&t.index(parents.len()).to_string()).unwrap();
        }
        let id = target.index(parents.len()).to_string();
        let replay = tree.register_view(&id, 99).unwrap();
        prop_assert_eq!(replay.view, 99);
        prop_assert_eq!(Some(replay.state), tree.state(&id));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Flat-mode order independence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flat_order_independent(parents in forest_strategy()) {
        let forward: Vec<usize> = (0..parents.len()).collect();
        let backward: Vec<usize> = forward.iter().rev().copied().collect();
        let a = build(&parents, &forward);
        let b = build(&parents, &backward);
        prop_assert_eq!(a.len(), b.len());
        for i in 0..parents.len() {
            let id = i.to_string();
            let pa = a.parent(a.node_id(&id).unwrap()).map(|p| a.id_of(p).unwrap().to_string());
            let pb = b.parent(b.node_id(&id).unwrap()).map(|p| b.id_of(p).unwrap().to_string());
            prop_assert_eq!(pa, pb, "parent of {} differs", i);

            let mut ca: Vec<_> = a.children(a.node_id(&id).unwrap()).iter().map(|c| a.id_of(*c).unwrap()).collect();
            let mut cb: Vec<_> = b.children(b.node_id(&id).unwrap()).iter().map(|c| b.id_of(*c).unwrap()).collect();
            ca.sort_unstable();
            cb.sort_unstable();
            prop_assert_eq!(ca, cb, "children of {} differ", i);
        }
    }
}
