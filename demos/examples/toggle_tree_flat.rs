// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat build with out-of-order rows.
//!
//! Rows arrive as they would from a database query: each names its parent by
//! id, and children may come before their parents. Also shows the errors a
//! malformed input produces.
//!
//! Run:
//! - `cargo run -p understory_demos --example toggle_tree_flat`

use understory_toggle_tree::{CheckTree, IndeterminatePolicy};

#[derive(Clone, Debug)]
struct Row {
    id: &'static str,
    parent: Option<&'static str>,
    label: &'static str,
}

const fn row(id: &'static str, parent: Option<&'static str>, label: &'static str) -> Row {
    Row { id, parent, label }
}

fn build(rows: &[Row]) -> Result<CheckTree<Row>, understory_toggle_tree::TreeError> {
    let mut tree = CheckTree::new();
    tree.fill_from_flat(
        rows.iter().cloned(),
        |r| r.id.to_string(),
        |r| r.parent.map(str::to_string),
    )?;
    Ok(tree)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let rows = [
        row("apples", Some("fruit"), "Apples"),
        row("fruit", Some("produce"), "Fruit"),
        row("carrots", Some("veg"), "Carrots"),
        row("produce", None, "Produce"),
        row("veg", Some("produce"), "Vegetables"),
        row("pears", Some("fruit"), "Pears"),
    ];

    let mut tree = build(&rows).expect("rows form a forest");
    println!("built {} nodes, roots: {:?}", tree.len(), tree.roots().len());

    let _ = tree.toggle("apples").expect("node exists");
    println!("after apples: produce = {:?}", tree.state("produce"));

    tree.set_indeterminate_policy(IndeterminatePolicy::Uncheck);
    let _ = tree.toggle("produce").expect("node exists");
    println!(
        "after produce with Uncheck policy: {:?}",
        tree.selected().map(|r| r.label).collect::<Vec<_>>()
    );

    let dangling = [row("a", None, "A"), row("b", Some("missing"), "B")];
    if let Err(e) = build(&dangling) {
        println!("dangling parent: {e}");
    }

    let duplicate = [row("a", None, "A"), row("a", None, "A again")];
    if let Err(e) = build(&duplicate) {
        println!("duplicate id: {e}");
    }

    let cycle = [row("x", Some("y"), "X"), row("y", Some("x"), "Y")];
    if let Err(e) = build(&cycle) {
        println!("cycle: {e}");
    }
}
