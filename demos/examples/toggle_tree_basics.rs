// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle tree basics.
//!
//! Builds a small folder hierarchy, binds a "checkbox" to every node, and
//! prints the view updates each toggle produces. Set `RUST_LOG=debug` style
//! filtering through the default subscriber to see the engine's events.
//!
//! Run:
//! - `cargo run -p understory_demos --example toggle_tree_basics`

use understory_toggle_tree::{CheckState, CheckTree, ViewUpdate, deliver};

#[derive(Debug)]
struct Folder {
    name: &'static str,
    children: Vec<Folder>,
}

fn folder(name: &'static str, children: Vec<Folder>) -> Folder {
    Folder { name, children }
}

fn glyph(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
    }
}

fn print_tree(tree: &CheckTree<Folder, String>) {
    fn walk(tree: &CheckTree<Folder, String>, id: &str, depth: usize) {
        let Some(node) = tree.node_id(id) else { return };
        let state = tree.state(id).unwrap_or_default();
        println!("  {}{} {}", "  ".repeat(depth), glyph(state), id);
        for &child in tree.children(node) {
            if let Some(child_id) = tree.id_of(child) {
                walk(tree, child_id, depth + 1);
            }
        }
    }
    for &root in tree.roots() {
        if let Some(id) = tree.id_of(root) {
            walk(tree, id, 0);
        }
    }
}

fn show(updates: Vec<ViewUpdate<String>>) {
    deliver(updates, &mut |view: &String, state| {
        println!("    view {view} -> {}", glyph(state));
    });
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let roots = vec![
        folder(
            "src",
            vec![
                folder("lib.rs", vec![]),
                folder("tree.rs", vec![]),
                folder("toggle.rs", vec![]),
            ],
        ),
        folder("docs", vec![folder("guide.md", vec![])]),
    ];

    let mut tree: CheckTree<Folder, String> = CheckTree::new();
    tree.fill_from_hierarchy(
        roots,
        |f| f.name.to_string(),
        |f| std::mem::take(&mut f.children),
    )
    .expect("folder names are unique");

    for id in ["src", "lib.rs", "tree.rs", "toggle.rs", "docs", "guide.md"] {
        let replay = tree
            .register_view(id, format!("checkbox:{id}"))
            .expect("node exists");
        show(vec![replay]);
    }

    println!("toggle tree.rs:");
    show(tree.toggle("tree.rs").expect("node exists"));
    print_tree(&tree);

    println!("toggle src (indeterminate -> checked):");
    show(tree.toggle("src").expect("node exists"));
    print_tree(&tree);

    println!("toggle guide.md:");
    show(tree.toggle("guide.md").expect("node exists"));
    print_tree(&tree);

    let selected: Vec<&str> = tree.selected().map(|f| f.name).collect();
    println!("selected: {selected:?}");
}
