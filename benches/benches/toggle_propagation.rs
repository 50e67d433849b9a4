// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_toggle_tree::CheckTree;

/// Complete tree of the given fanout and depth, as flat (id, parent) pairs.
fn gen_complete(fanout: usize, depth: usize) -> Vec<(usize, Option<usize>)> {
    let mut out = vec![(0, None)];
    let mut level = vec![0usize];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fanout);
        for &p in &level {
            for _ in 0..fanout {
                let id = out.len();
                out.push((id, Some(p)));
                next.push(id);
            }
        }
        level = next;
    }
    out
}

/// Single chain, the worst case for the upward walk.
fn gen_chain(len: usize) -> Vec<(usize, Option<usize>)> {
    (0..len).map(|i| (i, i.checked_sub(1))).collect()
}

fn build(items: &[(usize, Option<usize>)]) -> CheckTree<usize> {
    let mut tree = CheckTree::new();
    tree.fill_from_flat(
        items.iter().map(|(id, _)| *id),
        |id| id.to_string(),
        |id| items[*id].1.map(|p| p.to_string()),
    )
    .unwrap();
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &depth in &[3usize, 5, 7] {
        let items = gen_complete(4, depth);
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_function(format!("flat_fanout4_depth{}", depth), |b| {
            b.iter(|| black_box(build(&items).len()));
        });
        // Children first: every attachment goes through the deferred queue.
        let reversed: Vec<_> = items.iter().rev().copied().collect();
        group.bench_function(format!("flat_reversed_fanout4_depth{}", depth), |b| {
            b.iter(|| {
                let mut tree: CheckTree<usize> = CheckTree::new();
                tree.fill_from_flat(
                    reversed.iter().map(|(id, _)| *id),
                    |id| id.to_string(),
                    |id| items[*id].1.map(|p| p.to_string()),
                )
                .unwrap();
                black_box(tree.len())
            });
        });
    }
    // One wide parent listed after all of its children.
    for &n in &[1_000usize, 10_000] {
        let ids: Vec<String> = (0..=n).map(|i| i.to_string()).collect();
        group.throughput(Throughput::Elements(n as u64 + 1));
        group.bench_function(format!("flat_wide_parent_last{}", n), |b| {
            b.iter(|| {
                let mut tree: CheckTree<usize> = CheckTree::new();
                tree.fill_from_flat(
                    0..=n,
                    |i| ids[*i].clone(),
                    |i| (*i < n).then(|| ids[n].clone()),
                )
                .unwrap();
                black_box(tree.len())
            });
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    for &depth in &[3usize, 5, 7] {
        let items = gen_complete(4, depth);
        let leaf = (items.len() - 1).to_string();
        group.bench_function(format!("leaf_fanout4_depth{}", depth), |b| {
            b.iter_batched(
                || build(&items),
                |mut tree| black_box(tree.toggle(&leaf).unwrap().len()),
                BatchSize::LargeInput,
            );
        });
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_function(format!("root_fanout4_depth{}", depth), |b| {
            b.iter_batched(
                || build(&items),
                |mut tree| black_box(tree.toggle("0").unwrap().len()),
                BatchSize::LargeInput,
            );
        });
    }
    let chain = gen_chain(4096);
    let tail = (chain.len() - 1).to_string();
    group.bench_function("leaf_chain4096", |b| {
        b.iter_batched(
            || build(&chain),
            |mut tree| black_box(tree.toggle(&tail).unwrap().len()),
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

fn bench_selected(c: &mut Criterion) {
    let items = gen_complete(4, 6);
    let mut tree = build(&items);
    for id in (1..items.len()).step_by(3) {
        let _ = tree.toggle(&id.to_string()).unwrap();
    }
    c.bench_function("selected_fanout4_depth6", |b| {
        b.iter(|| black_box(tree.selected().count()));
    });
}

criterion_group!(benches, bench_build, bench_toggle, bench_selected);
criterion_main!(benches);
