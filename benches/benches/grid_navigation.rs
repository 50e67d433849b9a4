// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_edit_grid::{
    CellKey, EditContext, FieldAccess, NavIntent, NavOutcome, RowAppendPolicy, RowIndex, VecGrid,
};

#[derive(Clone, Default)]
struct Row {
    values: [i64; 8],
}

impl FieldAccess for Row {
    type Value = i64;

    fn field_value(&self, field: &str) -> Option<i64> {
        self.values.get(field.parse::<usize>().ok()?).copied()
    }

    fn set_field_value(&mut self, field: &str, value: i64) -> bool {
        match field.parse::<usize>().ok().and_then(|i| self.values.get_mut(i)) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }
}

type Cx = EditContext<RowIndex, VecGrid<Row>>;

fn mounted(rows: usize, fields: usize) -> (Cx, Vec<CellKey>) {
    let mut cx = EditContext::new(VecGrid::new(vec![Row::default(); rows]));
    cx.set_row_append_policy(RowAppendPolicy::Never);
    let mut keys = Vec::with_capacity(rows * fields);
    for r in 0..rows {
        for f in 0..fields {
            keys.push(cx.register_cell(RowIndex(r), f.to_string()));
        }
    }
    (cx, keys)
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for &rows in &[16usize, 128, 1024] {
        let cells = rows * 8;
        group.throughput(Throughput::Elements(cells as u64));
        group.bench_function(format!("walk_rows{}", rows), |b| {
            b.iter_batched(
                || mounted(rows, 8),
                |(mut cx, keys)| {
                    cx.start_edit(keys[0]);
                    let mut steps = 0;
                    while let Some(at) = cx.active_cell() {
                        if cx.navigate(at, NavIntent::CommitAndAdvance) != NavOutcome::Moved {
                            break;
                        }
                        steps += 1;
                    }
                    black_box(steps)
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("column");
    for &rows in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(format!("down_rows{}", rows), |b| {
            b.iter_batched(
                || mounted(rows, 8),
                |(mut cx, keys)| {
                    cx.start_edit(keys[3]);
                    let mut at = keys[3];
                    for _ in 1..rows {
                        cx.navigate(at, NavIntent::NextInColumn);
                        at = cx.active_cell().unwrap_or(at);
                    }
                    black_box(at)
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_deferred(c: &mut Criterion) {
    // Parked jump retried on every registration of a large new row.
    c.bench_function("deferred_append_fields64", |b| {
        b.iter_batched(
            || {
                let (mut cx, keys) = mounted(256, 8);
                cx.set_row_append_policy(RowAppendPolicy::Append);
                let last = keys[keys.len() - 1];
                cx.start_edit(last);
                (cx, last)
            },
            |(mut cx, last)| {
                let outcome = cx.navigate(last, NavIntent::CommitAndAdvance);
                for f in (0..64).rev() {
                    cx.register_cell(RowIndex(256), f.to_string());
                }
                black_box((outcome, cx.active_cell()))
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_register(c: &mut Criterion) {
    c.bench_function("register_rows1024_fields8", |b| {
        b.iter(|| black_box(mounted(1024, 8).1.len()));
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_column,
    bench_deferred,
    bench_register
);
criterion_main!(benches);
