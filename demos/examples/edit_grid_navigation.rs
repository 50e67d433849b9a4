// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit grid navigation.
//!
//! A forecast table with three editable columns. The host mounts cells in
//! reading order, feeds key presses to the context, and renders the new row
//! when the context asks for one.
//!
//! Run:
//! - `cargo run -p understory_demos --example edit_grid_navigation`

use understory_edit_grid::{
    CellKey, EditContext, EditState, FieldAccess, GridHost, NavIntent, RowIndex, VecGrid,
};

const FIELDS: [&str; 3] = ["date", "temperature_c", "summary"];

#[derive(Clone, Debug)]
struct Forecast {
    date: String,
    temperature_c: i32,
    summary: String,
}

impl Default for Forecast {
    fn default() -> Self {
        Self {
            date: "2025-01-01".into(),
            temperature_c: 0,
            summary: String::new(),
        }
    }
}

impl FieldAccess for Forecast {
    type Value = String;

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "date" => Some(self.date.clone()),
            "temperature_c" => Some(self.temperature_c.to_string()),
            "summary" => Some(self.summary.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: String) -> bool {
        match field {
            "date" => self.date = value,
            "temperature_c" => match value.parse() {
                Ok(t) => self.temperature_c = t,
                Err(_) => return false,
            },
            "summary" => self.summary = value,
            _ => return false,
        }
        true
    }
}

/// Wraps a [`VecGrid`] and reports what the context asks of the host.
#[derive(Debug)]
struct Table {
    grid: VecGrid<Forecast>,
    rows_to_render: Vec<RowIndex>,
}

impl GridHost<RowIndex> for Table {
    type Value = String;

    fn append_new_row(&mut self) -> RowIndex {
        let row = self.grid.append_new_row();
        println!("  host: appended row {}", row.0);
        self.rows_to_render.push(row);
        row
    }

    fn field_value(&self, row: &RowIndex, field: &str) -> Option<String> {
        self.grid.field_value(row, field)
    }

    fn set_field_value(&mut self, row: &RowIndex, field: &str, value: String) -> bool {
        self.grid.set_field_value(row, field, value)
    }

    fn select_row(&mut self, row: &RowIndex) {
        self.grid.select_row(row);
    }

    fn edit_state_changed(&mut self, cell: CellKey, state: EditState) {
        println!("  host: {cell:?} is now {state:?}");
    }
}

fn mount_row(cx: &mut EditContext<RowIndex, Table>, row: RowIndex) -> Vec<CellKey> {
    FIELDS
        .iter()
        .map(|field| cx.register_cell(row, *field))
        .collect()
}

fn press(cx: &mut EditContext<RowIndex, Table>, code: &str, shift: bool) {
    let Some(from) = cx.active_cell() else {
        println!("{code}: nothing is being edited");
        return;
    };
    let Some(intent) = NavIntent::from_key(code, shift) else {
        println!("{code}: handled by the cell editor");
        return;
    };
    let outcome = cx.navigate(from, intent);
    let at = cx
        .active_cell()
        .and_then(|k| cx.cell(k))
        .map(|c| format!("row {} {}", c.row.0, c.field));
    println!("{}{code}: {outcome:?}, editing {at:?}", if shift { "Shift+" } else { "" });
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let rows = vec![
        Forecast {
            date: "2025-06-01".into(),
            temperature_c: 21,
            summary: "Mild".into(),
        },
        Forecast {
            date: "2025-06-02".into(),
            temperature_c: 30,
            summary: "Hot".into(),
        },
    ];
    let mut cx = EditContext::new(Table {
        grid: VecGrid::new(rows),
        rows_to_render: Vec::new(),
    });

    let mut cells = Vec::new();
    for row in [RowIndex(0), RowIndex(1)] {
        cells.extend(mount_row(&mut cx, row));
    }

    // Click the first temperature cell.
    cx.start_edit(cells[1]);
    press(&mut cx, "Tab", false);
    press(&mut cx, "ArrowDown", true);
    press(&mut cx, "Tab", true);
    press(&mut cx, "ArrowLeft", false);

    // Type into the active cell and commit.
    if let Some(row) = cx.active_cell().and_then(|k| cx.cell(k)).map(|c| c.row) {
        let accepted = cx.set_field_value(&row, "temperature_c", "27".into());
        println!("write temperature_c = 27: {accepted}");
        let rejected = cx.set_field_value(&row, "temperature_c", "warm".into());
        println!("write temperature_c = warm: {rejected}");
    }

    // Walk off the end of the table; the new row's cells mount afterwards.
    press(&mut cx, "Enter", false);
    press(&mut cx, "Enter", false);
    let pending: Vec<RowIndex> = cx.host_mut().rows_to_render.drain(..).collect();
    for row in pending {
        println!("render row {}", row.0);
        cells.extend(mount_row(&mut cx, row));
    }
    println!(
        "editing after render: {:?}",
        cx.active_cell().and_then(|k| cx.cell(k)).map(|c| (c.row.0, c.field.clone()))
    );

    cx.end_edit();
    for forecast in cx.into_host().grid.into_rows() {
        println!("{forecast:?}");
    }
}
