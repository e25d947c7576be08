// src/view.rs
//
// Read-only presentation of the filtered table.
//
// - TableView: zero-copy list of kept row indexes into the canonical DataSet.
// - Projection: fixed display column order, meeting times as HH:MM.
//   Columns the table lacks render as empty cells so downloads keep a
//   stable shape. "Class Nbr" is never part of the display set.
// - Titles and download names derived from the current picker state.

use crate::config::consts::{
    COL_BLDG_PRED, COL_CAMPUS_PRED, COL_ROOM_PRED, COL_TIME_END, COL_TIME_START, DISPLAY_COLS,
};
use crate::config::options::FilterOptions;
use crate::store::DataSet;

#[derive(Clone, Debug)]
pub struct TableView<'a> {
    /// Positions of kept rows in the raw dataset
    pub row_ix: Vec<usize>,
    raw: &'a DataSet,
}

impl<'a> TableView<'a> {
    pub fn new(raw: &'a DataSet, row_ix: Vec<usize>) -> Self {
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn dataset(&self) -> &'a DataSet { self.raw }

    /// Borrow a single row by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a [String]> {
        let raw = self.raw;
        self.row_ix.get(i).and_then(|&ix| raw.rows.get(ix).map(|r| r.as_slice()))
    }
}

fn is_prediction(col: &str) -> bool {
    col == COL_ROOM_PRED || col == COL_BLDG_PRED || col == COL_CAMPUS_PRED
}

/// Column mapping from the canonical table to the display layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    headers: Vec<String>,
    src: Vec<Option<usize>>,
    clock: Vec<bool>,
}

impl Projection {
    pub fn display(ds: &DataSet, show_predictions: bool) -> Self {
        let names: Vec<&str> = DISPLAY_COLS
            .iter()
            .copied()
            .filter(|c| show_predictions || !is_prediction(c))
            .collect();

        let mut missing = Vec::new();
        let src = names
            .iter()
            .map(|n| {
                let ci = ds.col(n);
                if ci.is_none() { missing.push(*n); }
                ci
            })
            .collect();
        if !missing.is_empty() {
            logd!("View: columns absent from table, shown empty: {:?}", missing);
        }

        Self {
            headers: names.iter().map(|n| s!(*n)).collect(),
            src,
            clock: names.iter().map(|n| *n == COL_TIME_START || *n == COL_TIME_END).collect(),
        }
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn width(&self) -> usize { self.headers.len() }

    /// Display text for column `di` of a raw row.
    pub fn cell(&self, row: &[String], di: usize) -> String {
        let raw = self.src.get(di).copied().flatten()
            .and_then(|ci| row.get(ci))
            .map(|s| s.as_str())
            .unwrap_or("");
        if self.clock.get(di).copied().unwrap_or(false) {
            format_clock(raw)
        } else {
            s!(raw)
        }
    }

    pub fn project_row(&self, row: &[String]) -> Vec<String> {
        (0..self.width()).map(|di| self.cell(row, di)).collect()
    }

    /// Owned headers + rows, ready for export or clipboard.
    pub fn project(&self, view: &TableView<'_>) -> (Vec<String>, Vec<Vec<String>>) {
        let rows = (0..view.len())
            .filter_map(|i| view.row(i))
            .map(|r| self.project_row(r))
            .collect();
        (self.headers.clone(), rows)
    }
}

/* ---------------- Meeting times ---------------- */

/// Parse a clock time out of `"10:00 AM"`, `"1:30:00 PM"`, `"13:05"`,
/// `"2025-01-08 10:00:00"`, `"2025-01-08T10:00:00"` or `"1/8/2025 10:00AM"`.
/// Returns (hour, minute).
pub fn parse_clock(cell: &str) -> Option<(u32, u32)> {
    let t = cell.trim();
    if t.is_empty() {
        return None;
    }

    // Skip a leading date token, whether a space or an ISO `T` separates it.
    let is_date = |p: &str| p.contains('-') || p.contains('/');
    let mut parts: Vec<&str> = t.split_whitespace().collect();
    let first = parts[0];
    match first.split_once(['T', 't']) {
        Some((date, time)) if is_date(date) => parts[0] = time.trim_end_matches(['Z', 'z']),
        _ if parts.len() > 1 && is_date(first) => {
            parts.remove(0);
        }
        _ => {}
    }
    let joined = parts.concat();

    // Split off AM/PM suffix (either attached or separate).
    let upper = joined.to_ascii_uppercase();
    let (clock, meridiem) = if let Some(c) = upper.strip_suffix("AM") {
        (c, Some(false))
    } else if let Some(c) = upper.strip_suffix("PM") {
        (c, Some(true))
    } else {
        (upper.as_str(), None)
    };

    let mut fields = clock.split(':');
    let h: u32 = fields.next()?.trim().parse().ok()?;
    let m: u32 = fields.next()?.trim().parse().ok()?;
    if let Some(sec) = fields.next() {
        // seconds (optionally fractional) are accepted and dropped
        let whole = sec.split('.').next().unwrap_or("");
        let s: u32 = whole.trim().parse().ok()?;
        if s >= 60 { return None; }
    }
    if fields.next().is_some() || m >= 60 {
        return None;
    }

    let h = match meridiem {
        None if h < 24 => h,
        Some(pm) if (1..=12).contains(&h) => match (pm, h) {
            (false, 12) => 0,
            (false, h) => h,
            (true, 12) => 12,
            (true, h) => h + 12,
        },
        _ => return None,
    };
    Some((h, m))
}

/// `HH:MM` (24h), or empty when the cell is not a recognizable time.
pub fn format_clock(cell: &str) -> String {
    match parse_clock(cell) {
        Some((h, m)) => format!("{h:02}:{m:02}"),
        None => s!(),
    }
}

/* ---------------- Titles & names ---------------- */

/// `"Schedule for Monday - Ann Arbor - EH"`; `ALL` pickers are left out.
pub fn title(opts: &FilterOptions) -> String {
    let mut t = join!("Schedule for ", opts.day.label());
    for c in [&opts.campus, &opts.building, &opts.subject] {
        if !c.is_all() {
            t.push_str(" - ");
            t.push_str(c.label());
        }
    }
    t
}

/// `"Monday_Ann_Arbor_ALL_schedule"` (extension added by the export options).
pub fn download_stem(opts: &FilterOptions) -> String {
    let raw = format!(
        "{}_{}_{}_schedule",
        opts.day.label(),
        opts.campus.label(),
        opts.building.label()
    );
    crate::core::sanitize::file_stem(&raw)
}
