// src/filter.rs
//
// Day → campus → building → subject cascade over the enriched table.
//
// Each picker's options are computed from the rows that survived the pickers
// before it, so the lists only ever offer values that would produce rows.
// The output is a list of row indexes into the canonical table; no cells are
// copied here.

use std::collections::BTreeMap;

use crate::config::consts::{COL_BLDG_PRED, COL_SUBJECT};
use crate::config::options::{Choice, FilterOptions};
use crate::store::DataSet;

/// One picker entry: value and the number of rows carrying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionCount {
    pub value: String,
    pub count: usize,
}

impl OptionCount {
    /// `"East Hall (12)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.value, self.count)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Kept rows, in table order
    pub row_ix: Vec<usize>,
    /// Rows meeting on the selected day
    pub day_total: usize,
    pub campuses: Vec<OptionCount>,
    pub buildings: Vec<OptionCount>,
    pub subjects: Vec<OptionCount>,
}

impl FilterOutcome {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
}

/// Sorted distinct non-blank values of `col` over `rows`, with counts.
pub fn option_counts(ds: &DataSet, col: Option<usize>, rows: &[usize]) -> Vec<OptionCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &ri in rows {
        let v = ds.cell(ri, col);
        if !v.trim().is_empty() {
            *counts.entry(v).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(value, count)| OptionCount { value: s!(value), count })
        .collect()
}

fn narrow(ds: &DataSet, col: Option<usize>, rows: Vec<usize>, choice: &Choice) -> Vec<usize> {
    if choice.is_all() {
        return rows;
    }
    rows.into_iter().filter(|&ri| choice.matches(ds.cell(ri, col))).collect()
}

/// Rows meeting on `opts.day`. A table without that day's column has none.
pub fn rows_for_day(ds: &DataSet, opts: &FilterOptions) -> Vec<usize> {
    let Some(dc) = ds.col(opts.day.column()) else {
        logw!("Filter: no {:?} column; no rows for {}", opts.day.column(), opts.day.label());
        return Vec::new();
    };
    (0..ds.row_count())
        .filter(|&ri| opts.day.is_active(&ds.rows[ri][dc]))
        .collect()
}

pub fn apply(ds: &DataSet, opts: &FilterOptions) -> FilterOutcome {
    let campus_col = ds.col(opts.campus_field.column());
    let bldg_col = ds.col(COL_BLDG_PRED);
    let subj_col = ds.col(COL_SUBJECT);

    let rows = rows_for_day(ds, opts);
    let day_total = rows.len();

    let campuses = option_counts(ds, campus_col, &rows);
    let rows = narrow(ds, campus_col, rows, &opts.campus);

    let buildings = option_counts(ds, bldg_col, &rows);
    let rows = narrow(ds, bldg_col, rows, &opts.building);

    let subjects = option_counts(ds, subj_col, &rows);
    let rows = narrow(ds, subj_col, rows, &opts.subject);

    logd!(
        "Filter: day={} campus={} building={} subject={} → {} of {} rows",
        opts.day.label(), opts.campus.label(), opts.building.label(), opts.subject.label(),
        rows.len(), ds.row_count()
    );

    FilterOutcome { row_ix: rows, day_total, campuses, buildings, subjects }
}

/// Drop picker values that no longer appear in their option list (e.g. after
/// the day changed). Returns `true` if anything was reset.
pub fn reset_stale_choices(opts: &mut FilterOptions, out: &FilterOutcome) -> bool {
    fn stale(choice: &Choice, list: &[OptionCount]) -> bool {
        match choice {
            Choice::All => false,
            Choice::Only(v) => !list.iter().any(|o| &o.value == v),
        }
    }

    // Earlier pickers first: resetting campus changes the building list.
    if stale(&opts.campus, &out.campuses) {
        opts.campus = Choice::All;
        return true;
    }
    if stale(&opts.building, &out.buildings) {
        opts.building = Choice::All;
        return true;
    }
    if stale(&opts.subject, &out.subjects) {
        opts.subject = Choice::All;
        return true;
    }
    false
}

/// Apply, resetting stale picker values until the selection is consistent.
pub fn apply_resetting(ds: &DataSet, opts: &mut FilterOptions) -> FilterOutcome {
    let mut out = apply(ds, opts);
    // at most one reset per picker
    for _ in 0..3 {
        if !reset_stale_choices(opts, &out) {
            break;
        }
        out = apply(ds, opts);
    }
    out
}
