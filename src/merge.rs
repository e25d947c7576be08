// src/merge.rs
//
// Attach instructor payroll/appointment fields to schedule rows.
//
// Join key: schedule "Class Instr ID" == payroll "UM ID", both read as numbers.
// Rows whose id is not numeric are dropped from both sides before joining.
// A key with several payroll rows fans out to one output row per match.

use std::collections::HashMap;

use crate::config::consts::{COL_INSTR_ID, COL_UM_ID, MONTHLY_COLS};
use crate::config::options::JoinKind;
use crate::error::LoadError;
use crate::store::DataSet;

/// Lenient numeric read: surrounding whitespace ok, must be finite.
pub fn parse_id(cell: &str) -> Option<f64> {
    let v: f64 = cell.trim().parse().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

/// Ids render without decimals: `12345678.0` → `"12345678"`.
pub fn fmt_id(v: f64) -> String {
    format!("{v:.0}")
}

fn key_of(v: f64) -> u64 {
    // fold -0.0 into 0.0 so they join
    (v + 0.0).to_bits()
}

pub fn merge_payroll(
    sched: DataSet,
    monthly: &DataSet,
    join: JoinKind,
) -> Result<DataSet, LoadError> {
    let sid = sched.require_col(COL_INSTR_ID, "schedule")?;
    let mcols = MONTHLY_COLS
        .iter()
        .map(|c| monthly.require_col(c, "payroll"))
        .collect::<Result<Vec<usize>, _>>()?;
    let mid = monthly.require_col(COL_UM_ID, "payroll")?;

    // payroll id → row indexes, in payroll order
    let mut by_id: HashMap<u64, Vec<usize>> = HashMap::new();
    let mut payroll_dropped = 0usize;
    for (ri, row) in monthly.rows.iter().enumerate() {
        match parse_id(&row[mid]) {
            Some(v) => by_id.entry(key_of(v)).or_default().push(ri),
            None => payroll_dropped += 1,
        }
    }

    let DataSet { mut headers, rows } = sched;

    // Target positions for the payroll columns: reuse same-named columns.
    let mut targets = Vec::with_capacity(MONTHLY_COLS.len());
    for name in MONTHLY_COLS {
        match headers.iter().position(|h| h == name) {
            Some(ci) => targets.push(ci),
            None => {
                targets.push(headers.len());
                headers.push(s!(*name));
            }
        }
    }
    let width = headers.len();

    let mut out = Vec::with_capacity(rows.len());
    let mut sched_dropped = 0usize;
    let mut unmatched = 0usize;

    for mut row in rows {
        let Some(id) = parse_id(&row[sid]) else {
            sched_dropped += 1;
            continue;
        };
        row[sid] = fmt_id(id);
        row.resize(width, s!());

        match by_id.get(&key_of(id)) {
            Some(hits) => {
                for &mi in hits {
                    let mut r = row.clone();
                    for (&src, &dst) in mcols.iter().zip(&targets) {
                        r[dst] = monthly.rows[mi][src].clone();
                    }
                    r[targets[0]] = fmt_id(id);
                    out.push(r);
                }
            }
            None => {
                unmatched += 1;
                if join == JoinKind::Left {
                    for &dst in &targets {
                        row[dst] = s!();
                    }
                    out.push(row);
                }
            }
        }
    }

    logf!(
        "Merge: join={:?}, out rows={}, schedule dropped (bad id)={}, payroll dropped (bad id)={}, unmatched={}",
        join, out.len(), sched_dropped, payroll_dropped, unmatched
    );

    let mut merged = DataSet::new(headers, out);
    if join == JoinKind::Inner {
        merged.drop_column(COL_INSTR_ID);
    }
    Ok(merged)
}
