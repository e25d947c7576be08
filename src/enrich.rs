// src/enrich.rs
//
// Column-level lift of the matcher: read "Facility ID" on every row, write
// RoomPrediction / BldgPrediction / CampusPrediction back. Row order and
// row count never change. A table without a facility column gets empty
// predictions.

use crate::config::consts::{COL_BLDG_PRED, COL_CAMPUS_PRED, COL_FACILITY, COL_ROOM_PRED};
use crate::matcher::BuildingMatcher;
use crate::store::DataSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub rows: usize,
    pub distinct: usize,
    pub matched: usize,
}

pub fn enrich_schedule(ds: &mut DataSet, matcher: &mut BuildingMatcher) -> EnrichStats {
    let fac_col = ds.col(COL_FACILITY);
    if fac_col.is_none() {
        logw!("Enrich: no {:?} column; predictions left empty", COL_FACILITY);
    }

    let before = matcher.memo_len();
    let n = ds.row_count();
    let mut rooms = Vec::with_capacity(n);
    let mut bldgs = Vec::with_capacity(n);
    let mut campuses = Vec::with_capacity(n);
    let mut matched = 0usize;

    for ri in 0..n {
        let fac = fac_col.map(|_| ds.cell(ri, fac_col));
        let res = matcher.resolve(fac);
        if matcher.directory().get(&res.building).is_some() {
            matched += 1;
        }
        let (room, bldg, campus) = res.into_tuple();
        rooms.push(room);
        bldgs.push(bldg);
        campuses.push(campus);
    }

    ds.set_column(COL_ROOM_PRED, rooms);
    ds.set_column(COL_BLDG_PRED, bldgs);
    ds.set_column(COL_CAMPUS_PRED, campuses);

    let stats = EnrichStats {
        rows: n,
        distinct: matcher.memo_len() - before,
        matched,
    };
    logf!(
        "Enrich: rows={}, new distinct facilities={}, matched rows={}",
        stats.rows, stats.distinct, stats.matched
    );
    stats
}
