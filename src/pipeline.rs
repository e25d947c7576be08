// src/pipeline.rs
//
// One-shot session load:
//   buildings → payroll → schedules (per campus) → concat → merge → enrich
//
// Everything is passed explicitly; nothing is kept in globals. The returned
// Session owns the canonical table and the matcher that produced its
// predictions, so the policy can be changed and the predictions redone
// without fetching again.

use crate::config::options::{AppOptions, MatchOptions, MergeOptions};
use crate::enrich::{self, EnrichStats};
use crate::error::LoadError;
use crate::matcher::{BuildingDirectory, BuildingMatcher};
use crate::merge;
use crate::progress::Progress;
use crate::sources;
use crate::store::DataSet;

#[derive(Clone, Debug)]
pub struct Session {
    pub data: DataSet,
    pub matcher: BuildingMatcher,
    pub stats: EnrichStats,
    /// Join the table was built with; changing it means loading again
    pub merge: MergeOptions,
    /// Campuses whose schedule could not be loaded, with the reason
    pub skipped: Vec<(String, String)>,
}

impl Session {
    /// Redo the predictions under a different match policy.
    pub fn rematch(&mut self, opts: MatchOptions) -> EnrichStats {
        self.matcher.set_options(opts);
        self.stats = enrich::enrich_schedule(&mut self.data, &mut self.matcher);
        self.stats
    }

    /// Bring the predictions in line with `opts` if the session was built
    /// (or last rematched) under something else. Returns the new stats when
    /// a rematch ran.
    pub fn sync_matching(&mut self, opts: MatchOptions) -> Option<EnrichStats> {
        if self.matcher.options() == opts {
            return None;
        }
        Some(self.rematch(opts))
    }

    /// Whether the table has to be rebuilt from the sources to honour `merge`.
    pub fn needs_reload(&self, merge: MergeOptions) -> bool {
        self.merge != merge
    }
}

/// Combine already-loaded tables into a session. No I/O.
pub fn build_session(
    directory: BuildingDirectory,
    monthly: &DataSet,
    schedules: Vec<DataSet>,
    matching: MatchOptions,
    merge_opts: MergeOptions,
) -> Result<Session, LoadError> {
    let combined = DataSet::concat(schedules);
    logf!("Pipeline: combined schedules rows={}", combined.row_count());

    let mut data = merge::merge_payroll(combined, monthly, merge_opts.join)?;
    let mut matcher = BuildingMatcher::new(directory, matching);
    let stats = enrich::enrich_schedule(&mut data, &mut matcher);

    Ok(Session { data, matcher, stats, merge: merge_opts, skipped: Vec::new() })
}

/// Fetch/read every source in `opts.sources` and build the session.
///
/// The directory and payroll table are required. A campus schedule that
/// fails to load is skipped (and reported in `Session::skipped`) as long as
/// at least one campus loads.
pub fn load_session(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Session, LoadError> {
    let src = &opts.sources;
    let total = 2 + src.schedules.len() + 1;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
        p.log("Loading building directory…");
    }

    let result = load_steps(opts, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn load_steps(
    opts: &AppOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Session, LoadError> {
    let src = &opts.sources;
    let directory = sources::load_buildings(&src.buildings)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("buildings");
        p.log("Loading payroll…");
    }

    let monthly = sources::load_monthly(&src.monthly)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("payroll");
    }

    let mut schedules = Vec::with_capacity(src.schedules.len());
    let mut skipped = Vec::new();
    let mut last_err = None;
    for (campus, s) in &src.schedules {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loading {campus} schedule…"));
        }
        match sources::load_schedule(s, campus) {
            Ok(ds) => schedules.push(ds),
            Err(e) => {
                loge!("Pipeline: {} schedule failed: {}", campus, e);
                skipped.push((campus.clone(), e.to_string()));
                last_err = Some(e);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.step_done(&format!("{campus} schedule"));
        }
    }
    if schedules.is_empty() {
        if let Some(e) = last_err {
            return Err(e);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log("Merging and predicting buildings…");
    }
    let mut session = build_session(directory, &monthly, schedules, opts.matching, opts.merge)?;
    session.skipped = skipped;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("merge + predict");
    }
    Ok(session)
}
