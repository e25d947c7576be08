// src/sources.rs
//! Readers for the three kinds of input table.
//!
//! - **Building directory**: JSON object of fragment key → field list.
//! - **Schedule**: one CSV per campus; a `Campus` column is stamped on load.
//! - **Payroll** ("monthly"): one CSV keyed by `UM ID`.
//!
//! Each reader takes a [`Source`] and does one blocking fetch or file read.
//! No caching, no retries: failures come back as [`LoadError`] and the
//! front-end decides what to show.

use std::fs;

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::consts::{COL_CAMPUS, COL_UM_ID};
use crate::config::options::Source;
use crate::core::net;
use crate::error::LoadError;
use crate::matcher::BuildingDirectory;
use crate::store::DataSet;

/// Whole source as text.
pub fn read_text(src: &Source) -> Result<String, LoadError> {
    match src {
        Source::Url(url) => net::http_get(url),
        Source::Path(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

pub fn parse_buildings(text: &str, what: &str) -> Result<BuildingDirectory, LoadError> {
    let raw: IndexMap<String, Value> = serde_json::from_str(text)
        .map_err(|source| LoadError::Json { what: s!(what), source })?;
    BuildingDirectory::from_json_map(raw)
        .map_err(|source| LoadError::Directory { what: s!(what), source })
}

pub fn load_buildings(src: &Source) -> Result<BuildingDirectory, LoadError> {
    let text = read_text(src)?;
    let dir = parse_buildings(&text, &src.to_string())?;
    logf!("Load: buildings from {} (keys={})", src, dir.len());
    Ok(dir)
}

/// Parse a schedule CSV and tag every row with `campus`.
pub fn parse_schedule(text: &str, campus: &str, what: &str) -> Result<DataSet, LoadError> {
    let mut ds = DataSet::from_csv_str(text, what)?;
    ds.fill_column(COL_CAMPUS, campus);
    Ok(ds)
}

pub fn load_schedule(src: &Source, campus: &str) -> Result<DataSet, LoadError> {
    let text = read_text(src)?;
    let ds = parse_schedule(&text, campus, &src.to_string())?;
    logf!(
        "Load: schedule {} for {:?} (rows={}, cols={})",
        src, campus, ds.row_count(), ds.header_count()
    );
    Ok(ds)
}

pub fn parse_monthly(text: &str, what: &str) -> Result<DataSet, LoadError> {
    let ds = DataSet::from_csv_str(text, what)?;
    ds.require_col(COL_UM_ID, what)?;
    Ok(ds)
}

pub fn load_monthly(src: &Source) -> Result<DataSet, LoadError> {
    let text = read_text(src)?;
    let ds = parse_monthly(&text, &src.to_string())?;
    logf!("Load: payroll from {} (rows={})", src, ds.row_count());
    Ok(ds)
}
