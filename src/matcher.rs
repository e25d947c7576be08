// src/matcher.rs
//! Facility string → building prediction.
//!
//! A schedule's "Facility ID" is free text whose shape differs per campus
//! (`"1234 EH"`, `"EH 1234"`, `"MLB"` …). The building directory maps short
//! name *fragments* to records whose last field is the campus label.
//!
//! Resolution:
//! 1. Blank / missing input resolves to `("", "", "")`.
//! 2. A key is a *candidate* when the input contains it or it contains the input.
//! 3. The longest candidate wins; equal lengths go through [`TieBreak`].
//! 4. The first occurrence of the winning key is cut out of the input and the
//!    rest, trimmed, becomes the room. A key that only contains the input
//!    leaves no room text.
//! 5. No candidate at all puts the raw input into the slot named by
//!    [`FallbackSlot`].
//!
//! Keys are matched as raw substrings: no case folding, no whitespace cleanup.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;

use crate::config::options::{FallbackSlot, MatchOptions, TieBreak};
use crate::error::DirectoryError;

/// Fields of one directory entry, in source order. Last one is the campus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingRecord {
    fields: Vec<String>,
}

impl BuildingRecord {
    pub fn new(fields: Vec<String>) -> Result<Self, DirectoryError> {
        if fields.is_empty() {
            return Err(DirectoryError::EmptyRecord { key: s!() });
        }
        Ok(Self { fields })
    }

    pub fn campus(&self) -> &str {
        // non-empty by construction
        self.fields.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Long-form name when the record carries one ahead of the campus.
    pub fn name(&self) -> Option<&str> {
        if self.fields.len() >= 2 { self.fields.first().map(|s| s.as_str()) } else { None }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Fragment key → record, in source order. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildingDirectory {
    entries: IndexMap<String, BuildingRecord>,
}

impl BuildingDirectory {
    /// Validate and collect `(key, fields)` pairs. Later duplicates replace
    /// earlier values but keep the first position.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let mut out = IndexMap::new();
        for (key, fields) in entries {
            let key: String = key.into();
            if key.is_empty() {
                return Err(DirectoryError::EmptyKey);
            }
            let rec = BuildingRecord::new(fields)
                .map_err(|_| DirectoryError::EmptyRecord { key: key.clone() })?;
            out.insert(key, rec);
        }
        Ok(Self { entries: out })
    }

    /// Validate parsed directory JSON: `{ "EH": ["East Hall", …, "Ann Arbor"], … }`.
    /// Non-text fields before the campus are kept in their JSON spelling
    /// (`null` becomes empty); the campus itself must be a string.
    pub fn from_json_map(raw: IndexMap<String, Value>) -> Result<Self, DirectoryError> {
        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let Value::Array(items) = value else {
                return Err(DirectoryError::NotAList { key });
            };
            match items.last() {
                None => return Err(DirectoryError::EmptyRecord { key }),
                Some(Value::String(_)) => {}
                Some(_) => return Err(DirectoryError::CampusNotText { key }),
            }
            let fields = items.into_iter().map(field_text).collect();
            entries.push((key, fields));
        }
        Self::from_entries(entries)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, key: &str) -> Option<&BuildingRecord> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

fn field_text(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => s!(),
        other => other.to_string(),
    }
}

/// `(room, building key, campus)`; all empty when nothing can be inferred.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchResult {
    pub room: String,
    pub building: String,
    pub campus: String,
}

impl MatchResult {
    pub fn new(room: impl Into<String>, building: impl Into<String>, campus: impl Into<String>) -> Self {
        Self { room: room.into(), building: building.into(), campus: campus.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn into_tuple(self) -> (String, String, String) {
        (self.room, self.building, self.campus)
    }
}

/// Longest key that contains, or is contained in, `input`.
pub fn find_longest_match<'d>(
    input: &str,
    directory: &'d BuildingDirectory,
    tie: TieBreak,
) -> Option<&'d str> {
    let mut best: Option<&str> = None;
    for key in directory.keys() {
        if !(input.contains(key) || key.contains(input)) {
            continue;
        }
        best = match best {
            None => Some(key),
            Some(cur) => {
                let (kl, cl) = (key.chars().count(), cur.chars().count());
                let better = kl > cl || (kl == cl && tie == TieBreak::Lexical && key < cur);
                if better { Some(key) } else { Some(cur) }
            }
        };
    }
    best
}

/// Resolve one facility value. Total: never fails, never panics.
pub fn resolve(
    facility: Option<&str>,
    directory: &BuildingDirectory,
    opts: MatchOptions,
) -> MatchResult {
    let fac = match facility {
        Some(f) if !f.trim().is_empty() => f,
        _ => return MatchResult::empty(),
    };

    let Some(key) = find_longest_match(fac, directory, opts.tie_break) else {
        return match opts.fallback {
            FallbackSlot::Room => MatchResult::new(fac, "", ""),
            FallbackSlot::Building => MatchResult::new("", fac, ""),
        };
    };

    let room = if fac.contains(key) {
        fac.replacen(key, "", 1).trim().to_string()
    } else {
        s!()
    };
    let campus = directory.get(key).map(|r| r.campus()).unwrap_or("");
    MatchResult::new(room, key, campus)
}

/// Directory + policy + per-input memo. Each distinct raw facility string is
/// resolved once; replacing the directory or the policy clears the memo.
#[derive(Clone, Debug)]
pub struct BuildingMatcher {
    directory: BuildingDirectory,
    opts: MatchOptions,
    memo: HashMap<String, MatchResult>,
}

impl BuildingMatcher {
    pub fn new(directory: BuildingDirectory, opts: MatchOptions) -> Self {
        Self { directory, opts, memo: HashMap::new() }
    }

    pub fn directory(&self) -> &BuildingDirectory { &self.directory }
    pub fn options(&self) -> MatchOptions { self.opts }

    pub fn set_directory(&mut self, directory: BuildingDirectory) {
        self.directory = directory;
        self.memo.clear();
    }

    pub fn set_options(&mut self, opts: MatchOptions) {
        if opts != self.opts {
            self.opts = opts;
            self.memo.clear();
        }
    }

    /// Memoised [`resolve`]. Blank input is not cached.
    pub fn resolve(&mut self, facility: Option<&str>) -> MatchResult {
        let fac = match facility {
            Some(f) if !f.trim().is_empty() => f,
            _ => return MatchResult::empty(),
        };
        if let Some(hit) = self.memo.get(fac) {
            return hit.clone();
        }
        let res = resolve(Some(fac), &self.directory, self.opts);
        self.memo.insert(s!(fac), res.clone());
        res
    }

    /// Distinct inputs resolved so far.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}
