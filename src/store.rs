// src/store.rs
//
// In-memory table: one header row plus string cells. Every row is kept at
// exactly `headers.len()` cells so column lookups never go out of bounds.
// Nothing here touches the disk; exports live in `file.rs`.

use std::collections::HashMap;
use std::io::Read;

use crate::error::LoadError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Build from parts, padding/truncating rows to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut ds = Self { headers, rows };
        ds.square_rows();
        ds
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Column index by exact header name.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_col(&self, name: &str, what: &str) -> Result<usize, LoadError> {
        self.col(name).ok_or_else(|| LoadError::MissingColumn {
            what: s!(what),
            column: s!(name),
        })
    }

    /// Cell text, `""` when the column or row is absent.
    pub fn cell(&self, row: usize, col: Option<usize>) -> &str {
        col.and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Overwrite column `name` with `values`, appending the column if new.
    /// `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.col(name) {
            Some(ci) => {
                for (row, v) in self.rows.iter_mut().zip(values) {
                    row[ci] = v;
                }
            }
            None => {
                self.headers.push(s!(name));
                for (row, v) in self.rows.iter_mut().zip(values) {
                    row.push(v);
                }
            }
        }
    }

    /// Same value on every row.
    pub fn fill_column(&mut self, name: &str, value: &str) {
        let values = vec![s!(value); self.rows.len()];
        self.set_column(name, values);
    }

    pub fn drop_column(&mut self, name: &str) {
        if let Some(ci) = self.col(name) {
            self.headers.remove(ci);
            for row in &mut self.rows {
                row.remove(ci);
            }
        }
    }

    /// Stack tables vertically, aligning columns by header name.
    /// Header order is first-seen; cells a table lacks are empty.
    pub fn concat(parts: Vec<DataSet>) -> DataSet {
        let mut headers: Vec<String> = Vec::new();
        let mut pos: HashMap<String, usize> = HashMap::new();
        for part in &parts {
            for h in &part.headers {
                if !pos.contains_key(h) {
                    pos.insert(h.clone(), headers.len());
                    headers.push(h.clone());
                }
            }
        }

        let total = parts.iter().map(|p| p.rows.len()).sum();
        let mut rows = Vec::with_capacity(total);
        for part in parts {
            let map: Vec<usize> = part.headers.iter().map(|h| pos[h]).collect();
            for row in part.rows {
                let mut out = vec![s!(); headers.len()];
                for (cell, &to) in row.into_iter().zip(&map) {
                    out[to] = cell;
                }
                rows.push(out);
            }
        }

        DataSet { headers, rows }
    }

    /// Parse a headed CSV table. Ragged rows are tolerated and squared off.
    pub fn from_csv_reader<R: Read>(reader: R, what: &str) -> Result<DataSet, LoadError> {
        let csv_err = |source| LoadError::Csv { what: s!(what), source };

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| s!(h.trim()))
            .collect();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(csv_err)?;
            rows.push(rec.iter().map(|c| s!(c)).collect());
        }

        Ok(DataSet::new(headers, rows))
    }

    pub fn from_csv_str(text: &str, what: &str) -> Result<DataSet, LoadError> {
        Self::from_csv_reader(text.as_bytes(), what)
    }

    fn square_rows(&mut self) {
        let n = self.headers.len();
        for row in &mut self.rows {
            row.resize(n, s!());
        }
    }
}
