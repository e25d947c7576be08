// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;

/// Write headers (optional) and rows as CSV/TSV to any writer.
pub fn write_table<W: Write>(
    w: W,
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    delim: u8,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(w);

    if include_headers && !headers.is_empty() {
        wtr.write_record(headers)?;
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same bytes `write_export_single` would put on disk (Copy button).
pub fn to_export_string(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_table(&mut buf, headers, rows, export.include_headers, export.format.delim()) {
        loge!("Export: to string failed: {}", e);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Write one export file at `export.out_path()`. Returns the path written.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let out = BufWriter::new(file);
    write_table(out, headers, rows, export.include_headers, export.format.delim())?;

    logf!("Export: wrote {} rows → {}", rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
