// src/error.rs
//! Typed failures for directory construction and table loading.
//!
//! Resolution itself never fails; see `matcher::resolve`. Everything that can
//! go wrong happens once, at load time, and is reported here.

use thiserror::Error;

/// A building directory entry that cannot be used for matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("directory key is empty")]
    EmptyKey,

    #[error("entry {key:?}: expected a list of fields")]
    NotAList { key: String },

    #[error("entry {key:?}: field list is empty (campus label missing)")]
    EmptyRecord { key: String },

    #[error("entry {key:?}: campus field is not a string")]
    CampusNotText { key: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch {url}: {msg}")]
    Http { url: String, msg: String },

    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {what}: {source}")]
    Csv {
        what: String,
        #[source]
        source: csv::Error,
    },

    #[error("parse {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{what}: {source}")]
    Directory {
        what: String,
        #[source]
        source: DirectoryError,
    },

    #[error("{what}: missing column {column:?}")]
    MissingColumn { what: String, column: String },
}
