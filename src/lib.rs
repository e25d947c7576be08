// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod enrich;
pub mod file;
pub mod filter;
pub mod gui;
pub mod matcher;
pub mod merge;
pub mod pipeline;
pub mod progress;
pub mod sources;
pub mod store;
pub mod view;
