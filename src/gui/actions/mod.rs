// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,load}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::load;

use crate::{gui::app::App, view::{Projection, TableView}};

/// Owned (headers, rows) of what the table currently shows.
pub(super) fn current_view(app: &App) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let session = app.session.as_ref()?;
    let proj = Projection::display(&session.data, app.state.gui.show_predictions);
    let view = TableView::new(&session.data, app.outcome.row_ix.clone());
    Some(proj.project(&view))
}
