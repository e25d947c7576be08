// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.outcome.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let Some((h, r)) = super::current_view(app) else {
        app.status("Nothing to copy (no data loaded)");
        return;
    };
    logf!("Copy: rows={}, headers={}", r.len(), h.len());

    let txt = file::to_export_string(&app.state.options.export, &h, &r);
    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} classes to clipboard", r.len()));
}
