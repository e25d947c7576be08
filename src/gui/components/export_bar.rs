// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
        if app.out_path_dirty && ui.small_button("Auto").clicked() {
            app.out_path_dirty = false;
            app.rebuild_view();
        }
    });

    // --- Actions (Copy / Export / Reload) ---
    ui.horizontal(|ui| {
        let has_data = app.session.is_some();

        if ui.add_enabled(has_data, egui::Button::new("Copy")).clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        let reload = egui::Button::new(egui::RichText::new("RELOAD").strong());
        if ui.add_enabled(!app.running, reload).clicked() {
            logf!("UI: reload requested");
            let ctx = ui.ctx().clone();
            actions::load(app, &ctx);
        }
        if app.running {
            ui.spinner();
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
