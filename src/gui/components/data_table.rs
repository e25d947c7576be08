// src/gui/components/data_table.rs
//
// Draws the filtered table through the display projection. Purely a view:
// rows are borrowed from the session by index, never cloned.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, view};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let filter = &app.state.options.filter;
    ui.heading(view::title(filter));

    let Some(session) = &app.session else {
        ui.label(if app.running { "Loading…" } else { "No data loaded" });
        return;
    };

    ui.label(format!("Total classes shown: {}", app.outcome.len()));
    ui.add_space(4.0);

    let data = &session.data;
    let proj = view::Projection::display(data, app.state.gui.show_predictions);
    let table_view = view::TableView::new(data, app.outcome.row_ix.clone());

    // widths are remembered per column layout; generation resets them
    let salt = ("schedule_table", app.state.gui.table_generation, proj.width());

    egui::ScrollArea::horizontal().show(ui, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .id_salt(salt);
        for _ in 0..proj.width() {
            table = table.column(Column::initial(110.0).resizable(true).clip(true).at_least(30.0));
        }

        table
            .header(24.0, |mut header| {
                for h in proj.headers() {
                    header.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, table_view.len(), |mut row| {
                    let Some(r) = table_view.row(row.index()) else { return };
                    for di in 0..proj.width() {
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.label(proj.cell(r, di));
                        });
                    }
                });
            });
    });
}
