// src/gui/components/filter_panel.rs
//
// Left panel: day → campus → building → subject pickers, then the matching
// policy. Each picker only lists values present under the pickers above it,
// with row counts. Any change re-runs the cascade on the loaded table.

use eframe::egui;
use crate::{
    config::options::{CampusField, Choice, Day, FallbackSlot, JoinKind, TieBreak},
    filter::OptionCount,
    gui::app::App,
};

/// ALL + one entry per option. Returns true when the choice changed.
fn choice_combo(ui: &mut egui::Ui, id: &str, choice: &mut Choice, options: &[OptionCount]) -> bool {
    let before = choice.clone();
    let total: usize = options.iter().map(|o| o.count).sum();

    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(choice.label().to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(choice, Choice::All, format!("ALL ({total})"));
            for o in options {
                ui.selectable_value(choice, Choice::Only(o.value.clone()), o.label());
            }
        });

    *choice != before
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;
    {
        let filter = &mut app.state.options.filter;
        let out = &app.outcome;

        ui.label("Day");
        let before = filter.day;
        egui::ComboBox::from_id_salt("day")
            .width(ui.available_width())
            .selected_text(filter.day.label())
            .show_ui(ui, |ui| {
                for d in Day::ALL {
                    ui.selectable_value(&mut filter.day, d, d.label());
                }
            });
        changed |= filter.day != before;
        ui.small(format!("{} classes meet on {}", out.day_total, filter.day.label()));

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Campus");
            let before = filter.campus_field;
            ui.selectable_value(&mut filter.campus_field, CampusField::Source, "schedule");
            ui.selectable_value(&mut filter.campus_field, CampusField::Predicted, "predicted");
            if filter.campus_field != before {
                // values differ between the two columns
                filter.campus = Choice::All;
                changed = true;
            }
        });
        changed |= choice_combo(ui, "campus", &mut filter.campus, &out.campuses);

        ui.add_space(6.0);
        ui.label("Building (predicted)");
        changed |= choice_combo(ui, "building", &mut filter.building, &out.buildings);

        ui.add_space(6.0);
        ui.label("Subject");
        changed |= choice_combo(ui, "subject", &mut filter.subject, &out.subjects);
    }

    if changed {
        logf!("UI: filter → {:?}", app.state.options.filter);
        app.rebuild_view();
    }

    ui.add_space(10.0);
    ui.heading("Matching");
    ui.separator();

    let before = app.state.options.matching;
    {
        let m = &mut app.state.options.matching;
        ui.label("Unmatched facility goes to");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut m.fallback, FallbackSlot::Room, "room");
            ui.selectable_value(&mut m.fallback, FallbackSlot::Building, "building");
        });
        ui.label("Equal-length keys");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut m.tie_break, TieBreak::DirectoryOrder, "directory order");
            ui.selectable_value(&mut m.tie_break, TieBreak::Lexical, "A→Z");
        });
    }
    if app.state.options.matching != before {
        app.rematch();
    }

    ui.add_space(6.0);
    ui.label("Payroll join");
    let before = app.state.options.merge.join;
    ui.horizontal(|ui| {
        let j = &mut app.state.options.merge.join;
        ui.selectable_value(j, JoinKind::Left, "keep all classes");
        ui.selectable_value(j, JoinKind::Inner, "matched only");
    });
    if app.state.options.merge.join != before {
        logf!("UI: join → {:?}", app.state.options.merge.join);
        let ctx = ui.ctx().clone();
        crate::gui::actions::load(app, &ctx);
    }

    ui.add_space(10.0);
    if ui.checkbox(&mut app.state.gui.show_predictions, "Show predicted columns").changed() {
        app.state.gui.table_generation += 1;
    }

    if let Some(session) = &app.session {
        ui.add_space(10.0);
        ui.small(format!(
            "Directory: {} keys, {} distinct facilities, {} rows matched",
            session.matcher.directory().len(),
            session.stats.distinct,
            session.stats.matched
        ));
    }
}
