// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
    }

    if app.outcome.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let Some((headers, rows)) = super::current_view(app) else {
        app.status("Nothing to export (no data loaded)");
        return;
    };

    logf!("Export: Begin rows={}, headers={}", rows.len(), headers.len());

    let msg = match file::write_export_single(&app.state.options.export, &headers, &rows) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} classes → {}", rows.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
