// src/gui/actions/load.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{gui::app::App, gui::progress::GuiProgress, pipeline};

/// Fetch every source on a worker thread; `App::update` picks up the result.
/// A request made while a load is running is queued and started when it lands.
pub fn load(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Load: already running, queued");
        app.reload_pending = true;
        return;
    }
    app.running = true;
    app.status("Loading…");

    let opts = app.state.options.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.loader = Some(rx);

    logf!(
        "Load: Begin buildings={} monthly={} schedules={}",
        opts.sources.buildings,
        opts.sources.monthly,
        opts.sources.schedules.len()
    );

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = pipeline::load_session(&opts, Some(&mut prog));
        // receiver gone means the window closed; nothing to report
        let _ = tx.send(res);
        ctx.request_repaint();
    });
}
