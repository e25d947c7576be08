// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::LoadError,
    filter::{self, FilterOutcome},
    pipeline::Session,
    view,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "LEO Class Schedules",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub type LoadResult = Result<Session, LoadError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded + enriched table; None until the first load lands
    pub session: Option<Session>,

    // current filter result (row indexes into session.data + picker lists)
    pub outcome: FilterOutcome,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (the load thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    // a reload was asked for while one was running
    pub reload_pending: bool,
    pub(crate) loader: Option<mpsc::Receiver<LoadResult>>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            session: None,
            outcome: FilterOutcome::default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            reload_pending: false,
            loader: None,
        };

        logf!("Init: {} schedule source(s)", app.state.options.sources.schedules.len());
        super::actions::load(&mut app, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Re-run the filter cascade. Picker values that fell out of their
    /// option list are put back to ALL.
    pub fn rebuild_view(&mut self) {
        let Some(session) = &self.session else {
            self.outcome = FilterOutcome::default();
            return;
        };
        self.outcome = filter::apply_resetting(&session.data, &mut self.state.options.filter);

        // default file name follows the pickers until the user types one
        if !self.out_path_dirty {
            let stem = view::download_stem(&self.state.options.filter);
            self.state.options.export.set_file_stem(&stem);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }

    /// Redo building predictions under the current match options.
    pub fn rematch(&mut self) {
        let opts = self.state.options.matching;
        let Some(session) = self.session.as_mut() else { return };
        let stats = session.rematch(opts);
        logf!("Rematch: {:?} matched={} of {}", opts, stats.matched, stats.rows);
        self.rebuild_view();
        self.status(format!("Predicted buildings for {} of {} rows", stats.matched, stats.rows));
    }

    /// Pick up a finished background load, if any. The worker saw the
    /// options as they were when it started, so match policy changes made
    /// since are applied here and a join change starts another load.
    fn poll_load(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.loader else { return };
        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Load: worker ended without a result");
                self.loader = None;
                self.running = false;
                self.status("Load error: worker stopped");
                return;
            }
        };
        self.loader = None;
        self.running = false;

        match res {
            Ok(mut session) => {
                if let Some(stats) = session.sync_matching(self.state.options.matching) {
                    logf!("Load: rematched under {:?} matched={}", self.state.options.matching, stats.matched);
                }
                logf!(
                    "Load: OK rows={} headers={} matched={}",
                    session.data.row_count(),
                    session.data.header_count(),
                    session.stats.matched
                );
                let msg = if session.skipped.is_empty() {
                    format!("Ready: {} classes", session.data.row_count())
                } else {
                    let names: Vec<&str> = session.skipped.iter().map(|(c, _)| c.as_str()).collect();
                    format!("Ready: {} classes (skipped {})", session.data.row_count(), names.join(", "))
                };
                self.session = Some(session);
                self.state.gui.table_generation += 1;
                self.rebuild_view();
                self.status(msg);
            }
            Err(e) => {
                loge!("Load: Error: {}", e);
                self.status(format!("Load error: {e}"));
            }
        }

        if std::mem::take(&mut self.reload_pending) {
            let stale = self
                .session
                .as_ref()
                .is_none_or(|s| s.needs_reload(self.state.options.merge));
            if stale {
                logf!("Load: restarting for {:?}", self.state.options.merge);
                super::actions::load(self, ctx);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load(ctx);
        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
