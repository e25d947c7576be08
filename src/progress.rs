// src/progress.rs
/// Progress reporting for the session load (fetches, merge, enrichment).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of load steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One step finished; `what` names it ("buildings", "Flint schedule", …).
    fn step_done(&mut self, _what: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints steps to stderr as `[n/total] what`.
#[derive(Default)]
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, what: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, what);
    }
}
