/// Progress reporting surface for the orchestrator
///
/// The consumer renders it; the orchestrator only announces the
/// upfront total and completed units.
pub trait ProgressReporter {
    fn reset(&mut self, total: usize);
    fn increment(&mut self);
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn reset(&mut self, _total: usize) {}
    fn increment(&mut self) {}
}

/// Reports progress through the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl ProgressReporter for LogProgress {
    fn reset(&mut self, total: usize) {
        self.done = 0;
        self.total = total;
        if total > 0 {
            log::info!("requesting up to {total} translations");
        }
    }

    fn increment(&mut self) {
        self.done += 1;
        log::info!("translated {}/{}", self.done, self.total);
    }
}
