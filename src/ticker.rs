use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// A periodic task scoped to its handle. Dropping the handle aborts the
/// task, so a view tearing down releases its timer on every exit path.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        trace!("Stopping ticker");
        self.task.abort();
    }
}

/// Spawns `on_tick` every `period`. The first invocation happens one full
/// period after the call, not immediately.
pub fn spawn_ticker(period: Duration, mut on_tick: impl FnMut() + Send + 'static) -> TickerHandle {
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            on_tick();
        }
    });

    TickerHandle { task }
}
