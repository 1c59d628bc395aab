use crate::graph::ActorGraph;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// Callback for reporting progress lines
pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Periodically samples graph size and elapsed time while a crawl runs.
pub struct ProgressReporter {
    interval: Duration,
}

/// Handle for cancelling a running reporter.
pub struct ProgressHandle {
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ProgressReporter {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Spawn the reporting loop. Lines go through `callback` until the
    /// returned handle is stopped.
    pub fn spawn(
        &self,
        graph: ActorGraph,
        started: Instant,
        callback: ProgressCallback,
    ) -> ProgressHandle {
        let interval = self.interval;
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; consume it so reporting
            // starts one full interval in.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        callback(format!(
                            "Graph size: {} edges · elapsed {:.2}s",
                            graph.edge_count(),
                            started.elapsed().as_secs_f64(),
                        ));
                    }
                }
            }

            debug!("Progress reporter stopped");
        });

        ProgressHandle { stop_tx, task }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl ProgressHandle {
    /// Cancel the reporting loop without waiting out the current interval.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.task.await;
    }
}
