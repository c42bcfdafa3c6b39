//! The scheduler supervisor.
//!
//! Owns every per-check loop spawned at startup and the shutdown
//! signal shared by all of them. Nothing here spawns work without
//! retaining its handle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use vigil_core::CheckSpec;
use vigil_probe::Prober;
use vigil_registry::MetricRegistry;

use crate::scheduler::run_check_loop;

/// How long `stop` waits for each loop to observe the signal.
const STOP_GRACE: Duration = Duration::from_secs(5);

/// Owns all running check loops.
pub struct Supervisor {
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl Supervisor {
    /// Spawn one probe loop per configured check.
    ///
    /// All loops share the prober (one HTTP client) and the registry.
    /// Checks without their own interval use `default_interval_secs`.
    pub fn start(
        checks: &[CheckSpec],
        default_interval_secs: u64,
        prober: Arc<dyn Prober>,
        registry: MetricRegistry,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handles: Vec<JoinHandle<()>> = checks
            .iter()
            .cloned()
            .map(|check| {
                let interval = check.interval(default_interval_secs);
                tokio::spawn(run_check_loop(
                    check,
                    interval,
                    prober.clone(),
                    registry.clone(),
                    shutdown_rx.clone(),
                ))
            })
            .collect();

        info!(checks = handles.len(), "scheduler supervisor started");
        Self {
            shutdown_tx,
            handles,
        }
    }

    /// Number of running check loops.
    pub fn check_count(&self) -> usize {
        self.handles.len()
    }

    /// Signal every loop to stop and wait for all of them to terminate.
    ///
    /// The wait is bounded per loop by a grace period. In-flight probes
    /// spawned before the signal run to completion and may still
    /// publish; the shared HTTP client must therefore only be dropped
    /// after `stop` returns.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(true);

        for handle in self.handles {
            match tokio::time::timeout(STOP_GRACE, handle).await {
                Ok(_) => {}
                Err(_) => warn!("check loop did not stop within grace period"),
            }
        }

        info!("scheduler supervisor stopped");
    }
}
