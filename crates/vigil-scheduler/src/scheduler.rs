//! The per-check probe loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info};

use vigil_core::CheckSpec;
use vigil_probe::{Outcome, Prober, classify};
use vigil_registry::{CheckKey, MetricRegistry};

/// Run the probe loop for one check until shutdown.
///
/// The first probe fires immediately on entry; after that the loop
/// sleeps `interval` between probe starts. The pipeline for each tick
/// is spawned and not awaited, so the sleep and the in-flight probe
/// run concurrently. No outcome of a single tick can stop the loop:
/// transport failures and expectation mismatches are values that end
/// up as a 0 gauge, not errors.
///
/// On shutdown the loop stops promptly at its next suspension point.
/// Probes already spawned run to completion and may still publish;
/// they hold their own clones of the prober and registry handles.
pub async fn run_check_loop(
    check: CheckSpec,
    interval: Duration,
    prober: Arc<dyn Prober>,
    registry: MetricRegistry,
    mut shutdown: watch::Receiver<bool>,
) {
    debug!(
        name = %check.name,
        url = %check.url,
        interval_secs = interval.as_secs(),
        "check loop starting"
    );

    loop {
        tokio::spawn(probe_once(
            check.clone(),
            prober.clone(),
            registry.clone(),
        ));

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.changed() => {
                debug!(name = %check.name, url = %check.url, "check loop shutting down");
                break;
            }
        }
    }
}

/// One probe pipeline: execute, classify, log, publish.
async fn probe_once(check: CheckSpec, prober: Arc<dyn Prober>, registry: MetricRegistry) {
    let raw = prober.execute(&check.url).await;
    let outcome = classify(&check, &raw);

    match &outcome {
        Outcome::Healthy => {
            info!(name = %check.name, url = %check.url, "check is OK");
        }
        Outcome::WrongStatus(observed) => {
            error!(
                name = %check.name,
                url = %check.url,
                status = observed,
                "check is FAILED: wrong HTTP status code"
            );
        }
        Outcome::WrongBody(observed) => {
            error!(
                name = %check.name,
                url = %check.url,
                body = %observed,
                "check is FAILED: wrong HTTP body"
            );
        }
        Outcome::Error(reason) => {
            error!(
                name = %check.name,
                url = %check.url,
                error = %reason,
                "check is FAILED: probe error"
            );
        }
    }

    registry
        .publish(
            CheckKey::new(check.name, check.url),
            outcome.gauge_value(),
        )
        .await;
}
