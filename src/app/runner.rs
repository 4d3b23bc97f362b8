use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};
use tracing::info;

use crate::config::{RunConfig, STARTUP_GRACE};
use crate::error::AppResult;
use crate::http;
use crate::metrics::{self, Outcome, RunStats};
use crate::shutdown;

use super::{banner, summary};

/// Bound on queued outcomes; workers back-pressure instead of dropping.
const OUTCOME_CHANNEL_CAPACITY: usize = 1024;

pub(crate) async fn run_driver(config: &RunConfig) -> AppResult<()> {
    let delay = config.worker_delay()?;
    let client = http::build_client()?;

    banner::print_run_plan(config, delay);

    let (shutdown_tx, mut shutdown_rx) = shutdown::shutdown_channel();
    let signal_handle = shutdown::setup_signal_shutdown_handler(&shutdown_tx);

    // Grace pause so an operator can read the plan before load begins; an
    // early interrupt skips the run entirely.
    let interrupted = tokio::select! {
        _ = shutdown_rx.recv() => true,
        () = sleep(STARTUP_GRACE) => false,
    };
    if interrupted {
        info!("Interrupted before the run started.");
        signal_handle.await?;
        summary::print_summary(&RunStats::default(), Duration::ZERO);
        return Ok(());
    }

    info!("Load run started.");
    let run_start = Instant::now();

    let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(OUTCOME_CHANNEL_CAPACITY);
    let collector_handle = metrics::setup_stats_collector(run_start, outcome_rx);
    let workers_handle = http::setup_request_workers(
        config,
        &shutdown_tx,
        &outcome_tx,
        run_start,
        delay,
        client,
    );
    drop(outcome_tx);

    workers_handle.await?;
    // All senders are gone once the workers have joined; the collector
    // drains whatever is still queued and hands back the full statistics.
    let stats = collector_handle.await?;
    let total_duration = run_start.elapsed();

    drop(shutdown_tx.send(()));
    signal_handle.await?;

    info!("Load run finished.");
    summary::print_summary(&stats, total_duration);

    Ok(())
}
