use std::time::Duration;

use reqwest::Client;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::metrics::Outcome;
use crate::shutdown::{ShutdownReceiver, ShutdownSender};

use super::target::{self, Variant};

/// Budget for one whole request/response cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Budget for establishing a new connection, independent of the request
/// timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client shared by every worker.
pub(crate) fn build_client() -> AppResult<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?;
    Ok(client)
}

struct WorkerContext {
    client: Client,
    shutdown_rx: ShutdownReceiver,
    outcome_tx: mpsc::Sender<Outcome>,
    slow_url: String,
    fast_url: String,
    slow_percent: u8,
    delay: Duration,
    deadline: Option<Instant>,
}

/// Spawns the fixed worker pool and returns a supervisor handle that joins
/// every worker before finishing.
///
/// Each worker observes the stop condition before issuing a request and
/// while sleeping; an in-flight request always runs to completion (bounded
/// by the request timeout) so its outcome is never lost.
pub(crate) fn setup_request_workers(
    config: &RunConfig,
    shutdown_tx: &ShutdownSender,
    outcome_tx: &mpsc::Sender<Outcome>,
    run_start: Instant,
    delay: Duration,
    client: Client,
) -> tokio::task::JoinHandle<()> {
    let deadline = config.deadline(run_start);
    let slow_percent = config.slow_percent;
    let slow_url = target::endpoint_url(&config.base_url, Variant::Slow, config.customer_id);
    let fast_url = target::endpoint_url(&config.base_url, Variant::Fast, config.customer_id);
    let workers = config.workers;

    let shutdown_tx = shutdown_tx.clone();
    let outcome_tx = outcome_tx.clone();

    tokio::spawn(async move {
        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let worker = WorkerContext {
                client: client.clone(),
                shutdown_rx: shutdown_tx.subscribe(),
                outcome_tx: outcome_tx.clone(),
                slow_url: slow_url.clone(),
                fast_url: fast_url.clone(),
                slow_percent,
                delay,
                deadline,
            };
            handles.push(tokio::spawn(run_worker(worker_id, worker)));
        }
        drop(outcome_tx);

        for handle in handles {
            if let Err(err) = handle.await {
                warn!("Worker task failed to join: {}", err);
            }
        }
    })
}

async fn run_worker(worker_id: usize, mut worker: WorkerContext) {
    loop {
        if stop_requested(&mut worker.shutdown_rx) {
            break;
        }
        if let Some(deadline) = worker.deadline
            && Instant::now() >= deadline
        {
            break;
        }

        let variant = target::pick_variant(&mut rand::thread_rng(), worker.slow_percent);
        let url = match variant {
            Variant::Slow => &worker.slow_url,
            Variant::Fast => &worker.fast_url,
        };

        // Shutdown never aborts an in-flight request; the request timeout
        // bounds how long this await can take.
        let outcome = issue_request(&worker.client, url, variant).await;
        if worker.outcome_tx.send(outcome).await.is_err() {
            break;
        }

        tokio::select! {
            _ = worker.shutdown_rx.recv() => break,
            () = sleep(worker.delay) => {}
        }
    }
    debug!("Worker {} stopped.", worker_id);
}

fn stop_requested(shutdown_rx: &mut ShutdownReceiver) -> bool {
    match shutdown_rx.try_recv() {
        Ok(()) => true,
        Err(broadcast::error::TryRecvError::Closed) => true,
        // A lagged receiver still means at least one shutdown was sent.
        Err(broadcast::error::TryRecvError::Lagged(_)) => true,
        Err(broadcast::error::TryRecvError::Empty) => false,
    }
}

/// Issues one GET and classifies it: latency is only recorded when the full
/// response was received, so transport failures carry no sample.
async fn issue_request(client: &Client, url: &str, variant: Variant) -> Outcome {
    let start = Instant::now();
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            match response.bytes().await {
                Ok(_) => Outcome::completed(variant, status, start.elapsed()),
                Err(err) => {
                    debug!("{} response body failed: {}", variant.as_str(), err);
                    Outcome::transport_error(variant)
                }
            }
        }
        Err(err) => {
            debug!("{} request failed: {}", variant.as_str(), err);
            Outcome::transport_error(variant)
        }
    }
}
