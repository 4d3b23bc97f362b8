use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::types::{Outcome, RunStats};

/// Cadence of the live statistics line.
const REPORT_INTERVAL: Duration = Duration::from_secs(10);

/// Spawns the single aggregator task.
///
/// It owns the run statistics, applies every outcome the workers send, and
/// prints a live line on a fixed cadence without ever blocking a worker.
/// It finishes - returning the complete statistics - only once every sender
/// has dropped and the channel is drained, so no outcome is lost on
/// shutdown.
pub(crate) fn setup_stats_collector(
    run_start: Instant,
    mut outcome_rx: mpsc::Receiver<Outcome>,
) -> JoinHandle<RunStats> {
    tokio::spawn(async move {
        let mut stats = RunStats::default();
        let first_tick = run_start
            .checked_add(REPORT_INTERVAL)
            .unwrap_or_else(Instant::now);
        let mut report_tick = tokio::time::interval_at(first_tick, REPORT_INTERVAL);
        report_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_outcome = outcome_rx.recv() => {
                    match maybe_outcome {
                        Some(outcome) => stats.record(outcome),
                        None => break,
                    }
                }
                _ = report_tick.tick() => {
                    print_live_line(&stats, run_start.elapsed());
                }
            }
        }

        stats
    })
}

fn print_live_line(stats: &RunStats, elapsed: Duration) {
    let throughput_x100 = stats.avg_throughput_x100(elapsed);
    let error_rate_x100 = stats.error_rate_x100();
    println!(
        "Time: {:>4}s | Total: {:>6} | Slow: {:>6} | Fast: {:>6} | Success: {:>6} | Errors: {:>4} | {}.{:02} req/s | Avg: {}ms | Error Rate: {}.{:02}%",
        elapsed.as_secs(),
        stats.total_requests,
        stats.slow_requests,
        stats.fast_requests,
        stats.success_count,
        stats.error_count,
        throughput_x100 / 100,
        throughput_x100 % 100,
        stats.avg_latency_ms(),
        error_rate_x100 / 100,
        error_rate_x100 % 100
    );
}
