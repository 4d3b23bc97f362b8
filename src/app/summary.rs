use std::time::Duration;

use crate::metrics::{RunStats, nearest_rank};

/// Estimated queries issued by one slow-endpoint request against the demo
/// data set: 1 for the orders plus one per line-item and shipping lookup.
const SLOW_QUERIES_PER_REQUEST: u64 = 101;
/// The fast endpoint resolves everything with a single join query.
const FAST_QUERIES_PER_REQUEST: u64 = 1;

fn share_x100(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(part)
        .saturating_mul(10_000)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

pub(crate) fn print_summary(stats: &RunStats, duration: Duration) {
    let total = stats.total_requests;
    let slow_share = share_x100(stats.slow_requests, total);
    let fast_share = share_x100(stats.fast_requests, total);
    let success_share = share_x100(stats.success_count, total);
    let error_rate = stats.error_rate_x100();
    let throughput = stats.avg_throughput_x100(duration);

    println!();
    println!("Load run completed");
    println!();
    println!("Duration:         {}s", duration.as_secs());
    println!("Total Requests:   {}", total);
    println!(
        "Slow (N+1 fetch): {} ({}.{:02}%)",
        stats.slow_requests,
        slow_share / 100,
        slow_share % 100
    );
    println!(
        "Fast (join):      {} ({}.{:02}%)",
        stats.fast_requests,
        fast_share / 100,
        fast_share % 100
    );
    println!(
        "Successful:       {} ({}.{:02}%)",
        stats.success_count,
        success_share / 100,
        success_share % 100
    );
    println!(
        "Errors:           {} ({}.{:02}%)",
        stats.error_count,
        error_rate / 100,
        error_rate % 100
    );
    println!(
        "Avg Throughput:   {}.{:02} req/s",
        throughput / 100,
        throughput % 100
    );

    if !stats.latencies_ms.is_empty() {
        let mut sorted = stats.latencies_ms.clone();
        sorted.sort_unstable();
        println!();
        println!("Latency (completed round trips):");
        println!("  Min:  {}ms", sorted.first().copied().unwrap_or(0));
        println!("  Max:  {}ms", sorted.last().copied().unwrap_or(0));
        println!("  Mean: {}ms", stats.avg_latency_ms());
        println!("  P50:  {}ms", nearest_rank(&sorted, 50));
        println!("  P95:  {}ms", nearest_rank(&sorted, 95));
        println!("  P99:  {}ms", nearest_rank(&sorted, 99));
    }

    print_query_impact(stats);
}

fn print_query_impact(stats: &RunStats) {
    let slow_queries = stats.slow_requests.saturating_mul(SLOW_QUERIES_PER_REQUEST);
    let fast_queries = stats.fast_requests.saturating_mul(FAST_QUERIES_PER_REQUEST);
    let total_queries = slow_queries.saturating_add(fast_queries);
    let saved = stats
        .slow_requests
        .saturating_mul(SLOW_QUERIES_PER_REQUEST.saturating_sub(FAST_QUERIES_PER_REQUEST));

    println!();
    println!("Estimated database impact:");
    println!(
        "  Slow endpoint:  ~{} queries per request",
        SLOW_QUERIES_PER_REQUEST
    );
    println!(
        "  Fast endpoint:  {} query per request",
        FAST_QUERIES_PER_REQUEST
    );
    println!("  Queries issued: ~{}", total_queries);
    println!("  A join fetch would have saved: ~{} queries", saved);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_use_two_implied_decimals() -> Result<(), String> {
        if share_x100(1, 3) != 3333 {
            return Err(format!("Expected 3333, got {}", share_x100(1, 3)));
        }
        if share_x100(0, 0) != 0 {
            return Err("Expected an empty run to report 0%".to_owned());
        }
        if share_x100(2, 2) != 10_000 {
            return Err(format!("Expected 10000, got {}", share_x100(2, 2)));
        }
        Ok(())
    }
}
