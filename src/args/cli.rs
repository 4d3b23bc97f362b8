use clap::Parser;

use super::parsers::{parse_percent, parse_positive_u64, parse_positive_usize};
use super::types::{Percent, PositiveU64, PositiveUsize};

/// Defaults mirror the demo driver this tool replaces: 10 workers pushing
/// 5 requests per minute at a 70/30 slow/fast split for 5 minutes.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Rate-limited load generator for the order-service N+1 demo - weighted slow/fast endpoint traffic with live and final latency statistics."
)]
pub(crate) struct DriverArgs {
    /// Number of concurrent request workers
    #[arg(
        long = "threads",
        short = 't',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub threads: PositiveUsize,

    /// Test duration in seconds (ignored with --forever)
    #[arg(
        long = "duration",
        short = 'd',
        default_value = "300",
        value_parser = parse_positive_u64
    )]
    pub duration_secs: PositiveU64,

    /// Run until interrupted; --duration is ignored
    #[arg(long = "forever", short = 'f')]
    pub forever: bool,

    /// Percentage of requests sent to the slow endpoint (0-100)
    #[arg(
        long = "slow-percentage",
        short = 's',
        default_value = "70",
        value_parser = parse_percent
    )]
    pub slow_percentage: Percent,

    /// Customer id substituted into both endpoint URLs
    #[arg(long = "customer", short = 'c', default_value = "1")]
    pub customer_id: u64,

    /// Target requests per minute across all workers
    #[arg(
        long = "rate",
        short = 'r',
        default_value = "5",
        value_parser = parse_positive_u64
    )]
    pub rate_rpm: PositiveU64,

    /// Base URL of the order service under test
    #[arg(long = "base-url", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Enable verbose logging (debug level unless overridden by ORDERLOAD_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
