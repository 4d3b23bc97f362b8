//! Outcome aggregation, periodic reporting, and latency percentiles.
mod collector;
mod percentiles;
mod types;


pub(crate) use collector::setup_stats_collector;
pub(crate) use percentiles::nearest_rank;
pub(crate) use types::{Outcome, RunStats};
