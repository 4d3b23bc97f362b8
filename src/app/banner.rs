use std::time::Duration;

use crate::config::{RunConfig, STARTUP_GRACE};
use crate::http::{Variant, endpoint_url};

/// Prints the resolved run plan before the grace pause so the operator sees
/// what is about to hit the service.
pub(crate) fn print_run_plan(config: &RunConfig, delay: Duration) {
    let rate_per_sec_x100 = config.rate_rpm.saturating_mul(100) / 60;
    let fast_percent = 100u8.saturating_sub(config.slow_percent);

    println!("Order service load generator");
    println!();
    println!("Base URL:         {}", config.base_url);
    println!("Workers:          {}", config.workers);
    println!(
        "Rate:             {} req/min ({}.{:02} req/s)",
        config.rate_rpm,
        rate_per_sec_x100 / 100,
        rate_per_sec_x100 % 100
    );
    if config.run_forever {
        println!("Duration:         forever (until interrupted)");
    } else {
        println!("Duration:         {}s", config.duration.as_secs());
    }
    println!(
        "Variant split:    {}% slow / {}% fast",
        config.slow_percent, fast_percent
    );
    println!("Customer:         {}", config.customer_id);
    println!("Per-worker delay: {}ms", delay.as_millis());
    println!();
    println!(
        "Slow endpoint: {}",
        endpoint_url(&config.base_url, Variant::Slow, config.customer_id)
    );
    println!(
        "Fast endpoint: {}",
        endpoint_url(&config.base_url, Variant::Fast, config.customer_id)
    );
    println!();
    println!("Starting load in {}s...", STARTUP_GRACE.as_secs());
}
