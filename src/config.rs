use std::time::Duration;

use tokio::time::Instant;
use url::Url;

use crate::args::DriverArgs;
use crate::error::{AppError, AppResult, ValidationError};

/// Grace pause between printing the run plan and the first request, so an
/// operator can read the configuration before load begins.
pub(crate) const STARTUP_GRACE: Duration = Duration::from_secs(3);

/// Resolved, immutable run configuration. Built once at startup; everything
/// the workers need is derived from it before they spawn.
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    pub workers: usize,
    pub duration: Duration,
    pub run_forever: bool,
    pub slow_percent: u8,
    pub customer_id: u64,
    pub rate_rpm: u64,
    pub base_url: String,
}

impl RunConfig {
    pub(crate) fn resolve(args: &DriverArgs) -> AppResult<Self> {
        if Url::parse(&args.base_url).is_err() {
            return Err(AppError::validation(ValidationError::InvalidBaseUrl {
                value: args.base_url.clone(),
            }));
        }

        let config = Self {
            workers: args.threads.get(),
            duration: Duration::from_secs(args.duration_secs.get()),
            run_forever: args.forever,
            slow_percent: args.slow_percentage.get(),
            customer_id: args.customer_id,
            rate_rpm: args.rate_rpm.get(),
            base_url: args.base_url.trim_end_matches('/').to_owned(),
        };

        // The CLI newtypes already reject a zero rate; deriving the delay here
        // keeps a division by zero from ever reaching the workers.
        config.worker_delay()?;

        Ok(config)
    }

    /// Pause between consecutive requests of one worker:
    /// `(60_000 ms x workers) / rate_rpm`, floored to whole milliseconds.
    ///
    /// Adding workers without raising the rate stretches each worker's pause
    /// proportionally, so the aggregate rate stays at `rate_rpm`.
    pub(crate) fn worker_delay(&self) -> AppResult<Duration> {
        let workers = u64::try_from(self.workers).unwrap_or(u64::MAX);
        let total_ms = 60_000u64
            .checked_mul(workers)
            .ok_or_else(|| AppError::validation(ValidationError::DelayOverflow))?;
        let millis = total_ms
            .checked_div(self.rate_rpm)
            .ok_or_else(|| AppError::validation(ValidationError::ZeroRate))?;
        Ok(Duration::from_millis(millis))
    }

    /// Wall-clock stop point, `None` when running until interrupted.
    pub(crate) fn deadline(&self, run_start: Instant) -> Option<Instant> {
        if self.run_forever {
            None
        } else {
            run_start.checked_add(self.duration)
        }
    }
}
