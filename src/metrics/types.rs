use std::time::Duration;

use crate::http::Variant;

/// Status code treated as success; every other response counts as an error.
const SUCCESS_STATUS: u16 = 200;

/// One completed request attempt.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Outcome {
    pub variant: Variant,
    pub succeeded: bool,
    /// Wall-clock send-to-full-response time. `None` when the attempt failed
    /// before a complete response arrived, since no round trip finished.
    pub latency_ms: Option<u64>,
}

impl Outcome {
    #[must_use]
    pub(crate) fn completed(variant: Variant, status: u16, latency: Duration) -> Self {
        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        Self {
            variant,
            succeeded: status == SUCCESS_STATUS,
            latency_ms: Some(latency_ms),
        }
    }

    #[must_use]
    pub(crate) const fn transport_error(variant: Variant) -> Self {
        Self {
            variant,
            succeeded: false,
            latency_ms: None,
        }
    }
}

/// Aggregate counters plus the full latency sample. Owned by the collector
/// task; workers only ever send `Outcome` messages at it.
#[derive(Debug, Default)]
pub(crate) struct RunStats {
    pub total_requests: u64,
    pub slow_requests: u64,
    pub fast_requests: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub latency_sum_ms: u128,
    pub latencies_ms: Vec<u64>,
}

impl RunStats {
    /// Applies one outcome. Every attempt bumps the total and exactly one of
    /// each variant/result pair, so `total == slow + fast == success + error`
    /// holds after every call.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.total_requests = self.total_requests.saturating_add(1);
        match outcome.variant {
            Variant::Slow => self.slow_requests = self.slow_requests.saturating_add(1),
            Variant::Fast => self.fast_requests = self.fast_requests.saturating_add(1),
        }
        if outcome.succeeded {
            self.success_count = self.success_count.saturating_add(1);
        } else {
            self.error_count = self.error_count.saturating_add(1);
        }
        if let Some(latency_ms) = outcome.latency_ms {
            self.latency_sum_ms = self.latency_sum_ms.saturating_add(u128::from(latency_ms));
            self.latencies_ms.push(latency_ms);
        }
    }

    /// Mean over the recorded (completed) latencies, in whole milliseconds.
    #[must_use]
    pub(crate) fn avg_latency_ms(&self) -> u64 {
        let samples = u128::try_from(self.latencies_ms.len()).unwrap_or(u128::MAX);
        if samples == 0 {
            return 0;
        }
        let avg = self.latency_sum_ms.checked_div(samples).unwrap_or(0);
        u64::try_from(avg).unwrap_or(u64::MAX)
    }

    /// Requests per second with two implied decimals.
    #[must_use]
    pub(crate) fn avg_throughput_x100(&self, elapsed: Duration) -> u64 {
        let elapsed_ms = elapsed.as_millis().max(1);
        let scaled = u128::from(self.total_requests)
            .saturating_mul(100_000)
            .checked_div(elapsed_ms)
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }

    /// Errors as a percentage of all requests, with two implied decimals.
    #[must_use]
    pub(crate) fn error_rate_x100(&self) -> u64 {
        if self.total_requests == 0 {
            return 0;
        }
        let scaled = u128::from(self.error_count)
            .saturating_mul(10_000)
            .checked_div(u128::from(self.total_requests))
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}
