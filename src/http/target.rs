use rand::Rng;

/// Which of the two order-lookup endpoints a request exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    /// One query per order plus one per related record on the service side.
    Slow,
    /// Single join-fetch query on the service side.
    Fast,
}

/// URL templates of the order service; `{customerId}` is replaced with the
/// configured customer id.
const SLOW_ENDPOINT: &str = "/api/orders/customer/{customerId}/slow";
const FAST_ENDPOINT: &str = "/api/orders/customer/{customerId}/fast";

const CUSTOMER_PLACEHOLDER: &str = "{customerId}";

impl Variant {
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Variant::Slow => "slow",
            Variant::Fast => "fast",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Variant::Slow => SLOW_ENDPOINT,
            Variant::Fast => FAST_ENDPOINT,
        }
    }
}

/// Builds the concrete request URL for one variant.
#[must_use]
pub(crate) fn endpoint_url(base_url: &str, variant: Variant, customer_id: u64) -> String {
    let path = variant
        .template()
        .replace(CUSTOMER_PLACEHOLDER, &customer_id.to_string());
    format!("{}{}", base_url, path)
}

/// Weighted variant pick: a uniform draw in [0, 100) below `slow_percent`
/// selects the slow endpoint. 0 never picks it, 100 always does.
pub(crate) fn pick_variant<R>(rng: &mut R, slow_percent: u8) -> Variant
where
    R: Rng,
{
    if rng.gen_range(0u8..100) < slow_percent {
        Variant::Slow
    } else {
        Variant::Fast
    }
}
