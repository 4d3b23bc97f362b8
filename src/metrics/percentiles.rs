/// Nearest-rank percentile over an ascending-sorted sample:
/// `index = ceil(p/100 x N) - 1`, clamped to `[0, N-1]`.
///
/// The rank is biased, not interpolated; reports and their tests depend on
/// these exact indices.
#[must_use]
pub(crate) fn nearest_rank(sorted_ms: &[u64], percentile: u64) -> u64 {
    if sorted_ms.is_empty() {
        return 0;
    }
    let len = u64::try_from(sorted_ms.len()).unwrap_or(u64::MAX);
    let rank = percentile
        .saturating_mul(len)
        .saturating_add(99)
        .checked_div(100)
        .unwrap_or(0);
    let index = rank.saturating_sub(1).min(len.saturating_sub(1));
    let idx = usize::try_from(index).unwrap_or(0);
    sorted_ms.get(idx).copied().unwrap_or(0)
}
