use super::types::{Percent, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(super) fn parse_positive_usize(s: &str) -> AppResult<PositiveUsize> {
    s.parse::<PositiveUsize>().map_err(AppError::from)
}

pub(super) fn parse_percent(s: &str) -> AppResult<Percent> {
    s.parse::<Percent>().map_err(AppError::from)
}
