mod cli;
mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub(crate) use cli::DriverArgs;
pub(crate) use types::{Percent, PositiveU64, PositiveUsize};
