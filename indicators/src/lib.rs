pub mod sma;
pub mod window;

use quotes::Quote;
use thiserror::Error;

/// Stateful per-quote computation.
///
/// An indicator consumes quotes one at a time, in supplied order, and
/// emits one output per quote. Warm-up is the implementation's concern:
/// outputs produced before enough history exists carry no value.
pub trait Indicator {
    type Output;

    fn update(&mut self, quote: &Quote) -> Self::Output;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("invalid period {0}: period must be at least 1")]
    InvalidPeriod(usize),
}
