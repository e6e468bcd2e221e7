use chrono::NaiveDate;
use quotes::Quote;

use crate::window::SlidingWindow;
use crate::{Indicator, IndicatorError};

/// Simple Moving Average
///
/// The SMA answers:
/// > "What did this instrument close at, on average, over the last N periods?"
///
/// ## Definition
///
/// ```text
/// sma[i] = (close[i-N+1] + ... + close[i]) / N      for i >= N-1
/// sma[i] = absent                                   otherwise
/// ```
///
/// ## Warm-up guard
/// The first `N-1` outputs carry `sma = None`: an average over fewer than
/// N closes would not be an N-period average.
///
/// ## Design properties
/// - Sliding-window based: O(1) per quote, O(N) memory
/// - One output per input, dates copied pointwise
/// - Deterministic, no internal rounding
pub struct Sma {
    window: SlidingWindow,
}

/// One output record, aligned 1:1 with an input quote.
#[derive(Debug, Clone, PartialEq)]
pub struct SmaResult {
    /// Date copied from the corresponding quote.
    pub date: NaiveDate,

    /// The N-period mean of closes, once N quotes have been seen.
    pub sma: Option<f64>,
}

impl Sma {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidPeriod(period));
        }

        Ok(Self {
            window: SlidingWindow::new(period),
        })
    }
}

impl Indicator for Sma {
    type Output = SmaResult;

    fn update(&mut self, quote: &Quote) -> SmaResult {
        self.window.push(quote.close);

        SmaResult {
            date: quote.date,
            sma: self.window.mean(),
        }
    }
}

/// Batch driver: run the SMA over an already-materialized quote series.
///
/// Pure over its inputs; the period is validated before any quote is
/// touched, so an invalid period never produces partial output.
pub fn compute_sma(quotes: &[Quote], period: usize) -> Result<Vec<SmaResult>, IndicatorError> {
    let mut sma = Sma::new(period)?;
    Ok(quotes.iter().map(|q| sma.update(q)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn quote(day: u32, close: f64) -> Quote {
        Quote {
            date: NaiveDate::from_ymd_opt(2021, 1, day).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000.0,
        }
    }

    fn series(closes: &[f64]) -> Vec<Quote> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| quote(i as u32 + 1, c))
            .collect()
    }

    #[test]
    fn five_period_sma_over_six_closes() {
        let quotes = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let results = compute_sma(&quotes, 5).unwrap();

        let smas: Vec<Option<f64>> = results.iter().map(|r| r.sma).collect();
        assert_eq!(smas, vec![None, None, None, None, Some(3.0), Some(4.0)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let results = compute_sma(&[], 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn period_longer_than_series_never_warms_up() {
        let quotes = series(&[10.0, 11.0, 12.0]);
        let results = compute_sma(&quotes, 5).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.sma.is_none()));
    }

    #[test]
    fn period_one_echoes_the_close() {
        let quotes = series(&[10.0, 11.5, 9.25]);
        let results = compute_sma(&quotes, 1).unwrap();

        for (q, r) in quotes.iter().zip(&results) {
            assert_eq!(r.sma, Some(q.close));
        }
    }

    #[test]
    fn zero_period_is_rejected_before_computation() {
        let quotes = series(&[1.0, 2.0]);
        let err = compute_sma(&quotes, 0).unwrap_err();
        assert_eq!(err, IndicatorError::InvalidPeriod(0));
    }

    #[test]
    fn dates_are_copied_pointwise_in_order() {
        let quotes = series(&[1.0, 2.0, 3.0, 4.0]);
        let results = compute_sma(&quotes, 2).unwrap();

        let in_dates: Vec<_> = quotes.iter().map(|q| q.date).collect();
        let out_dates: Vec<_> = results.iter().map(|r| r.date).collect();
        assert_eq!(in_dates, out_dates);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let quotes = series(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0]);

        let first = compute_sma(&quotes, 3).unwrap();
        let second = compute_sma(&quotes, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mean_uses_only_the_trailing_window() {
        // A spike outside the window must not leak into later averages.
        let quotes = series(&[100.0, 1.0, 2.0, 3.0]);
        let results = compute_sma(&quotes, 3).unwrap();

        assert_eq!(results[3].sma, Some(2.0)); // (1 + 2 + 3) / 3
    }
}
