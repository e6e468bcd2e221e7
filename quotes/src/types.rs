use chrono::NaiveDate;
use serde::Deserialize;

/// One period's OHLCV record.
///
/// Field order matches the CSV column order
/// (`date, open, high, low, close, volume`); the loader deserializes
/// records positionally, so header names are never trusted.
///
/// Invariant: quotes are supplied in non-decreasing date order. Nothing
/// downstream sorts — ordering is the supplier's contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}
