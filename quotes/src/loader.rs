use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::QuoteError;
use crate::types::Quote;

/// Read quotes from a CSV file.
///
/// Contract with the file:
/// - fixed column order `date, open, high, low, close, volume`
/// - the first row is a header and is skipped by position
/// - dates are `YYYY-MM-DD`
///
/// Fail-fast: the first malformed row aborts the whole read. No partial
/// quote vector is ever returned.
pub fn read_quotes(path: impl AsRef<Path>) -> Result<Vec<Quote>, QuoteError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| QuoteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quotes = read_quotes_from(file)?;
    tracing::info!(path = %path.display(), rows = quotes.len(), "quotes loaded");
    Ok(quotes)
}

/// Reader-generic ingestion; `read_quotes` delegates here and tests feed
/// in-memory byte slices.
pub fn read_quotes_from<R: Read>(input: R) -> Result<Vec<Quote>, QuoteError> {
    // has_headers(false) so records deserialize positionally into `Quote`
    // field order; the header row is dropped by index instead.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(input);

    let mut quotes = Vec::new();
    let mut prev_date = None;

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if idx == 0 {
            continue; // header row
        }

        let quote: Quote = record.deserialize(None)?;

        if let Some(prev) = prev_date {
            if quote.date < prev {
                tracing::warn!(date = %quote.date, previous = %prev, "quote out of order");
            }
        }
        prev_date = Some(quote.date);

        quotes.push(quote);
    }

    Ok(quotes)
}
