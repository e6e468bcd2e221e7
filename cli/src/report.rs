use std::io::{self, Write};

use indicators::sma::SmaResult;

/// Render results as a two-column console report:
///
/// ```text
/// Date        SMA
/// 2021-01-04
/// 2021-01-08  217.342
/// ```
///
/// An unwarmed result renders an empty SMA column. `limit` truncates the
/// report for brevity; it never changes what was computed.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[SmaResult],
    limit: usize,
    precision: usize,
) -> io::Result<()> {
    writeln!(out, "Date        SMA")?;

    for r in results.iter().take(limit) {
        let date = r.date.format("%Y-%m-%d");
        match r.sma {
            Some(sma) => writeln!(out, "{date}  {sma:.precision$}")?,
            None => writeln!(out, "{date}  ")?,
        }
    }

    Ok(())
}
