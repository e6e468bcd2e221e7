use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "tidemark", version)]
pub struct Cli {
    /// CSV file of daily quotes (date,open,high,low,close,volume)
    #[clap(long, default_value = "quotes.csv")]
    pub file: PathBuf,

    /// SMA period, in rows of the input file
    #[clap(long, default_value_t = 5)]
    pub period: usize,

    /// Print at most this many result rows
    #[clap(long, default_value_t = 30)]
    pub limit: usize,

    /// Decimal places used when rendering an average
    #[clap(long, default_value_t = 3)]
    pub precision: usize,
}
