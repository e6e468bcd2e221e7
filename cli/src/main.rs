pub mod cli;
pub mod report;

use clap::Parser;

use cli::Cli;
use common::logger::{self, TraceId};
use indicators::sma::compute_sma;
use quotes::loader::read_quotes;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logger::init_logger("tidemark");

    let trace_id = TraceId::new();
    let span = logger::batch_span(&trace_id);
    let _guard = span.enter();

    let quotes = read_quotes(&args.file)?;
    let results = compute_sma(&quotes, args.period)?;
    tracing::info!(period = args.period, rows = results.len(), "sma computed");

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &results, args.limit, args.precision)?;

    Ok(())
}
