use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed quote row: {0}")]
    Csv(#[from] csv::Error),
}
