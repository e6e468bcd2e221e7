pub mod error;
pub mod loader;
pub mod types;

pub use error::QuoteError;
pub use types::Quote;
