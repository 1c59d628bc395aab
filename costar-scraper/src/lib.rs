pub mod error;
pub mod extract;
pub mod fetcher;

pub use error::{Result, ScrapeError};
pub use extract::Extractor;
pub use fetcher::Fetcher;
