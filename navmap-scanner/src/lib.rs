pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod result;
pub mod session;

pub use crawler::{Crawler, StatusCallback};
pub use error::{CrawlError, FetchError};
pub use extract::extract_links;
pub use fetch::Fetcher;
pub use result::CrawlSummary;
pub use session::CrawlSession;
