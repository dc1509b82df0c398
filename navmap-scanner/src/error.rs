use thiserror::Error;

/// Fatal crawl errors. Per-URL fetch problems are [`FetchError`]s and are
/// contained inside the crawl loop; only these abort the whole operation.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid seed URL: {0}")]
    InvalidSeedUrl(String),

    #[error("task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

/// Failure fetching a single URL. Terminal for that URL, never for the crawl.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
