use thiserror::Error;

/// Failure classes for the page-fetch and file-read collaborators.
///
/// These cross the trait seam as `anyhow::Error`; the scanner logs and
/// absorbs them, so they never reach a library caller.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Only http and https URLs are supported, got {0}")]
    UnsupportedScheme(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response too large: {got} bytes (max: {max})")]
    TooLarge { got: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
