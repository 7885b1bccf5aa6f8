use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DashError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be decoded as the expected JSON envelope.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The submitted input contained no symbols after normalization.
    #[error("please enter at least one stock symbol")]
    EmptySymbols,

    /// The submitted input contained more symbols than one request accepts.
    #[error("a maximum of 10 stock symbols is allowed (got {count})")]
    TooManySymbols {
        /// How many symbols the input normalized to.
        count: usize,
    },

    /// A submission was attempted while a request was already in flight.
    #[error("a fetch is already in progress")]
    Busy,
}
