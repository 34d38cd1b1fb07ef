//! Dataset loading error types.

/// Errors that can occur while loading or reloading the route dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Reading the dataset file failed
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request for the dataset failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset endpoint returned an error status
    #[error("dataset API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The dataset document is not valid JSON
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A route in the document failed validation
    #[error("invalid route {name:?}: {reason}")]
    InvalidRoute { name: String, reason: String },
}
