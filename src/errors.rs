//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request URL could not be built from the configured base URL.
    #[error("Invalid request URL")]
    Url(#[from] url::ParseError),
    /// The HTTP exchange itself failed (connection, timeout, or TLS).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {reason}")]
    Decode { reason: String, body: String },
    /// `login` was called on a client with no credentials configured.
    #[error("No credentials configured")]
    MissingCredentials,
    /// A session-scoped call was made before logging in.
    #[error("No active session")]
    MissingSession,
}
