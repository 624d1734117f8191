//! API client error types

/// Errors reported by the generated API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error response.
    ///
    /// Displays only `message`; the raw body is exposed through
    /// [`ResponseBody`] so callers can append it as details.
    #[error("{message}")]
    Response {
        /// HTTP status code, if the response got that far.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Failed to (de)serialize a request or response.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O failure while talking to the server.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Creates a new response error.
    pub fn response(status: u16, message: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::Response {
            status: Some(status),
            message: message.into(),
            body: body.into(),
        }
    }

    /// Creates a response error without status, as produced when the client
    /// fails before reading one.
    pub fn with_body(message: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::Response {
            status: None,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Returns the HTTP status code if this is a response error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns the raw response body if this is a response error.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Response { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    /// Returns `true` if the server reported the entity as missing.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Errors that may carry a raw API response body.
///
/// [`client_error`](super::client_error) appends the body as details when
/// one is present. Error types opt in by overriding
/// [`response_body`](ResponseBody::response_body); the default reports none.
pub trait ResponseBody {
    /// Returns the raw response body, if this error carries one.
    fn response_body(&self) -> Option<&[u8]> {
        None
    }
}

impl ResponseBody for ApiError {
    fn response_body(&self) -> Option<&[u8]> {
        self.body()
    }
}

impl ResponseBody for str {}
impl ResponseBody for String {}
impl ResponseBody for serde_json::Error {}
impl ResponseBody for std::io::Error {}

impl ResponseBody for dyn std::error::Error + 'static {
    fn response_body(&self) -> Option<&[u8]> {
        self.downcast_ref::<ApiError>().and_then(ApiError::body)
    }
}

impl ResponseBody for dyn std::error::Error + Send + Sync + 'static {
    fn response_body(&self) -> Option<&[u8]> {
        self.downcast_ref::<ApiError>().and_then(ApiError::body)
    }
}
