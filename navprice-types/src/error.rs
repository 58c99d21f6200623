use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a single failed price fetch.
///
/// Every per-instrument failure maps onto exactly one of these reasons. None of
/// them is fatal to a run; they are carried inside a failure outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport failure: DNS, connect, TLS, timeout or an interrupted body read.
    NetworkError,
    /// The provider answered with a non-2xx status.
    BadResponse,
    /// The body was not JSON of the expected shape.
    DecodeError,
    /// The price field was present but is not a number.
    ParseError,
}

impl ErrorKind {
    /// Stable snake_case label, used in structured output and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "network_error",
            Self::BadResponse => "bad_response",
            Self::DecodeError => "decode_error",
            Self::ParseError => "parse_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised while fetching the price of one instrument.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchError {
    /// The request never produced a complete response.
    #[error("failed to get fund info from URL: {msg}")]
    Network {
        /// Transport error detail (connect refused, timed out, ...).
        msg: String,
    },

    /// The provider returned a non-success status code.
    #[error("bad response from provider: HTTP {status}")]
    BadResponse {
        /// HTTP status code received.
        status: u16,
    },

    /// The response body could not be decoded into the expected document.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The `navPrice.value` field is not a valid decimal number.
    #[error("failed to read navPrice value {raw:?} as a number")]
    Parse {
        /// The raw string as received from the provider.
        raw: String,
    },
}

impl FetchError {
    /// Helper: build a `Network` error from any displayable transport error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network { msg: msg.into() }
    }

    /// Helper: build a `Decode` error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Helper: build a `Parse` error for the offending raw value.
    pub fn parse(raw: impl Into<String>) -> Self {
        Self::Parse { raw: raw.into() }
    }

    /// The failure reason this error is reported under.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::NetworkError,
            Self::BadResponse { .. } => ErrorKind::BadResponse,
            Self::Decode(_) => ErrorKind::DecodeError,
            Self::Parse { .. } => ErrorKind::ParseError,
        }
    }
}

/// Unified error type for setup and orchestration failures.
///
/// These are the only errors that escape a run. Per-instrument problems are
/// [`FetchError`]s and never surface here.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavError {
    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Fewer outcomes arrived than fetches were launched.
    #[error("aggregation incomplete: expected {expected} outcomes, received {received}")]
    Incomplete {
        /// Number of fetches launched.
        expected: usize,
        /// Number of outcomes received before the channel closed.
        received: usize,
    },
}

impl NavError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Client` error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_kinds_cover_taxonomy() {
        assert_eq!(FetchError::network("refused").kind(), ErrorKind::NetworkError);
        assert_eq!(
            FetchError::BadResponse { status: 503 }.kind(),
            ErrorKind::BadResponse
        );
        assert_eq!(FetchError::decode("eof").kind(), ErrorKind::DecodeError);
        assert_eq!(FetchError::parse("abc").kind(), ErrorKind::ParseError);
    }

    #[test]
    fn bad_response_message_names_status() {
        let e = FetchError::BadResponse { status: 503 };
        assert!(e.to_string().contains("503"));
    }
}
