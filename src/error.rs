//! Client-level error types shared across the dispatcher, the OAuth handshake, and the
//! business endpoints.

// self
use crate::{_prelude::*, validate::ValidationError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Required request parameters were missing; raised before any network call.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (network, non-success status, malformed response).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration failures raised while building the client or its requests.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Consumer key is empty.
	#[error("Consumer key cannot be empty.")]
	MissingConsumerKey,
	/// Environment name is not recognized.
	#[error("Unknown environment `{name}`.")]
	UnknownEnvironment {
		/// Name that failed to parse.
		name: String,
	},
	/// Base domain cannot be turned into an API host.
	#[error("Base domain `{domain}` is invalid.")]
	InvalidBaseDomain {
		/// Offending domain.
		domain: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A base URL override must use HTTPS unless it points at a loopback host.
	#[error("The {endpoint} base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// Which base URL failed validation.
		endpoint: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// Endpoint path could not be resolved against its base URL.
	#[error("Endpoint `{uri}` cannot be resolved against the base URL.")]
	InvalidEndpoint {
		/// Endpoint path supplied by the caller.
		uri: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint resolved to a different scheme, host, or port than its base URL.
	#[error("Endpoint `{uri}` points outside the configured base URL.")]
	ForeignEndpoint {
		/// Endpoint path supplied by the caller.
		uri: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures, propagated unchanged to the caller.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Server answered with a non-success status code.
	#[error("API responded with HTTP {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Raw response body, kept for diagnostics.
		body: String,
	},
	/// Response body did not carry the expected fields.
	#[error("API returned a malformed response: {reason}.")]
	MalformedResponse {
		/// What was missing or unparsable.
		reason: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_error_reports_code() {
		let err: Error = TransportError::Status { status: 401, body: "denied".into() }.into();

		assert_eq!(err.to_string(), "API responded with HTTP 401.");
		assert!(matches!(err, Error::Transport(TransportError::Status { status: 401, .. })));
	}
}
