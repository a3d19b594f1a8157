//! Client-level error types shared across facades, the request builder, and dispatchers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller-supplied request parameters failed validation.
	#[error(transparent)]
	InvalidArgument(#[from] InvalidArgument),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Management endpoint answered with a non-success status.
	#[error("Management endpoint returned HTTP {status}: {message}.")]
	Endpoint {
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Response body summarized as a reason string.
		message: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Management endpoint answered 2xx with a body that is not a content identifier.
	#[error("Management endpoint returned a body that is not a content identifier.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the malformed response.
		status: u16,
	},
}

/// Parameter validation failures raised by facade methods before any request is built.
///
/// The messages are part of the public contract; callers match on them when
/// migrating from older SDKs that reported validation problems as plain strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum InvalidArgument {
	/// `language_code` was empty.
	#[error("You must include a languageCode in your request params.")]
	MissingLanguageCode,
	/// `content_id` was zero or negative.
	#[error("You must include a contentID greater than 0 your request params.")]
	NonPositiveContentId,
}

/// Configuration and construction failures raised before dispatch.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL is opaque (`data:`, `mailto:`, ...) and cannot carry method routes.
	#[error("Base URL cannot serve as a base for method routes.")]
	OpaqueBaseUrl,
	/// Website name was empty or whitespace.
	#[error("Website name cannot be empty.")]
	EmptyWebsiteName,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO) surfaced by dispatchers.
///
/// Facades never inspect or reclassify these; they flow back to the caller
/// exactly as the dispatcher produced them.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the management endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the management endpoint.")]
	Io(#[from] std::io::Error),
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
