//! Client-level error types shared across signing, transport, and response classification.

// std
use std::path::PathBuf;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; no request was attempted.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Signing key is malformed or unusable.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be serialized.")]
	Serialization {
		/// Underlying encoder failure.
		#[source]
		source: serde_json::Error,
	},
	/// Transport failure (DNS, TCP, TLS, timeout, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider rejected the request.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Response body does not match the expected shape.
	#[error(transparent)]
	Parse(#[from] ParseError),
}
impl Error {
	/// Returns the provider error when the failure came from the API itself.
	pub fn as_api_error(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}

	/// Returns `true` when the provider rejected the request.
	pub fn is_api_error(&self) -> bool {
		self.as_api_error().is_some()
	}

	/// Returns `true` for provider authentication failures (HTTP 401).
	pub fn is_authentication(&self) -> bool {
		self.as_api_error().is_some_and(ApiError::is_authentication)
	}

	/// Returns `true` for provider validation failures (HTTP 400).
	pub fn is_validation(&self) -> bool {
		self.as_api_error().is_some_and(ApiError::is_validation)
	}

	/// Returns `true` when the provider reported a missing resource (HTTP 404).
	pub fn is_not_found(&self) -> bool {
		self.as_api_error().is_some_and(ApiError::is_not_found)
	}

	/// Returns `true` for provider-side failures (HTTP 5xx).
	pub fn is_server_error(&self) -> bool {
		self.as_api_error().is_some_and(ApiError::is_server_error)
	}

	/// Returns `true` when the call was cancelled through its [`CallContext`](crate::transport::CallContext).
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Transport(TransportError::Cancelled))
	}

	/// Returns `true` when the call exceeded its timeout or deadline.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Self::Transport(TransportError::Timeout { .. }))
	}
}

/// Configuration and validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Environment selector is neither `sandbox` nor `production`.
	#[error("Unknown environment `{value}`; expected `sandbox` or `production`.")]
	InvalidEnvironment {
		/// Rejected selector value.
		value: String,
	},
	/// Private key file could not be read.
	#[error("Private key file `{}` could not be read.", path.display())]
	KeyRead {
		/// Path that failed to load.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Partner or external identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// Base URL override cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than HTTP(S).
	#[error("Base URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// URL that failed validation.
		url: String,
	},
	/// CA bundle does not contain usable PEM certificates.
	#[error("CA certificate bundle is invalid.")]
	InvalidCaBundle {
		/// Underlying certificate parsing failure.
		#[source]
		source: BoxError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] ::http::Error),
	/// A header value contains characters HTTP does not allow.
	#[error("Header `{name}` has an invalid value.")]
	InvalidHeader {
		/// Header name.
		name: &'static str,
		/// Underlying validation failure.
		#[source]
		source: ::http::header::InvalidHeaderValue,
	},
	/// Request timestamp could not be rendered.
	#[error("Request timestamp could not be formatted.")]
	Timestamp(#[from] time::error::Format),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a certificate parsing failure inside [`ConfigError`].
	pub fn invalid_ca_bundle(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::InvalidCaBundle { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures raised while loading the signing key or producing a signature.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// PEM block or key container could not be decoded.
	#[error("Private key could not be parsed: {reason}.")]
	KeyParse {
		/// Human-readable decoder failure.
		reason: String,
	},
	/// Key decoded but is not an RSA key.
	#[error("Private key is not an RSA key (algorithm {algorithm}).")]
	KeyType {
		/// Object identifier of the key algorithm that was found.
		algorithm: String,
	},
	/// RSA signing primitive failed.
	#[error("Signing the request failed.")]
	Sign {
		/// Underlying RSA failure.
		#[source]
		source: rsa::Error,
	},
}
impl SigningError {
	pub(crate) fn key_parse(reason: impl Display) -> Self {
		Self::KeyParse { reason: reason.to_string() }
	}
}

/// Transport-level failures: network errors, timeouts, and cancellation.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Snap API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Call exceeded the configured timeout or the context deadline.
	#[error("Request timed out after {}ms.", after.as_millis())]
	Timeout {
		/// Budget that elapsed.
		after: StdDuration,
	},
	/// Call was cancelled by the caller.
	#[error("Request was cancelled before a response arrived.")]
	Cancelled,
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

/// Coarse category of an [`ApiError`], derived from its HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
	/// HTTP 401.
	Authentication,
	/// HTTP 400.
	Validation,
	/// HTTP 404.
	NotFound,
	/// HTTP 5xx.
	Server,
	/// Any other status.
	Unknown,
}

/// Error returned by the Snap API.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub struct ApiError {
	/// HTTP status code.
	pub status_code: u16,
	/// Provider-specific error code.
	pub code: String,
	/// Human-readable message.
	pub message: String,
	/// Additional details, when the provider supplied any.
	pub details: Option<String>,
}
impl ApiError {
	/// Creates a new API error.
	pub fn new(
		status_code: u16,
		code: impl Into<String>,
		message: impl Into<String>,
		details: Option<String>,
	) -> Self {
		Self { status_code, code: code.into(), message: message.into(), details }
	}

	/// Classifies the error by HTTP status.
	pub fn kind(&self) -> ApiErrorKind {
		match self.status_code {
			400 => ApiErrorKind::Validation,
			401 => ApiErrorKind::Authentication,
			404 => ApiErrorKind::NotFound,
			code if code >= 500 => ApiErrorKind::Server,
			_ => ApiErrorKind::Unknown,
		}
	}

	/// Returns `true` for HTTP 401.
	pub fn is_authentication(&self) -> bool {
		self.kind() == ApiErrorKind::Authentication
	}

	/// Returns `true` for HTTP 400.
	pub fn is_validation(&self) -> bool {
		self.kind() == ApiErrorKind::Validation
	}

	/// Returns `true` for HTTP 404.
	pub fn is_not_found(&self) -> bool {
		self.kind() == ApiErrorKind::NotFound
	}

	/// Returns `true` for HTTP 5xx.
	pub fn is_server_error(&self) -> bool {
		self.kind() == ApiErrorKind::Server
	}
}
impl Display for ApiError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Faspay API error (HTTP {}, Code: {}): {}", self.status_code, self.code, self.message)?;

		match &self.details {
			Some(details) if !details.is_empty() => write!(f, " - {details}"),
			_ => Ok(()),
		}
	}
}

/// Response body could not be decoded into the expected type.
#[derive(Debug, ThisError)]
#[error("Snap API returned a response that does not match the expected shape (HTTP {status}).")]
pub struct ParseError {
	/// Structured parsing failure, including the JSON path that failed.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code of the response.
	pub status: u16,
}
