//! Transport primitives for signed Snap calls.
//!
//! The module exposes [`SnapHttpClient`], the client's only dependency on an HTTP stack, and
//! [`TransportErrorMapper`], which converts a transport's native error into the crate [`Error`].
//! [`ReqwestHttpClient`] is the default implementation; [`mock::ScriptedHttpClient`] replays
//! canned responses for deterministic tests.

pub mod mock;

// self
use crate::{_prelude::*, endpoint::Endpoint, error::TransportError};
#[cfg(feature = "reqwest")] use crate::{config::ClientConfig, error::ConfigError};

/// Request handed to a [`SnapHttpClient`].
pub type HttpRequest = ::http::Request<Vec<u8>>;
/// Response returned by a [`SnapHttpClient`].
pub type HttpResponse = ::http::Response<Vec<u8>>;
/// Boxed future returned by [`SnapHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing signed Snap requests.
///
/// Implementations see the complete outgoing request (method, URL, headers, body) and control the
/// complete response, so a test double can assert on signatures and inject any status, body, or
/// failure. They must be `Send + Sync + 'static` so one transport can back many clients, and the
/// returned future must be `Send`. Implementations must not interpret status codes; a non-2xx
/// response is still `Ok`.
pub trait SnapHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the full response.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Maps HTTP transport failures into client [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an error emitted by the transport while calling `endpoint`.
	///
	/// `timeout` is the budget the call was given.
	fn map_transport_error(&self, endpoint: Endpoint, timeout: StdDuration, error: E) -> Error;
}

/// Mapper that reports every transport error as [`TransportError::Network`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkErrorMapper;
impl<E> TransportErrorMapper<E> for NetworkErrorMapper
where
	E: 'static + Send + Sync + StdError,
{
	fn map_transport_error(&self, _endpoint: Endpoint, _timeout: StdDuration, error: E) -> Error {
		TransportError::network(error).into()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Signed requests must not be replayed against another URI, so clients built by
/// [`ReqwestHttpClient::from_config`] do not follow redirects. Configure any custom
/// [`ReqwestClient`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the configured timeout and CA bundle.
	///
	/// When a CA bundle is configured it replaces the built-in trust roots, pinning TLS to the
	/// provider's chain.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder()
			.timeout(config.timeout)
			.redirect(reqwest::redirect::Policy::none());

		if let Some(pem) = config.ca_bundle.as_deref() {
			let certs =
				reqwest::Certificate::from_pem_bundle(pem).map_err(ConfigError::invalid_ca_bundle)?;

			if certs.is_empty() {
				return Err(ConfigError::InvalidCaBundle {
					source: "bundle contains no PEM certificates".into(),
				});
			}

			builder = builder.tls_built_in_root_certs(false);

			for cert in certs {
				builder = builder.add_root_certificate(cert);
			}
		}

		builder.build().map(Self).map_err(ConfigError::from)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SnapHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(reqwest::Request::try_from(request)?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, _endpoint: Endpoint, timeout: StdDuration, err: ReqwestError) -> Error {
		if err.is_builder() {
			return ConfigError::from(err).into();
		}
		if err.is_timeout() {
			return TransportError::Timeout { after: timeout }.into();
		}

		TransportError::from(err).into()
	}
}
