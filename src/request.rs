//! Outbound request assembly: body serialization, timestamping, signing, and headers.

// crates.io
use ::http::{
	HeaderMap, HeaderName, HeaderValue, Method,
	header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
};
use rand::Rng;
use time::macros::format_description;
// self
use crate::{
	_prelude::*,
	auth::{ExternalId, PartnerId},
	config::ClientConfig,
	error::ConfigError,
	http::HttpRequest,
	sign::{SigningInput, SigningKey},
};

/// `User-Agent` sent with every request.
pub const USER_AGENT_VALUE: &str = concat!("FaspaySendMeSnapRust/", env!("CARGO_PKG_VERSION"));
/// Fixed `CHANNEL-ID` assigned by the provider.
pub const CHANNEL_ID: &str = "88001";

/// `X-TIMESTAMP` header.
pub const X_TIMESTAMP: HeaderName = HeaderName::from_static("x-timestamp");
/// `X-SIGNATURE` header.
pub const X_SIGNATURE: HeaderName = HeaderName::from_static("x-signature");
/// `X-PARTNER-ID` header.
pub const X_PARTNER_ID: HeaderName = HeaderName::from_static("x-partner-id");
/// `X-EXTERNAL-ID` header.
pub const X_EXTERNAL_ID: HeaderName = HeaderName::from_static("x-external-id");
/// `CHANNEL-ID` header.
pub const CHANNEL_ID_HEADER: HeaderName = HeaderName::from_static("channel-id");

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Fully signed request, ready for a transport.
#[derive(Clone, Debug)]
pub struct RequestEnvelope {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// Headers, including the signature headers.
	pub headers: HeaderMap,
	/// Serialized JSON body, transmitted unchanged.
	///
	/// The signature digest is [`body_digest`](crate::sign::body_digest) of these bytes.
	pub body: Vec<u8>,
	/// `X-TIMESTAMP` value that went into the signature.
	pub timestamp: String,
	/// `X-SIGNATURE` value.
	pub signature: String,
	/// `X-EXTERNAL-ID` value.
	pub external_id: String,
}
impl RequestEnvelope {
	/// Converts the envelope into the request type consumed by
	/// [`SnapHttpClient`](crate::http::SnapHttpClient).
	pub fn into_http_request(self) -> Result<HttpRequest, ConfigError> {
		let mut request =
			::http::Request::builder().method(self.method).uri(self.url.as_str()).body(self.body)?;

		*request.headers_mut() = self.headers;

		Ok(request)
	}
}

/// Assembles signed [`RequestEnvelope`]s for one client configuration.
#[derive(Clone, Copy, Debug)]
pub struct RequestBuilder<'a> {
	partner_id: &'a PartnerId,
	external_id: Option<&'a ExternalId>,
	utc_offset: UtcOffset,
	key: &'a SigningKey,
}
impl<'a> RequestBuilder<'a> {
	/// Creates a builder bound to `config` and an already-parsed key.
	pub fn new(config: &'a ClientConfig, key: &'a SigningKey) -> Self {
		Self {
			partner_id: &config.partner_id,
			external_id: config.external_id.as_ref(),
			utc_offset: config.utc_offset,
			key,
		}
	}

	/// Builds a request stamped with the current time.
	pub fn build<T>(
		&self,
		base_url: &Url,
		path: &str,
		method: Method,
		body: Option<&T>,
	) -> Result<RequestEnvelope>
	where
		T: ?Sized + Serialize,
	{
		let timestamp = timestamp_now(self.utc_offset)?;

		self.build_at(base_url, path, method, body, timestamp)
	}

	/// Builds a request stamped with `timestamp`.
	pub fn build_at<T>(
		&self,
		base_url: &Url,
		path: &str,
		method: Method,
		body: Option<&T>,
		timestamp: String,
	) -> Result<RequestEnvelope>
	where
		T: ?Sized + Serialize,
	{
		let body = match body {
			Some(value) =>
				serde_json::to_string(value).map_err(|source| Error::Serialization { source })?,
			None => String::new(),
		};
		let signature = self.key.sign(&SigningInput {
			method: method.as_str(),
			path,
			body: &body,
			timestamp: &timestamp,
		})?;
		let external_id = match self.external_id {
			Some(id) => id.to_string(),
			None => generate_external_id(self.partner_id),
		};
		let mut headers = HeaderMap::with_capacity(8);

		headers.insert(CONTENT_TYPE, APPLICATION_JSON);
		headers.insert(ACCEPT, APPLICATION_JSON);
		headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
		headers.insert(X_TIMESTAMP, header_value("X-TIMESTAMP", &timestamp)?);
		headers.insert(X_SIGNATURE, header_value("X-SIGNATURE", &signature)?);
		headers.insert(X_PARTNER_ID, header_value("X-PARTNER-ID", self.partner_id)?);
		headers.insert(X_EXTERNAL_ID, header_value("X-EXTERNAL-ID", &external_id)?);
		headers.insert(CHANNEL_ID_HEADER, HeaderValue::from_static(CHANNEL_ID));

		Ok(RequestEnvelope {
			url: endpoint_url(base_url, path)?,
			method,
			headers,
			body: body.into_bytes(),
			timestamp,
			signature,
			external_id,
		})
	}
}

/// Renders `at` as `YYYY-MM-DDTHH:MM:SS+HH:MM`.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, ConfigError> {
	Ok(at.format(format_description!(
		"[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
	))?)
}

/// Current time in `offset`, rendered with [`format_timestamp`].
pub fn timestamp_now(offset: UtcOffset) -> Result<String, ConfigError> {
	format_timestamp(OffsetDateTime::now_utc().to_offset(offset))
}

/// Per-request external identifier: partner id, epoch milliseconds, and a random suffix below 1000.
pub fn generate_external_id(partner_id: &PartnerId) -> String {
	let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
	let suffix = rand::rng().random_range(0..1000_u16);

	format!("{partner_id}{millis}{suffix}")
}

fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, ConfigError> {
	let joined = format!("{}{path}", base_url.as_str().trim_end_matches('/'));

	Url::parse(&joined).map_err(|source| ConfigError::InvalidBaseUrl { source })
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ConfigError> {
	HeaderValue::from_str(value).map_err(|source| ConfigError::InvalidHeader { name, source })
}
