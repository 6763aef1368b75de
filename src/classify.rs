//! Response classification: typed payloads for accepted calls, [`ApiError`] for rejections.
//!
//! Snap endpoints disagree on how failures are reported, so every call names a [`ResponseMode`]:
//!
//! - [`ResponseMode::Direct`] decodes the body into the target type whatever the HTTP status; the
//!   caller inspects `responseCode` itself.
//! - [`ResponseMode::Enveloped`] turns any status `>= 400` into an [`ApiError`] built from the
//!   provider's error envelope and decodes everything else.
//! - [`ResponseMode::Wrapped`] expects `{status, message, data, error}` and unwraps `data` when
//!   `status` is `"success"`.

// crates.io
use ::http::StatusCode;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	endpoint::status::SUCCESS,
	error::{ApiError, ParseError},
	http::HttpResponse,
};

/// Classification strategy for one response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResponseMode {
	/// Decode the body as-is, ignoring the HTTP status.
	Direct,
	/// Map statuses `>= 400` to [`ApiError`]; decode the rest.
	#[default]
	Enveloped,
	/// Unwrap a `{status, message, data, error}` envelope.
	Wrapped,
}

/// Classifies `response` into `T` or a structured [`Error`].
pub fn classify<T>(response: &HttpResponse, mode: ResponseMode) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status();
	let body = response.body().as_slice();

	match mode {
		ResponseMode::Direct => decode(body, status),
		ResponseMode::Enveloped if status.as_u16() >= 400 => Err(api_error(status, body).into()),
		ResponseMode::Enveloped => decode(body, status),
		ResponseMode::Wrapped if status.as_u16() >= 400 => Err(api_error(status, body).into()),
		ResponseMode::Wrapped => unwrap_envelope(body, status),
	}
}

/// Builds an [`ApiError`] from an error body.
///
/// Recognized keys are `code`/`responseCode`/`errorCode`, `message`/`responseMessage`, `error`,
/// `status`, and `details`; non-string values are rendered as compact JSON. A body that is not a
/// JSON object yields a generic error carrying the raw body as details.
pub fn api_error(status: StatusCode, body: &[u8]) -> ApiError {
	let reason = status.canonical_reason().unwrap_or("Unknown error");
	let envelope = match serde_json::from_slice::<Value>(body) {
		Ok(value @ Value::Object(_)) => serde_json::from_value::<ErrorEnvelope>(value).ok(),
		_ => None,
	};
	let Some(envelope) = envelope else {
		let raw = String::from_utf8_lossy(body).trim().to_owned();

		return ApiError::new(
			status.as_u16(),
			status.as_str(),
			reason,
			(!raw.is_empty()).then_some(raw),
		);
	};
	let code = [&envelope.response_code, &envelope.code, &envelope.error_code, &envelope.status]
		.into_iter()
		.find_map(|value| text(value.as_ref()))
		.unwrap_or_else(|| status.as_str().to_owned());
	let explicit_message =
		[&envelope.response_message, &envelope.message].into_iter().find_map(|value| text(value.as_ref()));
	let error = text(envelope.error.as_ref());
	let (message, details) = match explicit_message {
		Some(message) => (message, text(envelope.details.as_ref()).or(error)),
		None => (error.unwrap_or_else(|| reason.to_owned()), text(envelope.details.as_ref())),
	};

	ApiError::new(status.as_u16(), code, message, details)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ErrorEnvelope {
	status: Option<Value>,
	message: Option<Value>,
	response_message: Option<Value>,
	code: Option<Value>,
	response_code: Option<Value>,
	error_code: Option<Value>,
	error: Option<Value>,
	details: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct WrappedEnvelope<T> {
	#[serde(default)]
	status: String,
	#[serde(default)]
	message: String,
	#[serde(default)]
	data: Option<T>,
	#[serde(default)]
	error: Option<String>,
}

fn unwrap_envelope<T>(body: &[u8], status: StatusCode) -> Result<T>
where
	T: DeserializeOwned,
{
	let envelope = decode::<WrappedEnvelope<T>>(body, status)?;

	if envelope.status != SUCCESS {
		return Err(ApiError::new(
			StatusCode::BAD_REQUEST.as_u16(),
			envelope.status,
			envelope.message,
			envelope.error.filter(|e| !e.is_empty()),
		)
		.into());
	}

	match envelope.data {
		Some(data) => Ok(data),
		None => decode(b"null", status),
	}
}

fn decode<T>(body: &[u8], status: StatusCode) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| ParseError { source, status: status.as_u16() }.into())
}

fn text(value: Option<&Value>) -> Option<String> {
	match value? {
		Value::Null => None,
		Value::String(s) if s.trim().is_empty() => None,
		Value::String(s) => Some(s.clone()),
		other => Some(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ApiErrorKind;

	#[derive(Debug, Deserialize, PartialEq)]
	#[serde(rename_all = "camelCase")]
	struct Probe {
		response_code: String,
		#[serde(default)]
		amount: Option<u32>,
	}

	fn response(status: u16, body: &str) -> HttpResponse {
		let mut response = HttpResponse::new(body.as_bytes().to_vec());

		*response.status_mut() = StatusCode::from_u16(status).expect("Fixture status should be valid.");

		response
	}

	#[test]
	fn enveloped_success_decodes_payload() {
		let probe: Probe = classify(&response(200, r#"{"responseCode":"00"}"#), ResponseMode::Enveloped)
			.expect("Success body should decode.");

		assert_eq!(probe, Probe { response_code: "00".into(), amount: None });
	}

	#[test]
	fn enveloped_error_reads_response_aliases() {
		let err = classify::<Probe>(
			&response(
				401,
				r#"{"responseCode":"401","responseMessage":"Authentication failed","details":"Invalid credentials"}"#,
			),
			ResponseMode::Enveloped,
		)
		.expect_err("401 must be classified.");
		let api = err.as_api_error().expect("401 should surface as an API error.");

		assert_eq!(api, &ApiError::new(401, "401", "Authentication failed", Some("Invalid credentials".into())));
		assert!(err.is_authentication());
		assert!(!err.is_validation());
		assert!(!err.is_not_found());
		assert!(!err.is_server_error());
	}

	#[test]
	fn enveloped_error_tolerates_plain_keys_and_structured_details() {
		let api = api_error(
			StatusCode::BAD_REQUEST,
			br#"{"status":"failed","code":4001,"message":"Validation failed","details":{"field":"amount"}}"#,
		);

		assert_eq!(api.code, "4001");
		assert_eq!(api.message, "Validation failed");
		assert_eq!(api.details.as_deref(), Some(r#"{"field":"amount"}"#));
		assert_eq!(api.kind(), ApiErrorKind::Validation);
	}

	#[test]
	fn error_field_becomes_message_when_nothing_else_is_present() {
		let api = api_error(StatusCode::NOT_FOUND, br#"{"error":"resource missing"}"#);

		assert_eq!(api.code, "404");
		assert_eq!(api.message, "resource missing");
		assert_eq!(api.details, None);
	}

	#[test]
	fn unparseable_error_body_is_generic() {
		let err = classify::<Probe>(
			&response(500, "<html>upstream exploded</html>"),
			ResponseMode::Enveloped,
		)
		.expect_err("500 must be classified.");
		let api = err.as_api_error().expect("500 should surface as an API error.");

		assert!(err.is_server_error());
		assert_eq!(api.code, "500");
		assert_eq!(api.message, "Internal Server Error");
		assert_eq!(api.details.as_deref(), Some("<html>upstream exploded</html>"));
		assert_eq!(api_error(StatusCode::BAD_GATEWAY, b"").details, None);
	}

	#[test]
	fn non_object_error_bodies_are_generic() {
		for body in [r#"["x"]"#, r#""denied""#, "42"] {
			let api = api_error(StatusCode::FORBIDDEN, body.as_bytes());

			assert_eq!(api.code, "403", "body {body}");
			assert_eq!(api.message, "Forbidden", "body {body}");
			assert_eq!(api.details.as_deref(), Some(body), "body {body}");
		}
	}

	#[test]
	fn direct_mode_decodes_error_statuses() {
		let probe: Probe =
			classify(&response(400, r#"{"responseCode":"4001801"}"#), ResponseMode::Direct)
				.expect("Direct mode should decode any status.");

		assert_eq!(probe.response_code, "4001801");
	}

	#[test]
	fn shape_mismatch_reports_path_and_status() {
		let err = classify::<Probe>(
			&response(200, r#"{"responseCode":"00","amount":"ten"}"#),
			ResponseMode::Enveloped,
		)
		.expect_err("Mismatched body must fail.");

		let Error::Parse(parse) = &err else { panic!("Expected a parse error, got {err:?}.") };

		assert_eq!(parse.status, 200);
		assert_eq!(parse.source.path().to_string(), "amount");
	}

	#[test]
	fn wrapped_mode_unwraps_or_rejects() {
		let probe: Probe = classify(
			&response(200, r#"{"status":"success","message":"ok","data":{"responseCode":"00"}}"#),
			ResponseMode::Wrapped,
		)
		.expect("Successful envelope should unwrap.");

		assert_eq!(probe.response_code, "00");

		let err = classify::<Probe>(
			&response(200, r#"{"status":"failed","message":"Insufficient funds","error":"balance too low"}"#),
			ResponseMode::Wrapped,
		)
		.expect_err("Failed envelope must be rejected.");

		assert_eq!(
			err.as_api_error(),
			Some(&ApiError::new(400, "failed", "Insufficient funds", Some("balance too low".into())))
		);
		assert!(err.is_validation());
	}
}
