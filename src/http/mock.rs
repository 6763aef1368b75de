//! Scripted [`SnapHttpClient`] for tests that must not touch the network.
//!
//! ```
//! use faspay_snap::http::mock::ScriptedHttpClient;
//!
//! let transport = ScriptedHttpClient::new()
//! 	.respond(200, r#"{"responseCode":"2001600","responseMessage":"Successful"}"#)
//! 	.fail("connection reset");
//!
//! assert!(transport.requests().is_empty());
//! ```

// std
use std::collections::VecDeque;
// crates.io
use ::http::{HeaderMap, Method, StatusCode};
// self
use crate::{
	_prelude::*,
	http::{HttpRequest, HttpResponse, SnapHttpClient, TransportFuture},
};

/// Error injected by [`ScriptedHttpClient::fail`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Scripted transport failure: {message}.")]
pub struct ScriptedTransportError {
	/// Message supplied when the failure was scripted.
	pub message: String,
}

/// Request observed by a [`ScriptedHttpClient`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URI.
	pub uri: String,
	/// Request headers.
	pub headers: HeaderMap,
	/// Raw request body.
	pub body: Vec<u8>,
}
impl RecordedRequest {
	/// Returns a header value as a string, when present and valid UTF-8.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	/// Returns the body as UTF-8 text.
	pub fn body_text(&self) -> Option<&str> {
		std::str::from_utf8(&self.body).ok()
	}
}

#[derive(Clone, Debug)]
enum ScriptedReply {
	Response { status: StatusCode, body: Vec<u8> },
	Failure(ScriptedTransportError),
	Hang,
}

/// Transport double that replays scripted replies in order and records every request.
///
/// Once the script runs out, every further call receives `200 OK` with an empty body. Clones
/// share the same script and request log.
#[derive(Clone, Debug, Default)]
pub struct ScriptedHttpClient {
	replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}
impl ScriptedHttpClient {
	/// Creates an empty script.
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a response with `status` and `body`.
	///
	/// Status codes outside `100..=999` are queued as `500`.
	pub fn respond(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
		let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

		self.push(ScriptedReply::Response { status, body: body.into() })
	}

	/// Queues a transport failure.
	pub fn fail(self, message: impl Into<String>) -> Self {
		self.push(ScriptedReply::Failure(ScriptedTransportError { message: message.into() }))
	}

	/// Queues a call that never completes, for timeout and cancellation tests.
	pub fn hang(self) -> Self {
		self.push(ScriptedReply::Hang)
	}

	/// Requests observed so far, oldest first.
	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().clone()
	}

	/// Most recent request, if any.
	pub fn last_request(&self) -> Option<RecordedRequest> {
		self.requests.lock().last().cloned()
	}

	fn push(self, reply: ScriptedReply) -> Self {
		self.replies.lock().push_back(reply);

		self
	}
}
impl SnapHttpClient for ScriptedHttpClient {
	type TransportError = ScriptedTransportError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let (parts, body) = request.into_parts();

		self.requests.lock().push(RecordedRequest {
			method: parts.method,
			uri: parts.uri.to_string(),
			headers: parts.headers,
			body,
		});

		let reply = self.replies.lock().pop_front();

		Box::pin(async move {
			match reply {
				None => Ok(HttpResponse::new(Vec::new())),
				Some(ScriptedReply::Response { status, body }) => {
					let mut response = HttpResponse::new(body);

					*response.status_mut() = status;

					Ok(response)
				},
				Some(ScriptedReply::Failure(err)) => Err(err),
				Some(ScriptedReply::Hang) => std::future::pending().await,
			}
		})
	}
}
