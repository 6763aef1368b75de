//! Request dispatch with cancellation and timeout.
//!
//! [`send`] runs a signed request through any [`SnapHttpClient`], bounded by the configured
//! timeout, and the [`CallContext`] deadline when one is set. It stops promptly once the context is
//! cancelled. Non-2xx statuses are returned as ordinary responses; classification happens later.

// crates.io
use tokio_util::sync::CancellationToken;
// self
use crate::{
	_prelude::*,
	endpoint::Endpoint,
	error::TransportError,
	http::{HttpResponse, SnapHttpClient, TransportErrorMapper},
	request::RequestEnvelope,
};

/// Per-call cancellation and deadline.
///
/// The default context never cancels and adds no deadline beyond the configured timeout.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
	/// Token that aborts the call when cancelled.
	pub cancel: Option<CancellationToken>,
	/// Upper bound for the call, applied alongside the configured timeout.
	pub deadline: Option<tokio::time::Instant>,
}
impl CallContext {
	/// Creates a context that never cancels.
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches a cancellation token.
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancel = Some(token);

		self
	}

	/// Sets an absolute deadline.
	pub fn with_deadline(mut self, deadline: tokio::time::Instant) -> Self {
		self.deadline = Some(deadline);

		self
	}

	/// Sets a deadline `timeout` from now.
	pub fn with_timeout(self, timeout: StdDuration) -> Self {
		self.with_deadline(tokio::time::Instant::now() + timeout)
	}

	/// Returns `true` once the attached token has been cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
	}

	/// Effective budget: the smaller of `timeout` and the time left before the deadline.
	pub fn budget(&self, timeout: StdDuration) -> StdDuration {
		match self.deadline {
			Some(deadline) =>
				timeout.min(deadline.saturating_duration_since(tokio::time::Instant::now())),
			None => timeout,
		}
	}
}

/// Executes `envelope` through `http_client`, honoring `ctx` and `timeout`.
///
/// A context that is already cancelled fails immediately with [`TransportError::Cancelled`]
/// without touching the transport. Transport failures go through `mapper`.
pub async fn send<C, M>(
	ctx: &CallContext,
	http_client: &C,
	mapper: &M,
	endpoint: Endpoint,
	timeout: StdDuration,
	envelope: RequestEnvelope,
) -> Result<HttpResponse>
where
	C: ?Sized + SnapHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	if ctx.is_cancelled() {
		return Err(TransportError::Cancelled.into());
	}

	let budget = ctx.budget(timeout);
	let request = envelope.into_http_request()?;
	let call = tokio::time::timeout(budget, http_client.execute(request));
	let outcome = match &ctx.cancel {
		Some(token) => tokio::select! {
			biased;
			_ = token.cancelled() => return Err(TransportError::Cancelled.into()),
			outcome = call => outcome,
		},
		None => call.await,
	};

	match outcome {
		Ok(Ok(response)) => Ok(response),
		Ok(Err(err)) => Err(mapper.map_transport_error(endpoint, budget, err)),
		Err(_) => Err(TransportError::Timeout { after: budget }.into()),
	}
}
