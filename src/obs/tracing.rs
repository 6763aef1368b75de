// self
use crate::{_prelude::*, endpoint::Endpoint};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided endpoint + stage.
	pub fn new(endpoint: Endpoint, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("faspay_snap.call", endpoint = endpoint.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (endpoint, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event for a signed request about to be dispatched.
pub fn trace_dispatch(endpoint: Endpoint, url: &Url, external_id: &str, timestamp: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(endpoint = endpoint.as_str(), %url, external_id, timestamp, "dispatching signed request");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, url, external_id, timestamp);
	}
}

/// Emits a debug event once a response arrived.
pub fn trace_response(endpoint: Endpoint, status: u16, body_len: usize) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(endpoint = endpoint.as_str(), status, body_len, "received response");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, status, body_len);
	}
}

/// Emits an informational notice when a call targets the sandbox.
pub fn trace_sandbox(endpoint: Endpoint, base_url: &Url) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(endpoint = endpoint.as_str(), %base_url, "calling the sandbox environment");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, base_url);
	}
}
