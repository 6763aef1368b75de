//! Optional observability helpers for Snap calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `faspay_snap.call` with the `endpoint` and
//!   `stage` (call site) fields, plus debug events for signing and dispatch.
//! - Enable `metrics` to increment the `faspay_snap_call_total` counter for every
//!   attempt/success/failure, labeled by `endpoint` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Typed response returned to the caller.
	Success,
	/// Provider rejected the request.
	ApiFailure,
	/// Local, transport, or decoding failure.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::ApiFailure => "api_failure",
			CallOutcome::Failure => "failure",
		}
	}

	/// Outcome for a finished call.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(Error::Api(_)) => CallOutcome::ApiFailure,
			Err(_) => CallOutcome::Failure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
