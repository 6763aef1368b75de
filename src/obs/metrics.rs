// self
use crate::{endpoint::Endpoint, obs::CallOutcome};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(endpoint: Endpoint, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"faspay_snap_call_total",
			"endpoint" => endpoint.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}
