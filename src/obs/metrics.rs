// self
use crate::obs::{CallOutcome, OperationKind};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(kind: OperationKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"trademe_api_call_total",
			"operation" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
