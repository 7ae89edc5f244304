//! Optional observability helpers for client operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `trademe_api.call` with the `operation`
//!   and `stage` (call site) fields.
//! - Enable `metrics` to increment the `trademe_api_call_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.
//!
//! Without either feature every helper compiles to a no-op, so the default build logs nothing.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, error::Result};

/// Client operations observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// `POST Selling.json`.
	SellItem,
	/// `GET SellingItems/{filter}.json`.
	ListSellingItems,
	/// Generic passthrough call.
	Api,
	/// Handshake step 1: temporary token request.
	TemporaryTokens,
	/// Handshake step 3: final token exchange.
	FinalTokens,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::SellItem => "sell_item",
			OperationKind::ListSellingItems => "list_selling_items",
			OperationKind::Api => "api",
			OperationKind::TemporaryTokens => "temporary_tokens",
			OperationKind::FinalTokens => "final_tokens",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside an operation span and records attempt + outcome.
pub(crate) async fn observe<T, Fut>(kind: OperationKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(kind, stage);

	record_call_outcome(kind, CallOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_call_outcome(kind, CallOutcome::Success),
		Err(_err) => {
			#[cfg(feature = "tracing")]
			::tracing::warn!(operation = kind.as_str(), error = %_err, "trademe_api call failed");

			record_call_outcome(kind, CallOutcome::Failure);
		},
	}

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_are_stable() {
		assert_eq!(OperationKind::ListSellingItems.to_string(), "list_selling_items");
		assert_eq!(CallOutcome::Failure.as_str(), "failure");
	}

	#[tokio::test]
	async fn observe_passes_results_through() {
		let value = observe(OperationKind::Api, "test", async { Ok(7) })
			.await
			.expect("Observed future should succeed.");

		assert_eq!(value, 7);
	}
}
