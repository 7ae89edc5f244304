// self
use crate::{_prelude::*, obs::OperationKind};

/// Future returned by [`CallSpan::instrument`]; instrumented only with the `tracing` feature.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`CallSpan::instrument`]; instrumented only with the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// `trademe_api.call` span covering one client operation.
#[derive(Clone, Debug)]
pub struct CallSpan {
	operation: OperationKind,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens a span for `operation`; `stage` names the public method that started it.
	pub fn new(operation: OperationKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		let span = tracing::info_span!("trademe_api.call", operation = operation.as_str(), stage);
		#[cfg(not(feature = "tracing"))]
		let _ = stage;

		Self {
			operation,
			#[cfg(feature = "tracing")]
			span,
		}
	}

	/// Operation this span was opened for.
	pub fn operation(&self) -> OperationKind {
		self.operation
	}

	/// Attaches the span to `fut`; no guard is held across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
