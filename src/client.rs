//! Business operations and the OAuth 1.0 handshake, built on an injected dispatcher.
//!
//! The handshake is caller-driven and the client keeps no state between calls:
//!
//! 1. [`Client::temporary_access_tokens`] returns a temporary token pair.
//! 2. [`Client::access_token_verifier_url`] builds the URL the end user must visit; the
//!    marketplace redirects back with a verifier.
//! 3. [`Client::final_access_tokens`] exchanges the temporary pair and verifier for the durable
//!    access pair the caller persists.
//!
//! Any failure aborts the current step; callers restart from the step that failed.

mod handshake;
mod selling;

pub use handshake::*;
pub use selling::*;

// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::Result,
	http::{Method, Params, RequestDispatcher},
	obs::{self, OperationKind},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestDispatcher;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestDispatcher>;

/// Marketplace API client.
///
/// Cloning is cheap: clones share the same dispatcher.
pub struct Client<D>
where
	D: ?Sized + RequestDispatcher,
{
	dispatcher: Arc<D>,
}
impl<D> Client<D>
where
	D: ?Sized + RequestDispatcher,
{
	/// Creates a client that reuses the caller-provided dispatcher.
	pub fn with_dispatcher(dispatcher: impl Into<Arc<D>>) -> Self {
		Self { dispatcher: dispatcher.into() }
	}

	/// Dispatcher every request goes through.
	pub fn dispatcher(&self) -> &Arc<D> {
		&self.dispatcher
	}

	/// Configuration held by the dispatcher.
	pub fn config(&self) -> &ClientConfig {
		self.dispatcher.config()
	}

	/// Generic passthrough for endpoints without a dedicated method; returns the raw body.
	pub async fn api(&self, method: Method, uri: &str, params: &Params) -> Result<String> {
		obs::observe(OperationKind::Api, "api", self.dispatcher.api(method, uri, params)).await
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestDispatcher> {
	/// Creates a client with its own reqwest-backed dispatcher.
	pub fn new(config: ClientConfig) -> Result<Self> {
		Ok(Self::with_dispatcher(ReqwestDispatcher::new(config)?))
	}
}
impl<D> Clone for Client<D>
where
	D: ?Sized + RequestDispatcher,
{
	fn clone(&self) -> Self {
		Self { dispatcher: Arc::clone(&self.dispatcher) }
	}
}
impl<D> Debug for Client<D>
where
	D: ?Sized + RequestDispatcher,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("config", self.config()).finish()
	}
}
