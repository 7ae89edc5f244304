//! Request dispatch primitives.
//!
//! [`RequestDispatcher`] is the client's only dependency on an HTTP stack: it turns a
//! method/URI/params combination into a raw response body and exposes the immutable
//! [`ClientConfig`]. [`ReqwestDispatcher`] is the default implementation; tests and callers
//! with bespoke transports can inject their own.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::{ConfigError, Result},
};
#[cfg(feature = "reqwest")]
use crate::{
	error::TransportError,
	oauth::{OAuthHeader, RequestStamp},
};

/// Request parameters: sent as the query string for `GET`, as a JSON body otherwise.
pub type Params = serde_json::Map<String, Value>;

/// Extra headers attached to a single request.
pub type Headers = [(&'static str, String)];

/// Boxed future returned by dispatcher methods.
pub type DispatchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// HTTP methods the marketplace API accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Upper-case method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}

	/// Whether params travel in the query string rather than the body.
	pub const fn params_in_query(self) -> bool {
		matches!(self, Method::Get | Method::Delete)
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Abstraction over transports able to reach the marketplace API.
///
/// Implementations must be `Send + Sync + 'static` so a single dispatcher can be shared
/// behind an [`Arc`] by any number of clients. Each call issues exactly one request and
/// resolves once the body has been fully read.
pub trait RequestDispatcher
where
	Self: 'static + Send + Sync,
{
	/// Sends a business API request; `uri` is relative to [`ClientConfig::api_base`].
	fn api<'a>(&'a self, method: Method, uri: &'a str, params: &'a Params)
	-> DispatchFuture<'a, String>;

	/// Sends an OAuth handshake request; `uri` is relative to [`ClientConfig::oauth_base`].
	///
	/// Params are always sent in the query string and `headers` carry the
	/// `Authorization: OAuth ...` header built by the caller.
	fn oauth<'a>(
		&'a self,
		method: Method,
		uri: &'a str,
		params: &'a Params,
		headers: &'a Headers,
	) -> DispatchFuture<'a, String>;

	/// Immutable configuration the dispatcher was built with.
	fn config(&self) -> &ClientConfig;

	/// Looks up a named configuration option.
	fn option(&self, name: &str) -> Option<String> {
		self.config().option(name)
	}

	/// Marketplace base domain.
	fn base_domain(&self) -> &str {
		self.config().base_domain()
	}
}

/// Resolves `uri` against `base`, keeping the base path.
///
/// Absolute or scheme-relative URIs that leave the base origin are rejected so signed requests
/// never reach another host.
pub fn resolve(base: &Url, uri: &str) -> Result<Url, ConfigError> {
	let url = base
		.join(uri.trim_start_matches('/'))
		.map_err(|source| ConfigError::InvalidEndpoint { uri: uri.to_owned(), source })?;

	if url.origin() != base.origin() {
		return Err(ConfigError::ForeignEndpoint { uri: uri.to_owned() });
	}

	Ok(url)
}

/// Flattens params into query pairs.
///
/// Strings are sent verbatim, arrays are comma-joined, `null` is skipped, and objects are sent
/// as compact JSON.
pub fn query_pairs(params: &Params) -> Vec<(String, String)> {
	params
		.iter()
		.filter_map(|(key, value)| query_value(value).map(|value| (key.clone(), value)))
		.collect()
}

fn query_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Array(items) =>
			Some(items.iter().filter_map(query_value).collect::<Vec<_>>().join(",")),
		other => Some(other.to_string()),
	}
}

/// Thin wrapper around [`ReqwestClient`] bound to a [`ClientConfig`].
///
/// Business calls are signed with [`OAuthHeader::access`] whenever the configuration holds a
/// final access pair; handshake calls carry the header the client built.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestDispatcher {
	client: ReqwestClient,
	config: ClientConfig,
	api_base: Url,
	oauth_base: Url,
}
#[cfg(feature = "reqwest")]
impl ReqwestDispatcher {
	/// Builds a reqwest client from the transport options in `config`.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let mut builder = ReqwestClient::builder();

		if let Some(ms) = config.transport.timeout_ms {
			builder = builder.timeout(std::time::Duration::from_millis(ms));
		}
		if let Some(user_agent) = &config.transport.user_agent {
			builder = builder.user_agent(user_agent.as_str());
		}

		let client = builder.build().map_err(ConfigError::http_client_build)?;

		Self::with_client(client, config)
	}

	/// Wraps an existing reqwest [`ReqwestClient`]; transport options in `config` are ignored.
	pub fn with_client(client: ReqwestClient, config: ClientConfig) -> Result<Self> {
		config.validate()?;

		let api_base = config.api_base()?;
		let oauth_base = config.oauth_base()?;

		Ok(Self { client, config, api_base, oauth_base })
	}

	async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
		let response = request.send().await.map_err(TransportError::from)?;
		let status = response.status();
		let body = response.text().await.map_err(TransportError::from)?;

		if status.is_success() {
			Ok(body)
		} else {
			Err(TransportError::Status { status: status.as_u16(), body }.into())
		}
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestDispatcher {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl RequestDispatcher for ReqwestDispatcher {
	fn api<'a>(
		&'a self,
		method: Method,
		uri: &'a str,
		params: &'a Params,
	) -> DispatchFuture<'a, String> {
		Box::pin(async move {
			let url = resolve(&self.api_base, uri)?;
			let mut request = self.client.request(reqwest_method(method), url);

			if method.params_in_query() {
				if !params.is_empty() {
					request = request.query(&query_pairs(params));
				}
			} else {
				request = request.json(params);
			}

			if let Some(tokens) = &self.config.access_tokens {
				let (name, value) = OAuthHeader::access(
					&self.config.consumer_key,
					self.config.consumer_secret.expose(),
					tokens,
					&RequestStamp::now(),
				)
				.into_pair();

				request = request.header(name, value);
			}

			self.send(request).await
		})
	}

	fn oauth<'a>(
		&'a self,
		method: Method,
		uri: &'a str,
		params: &'a Params,
		headers: &'a Headers,
	) -> DispatchFuture<'a, String> {
		Box::pin(async move {
			let url = resolve(&self.oauth_base, uri)?;
			let mut request = self.client.request(reqwest_method(method), url);

			if !params.is_empty() {
				request = request.query(&query_pairs(params));
			}
			for (name, value) in headers {
				request = request.header(*name, value.as_str());
			}

			self.send(request).await
		})
	}

	fn config(&self) -> &ClientConfig {
		&self.config
	}
}

#[cfg(feature = "reqwest")]
fn reqwest_method(method: Method) -> reqwest::Method {
	match method {
		Method::Get => reqwest::Method::GET,
		Method::Post => reqwest::Method::POST,
		Method::Put => reqwest::Method::PUT,
		Method::Delete => reqwest::Method::DELETE,
	}
}
