//! Immutable client configuration shared by the dispatcher and the API client.
//!
//! A [`ClientConfig`] carries the consumer credentials, the marketplace base domain, and
//! transport options. API calls resolve against `https://api.<domain>/v1/` and the OAuth
//! handshake against `https://secure.<domain>/Oauth/`; both bases can be overridden, which is
//! how tests point the client at a local mock server.

/// Builder API for assembling client configurations.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{ScopeList, Secret, TokenPair},
	error::ConfigError,
};

/// Production marketplace domain.
pub const PRODUCTION_DOMAIN: &str = "trademe.co.nz";
/// Sandbox marketplace domain.
pub const SANDBOX_DOMAIN: &str = "tmsandbox.co.nz";
/// API version segment used by the default API base.
pub const API_VERSION: &str = "v1";

/// Marketplace environments with well-known base domains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	#[default]
	/// Live marketplace.
	Production,
	/// Developer sandbox.
	Sandbox,
}
impl Environment {
	/// Base domain for the environment.
	pub const fn domain(self) -> &'static str {
		match self {
			Environment::Production => PRODUCTION_DOMAIN,
			Environment::Sandbox => SANDBOX_DOMAIN,
		}
	}
}
impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"production" | "live" => Ok(Self::Production),
			"sandbox" => Ok(Self::Sandbox),
			_ => Err(ConfigError::UnknownEnvironment { name: s.to_owned() }),
		}
	}
}

/// Consumer credentials, base domain, and transport options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// OAuth consumer key issued to the application.
	pub consumer_key: String,
	/// OAuth consumer secret issued to the application.
	pub consumer_secret: Secret,
	/// Marketplace base domain, e.g. `trademe.co.nz`.
	#[serde(default = "default_domain")]
	pub base_domain: String,
	/// Scopes requested by the temporary token step when none are passed explicitly.
	#[serde(default)]
	pub scopes: ScopeList,
	/// Final access pair used to sign business API calls, if the caller already holds one.
	#[serde(default)]
	pub access_tokens: Option<TokenPair>,
	/// Transport-specific options.
	#[serde(default)]
	pub transport: TransportOptions,
	/// Overrides `https://api.<domain>/v1/`.
	#[serde(default)]
	pub api_base: Option<Url>,
	/// Overrides `https://secure.<domain>/Oauth/`.
	#[serde(default)]
	pub oauth_base: Option<Url>,
}
impl ClientConfig {
	/// Creates a new builder for the provided consumer credentials.
	pub fn builder(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<Secret>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder::new(consumer_key, consumer_secret)
	}

	/// Marketplace base domain.
	pub fn base_domain(&self) -> &str {
		&self.base_domain
	}

	/// Looks up a named option as a string, mirroring a loosely typed option bag.
	///
	/// Known names: `consumer_key`, `base_domain`, `scopes`, `timeout_ms`, `user_agent`.
	/// Secrets are never returned through this accessor.
	pub fn option(&self, name: &str) -> Option<String> {
		match name {
			"consumer_key" => Some(self.consumer_key.clone()),
			"base_domain" => Some(self.base_domain.clone()),
			"scopes" => Some(self.scopes.joined()),
			"timeout_ms" => self.transport.timeout_ms.map(|ms| ms.to_string()),
			"user_agent" => self.transport.user_agent.clone(),
			_ => None,
		}
	}

	/// Base URL every API call resolves against; always ends with `/`.
	pub fn api_base(&self) -> Result<Url, ConfigError> {
		match &self.api_base {
			Some(url) => Ok(with_trailing_slash(url.clone())),
			None => self.domain_url("api", API_VERSION),
		}
	}

	/// Base URL every OAuth handshake call resolves against; always ends with `/`.
	pub fn oauth_base(&self) -> Result<Url, ConfigError> {
		match &self.oauth_base {
			Some(url) => Ok(with_trailing_slash(url.clone())),
			None => self.domain_url("secure", "Oauth"),
		}
	}

	fn domain_url(&self, host_prefix: &str, path: &str) -> Result<Url, ConfigError> {
		let raw = format!("https://{host_prefix}.{}/{path}/", self.base_domain);

		Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseDomain {
			domain: self.base_domain.clone(),
			source,
		})
	}
}

/// Options handed to the HTTP transport untouched by the client logic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportOptions {
	/// Whole-request timeout in milliseconds.
	pub timeout_ms: Option<u64>,
	/// Custom `User-Agent` header.
	pub user_agent: Option<String>,
}

fn default_domain() -> String {
	PRODUCTION_DOMAIN.to_owned()
}

// Relative joins drop the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url
}
