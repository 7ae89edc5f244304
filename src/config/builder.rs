// self
use crate::{
	_prelude::*,
	auth::{ScopeList, Secret, TokenPair},
	config::{ClientConfig, Environment, TransportOptions, with_trailing_slash},
	error::ConfigError,
};

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	consumer_key: String,
	consumer_secret: Secret,
	base_domain: String,
	scopes: ScopeList,
	access_tokens: Option<TokenPair>,
	transport: TransportOptions,
	api_base: Option<Url>,
	oauth_base: Option<Url>,
}
impl ClientConfigBuilder {
	/// Creates a builder seeded with the consumer credentials and production defaults.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			base_domain: Environment::default().domain().to_owned(),
			scopes: ScopeList::default(),
			access_tokens: None,
			transport: TransportOptions::default(),
			api_base: None,
			oauth_base: None,
		}
	}

	/// Sets the base domain from a well-known environment.
	pub fn environment(mut self, environment: Environment) -> Self {
		self.base_domain = environment.domain().to_owned();

		self
	}

	/// Sets an arbitrary base domain.
	pub fn base_domain(mut self, domain: impl Into<String>) -> Self {
		self.base_domain = domain.into();

		self
	}

	/// Overrides the default scope list.
	pub fn scopes(mut self, scopes: ScopeList) -> Self {
		self.scopes = scopes;

		self
	}

	/// Attaches a final access pair so business calls are signed.
	pub fn access_tokens(mut self, tokens: TokenPair) -> Self {
		self.access_tokens = Some(tokens);

		self
	}

	/// Sets the whole-request timeout.
	pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
		self.transport.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));

		self
	}

	/// Sets the `User-Agent` header.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.transport.user_agent = Some(user_agent.into());

		self
	}

	/// Overrides the API base URL.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(with_trailing_slash(url));

		self
	}

	/// Overrides the OAuth base URL.
	pub fn oauth_base(mut self, url: Url) -> Self {
		self.oauth_base = Some(with_trailing_slash(url));

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let config = ClientConfig {
			consumer_key: self.consumer_key,
			consumer_secret: self.consumer_secret,
			base_domain: self.base_domain,
			scopes: self.scopes,
			access_tokens: self.access_tokens,
			transport: self.transport,
			api_base: self.api_base,
			oauth_base: self.oauth_base,
		};

		config.validate()?;

		Ok(config)
	}
}

impl ClientConfig {
	/// Validates invariants for the configuration.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.consumer_key.trim().is_empty() {
			return Err(ConfigError::MissingConsumerKey);
		}

		self.api_base()?;
		self.oauth_base()?;

		if let Some(url) = &self.api_base {
			validate_base("api", url)?;
		}
		if let Some(url) = &self.oauth_base {
			validate_base("oauth", url)?;
		}

		Ok(())
	}
}

fn validate_base(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	let loopback = matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));

	if url.scheme() == "https" || loopback {
		Ok(())
	} else {
		Err(ConfigError::InsecureBaseUrl { endpoint: name, url: url.to_string() })
	}
}
