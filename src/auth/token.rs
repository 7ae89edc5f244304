//! OAuth 1.0 token pairs and the URL-encoded token endpoint responses they come from.

// self
use crate::{_prelude::*, auth::Secret, error::TransportError};

/// Response field carrying the token.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// Response field carrying the token secret.
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";

/// Exchange-config key for the temporary token.
pub const TEMP_TOKEN: &str = "temp_token";
/// Exchange-config key for the temporary token secret.
pub const TEMP_TOKEN_SECRET: &str = "temp_token_secret";
/// Exchange-config key for the verifier returned by the authorize redirect.
pub const TOKEN_VERIFIER: &str = "token_verifier";

/// Token + token secret, used both for the temporary and the final credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
	/// Public token value.
	pub token: String,
	/// Token secret; callers must avoid logging it.
	pub secret: Secret,
}
impl TokenPair {
	/// Creates a pair from raw strings.
	pub fn new(token: impl Into<String>, secret: impl Into<Secret>) -> Self {
		Self { token: token.into(), secret: secret.into() }
	}

	/// Builds the mapping expected by the final token exchange from this temporary pair.
	pub fn exchange_params(&self, verifier: impl Into<String>) -> BTreeMap<String, String> {
		BTreeMap::from([
			(TEMP_TOKEN.to_owned(), self.token.clone()),
			(TEMP_TOKEN_SECRET.to_owned(), self.secret.expose().to_owned()),
			(TOKEN_VERIFIER.to_owned(), verifier.into()),
		])
	}
}
impl Debug for TokenPair {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenPair").field("token", &self.token).field("secret", &self.secret).finish()
	}
}

/// Token endpoint response body decoded from `application/x-www-form-urlencoded`.
///
/// Besides the token pair, the temporary token step returns provider extras such as
/// `oauth_callback_confirmed`; every field is kept so callers can read them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(BTreeMap<String, String>);
impl TokenResponse {
	/// Decodes a URL-encoded body. Repeated keys keep their last value.
	pub fn parse(body: &str) -> Self {
		Self(url::form_urlencoded::parse(body.trim().as_bytes()).into_owned().collect())
	}

	/// Looks up a single decoded field.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns the decoded fields.
	pub fn fields(&self) -> &BTreeMap<String, String> {
		&self.0
	}

	/// Returns true when the body carried no fields.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Extracts `oauth_token` and `oauth_token_secret`.
	pub fn token_pair(&self) -> Result<TokenPair, TransportError> {
		let token = self.require(OAUTH_TOKEN)?;
		let secret = self.require(OAUTH_TOKEN_SECRET)?;

		Ok(TokenPair::new(token, secret))
	}

	fn require(&self, key: &str) -> Result<&str, TransportError> {
		self.get(key).ok_or_else(|| TransportError::MalformedResponse {
			reason: format!("token response is missing `{key}`"),
		})
	}
}
impl From<TokenResponse> for BTreeMap<String, String> {
	fn from(value: TokenResponse) -> Self {
		value.0
	}
}
impl TryFrom<TokenResponse> for TokenPair {
	type Error = TransportError;

	fn try_from(value: TokenResponse) -> Result<Self, Self::Error> {
		value.token_pair()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parses_url_encoded_body() {
		let response = TokenResponse::parse(
			"oauth_token=abc%2B1&oauth_token_secret=s%26cret&oauth_callback_confirmed=true\n",
		);

		assert_eq!(response.get("oauth_callback_confirmed"), Some("true"));

		let pair = response.token_pair().expect("Token pair should be present.");

		assert_eq!(pair.token, "abc+1");
		assert_eq!(pair.secret.expose(), "s&cret");
	}

	#[test]
	fn missing_secret_is_malformed() {
		let err = TokenResponse::parse("oauth_token=abc")
			.token_pair()
			.expect_err("Secret is required.");

		assert!(matches!(err, TransportError::MalformedResponse { .. }));
		assert!(TokenResponse::parse("").is_empty());
	}

	#[test]
	fn exchange_params_carry_all_keys() {
		let params = TokenPair::new("TT", "TS").exchange_params("V");

		assert_eq!(params.get(TEMP_TOKEN).map(String::as_str), Some("TT"));
		assert_eq!(params.get(TEMP_TOKEN_SECRET).map(String::as_str), Some("TS"));
		assert_eq!(params.get(TOKEN_VERIFIER).map(String::as_str), Some("V"));
	}

	#[test]
	fn debug_redacts_secret() {
		let pair = TokenPair::new("TT", "TS");

		assert_eq!(format!("{pair:?}"), "TokenPair { token: \"TT\", secret: Secret(\"<redacted>\") }");
	}
}
