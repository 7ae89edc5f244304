//! `Authorization: OAuth ...` header assembly for the PLAINTEXT signature method.

// self
use crate::{
	_prelude::*,
	auth::TokenPair,
	oauth::{self, OAUTH_VERSION, SIGNATURE_METHOD_PLAINTEXT},
};

/// Header name every OAuth request carries.
pub const AUTHORIZATION: &str = "Authorization";

const SCHEME: &str = "OAuth";
const REDACTED_PARAMS: [&str; 2] = ["oauth_signature", "oauth_token_secret"];

/// Timestamp + nonce pair that makes a signed request unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestStamp {
	/// Unix timestamp in seconds.
	pub timestamp: i64,
	/// Single-use opaque nonce.
	pub nonce: String,
}
impl RequestStamp {
	/// Creates a stamp from explicit values.
	pub fn new(timestamp: i64, nonce: impl Into<String>) -> Self {
		Self { timestamp, nonce: nonce.into() }
	}

	/// Stamps a request with the current clock and a fresh nonce.
	pub fn now() -> Self {
		Self::new(oauth::unix_timestamp(), oauth::generate_nonce())
	}
}

/// Ordered OAuth protocol parameters rendered into a single `Authorization` header.
///
/// Parameters are rendered in insertion order; the three constructors fix the order for each
/// step of the handshake.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthHeader {
	params: Vec<(&'static str, String)>,
}
impl OAuthHeader {
	/// Header for the temporary token request (no token yet, signature `CS&`).
	pub fn temporary(consumer_key: &str, consumer_secret: &str, stamp: &RequestStamp) -> Self {
		Self {
			params: vec![
				("oauth_consumer_key", consumer_key.to_owned()),
				("oauth_signature_method", SIGNATURE_METHOD_PLAINTEXT.to_owned()),
				("oauth_timestamp", stamp.timestamp.to_string()),
				("oauth_nonce", stamp.nonce.clone()),
				("oauth_version", OAUTH_VERSION.to_owned()),
				("oauth_signature", oauth::plaintext_signature(consumer_secret, None)),
			],
		}
	}

	/// Header for the final token exchange, carrying the temporary pair (signature `CS&TS`).
	pub fn exchange(
		consumer_key: &str,
		consumer_secret: &str,
		temporary: &TokenPair,
		stamp: &RequestStamp,
	) -> Self {
		let token_secret = temporary.secret.expose();

		Self {
			params: vec![
				("oauth_consumer_key", consumer_key.to_owned()),
				("oauth_token", temporary.token.clone()),
				("oauth_signature_method", SIGNATURE_METHOD_PLAINTEXT.to_owned()),
				("oauth_timestamp", stamp.timestamp.to_string()),
				("oauth_nonce", stamp.nonce.clone()),
				("oauth_token_secret", token_secret.to_owned()),
				("oauth_version", OAUTH_VERSION.to_owned()),
				(
					"oauth_signature",
					oauth::plaintext_signature(consumer_secret, Some(token_secret)),
				),
			],
		}
	}

	/// Header for business API calls signed with the final access pair (signature `CS&AS`).
	pub fn access(
		consumer_key: &str,
		consumer_secret: &str,
		access: &TokenPair,
		stamp: &RequestStamp,
	) -> Self {
		Self {
			params: vec![
				("oauth_consumer_key", consumer_key.to_owned()),
				("oauth_token", access.token.clone()),
				("oauth_signature_method", SIGNATURE_METHOD_PLAINTEXT.to_owned()),
				("oauth_timestamp", stamp.timestamp.to_string()),
				("oauth_nonce", stamp.nonce.clone()),
				("oauth_version", OAUTH_VERSION.to_owned()),
				(
					"oauth_signature",
					oauth::plaintext_signature(consumer_secret, Some(access.secret.expose())),
				),
			],
		}
	}

	/// Header name (`Authorization`).
	pub fn name(&self) -> &'static str {
		AUTHORIZATION
	}

	/// Raw (unencoded) protocol parameters in render order.
	pub fn params(&self) -> &[(&'static str, String)] {
		&self.params
	}

	/// Looks up a raw parameter value.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.iter().find(|(name, _)| *name == key).map(|(_, value)| value.as_str())
	}

	/// Renders `OAuth key="encoded", ...`.
	pub fn value(&self) -> String {
		let pairs = self
			.params
			.iter()
			.map(|(key, value)| format!("{key}=\"{}\"", oauth::percent_encode(value)))
			.collect::<Vec<_>>()
			.join(", ");

		format!("{SCHEME} {pairs}")
	}

	/// Consumes the header into a `(name, value)` pair ready for a request builder.
	pub fn into_pair(self) -> (&'static str, String) {
		let value = self.value();

		(AUTHORIZATION, value)
	}
}
impl Debug for OAuthHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (key, value) in &self.params {
			if REDACTED_PARAMS.contains(key) {
				map.entry(key, &"<redacted>");
			} else {
				map.entry(key, value);
			}
		}

		map.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn stamp() -> RequestStamp {
		RequestStamp::new(1_700_000_000, "abcde12345")
	}

	#[test]
	fn temporary_header_matches_wire_format() {
		let header = OAuthHeader::temporary("CK", "CS", &stamp());

		assert_eq!(header.name(), "Authorization");
		assert_eq!(
			header.value(),
			"OAuth oauth_consumer_key=\"CK\", oauth_signature_method=\"PLAINTEXT\", \
			 oauth_timestamp=\"1700000000\", oauth_nonce=\"abcde12345\", oauth_version=\"1.0\", \
			 oauth_signature=\"CS%26\""
		);
		assert!(header.param("oauth_token").is_none());
	}

	#[test]
	fn exchange_header_adds_token_pair() {
		let header = OAuthHeader::exchange("CK", "CS", &TokenPair::new("TT", "TS"), &stamp());

		assert_eq!(
			header.value(),
			"OAuth oauth_consumer_key=\"CK\", oauth_token=\"TT\", \
			 oauth_signature_method=\"PLAINTEXT\", oauth_timestamp=\"1700000000\", \
			 oauth_nonce=\"abcde12345\", oauth_token_secret=\"TS\", oauth_version=\"1.0\", \
			 oauth_signature=\"CS%26TS\""
		);
	}

	#[test]
	fn access_header_signs_with_access_secret() {
		let header = OAuthHeader::access("CK", "CS", &TokenPair::new("AT", "AS"), &stamp());

		assert_eq!(header.param("oauth_token"), Some("AT"));
		assert_eq!(header.param("oauth_signature"), Some("CS&AS"));
		assert!(header.param("oauth_token_secret").is_none());
		assert!(header.value().ends_with("oauth_signature=\"CS%26AS\""));
	}

	#[test]
	fn values_are_percent_encoded() {
		let header = OAuthHeader::temporary("key with space", "s/cret", &stamp());
		let (name, value) = header.into_pair();

		assert_eq!(name, AUTHORIZATION);
		assert!(value.contains("oauth_consumer_key=\"key%20with%20space\""));
		assert!(value.contains("oauth_signature=\"s%2Fcret%26\""));
	}

	#[test]
	fn debug_redacts_secrets() {
		let header = OAuthHeader::exchange("CK", "CS", &TokenPair::new("TT", "TS"), &stamp());
		let rendered = format!("{header:?}");

		assert!(!rendered.contains("CS&TS"));
		assert!(rendered.contains("\"oauth_token_secret\": \"<redacted>\""));
	}

	#[test]
	fn fresh_stamps_use_ten_char_nonces() {
		let stamp = RequestStamp::now();

		assert_eq!(stamp.nonce.len(), oauth::NONCE_LEN);
	}
}
