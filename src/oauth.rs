//! OAuth 1.0 PLAINTEXT primitives: percent-encoding, nonces, and `Authorization` headers.
//!
//! PLAINTEXT signing never hashes anything; the signature is the consumer secret and the
//! (possibly empty) token secret joined by `&`, which is why the handshake relies on the
//! HTTPS transport for confidentiality.

pub mod header;
pub mod nonce;

pub use header::*;
pub use nonce::*;

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Signature method advertised in every header.
pub const SIGNATURE_METHOD_PLAINTEXT: &str = "PLAINTEXT";
/// Protocol version advertised in every header.
pub const OAUTH_VERSION: &str = "1.0";

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded characters MUST be uppercase.
const RFC5849_RESERVED: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `input` with the RFC 5849 unreserved set.
pub fn percent_encode(input: &str) -> String {
	utf8_percent_encode(input, RFC5849_RESERVED).to_string()
}

/// Builds the PLAINTEXT signature `consumer_secret&token_secret`.
///
/// The token secret is empty for the temporary token request.
pub fn plaintext_signature(consumer_secret: &str, token_secret: Option<&str>) -> String {
	format!("{consumer_secret}&{}", token_secret.unwrap_or(""))
}
