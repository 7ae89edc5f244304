//! Short OAuth nonces mixing the clock with OS-seeded randomness.

// crates.io
use rand::RngCore;
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// Length of every generated nonce.
pub const NONCE_LEN: usize = 10;

/// Generates a 10-character lowercase hex nonce.
///
/// The digest covers the current Unix time in nanoseconds and 16 random bytes, so two calls
/// within the same clock tick still differ.
pub fn generate_nonce() -> String {
	let mut entropy = [0_u8; 16];

	rand::rng().fill_bytes(&mut entropy);

	let mut hasher = Sha256::new();

	hasher.update(OffsetDateTime::now_utc().unix_timestamp_nanos().to_be_bytes());
	hasher.update(entropy);

	hasher
		.finalize()
		.iter()
		.flat_map(|byte| [byte >> 4, byte & 0x0f])
		.take(NONCE_LEN)
		.map(|nibble| char::from_digit(u32::from(nibble), 16).unwrap_or('0'))
		.collect()
}

/// Current Unix timestamp in seconds, as sent in `oauth_timestamp`.
pub fn unix_timestamp() -> i64 {
	OffsetDateTime::now_utc().unix_timestamp()
}
