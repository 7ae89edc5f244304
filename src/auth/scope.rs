//! OAuth scope identifiers and the ordered scope list sent with token requests.

// std
use std::slice::Iter;
// crates.io
use serde::{Deserializer, de::Error as DeError};
// self
use crate::_prelude::*;

/// Grants read access to the member's own Trade Me data.
pub const SCOPE_READ: &str = "MyTradeMeRead";
/// Grants write access (listing, relisting, withdrawing) to the member's account.
pub const SCOPE_WRITE: &str = "MyTradeMeWrite";
/// Grants bidding and buy-now access on behalf of the member.
pub const SCOPE_BIDDING: &str = "BiddingAndBuying";

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ScopeValidationError {
	/// Empty lists and empty scope entries are not allowed.
	#[error("Scope lists and their entries cannot be empty.")]
	Empty,
	/// Scopes cannot contain whitespace or the `,` list delimiter.
	#[error("Scope contains a reserved character: {scope}.")]
	ReservedCharacter {
		/// The offending scope string.
		scope: String,
	},
}

/// Ordered, deduplicated list of scopes requested during the handshake.
///
/// Order is preserved because the `scope` query parameter is the comma-joined list exactly as
/// the caller supplied it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Creates a scope list from any iterator, dropping duplicates after their first occurrence.
	///
	/// At least one scope is required.
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut list = Vec::new();

		for scope in scopes {
			let owned: String = scope.into();

			if owned.is_empty() {
				return Err(ScopeValidationError::Empty);
			}
			if owned.chars().any(|c| c.is_whitespace() || c == ',') {
				return Err(ScopeValidationError::ReservedCharacter { scope: owned });
			}
			if !list.contains(&owned) {
				list.push(owned);
			}
		}

		if list.is_empty() {
			return Err(ScopeValidationError::Empty);
		}

		Ok(Self(list))
	}

	/// Number of distinct scopes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no scopes are defined.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the list contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.0.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over scopes in request order.
	pub fn iter(&self) -> Iter<'_, String> {
		self.0.iter()
	}

	/// Comma-joined representation used in the `scope` query parameter.
	pub fn joined(&self) -> String {
		self.0.join(",")
	}
}
impl Default for ScopeList {
	fn default() -> Self {
		Self(vec![SCOPE_READ.to_owned(), SCOPE_WRITE.to_owned()])
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}
impl FromStr for ScopeList {
	type Err = ScopeValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s.split(',').map(str::trim))
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = Iter<'a, String>;
	type Item = &'a String;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
impl<'de> Deserialize<'de> for ScopeList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let values = <Vec<String>>::deserialize(deserializer)?;

		ScopeList::new(values).map_err(DeError::custom)
	}
}
