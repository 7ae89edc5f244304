//! Required-parameter checks shared by the selling and token-exchange calls.
//!
//! The validator never throws on its own: [`require_keys_or_else`] hands the full list of
//! required keys to a caller-supplied handler and returns whatever error it produces, while
//! [`require_keys`] plugs in the default [`ValidationError`].

// std
use std::borrow::Cow;
// self
use crate::_prelude::*;

/// Raised when one or more required parameters are absent.
///
/// The message always enumerates every required key in its original order, not only the
/// missing ones.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Missing required parameters; expected: {}.", .required.join(", "))]
pub struct ValidationError {
	/// Every key the operation requires, in declaration order.
	pub required: Vec<String>,
	/// The subset of `required` that was absent.
	pub missing: Vec<String>,
}

/// Key lookup used by the validator so any mapping type can be checked.
pub trait ParamKeys {
	/// Returns true when `key` is present, whatever its value.
	fn has_key(&self, key: &str) -> bool;

	/// Returns the value stored under `key` rendered as a string.
	fn value_of(&self, key: &str) -> Option<Cow<'_, str>>;
}
impl ParamKeys for serde_json::Map<String, serde_json::Value> {
	fn has_key(&self, key: &str) -> bool {
		self.contains_key(key)
	}

	fn value_of(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(|value| match value {
			serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
			serde_json::Value::Null => Cow::Borrowed(""),
			other => Cow::Owned(other.to_string()),
		})
	}
}
impl<V> ParamKeys for HashMap<String, V>
where
	V: AsRef<str>,
{
	fn has_key(&self, key: &str) -> bool {
		self.contains_key(key)
	}

	fn value_of(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(|value| Cow::Borrowed(value.as_ref()))
	}
}
impl<V> ParamKeys for BTreeMap<String, V>
where
	V: AsRef<str>,
{
	fn has_key(&self, key: &str) -> bool {
		self.contains_key(key)
	}

	fn value_of(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(|value| Cow::Borrowed(value.as_ref()))
	}
}
impl<T> ParamKeys for &T
where
	T: ?Sized + ParamKeys,
{
	fn has_key(&self, key: &str) -> bool {
		(**self).has_key(key)
	}

	fn value_of(&self, key: &str) -> Option<Cow<'_, str>> {
		(**self).value_of(key)
	}
}

/// Verifies every key in `required` is present in `params`, delegating failure to `on_missing`.
///
/// The handler receives the full required list and is only invoked when at least one key is
/// absent.
pub fn require_keys_or_else<P, F, E>(required: &[&str], params: &P, on_missing: F) -> Result<(), E>
where
	P: ?Sized + ParamKeys,
	F: FnOnce(&[&str]) -> E,
{
	if required.iter().all(|key| params.has_key(key)) { Ok(()) } else { Err(on_missing(required)) }
}

/// Verifies every key in `required` is present in `params`.
pub fn require_keys<P>(required: &[&str], params: &P) -> Result<(), ValidationError>
where
	P: ?Sized + ParamKeys,
{
	require_keys_or_else(required, params, |required| ValidationError {
		required: required.iter().map(|key| (*key).to_owned()).collect(),
		missing: required
			.iter()
			.filter(|key| !params.has_key(key))
			.map(|key| (*key).to_owned())
			.collect(),
	})
}
