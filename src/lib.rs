//! Trade Me REST API client: list and sell items, and walk the three-legged OAuth 1.0
//! PLAINTEXT handshake on top of a pluggable request dispatcher.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod validate;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Error;
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use httpmock as _;

pub use crate::{
	auth::{SCOPE_BIDDING, SCOPE_READ, SCOPE_WRITE, TokenPair, TokenResponse},
	client::Client,
	config::{ClientConfig, Environment},
	error::{Error, Result},
	http::{Method, Params, RequestDispatcher},
};
