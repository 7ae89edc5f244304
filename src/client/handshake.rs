//! Three-legged OAuth 1.0 PLAINTEXT handshake.

// self
use crate::{
	_prelude::*,
	auth::{
		OAUTH_TOKEN, ScopeList, TEMP_TOKEN, TEMP_TOKEN_SECRET, TOKEN_VERIFIER, TokenPair,
		TokenResponse,
	},
	client::Client,
	error::Result,
	http::{self, Method, Params, RequestDispatcher},
	oauth::{self, OAuthHeader, RequestStamp},
	obs::{self, OperationKind},
	validate::{self, ParamKeys},
};

/// Keys `final_access_tokens` requires in its exchange mapping.
pub const EXCHANGE_KEYS: [&str; 3] = [TEMP_TOKEN, TEMP_TOKEN_SECRET, TOKEN_VERIFIER];

const REQUEST_TOKEN_PATH: &str = "RequestToken";
const AUTHORIZE_PATH: &str = "Authorize";
const ACCESS_TOKEN_PATH: &str = "AccessToken";
const SCOPE_PARAM: &str = "scope";
const VERIFIER_PARAM: &str = "oauth_verifier";

impl<D> Client<D>
where
	D: ?Sized + RequestDispatcher,
{
	/// Requests a temporary token pair for the configured scopes.
	pub async fn temporary_access_tokens(&self) -> Result<TokenResponse> {
		self.temporary_access_tokens_with_scopes(&self.config().scopes).await
	}

	/// Requests a temporary token pair for an explicit scope list.
	///
	/// Sends `POST RequestToken?scope=a,b` signed with `consumer_secret&`. The response body is
	/// URL-encoded and every field is returned, not only the token pair.
	pub async fn temporary_access_tokens_with_scopes(
		&self,
		scopes: &ScopeList,
	) -> Result<TokenResponse> {
		obs::observe(OperationKind::TemporaryTokens, "temporary_access_tokens", async move {
			let config = self.config();
			let header = OAuthHeader::temporary(
				&config.consumer_key,
				config.consumer_secret.expose(),
				&RequestStamp::now(),
			);
			let mut params = Params::new();

			params.insert(SCOPE_PARAM.into(), scopes.joined().into());

			let body = self
				.dispatcher
				.oauth(Method::Post, REQUEST_TOKEN_PATH, &params, &[header.into_pair()])
				.await?;

			Ok(TokenResponse::parse(&body))
		})
		.await
	}

	/// Builds the URL the end user visits to authorize `temporary_token`.
	///
	/// No request is sent.
	pub fn access_token_verifier_url(&self, temporary_token: &str) -> Result<Url> {
		let mut url = http::resolve(&self.config().oauth_base()?, AUTHORIZE_PATH)?;
		let query = format!("{OAUTH_TOKEN}={}", oauth::percent_encode(temporary_token));

		url.set_query(Some(&query));

		Ok(url)
	}

	/// Exchanges the temporary pair and verifier for the final access pair.
	///
	/// `exchange` must hold `temp_token`, `temp_token_secret`, and `token_verifier`. When any is
	/// absent a validation error listing all three is returned and nothing is sent.
	pub async fn final_access_tokens<P>(&self, exchange: &P) -> Result<TokenResponse>
	where
		P: ?Sized + ParamKeys,
	{
		let parts = exchange_parts(exchange);

		obs::observe(OperationKind::FinalTokens, "final_access_tokens", async move {
			let (temporary, verifier) = parts?;

			self.exchange_tokens(&temporary, &verifier).await
		})
		.await
	}

	/// Typed variant of [`Client::final_access_tokens`].
	pub async fn final_access_tokens_for(
		&self,
		temporary: &TokenPair,
		verifier: &str,
	) -> Result<TokenResponse> {
		obs::observe(
			OperationKind::FinalTokens,
			"final_access_tokens",
			self.exchange_tokens(temporary, verifier),
		)
		.await
	}

	// `POST AccessToken?oauth_verifier=...` signed with `consumer_secret&token_secret`.
	async fn exchange_tokens(&self, temporary: &TokenPair, verifier: &str) -> Result<TokenResponse> {
		let config = self.config();
		let header = OAuthHeader::exchange(
			&config.consumer_key,
			config.consumer_secret.expose(),
			temporary,
			&RequestStamp::now(),
		);
		let mut params = Params::new();

		params.insert(VERIFIER_PARAM.into(), verifier.into());

		let body = self
			.dispatcher
			.oauth(Method::Post, ACCESS_TOKEN_PATH, &params, &[header.into_pair()])
			.await?;

		Ok(TokenResponse::parse(&body))
	}
}

fn exchange_parts<P>(exchange: &P) -> Result<(TokenPair, String)>
where
	P: ?Sized + ParamKeys,
{
	validate::require_keys(&EXCHANGE_KEYS, exchange)?;

	let value = |key: &str| exchange.value_of(key).map(|v| v.into_owned()).unwrap_or_default();

	Ok((TokenPair::new(value(TEMP_TOKEN), value(TEMP_TOKEN_SECRET)), value(TOKEN_VERIFIER)))
}
