// crates.io
use httpmock::MockServer;
// self
use trademe_api::{
	ClientConfig,
	client::ReqwestApiClient,
	config::builder::ClientConfigBuilder,
	url::Url,
};

pub const CONSUMER_KEY: &str = "consumer-key";
pub const CONSUMER_SECRET: &str = "consumer-secret";

/// Builder whose API and OAuth bases point at the mock server.
pub fn config_builder(server: &MockServer) -> ClientConfigBuilder {
	ClientConfig::builder(CONSUMER_KEY, CONSUMER_SECRET)
		.api_base(Url::parse(&server.url("/v1")).expect("Mock API base should parse."))
		.oauth_base(Url::parse(&server.url("/Oauth")).expect("Mock OAuth base should parse."))
}

/// Reqwest-backed client talking to the mock server.
pub fn build_client(server: &MockServer) -> ReqwestApiClient {
	let config = config_builder(server).build().expect("Mock config should build.");

	ReqwestApiClient::new(config).expect("Client should build against the mock server.")
}
