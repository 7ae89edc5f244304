mod common;

// crates.io
use httpmock::prelude::*;
// self
use trademe_api::{
	Error, Method, Params, TokenPair,
	client::{ReqwestApiClient, SELL_ITEM_KEYS},
	error::{ConfigError, TransportError},
	serde_json::{Value, json},
};

fn params(value: Value) -> Params {
	match value {
		Value::Object(map) => map,
		_ => panic!("Test params must be a JSON object."),
	}
}

fn listing() -> Value {
	json!({
		"Category": "0187-0192-",
		"Title": "Mountain bike",
		"Description": ["Hardtail, 29er wheels."],
		"Duration": 7,
		"BuyNowPrice": 900,
		"StartPrice": 500,
		"PaymentMethods": [2],
		"Pickup": 1,
		"ShippingOptions": [{ "Type": 1 }],
	})
}

#[tokio::test]
async fn sell_item_posts_json_body() {
	let server = MockServer::start_async().await;
	let client = common::build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/Selling.json").json_body(listing());
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"Success\":true,\"ListingId\":2149}");
		})
		.await;
	let body = client.sell_item(&params(listing())).await.expect("Listing should succeed.");

	assert_eq!(body, "{\"Success\":true,\"ListingId\":2149}");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn sell_item_validation_never_reaches_the_server() {
	let server = MockServer::start_async().await;
	let client = common::build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200);
		})
		.await;
	let mut incomplete = params(listing());

	incomplete.remove("ShippingOptions");

	let err = client.sell_item(&incomplete).await.expect_err("Validation should fail.");

	assert_eq!(
		err.to_string(),
		format!("Missing required parameters; expected: {}.", SELL_ITEM_KEYS.join(", "))
	);

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn list_selling_items_sends_query_params() {
	let server = MockServer::start_async().await;
	let client = common::build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/SellingItems/Closed.json")
				.query_param("page", "2")
				.query_param("rows", "25");
			then.status(200).body("{\"TotalCount\":0,\"List\":[]}");
		})
		.await;
	let body = client
		.list_selling_items_filtered(&params(json!({ "page": 2, "rows": "25" })), "Closed")
		.await
		.expect("Listing should succeed.");

	assert_eq!(body, "{\"TotalCount\":0,\"List\":[]}");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn list_selling_items_defaults_to_all() {
	let server = MockServer::start_async().await;
	let client = common::build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/SellingItems/All.json");
			then.status(200).body("{\"List\":[]}");
		})
		.await;

	client.list_selling_items(&Params::new()).await.expect("Listing should succeed.");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn non_success_status_surfaces_as_transport_error() {
	let server = MockServer::start_async().await;
	let client = common::build_client(&server);

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/SellingItems/All.json");
			then.status(401).body("{\"ErrorDescription\":\"Invalid token\"}");
		})
		.await;

	let err = client.list_selling_items(&Params::new()).await.expect_err("401 should fail.");

	match err {
		Error::Transport(TransportError::Status { status, body }) => {
			assert_eq!(status, 401);
			assert!(body.contains("Invalid token"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn configured_access_tokens_sign_business_calls() {
	let server = MockServer::start_async().await;
	let config = common::config_builder(&server)
		.access_tokens(TokenPair::new("access-token", "access-secret"))
		.build()
		.expect("Config should build.");
	let client = ReqwestApiClient::new(config).expect("Client should build.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/SellingItems/All.json").header_exists("authorization");
			then.status(200).body("{\"List\":[]}");
		})
		.await;

	client.list_selling_items(&Params::new()).await.expect("Signed listing should succeed.");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn signed_calls_never_leave_the_api_origin() {
	let server = MockServer::start_async().await;
	let config = common::config_builder(&server)
		.access_tokens(TokenPair::new("access-token", "access-secret"))
		.build()
		.expect("Config should build.");
	let client = ReqwestApiClient::new(config).expect("Client should build.");
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200);
		})
		.await;
	let err = client
		.api(Method::Get, "http://evil.example/collect", &Params::new())
		.await
		.expect_err("Foreign endpoint must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::ForeignEndpoint { .. })));

	mock.assert_calls_async(0).await;
}
