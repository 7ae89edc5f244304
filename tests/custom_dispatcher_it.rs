// std
use std::sync::Arc;
// crates.io
use parking_lot::Mutex;
// self
use trademe_api::{
	Client, ClientConfig, Method, Params, RequestDispatcher,
	http::{DispatchFuture, Headers},
};

struct CannedDispatcher {
	config: ClientConfig,
	seen: Mutex<Vec<String>>,
}
impl RequestDispatcher for CannedDispatcher {
	fn api<'a>(
		&'a self,
		method: Method,
		uri: &'a str,
		_params: &'a Params,
	) -> DispatchFuture<'a, String> {
		self.seen.lock().push(format!("{method} {uri}"));

		Box::pin(async { Ok("{\"List\":[]}".to_owned()) })
	}

	fn oauth<'a>(
		&'a self,
		method: Method,
		uri: &'a str,
		_params: &'a Params,
		headers: &'a Headers,
	) -> DispatchFuture<'a, String> {
		self.seen
			.lock()
			.push(format!("{method} {uri} headers={}", headers.len()));

		Box::pin(async { Ok("oauth_token=t&oauth_token_secret=s".to_owned()) })
	}

	fn config(&self) -> &ClientConfig {
		&self.config
	}
}

#[tokio::test]
async fn injected_dispatcher_receives_every_call() {
	let dispatcher = Arc::new(CannedDispatcher {
		config: ClientConfig::builder("key", "secret")
			.base_domain("tmsandbox.co.nz")
			.build()
			.expect("Config should build."),
		seen: Mutex::new(Vec::new()),
	});
	let client: Client<CannedDispatcher> = Client::with_dispatcher(dispatcher.clone());

	client.list_selling_items(&Params::new()).await.expect("Listing should succeed.");
	client.temporary_access_tokens().await.expect("Handshake should succeed.");

	assert_eq!(client.dispatcher().base_domain(), "tmsandbox.co.nz");
	assert_eq!(client.dispatcher().option("consumer_key").as_deref(), Some("key"));
	assert_eq!(
		client.access_token_verifier_url("t").expect("URL should build.").as_str(),
		"https://secure.tmsandbox.co.nz/Oauth/Authorize?oauth_token=t"
	);
	assert_eq!(*dispatcher.seen.lock(), [
		"GET SellingItems/All.json",
		"POST RequestToken headers=1",
	]);
}

#[tokio::test]
async fn trait_objects_are_supported() {
	let dispatcher: Arc<dyn RequestDispatcher> = Arc::new(CannedDispatcher {
		config: ClientConfig::builder("key", "secret").build().expect("Config should build."),
		seen: Mutex::new(Vec::new()),
	});
	let client: Client<dyn RequestDispatcher> = Client::with_dispatcher(dispatcher);
	let body = client
		.api(Method::Get, "Categories.json", &Params::new())
		.await
		.expect("Passthrough should succeed.");

	assert_eq!(body, "{\"List\":[]}");
	assert_eq!(client.config().base_domain(), "trademe.co.nz");
}
