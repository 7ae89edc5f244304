//! Selling endpoints: list a new item and browse the member's own listings.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::Result,
	http::{Method, Params, RequestDispatcher},
	oauth,
	obs::{self, OperationKind},
	validate,
};

/// Keys `sell_item` requires before it will contact the API.
pub const SELL_ITEM_KEYS: [&str; 9] = [
	"Category",
	"Title",
	"Description",
	"Duration",
	"BuyNowPrice",
	"StartPrice",
	"PaymentMethods",
	"Pickup",
	"ShippingOptions",
];
/// Listing filter used when none is given.
pub const DEFAULT_SELLING_FILTER: &str = "All";

const SELLING_PATH: &str = "Selling.json";

impl<D> Client<D>
where
	D: ?Sized + RequestDispatcher,
{
	/// Lists a new item with `POST Selling.json`; returns the raw response body.
	///
	/// Every key in [`SELL_ITEM_KEYS`] must be present, otherwise a validation error naming all
	/// of them is returned and nothing is sent.
	pub async fn sell_item(&self, params: &Params) -> Result<String> {
		obs::observe(OperationKind::SellItem, "sell_item", async move {
			validate::require_keys(&SELL_ITEM_KEYS, params)?;

			self.dispatcher.api(Method::Post, SELLING_PATH, params).await
		})
		.await
	}

	/// Fetches `GET SellingItems/All.json` with `params` as the query string.
	pub async fn list_selling_items(&self, params: &Params) -> Result<String> {
		self.list_selling_items_filtered(params, DEFAULT_SELLING_FILTER).await
	}

	/// Fetches `GET SellingItems/{filter}.json` with `params` as the query string.
	pub async fn list_selling_items_filtered(&self, params: &Params, filter: &str) -> Result<String> {
		let uri = format!("SellingItems/{}.json", oauth::percent_encode(filter));

		obs::observe(
			OperationKind::ListSellingItems,
			"list_selling_items",
			self.dispatcher.api(Method::Get, &uri, params),
		)
		.await
	}
}
