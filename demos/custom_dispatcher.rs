//! Demonstrates plugging a custom transport into the client.
//!
//! 1. Implement [`Dispatcher`] for your transport; the returned future must own its state.
//! 2. Report failures as [`TransportError`]; facades propagate them unmodified.
//! 3. Hand the dispatcher to [`Client::with_dispatcher`].

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use parking_lot::Mutex;
// self
use cms_mgmt_client::{
	client::Client,
	config::{ClientConfig, SecurityKey},
	http::{DispatchFuture, DispatchResponse, Dispatcher},
	methods::ContentRequestParams,
	request::RequestDescriptor,
};

/// Transport that logs each request URL and answers with the echoed identifier.
#[derive(Debug, Default)]
struct EchoDispatcher {
	seen: Mutex<Vec<String>>,
}
impl Dispatcher for EchoDispatcher {
	fn dispatch(&self, descriptor: RequestDescriptor) -> DispatchFuture {
		self.seen.lock().push(descriptor.url.to_string());

		let body = descriptor
			.url
			.query_pairs()
			.find_map(|(key, value)| (key == "contentID").then(|| value.into_owned()))
			.unwrap_or_default()
			.into_bytes();

		Box::pin(async move { Ok(DispatchResponse { status: 200, body, ..Default::default() }) })
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::parse(
		"https://mgmt.example.com/api/v1",
		"demo-website",
		SecurityKey::new("demo-security-key"),
	)?;
	let dispatcher = Arc::new(EchoDispatcher::default());
	let client: Client<EchoDispatcher> = Client::with_dispatcher(config, dispatcher.clone());
	let id = client.request_approval(ContentRequestParams::new(7, "fr-ca")).await?;

	println!("approval requested for content {id}");

	for url in dispatcher.seen.lock().iter() {
		println!("dispatched: {url}");
	}

	Ok(())
}
