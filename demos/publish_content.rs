//! Demonstrates publishing a content item with the default reqwest transport
//! against a local mock of the management endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use cms_mgmt_client::{
	client::Client,
	config::{ClientConfig, SecurityKey},
	methods::ContentRequestParams,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let publish_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/PublishContent")
				.query_param("contentID", "42")
				.query_param("languageCode", "en-us")
				.header_exists("Signature");
			then.status(200).header("content-type", "application/json").body("42");
		})
		.await;
	let config = ClientConfig::parse(
		&server.base_url(),
		"demo-website",
		SecurityKey::new("demo-security-key"),
	)?;
	let client = Client::new(config);
	let id = client.publish_content(ContentRequestParams::new(42, "en-us")).await?;

	println!("published content {id}");

	publish_mock.assert_async().await;

	Ok(())
}
