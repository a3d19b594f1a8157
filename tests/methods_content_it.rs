#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use cms_mgmt_client::{
	client::{Client, ReqwestClientHandle},
	config::{ClientConfig, SecurityKey},
	error::Error,
	methods::ContentRequestParams,
};

const WEBSITE_NAME: &str = "it-website";
const SECURITY_KEY: &str = "it-security-key";

fn build_client(base_url: &str) -> ReqwestClientHandle {
	let config = ClientConfig::parse(base_url, WEBSITE_NAME, SecurityKey::new(SECURITY_KEY))
		.expect("Integration test configuration should be valid.");

	Client::new(config)
}

#[tokio::test]
async fn publish_content_round_trips_the_content_id() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/PublishContent")
				.query_param("contentID", "42")
				.query_param("languageCode", "en-us")
				.header("WebsiteName", WEBSITE_NAME)
				.header_exists("Signature");
			then.status(200).header("content-type", "application/json").body("42");
		})
		.await;
	let id = client
		.publish_content(ContentRequestParams::new(42, "en-us"))
		.await
		.expect("Publish against the mock endpoint should succeed.");

	assert_eq!(id.value(), 42);

	mock.assert_async().await;
}

#[tokio::test]
async fn request_approval_round_trips_the_content_id() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/RequestApproval")
				.query_param("contentID", "7")
				.query_param("languageCode", "fr-ca");
			then.status(200).header("content-type", "application/json").body("7");
		})
		.await;
	let id = client
		.request_approval(ContentRequestParams::new(7, "fr-ca"))
		.await
		.expect("Approval request against the mock endpoint should succeed.");

	assert_eq!(id.value(), 7);

	mock.assert_async().await;
}

#[tokio::test]
async fn repeated_calls_hit_the_same_route_with_the_same_signature() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/PublishContent").header_exists("Signature");
			then.status(200).header("content-type", "application/json").body("42");
		})
		.await;

	client
		.publish_content(ContentRequestParams::new(42, "en-us"))
		.await
		.expect("First publish should succeed.");
	client
		.publish_content(ContentRequestParams::new(42, "en-us"))
		.await
		.expect("Second publish should succeed.");

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn non_success_statuses_surface_as_endpoint_errors() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/PublishContent");
			then.status(429).header("retry-after", "30").body("slow down");
		})
		.await;
	let err = client
		.publish_content(ContentRequestParams::new(42, "en-us"))
		.await
		.expect_err("Rate-limited responses must surface to the caller.");

	match err {
		Error::Endpoint { status, message, retry_after } => {
			assert_eq!(status, 429);
			assert_eq!(message, "slow down");
			assert_eq!(retry_after.map(|hint| hint.whole_seconds()), Some(30));
		},
		other => panic!("Expected an endpoint error, got {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn malformed_success_bodies_surface_as_parse_errors() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/PublishContent");
			then.status(200).header("content-type", "text/plain").body("published!");
		})
		.await;
	let err = client
		.publish_content(ContentRequestParams::new(42, "en-us"))
		.await
		.expect_err("Bodies that are not content identifiers must be rejected.");

	assert!(matches!(err, Error::ResponseParse { status: 200, .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn validation_failures_never_reach_the_endpoint() {
	let server = MockServer::start_async().await;
	let client = build_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/PublishContent");
			then.status(200).header("content-type", "application/json").body("1");
		})
		.await;
	let err = client
		.publish_content(ContentRequestParams::new(-1, "en-us"))
		.await
		.expect_err("Negative content identifiers must be rejected locally.");

	assert!(matches!(err, Error::InvalidArgument(_)));

	mock.assert_calls_async(0).await;
}
