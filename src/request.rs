//! Authenticated-request construction: method routes, canonical argument
//! encoding, and the deterministic signature header set.
//!
//! Both builders are pure with respect to their inputs. [`build_api_url`]
//! yields byte-identical URLs for identical `(base, method, args)` triples, and
//! [`build_auth_header`] yields identical headers for identical
//! `(config, method, args)` triples while any change to the arguments changes
//! the signature. Nothing here performs IO or mutates the configuration.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};
use url::form_urlencoded;
// self
use crate::{_prelude::*, config::ClientConfig, error::ConfigError};

/// Remote procedure names exposed by the management endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiMethod {
	/// Publish a content item in a given language.
	PublishContent,
	/// Request approval for a content item in a given language.
	RequestApproval,
}
impl ApiMethod {
	/// Returns the fixed route segment identifying the remote procedure.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiMethod::PublishContent => "PublishContent",
			ApiMethod::RequestApproval => "RequestApproval",
		}
	}
}
impl Display for ApiMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// HTTP verbs used by management operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpVerb {
	#[default]
	/// The content operations in this crate all POST with an empty body.
	Post,
}
impl HttpVerb {
	/// Returns the verb as it appears on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpVerb::Post => "POST",
		}
	}
}
impl Display for HttpVerb {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Ordered argument mapping built fresh per call and discarded afterwards.
///
/// Keys are sorted, so the canonical encoding is independent of insertion
/// order; the same arguments always sign and route identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestArgs(BTreeMap<&'static str, String>);
impl RequestArgs {
	/// Creates an empty argument mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one argument, replacing any previous value for the key.
	pub fn arg(mut self, key: &'static str, value: impl Display) -> Self {
		self.0.insert(key, value.to_string());

		self
	}

	/// Returns the canonical URL-encoded form, keys in sorted order.
	pub fn canonical_query(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());

		for (key, value) in &self.0 {
			serializer.append_pair(key, value);
		}

		serializer.finish()
	}

	/// Looks up a single argument value.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}
}

/// Fully assembled request handed to the dispatcher, never retained after dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
	/// Fully-qualified request URL including the canonical query.
	pub url: Url,
	/// HTTP verb for the operation.
	pub verb: HttpVerb,
	/// Base URL the route was joined onto.
	pub base_url: Url,
	/// Authentication header set computed for this method + args pair.
	pub headers: BTreeMap<String, String>,
	/// Opaque request payload; empty for the content operations in this crate.
	pub body: Vec<u8>,
}

/// Builds the fully-qualified method URL: `{base}/{method}?{canonical args}`.
///
/// Pure and deterministic; the only failure mode is an opaque base URL, which
/// [`ClientConfig`](crate::config::ClientConfig) already rejects at construction.
pub fn build_api_url(
	base: &Url,
	method: ApiMethod,
	args: &RequestArgs,
) -> Result<Url, ConfigError> {
	let mut url = base.clone();

	url.path_segments_mut()
		.map_err(|()| ConfigError::OpaqueBaseUrl)?
		.pop_if_empty()
		.push(method.as_str());
	url.set_query(Some(&args.canonical_query()));

	Ok(url)
}

/// Computes the authentication header set for one method + args pair.
///
/// The signature is base64(SHA-256) over the website name, method name,
/// canonical argument encoding, and the security key, each separated by a
/// newline so field boundaries cannot be forged by concatenation. Identical
/// inputs produce identical headers; any change to the arguments changes the
/// signature, so a captured header set cannot be replayed against different
/// arguments.
pub fn build_auth_header(
	config: &ClientConfig,
	method: ApiMethod,
	args: &RequestArgs,
) -> BTreeMap<String, String> {
	let mut hasher = Sha256::new();

	hasher.update(config.website_name.as_bytes());
	hasher.update(b"\n");
	hasher.update(method.as_str().as_bytes());
	hasher.update(b"\n");
	hasher.update(args.canonical_query().as_bytes());
	hasher.update(b"\n");
	hasher.update(config.security_key().expose().as_bytes());

	let signature = BASE64.encode(hasher.finalize());

	BTreeMap::from([
		("Accept".into(), "application/json".into()),
		("Signature".into(), signature),
		("WebsiteName".into(), config.website_name.clone()),
	])
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::config::SecurityKey;

	fn fixture_config() -> ClientConfig {
		ClientConfig::parse(
			"https://mgmt.example.com/api/v1",
			"my-website",
			SecurityKey::new("fixture-key"),
		)
		.expect("Config fixture should be considered valid.")
	}

	fn fixture_args(content_id: i64) -> RequestArgs {
		RequestArgs::new().arg("contentID", content_id).arg("languageCode", "en-us")
	}

	#[test]
	fn build_api_url_is_pure() {
		let config = fixture_config();
		let args = fixture_args(42);
		let first = build_api_url(&config.base_url, ApiMethod::PublishContent, &args)
			.expect("URL should build from a validated base.");
		let second = build_api_url(&config.base_url, ApiMethod::PublishContent, &args)
			.expect("URL should build from a validated base.");

		assert_eq!(first.as_str(), second.as_str());
		assert_eq!(
			first.as_str(),
			"https://mgmt.example.com/api/v1/PublishContent?contentID=42&languageCode=en-us",
		);
	}

	#[test]
	fn build_api_url_encodes_reserved_characters() {
		let config = fixture_config();
		let args = RequestArgs::new().arg("contentID", 7).arg("languageCode", "fr ca&x");
		let url = build_api_url(&config.base_url, ApiMethod::RequestApproval, &args)
			.expect("URL should build from a validated base.");

		assert_eq!(url.query(), Some("contentID=7&languageCode=fr+ca%26x"));
	}

	#[test]
	fn canonical_query_is_insertion_order_independent() {
		let forward = RequestArgs::new().arg("contentID", 42).arg("languageCode", "en-us");
		let backward = RequestArgs::new().arg("languageCode", "en-us").arg("contentID", 42);

		assert_eq!(forward.canonical_query(), backward.canonical_query());
	}

	#[test]
	fn auth_header_is_deterministic() {
		let config = fixture_config();
		let args = fixture_args(42);
		let first = build_auth_header(&config, ApiMethod::PublishContent, &args);
		let second = build_auth_header(&config, ApiMethod::PublishContent, &args);

		assert_eq!(first, second);
		assert_eq!(first.get("WebsiteName").map(String::as_str), Some("my-website"));
	}

	#[test]
	fn auth_header_signature_is_arg_sensitive() {
		let config = fixture_config();
		let first = build_auth_header(&config, ApiMethod::PublishContent, &fixture_args(1));
		let second = build_auth_header(&config, ApiMethod::PublishContent, &fixture_args(2));

		assert_ne!(first.get("Signature"), second.get("Signature"));
	}

	#[test]
	fn auth_header_signature_is_method_sensitive() {
		let config = fixture_config();
		let args = fixture_args(42);
		let publish = build_auth_header(&config, ApiMethod::PublishContent, &args);
		let approval = build_auth_header(&config, ApiMethod::RequestApproval, &args);

		assert_ne!(publish.get("Signature"), approval.get("Signature"));
	}

	#[test]
	fn auth_header_never_contains_the_key() {
		let config = fixture_config();
		let headers = build_auth_header(&config, ApiMethod::PublishContent, &fixture_args(42));

		assert!(headers.values().all(|value| !value.contains("fixture-key")));
	}
}
