//! Client configuration and the redacted security key wrapper.

// self
use crate::{_prelude::*, error::ConfigError};

/// Redacted security key wrapper keeping signing material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityKey(String);
impl SecurityKey {
	/// Wraps a new security key string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner key value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SecurityKey {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SecurityKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SecurityKey").field(&"<redacted>").finish()
	}
}
impl Display for SecurityKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Immutable per-client configuration consumed by every facade call.
///
/// The configuration is attached to a [`Client`](crate::client::Client) at
/// construction and stays read-only for the client's lifetime; facade methods
/// never mutate it, which is what makes concurrent calls safe without locking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Base URL every method route is joined onto.
	pub base_url: Url,
	/// Website (instance) name the signature covers.
	pub website_name: String,
	security_key: SecurityKey,
}
impl ClientConfig {
	/// Creates a validated configuration.
	///
	/// Rejects opaque base URLs (`data:`, `mailto:`, ...) because method routes
	/// cannot be appended to them, and rejects empty website names because the
	/// signature would then cover an empty principal.
	pub fn new(
		base_url: Url,
		website_name: impl Into<String>,
		security_key: SecurityKey,
	) -> Result<Self, ConfigError> {
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::OpaqueBaseUrl);
		}

		let website_name = website_name.into();

		if website_name.trim().is_empty() {
			return Err(ConfigError::EmptyWebsiteName);
		}

		Ok(Self { base_url, website_name, security_key })
	}

	/// Parses the base URL from a string before validating the configuration.
	pub fn parse(
		base_url: &str,
		website_name: impl Into<String>,
		security_key: SecurityKey,
	) -> Result<Self, ConfigError> {
		let base_url =
			Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Self::new(base_url, website_name, security_key)
	}

	/// Returns the security key used by the request signer.
	pub fn security_key(&self) -> &SecurityKey {
		&self.security_key
	}
}
