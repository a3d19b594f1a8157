//! Transport primitives for dispatching assembled requests.
//!
//! The module exposes [`Dispatcher`], the crate's only dependency on an HTTP
//! stack. Facades assemble a [`RequestDescriptor`] and hand it over; the
//! dispatcher owns everything transport-shaped (connection pooling, timeouts,
//! retries, cancellation) and resolves exactly once with a
//! [`DispatchResponse`] or a [`TransportError`].

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::Method;
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError, request::RequestDescriptor};
#[cfg(feature = "reqwest")] use crate::request::HttpVerb;

/// Boxed future resolved by [`Dispatcher::dispatch`].
pub type DispatchFuture = Pin<Box<dyn Future<Output = Result<DispatchResponse, TransportError>> + Send>>;

/// Abstraction over HTTP transports capable of executing management requests.
///
/// Implementations must be `Send + Sync + 'static` so a single
/// [`Client`](crate::client::Client) can be shared across tasks without
/// wrappers, and the returned future must own whatever transport state it
/// needs so it stays `Send` for the lifetime of the in-flight call. Transport
/// failures are reported as [`TransportError`] and flow back to the caller
/// unmodified; the dispatcher never sees validation failures because facades
/// reject invalid parameters before a descriptor exists.
pub trait Dispatcher
where
	Self: 'static + Send + Sync,
{
	/// Executes one assembled request.
	fn dispatch(&self, descriptor: RequestDescriptor) -> DispatchFuture;
}

/// Raw response surfaced by a dispatcher before the client decodes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers with lowercase names.
	pub headers: BTreeMap<String, String>,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl DispatchResponse {
	/// Checks whether the status is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns the Retry-After hint as a relative duration, if present.
	pub fn retry_after(&self) -> Option<Duration> {
		parse_retry_after(self.headers.get("retry-after")?)
	}
}

fn parse_retry_after(raw: &str) -> Option<Duration> {
	let raw = raw.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. Timeouts, proxies, and TLS configuration belong on the wrapped
/// client; the dispatcher itself adds nothing beyond descriptor translation.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestDispatcher(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestDispatcher {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestDispatcher {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestDispatcher {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Dispatcher for ReqwestDispatcher {
	fn dispatch(&self, descriptor: RequestDescriptor) -> DispatchFuture {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match descriptor.verb {
				HttpVerb::Post => Method::POST,
			};
			let mut request = client.request(method, descriptor.url);

			for (name, value) in &descriptor.headers {
				request = request.header(name, value);
			}

			let response =
				request.body(descriptor.body).send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
				})
				.collect();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(DispatchResponse { status, headers, body })
		})
	}
}
