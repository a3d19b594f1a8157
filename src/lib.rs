//! Stateless client for content-management REST APIs—typed method facades,
//! deterministic request signing, and pluggable HTTP dispatch in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod methods;
pub mod obs;
pub mod request;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;
	pub use crate::http::{DispatchFuture, DispatchResponse, Dispatcher};

	// self
	use crate::{
		client::Client,
		config::{ClientConfig, SecurityKey},
		request::RequestDescriptor,
	};

	/// Dispatcher that records every descriptor and replays canned responses.
	///
	/// Responses queued with [`push_response`](Self::push_response) are replayed
	/// in order; when the queue is empty the dispatcher echoes the `contentID`
	/// argument from the request URL as a 200 JSON-integer body, mirroring the
	/// management endpoint's success shape.
	#[derive(Debug, Default)]
	pub struct RecordingDispatcher {
		calls: Mutex<Vec<RequestDescriptor>>,
		responses: Mutex<Vec<DispatchResponse>>,
	}
	impl RecordingDispatcher {
		/// Queues a canned response for the next dispatch.
		pub fn push_response(&self, response: DispatchResponse) {
			self.responses.lock().push(response);
		}

		/// Returns a snapshot of every dispatched descriptor.
		pub fn calls(&self) -> Vec<RequestDescriptor> {
			self.calls.lock().clone()
		}

		/// Returns how many descriptors have been dispatched.
		pub fn call_count(&self) -> usize {
			self.calls.lock().len()
		}

		fn echo_response(descriptor: &RequestDescriptor) -> DispatchResponse {
			let echoed = descriptor
				.url
				.query_pairs()
				.find_map(|(key, value)| (key == "contentID").then(|| value.into_owned()))
				.unwrap_or_else(|| "0".into());

			DispatchResponse { status: 200, headers: BTreeMap::new(), body: echoed.into_bytes() }
		}
	}
	impl Dispatcher for RecordingDispatcher {
		fn dispatch(&self, descriptor: RequestDescriptor) -> DispatchFuture {
			let response = {
				let mut queued = self.responses.lock();

				if queued.is_empty() {
					Self::echo_response(&descriptor)
				} else {
					queued.remove(0)
				}
			};

			self.calls.lock().push(descriptor);

			Box::pin(async move { Ok(response) })
		}
	}

	/// Builds the configuration fixture shared by unit and integration tests.
	pub fn test_client_config() -> ClientConfig {
		ClientConfig::parse(
			"https://mgmt.example.com/api/v1",
			"my-website",
			SecurityKey::new("fixture-key"),
		)
		.expect("Config fixture should be considered valid.")
	}

	/// Constructs a [`Client`] backed by a [`RecordingDispatcher`], returning
	/// both so tests can inspect dispatched descriptors.
	pub fn build_recording_client() -> (Client<RecordingDispatcher>, Arc<RecordingDispatcher>) {
		let dispatcher = Arc::new(RecordingDispatcher::default());
		let client = Client::with_dispatcher(test_client_config(), dispatcher.clone());

		(client, dispatcher)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
