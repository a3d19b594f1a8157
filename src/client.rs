//! Client handle tying configuration to a dispatcher, plus the shared
//! build-dispatch-decode path every facade method funnels through.

// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	http::{DispatchResponse, Dispatcher},
	methods::ContentId,
	obs::{self, CallOutcome, CallSpan},
	request::{self, ApiMethod, HttpVerb, RequestArgs, RequestDescriptor},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestDispatcher;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestClientHandle = Client<ReqwestDispatcher>;

/// Handle for issuing management operations against a single endpoint.
///
/// The client owns the read-only [`ClientConfig`] and a shared dispatcher
/// reference so individual facade methods can focus on parameter shaping.
/// Cloning is cheap and clones share the dispatcher; there is no mutable state
/// behind a handle, so concurrent calls need no coordination.
pub struct Client<D>
where
	D: ?Sized + Dispatcher,
{
	/// Read-only configuration attached at construction.
	pub config: ClientConfig,
	/// Transport collaborator executing assembled requests.
	pub dispatcher: Arc<D>,
}
impl<D> Client<D>
where
	D: ?Sized + Dispatcher,
{
	/// Creates a client that reuses the caller-provided dispatcher.
	pub fn with_dispatcher(config: ClientConfig, dispatcher: impl Into<Arc<D>>) -> Self {
		Self { config, dispatcher: dispatcher.into() }
	}

	/// Builds, signs, dispatches, and decodes one operation.
	///
	/// Validation has already happened by the time this runs; the descriptor is
	/// assembled synchronously and the dispatcher call is the only suspension
	/// point. Transport failures propagate unmodified, non-2xx responses map to
	/// [`Error::Endpoint`] with any Retry-After hint attached, and 2xx bodies
	/// must decode to an integer content identifier.
	pub(crate) async fn execute(&self, method: ApiMethod, args: RequestArgs) -> Result<ContentId> {
		let span = CallSpan::new(method, "execute");

		obs::record_call_outcome(method, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = request::build_api_url(&self.config.base_url, method, &args)
					.map_err(Error::from)?;
				let headers = request::build_auth_header(&self.config, method, &args);
				let descriptor = RequestDescriptor {
					url,
					verb: HttpVerb::Post,
					base_url: self.config.base_url.clone(),
					headers,
					body: Vec::new(),
				};
				let response =
					self.dispatcher.dispatch(descriptor).await.map_err(Error::from)?;

				if !response.is_success() {
					return Err(Error::Endpoint {
						status: response.status,
						retry_after: response.retry_after(),
						message: String::from_utf8_lossy(&response.body).trim().into(),
					});
				}

				decode_content_id(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(method, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(method, CallOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestDispatcher> {
	/// Creates a client with a freshly provisioned reqwest transport.
	///
	/// Use [`Client::with_dispatcher`] to supply a preconfigured
	/// [`ReqwestDispatcher`] (custom timeouts, proxies, TLS) or any other
	/// [`Dispatcher`] implementation.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_dispatcher(config, ReqwestDispatcher::default())
	}
}
impl<D> Clone for Client<D>
where
	D: ?Sized + Dispatcher,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), dispatcher: self.dispatcher.clone() }
	}
}
impl<D> Debug for Client<D>
where
	D: ?Sized + Dispatcher,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("config", &self.config).finish()
	}
}

fn decode_content_id(response: &DispatchResponse) -> Result<ContentId> {
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { source, status: response.status })
}
