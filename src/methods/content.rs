//! Content-area facade methods: publish and request-approval operations.
//!
//! Each method validates its [`ContentRequestParams`] before any URL or header
//! is built, shapes the arguments into the mapping the request builder
//! expects, and funnels through the client's shared execute path. Validation
//! is short-circuiting and fails fast; the dispatcher is never invoked for
//! invalid parameters.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::InvalidArgument,
	http::Dispatcher,
	request::{ApiMethod, RequestArgs},
};

/// Integer identifier the management endpoint assigns to a content item.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContentId(i64);
impl ContentId {
	/// Returns the raw identifier value.
	pub const fn value(self) -> i64 {
		self.0
	}
}
impl From<ContentId> for i64 {
	fn from(id: ContentId) -> Self {
		id.0
	}
}
impl Display for ContentId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}", self.0)
	}
}

/// Parameters shared by the content operations.
///
/// Required fields are encoded in the struct itself; the remaining range
/// constraints (non-empty `language_code`, then `content_id > 0`) are checked
/// once per call, in that order, reporting only the first failing condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequestParams {
	/// Identifier of the content item to operate on.
	pub content_id: i64,
	/// Language code of the content variant (e.g. `en-us`).
	pub language_code: String,
}
impl ContentRequestParams {
	/// Bundles the identifier + language pair for a content operation.
	pub fn new(content_id: i64, language_code: impl Into<String>) -> Self {
		Self { content_id, language_code: language_code.into() }
	}

	fn validate(&self) -> Result<(), InvalidArgument> {
		if self.language_code.is_empty() {
			return Err(InvalidArgument::MissingLanguageCode);
		}
		if self.content_id <= 0 {
			return Err(InvalidArgument::NonPositiveContentId);
		}

		Ok(())
	}

	fn into_args(self) -> RequestArgs {
		RequestArgs::new()
			.arg("contentID", self.content_id)
			.arg("languageCode", self.language_code)
	}
}

impl<D> Client<D>
where
	D: ?Sized + Dispatcher,
{
	/// Publishes a content item in the given language.
	///
	/// Resolves to the identifier of the published item. Fails with
	/// [`InvalidArgument`] before any network interaction when the parameters
	/// are out of range.
	pub async fn publish_content(&self, params: ContentRequestParams) -> Result<ContentId> {
		params.validate()?;

		self.execute(ApiMethod::PublishContent, params.into_args()).await
	}

	/// Requests approval for a content item in the given language.
	///
	/// Resolves to the identifier of the item queued for approval. Fails with
	/// [`InvalidArgument`] before any network interaction when the parameters
	/// are out of range.
	pub async fn request_approval(&self, params: ContentRequestParams) -> Result<ContentId> {
		params.validate()?;

		self.execute(ApiMethod::RequestApproval, params.into_args()).await
	}
}
