// self
use crate::{obs::CallOutcome, request::ApiMethod};

/// Records a facade call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(method: ApiMethod, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"cms_mgmt_client_call_total",
			"method" => method.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (method, outcome);
	}
}
