//! Shapes shared by every operation: amounts and the response-code contract.

// self
use crate::_prelude::*;

/// Snap response code signalling success in the sandbox fixtures and legacy endpoints.
pub const RESPONSE_CODE_SUCCESS: &str = "00";

/// Monetary amount as transmitted: a decimal string plus an ISO 4217 currency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
	/// Decimal value with two fraction digits, e.g. `"10000.00"`.
	pub value: String,
	/// Currency code, e.g. [`IDR`](crate::endpoint::currency::IDR).
	pub currency: String,
}
impl Amount {
	/// Creates an amount from a decimal string and a currency code.
	pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
		Self { value: value.into(), currency: currency.into() }
	}

	/// Creates an amount in Indonesian Rupiah.
	pub fn idr(value: impl Into<String>) -> Self {
		Self::new(value, crate::endpoint::currency::IDR)
	}
}

/// Accessors shared by every response payload.
pub trait SnapResponse {
	/// Provider `responseCode`.
	fn response_code(&self) -> &str;

	/// Provider `responseMessage`.
	fn response_message(&self) -> &str;

	/// Returns `true` when the response code denotes success.
	///
	/// Accepts the short `"00"` form and seven-digit Snap codes whose status prefix is `200`.
	fn is_success(&self) -> bool {
		let code = self.response_code();

		code == RESPONSE_CODE_SUCCESS || (code.len() == 7 && code.starts_with("200"))
	}
}

macro_rules! impl_snap_response {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::model::SnapResponse for $ty {
				fn response_code(&self) -> &str {
					&self.response_code
				}

				fn response_message(&self) -> &str {
					&self.response_message
				}
			}
		)+
	};
}
pub(crate) use impl_snap_response;
