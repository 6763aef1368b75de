//! Source account balance inquiry.

// self
use crate::{
	_prelude::*,
	model::{Amount, common::impl_snap_response},
};

/// Balance inquiry for a partner account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInquiryRequest {
	/// Caller-side reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub partner_reference_no: Option<String>,
	/// Account to query.
	pub account_no: String,
	/// Balance types to return; all types when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub balance_types: Option<Vec<String>>,
}

/// Result of a balance inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BalanceInquiryResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Echo of the caller reference.
	pub partner_reference_no: String,
	/// Queried account.
	pub account_no: String,
	/// One entry per balance type.
	pub account_infos: Vec<AccountInfo>,
}
impl_snap_response!(BalanceInquiryResponse);

/// Balance entry of [`BalanceInquiryResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountInfo {
	/// Balance type, e.g. `"AVAILABLE"`.
	pub balance_type: String,
	/// Ledger amount.
	pub amount: Amount,
	/// Spendable amount.
	pub available_balance: Amount,
	/// Account status, e.g. `"ACTIVE"`.
	pub status: String,
}
