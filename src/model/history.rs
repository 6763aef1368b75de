//! Transaction history listing.

// self
use crate::{
	_prelude::*,
	model::{Amount, common::impl_snap_response},
};

/// Transaction history listing for a time window.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListRequest {
	/// Window start, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
	pub from_date_time: String,
	/// Window end, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
	pub to_date_time: String,
	/// Account selector.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<HistoryListAdditionalInfo>,
}

/// `additionalInfo` of [`HistoryListRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListAdditionalInfo {
	/// Account whose history is listed.
	pub account_no: String,
}

/// Result of a transaction history listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryListResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Transactions in the window.
	pub detail_data: Vec<HistoryDetail>,
	/// Window summary.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<HistoryListResponseAdditionalInfo>,
}
impl_snap_response!(HistoryListResponse);

/// Transaction entry of [`HistoryListResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryDetail {
	/// Booking time.
	pub date_time: String,
	/// Booked amount.
	pub amount: Amount,
	/// Free-text remark.
	pub remark: String,
	/// Funding sources.
	pub source_of_funds: Vec<SourceOfFunds>,
	/// Transaction status.
	pub status: String,
	/// Transaction type, e.g. `"TRANSFER"`.
	#[serde(rename = "type")]
	pub kind: String,
	/// Direction block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<HistoryDetailAdditionalInfo>,
}

/// Funding source of a [`HistoryDetail`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceOfFunds {
	/// Source label, e.g. `"BANK_ACCOUNT"`.
	pub source: String,
}

/// `additionalInfo` of [`HistoryDetail`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryDetailAdditionalInfo {
	/// `"DEBIT"` or `"CREDIT"`.
	pub debit_credit: String,
}

/// `additionalInfo` of [`HistoryListResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryListResponseAdditionalInfo {
	/// Listed account.
	pub account_no: String,
	/// Window start.
	pub from_date_time: String,
	/// Window end.
	pub to_date_time: String,
	/// Summary message.
	pub message: String,
}
