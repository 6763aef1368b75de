//! Inter-bank transfers and their status lookups.

// self
use crate::{
	_prelude::*,
	model::{Amount, common::impl_snap_response},
};

/// Inter-bank transfer instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInterbankRequest {
	/// Caller-side reference; must be unique per transfer.
	pub partner_reference_no: String,
	/// Amount to move.
	pub amount: Amount,
	/// Beneficiary name as known to the caller.
	pub beneficiary_account_name: String,
	/// Beneficiary account number.
	pub beneficiary_account_no: String,
	/// Beneficiary bank code.
	pub beneficiary_bank_code: String,
	/// Notification address for the beneficiary.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub beneficiary_email: Option<String>,
	/// Partner account debited.
	pub source_account_no: String,
	/// Transaction time, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
	pub transaction_date: String,
	/// Scheduling and callback block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<TransferInterbankAdditionalInfo>,
}

/// `additionalInfo` of [`TransferInterbankRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInterbankAdditionalInfo {
	/// Scheduled execution date; empty for immediate execution.
	pub instruct_date: String,
	/// Free-text description.
	pub transaction_description: String,
	/// URL notified when the transfer settles.
	pub callback_url: String,
}

/// Result of an inter-bank transfer.
///
/// Decoded as-is whatever the HTTP status; check [`SnapResponse::is_success`](crate::model::SnapResponse::is_success).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferInterbankResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Provider reference.
	pub reference_no: String,
	/// Echo of the caller reference.
	pub partner_reference_no: String,
	/// Amount moved.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<Amount>,
	/// Beneficiary account number.
	pub beneficiary_account_no: String,
	/// Beneficiary bank code.
	pub beneficiary_bank_code: String,
	/// Partner account debited.
	pub source_account_no: String,
	/// Settlement block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<TransferInterbankResponseAdditionalInfo>,
}
impl_snap_response!(TransferInterbankResponse);

/// `additionalInfo` of [`TransferInterbankResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferInterbankResponseAdditionalInfo {
	/// Registered holder name.
	pub beneficiary_account_name: String,
	/// Beneficiary bank name.
	pub beneficiary_bank_name: String,
	/// Scheduled execution date.
	pub instruct_date: String,
	/// Free-text description.
	pub transaction_description: String,
	/// Callback URL on record.
	pub callback_url: String,
	/// Latest transaction status, e.g. `"SUCCESS"`.
	pub latest_transaction_status: String,
	/// Status description.
	pub transaction_status_desc: String,
}

/// Transfer status inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatusRequest {
	/// Caller reference of the original transfer.
	pub original_partner_reference_no: String,
	/// Provider reference of the original transfer.
	pub original_reference_no: String,
	/// Snap service code of the original transfer, e.g. `"18"`.
	pub service_code: String,
	/// Original transaction time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_date: Option<String>,
}

/// Result of a transfer status inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferStatusResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Provider reference of the original transfer.
	pub original_reference_no: String,
	/// Caller reference of the original transfer.
	pub original_partner_reference_no: String,
	/// Snap service code.
	pub service_code: String,
	/// Original transaction time.
	pub transaction_date: String,
	/// Amount moved.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<Amount>,
	/// Beneficiary account number.
	pub beneficiary_account_no: String,
	/// Beneficiary bank code.
	pub beneficiary_bank_code: String,
	/// Network reference number.
	pub reference_number: String,
	/// Partner account debited.
	pub source_account_no: String,
	/// Latest transaction status.
	pub latest_transaction_status: String,
	/// Status description.
	pub transaction_status_desc: String,
	/// Settlement block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<TransferStatusAdditionalInfo>,
}
impl_snap_response!(TransferStatusResponse);

/// `additionalInfo` of [`TransferStatusResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransferStatusAdditionalInfo {
	/// Registered holder name.
	pub beneficiary_account_name: String,
	/// Beneficiary bank name.
	pub beneficiary_bank_name: String,
	/// Free-text description.
	pub transaction_description: String,
	/// Callback URL on record.
	pub callback_url: String,
	/// Time the status last changed.
	pub transaction_status_date: String,
}
