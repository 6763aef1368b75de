//! Beneficiary account inquiry.

// self
use crate::{_prelude::*, model::common::impl_snap_response};

/// External account inquiry: resolves the holder of a beneficiary account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInquiryRequest {
	/// Beneficiary bank code, e.g. `"008"`.
	pub beneficiary_bank_code: String,
	/// Beneficiary account number.
	pub beneficiary_account_no: String,
	/// Caller-side reference for the inquiry.
	pub partner_reference_no: String,
	/// Source account block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<AccountInquiryAdditionalInfo>,
}

/// `additionalInfo` of [`AccountInquiryRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInquiryAdditionalInfo {
	/// Partner account the inquiry is charged to.
	pub source_account: String,
}

/// Result of an external account inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountInquiryResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Provider reference.
	pub reference_no: String,
	/// Echo of the caller reference.
	pub partner_reference_no: String,
	/// Registered holder name.
	pub beneficiary_account_name: String,
	/// Beneficiary account number.
	pub beneficiary_account_no: String,
	/// Beneficiary bank code.
	pub beneficiary_bank_code: String,
	/// Beneficiary bank name.
	pub beneficiary_bank_name: String,
	/// Account currency.
	pub currency: String,
	/// Inquiry status block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<AccountInquiryResponseAdditionalInfo>,
}
impl_snap_response!(AccountInquiryResponse);

/// `additionalInfo` of [`AccountInquiryResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountInquiryResponseAdditionalInfo {
	/// Inquiry status label.
	pub status: String,
	/// Inquiry status description.
	pub message: String,
}
