//! Virtual-account bill inquiry and payment.

// self
use crate::{
	_prelude::*,
	model::{Amount, common::impl_snap_response},
};

/// Virtual-account bill inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaInquiryRequest {
	/// Biller prefix, left-padded to eight characters.
	pub partner_service_id: String,
	/// Customer number under the biller.
	pub customer_no: String,
	/// Full virtual account number (`partnerServiceId` + `customerNo`).
	pub virtual_account_no: String,
	/// Inquiry time, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub trx_date_init: Option<String>,
	/// Unique inquiry identifier; echoed back and reused by the payment.
	pub inquiry_request_id: String,
	/// Funding block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<VaInquiryAdditionalInfo>,
}

/// `additionalInfo` of [`VaInquiryRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaInquiryAdditionalInfo {
	/// Partner account that will pay the bill.
	pub source_account: String,
}

/// Result of a virtual-account bill inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaInquiryResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Bill returned by the biller.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub virtual_account_data: Option<VaInquiryData>,
}
impl_snap_response!(VaInquiryResponse);

/// Bill of a [`VaInquiryResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaInquiryData {
	/// Biller prefix.
	pub partner_service_id: String,
	/// Customer number under the biller.
	pub customer_no: String,
	/// Full virtual account number.
	pub virtual_account_no: String,
	/// Account holder shown to the payer.
	pub virtual_account_name: String,
	/// Echo of the inquiry identifier.
	pub inquiry_request_id: String,
	/// Amount due.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_amount: Option<Amount>,
	/// Biller block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<VaInquiryDataAdditionalInfo>,
}

/// `additionalInfo` of [`VaInquiryData`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaInquiryDataAdditionalInfo {
	/// Biller bank code.
	pub bank_code: String,
	/// Biller bank name.
	pub bank_name: String,
}

/// Virtual-account bill payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaPaymentRequest {
	/// Biller prefix.
	pub partner_service_id: String,
	/// Customer number under the biller.
	pub customer_no: String,
	/// Full virtual account number.
	pub virtual_account_no: String,
	/// Account holder returned by the inquiry.
	pub virtual_account_name: String,
	/// Caller-side reference; must be unique per payment.
	pub partner_reference_no: String,
	/// Unique payment identifier, usually the inquiry identifier.
	pub payment_request_id: String,
	/// Amount paid.
	pub paid_amount: Amount,
	/// Payment time, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
	pub trx_date_time: String,
	/// Funding block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<VaPaymentAdditionalInfo>,
}

/// `additionalInfo` of [`VaPaymentRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaPaymentAdditionalInfo {
	/// Partner account debited.
	pub source_account: String,
	/// URL notified when the payment settles.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub callback_url: Option<String>,
}

/// Result of a virtual-account bill payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaPaymentResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Payment receipt.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub virtual_account_data: Option<VaPaymentData>,
}
impl_snap_response!(VaPaymentResponse);

/// Receipt of a [`VaPaymentResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaPaymentData {
	/// Biller prefix.
	pub partner_service_id: String,
	/// Customer number under the biller.
	pub customer_no: String,
	/// Full virtual account number.
	pub virtual_account_no: String,
	/// Account holder.
	pub virtual_account_name: String,
	/// Echo of the payment identifier.
	pub payment_request_id: String,
	/// Echo of the caller reference.
	pub partner_reference_no: String,
	/// Provider reference.
	pub reference_no: String,
	/// Amount paid.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub paid_amount: Option<Amount>,
	/// Payment time.
	pub trx_date_time: String,
	/// Settlement block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<VaPaymentDataAdditionalInfo>,
}

/// `additionalInfo` of [`VaPaymentData`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaPaymentDataAdditionalInfo {
	/// Latest transaction status.
	pub latest_transaction_status: String,
	/// Status description.
	pub transaction_status_desc: String,
}
