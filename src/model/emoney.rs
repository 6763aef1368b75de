//! E-money top-up and top-up status.

// self
use crate::{
	_prelude::*,
	model::{Amount, common::impl_snap_response},
};

/// E-money wallet top-up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmoneyTopupRequest {
	/// Caller-side reference; must be unique per top-up.
	pub partner_reference_no: String,
	/// Wallet identifier, usually the customer's phone number.
	pub customer_number: String,
	/// Wallet holder name as known to the caller.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_name: Option<String>,
	/// Amount credited to the wallet.
	pub amount: Amount,
	/// Fee charged to the partner.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fee_amount: Option<Amount>,
	/// Transaction time, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
	pub transaction_date: String,
	/// Free-text notes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	/// Wallet provider and funding block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<EmoneyTopupAdditionalInfo>,
}

/// `additionalInfo` of [`EmoneyTopupRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmoneyTopupAdditionalInfo {
	/// Partner account debited.
	pub source_account: String,
	/// Wallet provider code, e.g. `"OVO"`.
	pub emoney_provider: String,
	/// URL notified when the top-up settles.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub callback_url: Option<String>,
}

/// Result of an e-money top-up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmoneyTopupResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Provider reference.
	pub reference_no: String,
	/// Echo of the caller reference.
	pub partner_reference_no: String,
	/// Wallet identifier.
	pub customer_number: String,
	/// Registered wallet holder name.
	pub customer_name: String,
	/// Amount credited.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<Amount>,
	/// Settlement block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<EmoneyTopupResponseAdditionalInfo>,
}
impl_snap_response!(EmoneyTopupResponse);

/// `additionalInfo` of [`EmoneyTopupResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmoneyTopupResponseAdditionalInfo {
	/// Wallet provider code.
	pub emoney_provider: String,
	/// Latest transaction status.
	pub latest_transaction_status: String,
	/// Status description.
	pub transaction_status_desc: String,
}

/// E-money top-up status inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmoneyTopupStatusRequest {
	/// Caller reference of the original top-up.
	pub original_partner_reference_no: String,
	/// Provider reference of the original top-up.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub original_reference_no: Option<String>,
	/// `X-EXTERNAL-ID` of the original top-up.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub original_external_id: Option<String>,
	/// Snap service code of the original top-up, e.g. `"38"`.
	pub service_code: String,
	/// Original transaction time.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_date: Option<String>,
	/// Wallet selector.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<EmoneyTopupStatusAdditionalInfo>,
}

/// `additionalInfo` of [`EmoneyTopupStatusRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmoneyTopupStatusAdditionalInfo {
	/// Wallet provider code.
	pub emoney_provider: String,
}

/// Result of an e-money top-up status inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmoneyTopupStatusResponse {
	/// Provider response code.
	pub response_code: String,
	/// Provider response message.
	pub response_message: String,
	/// Provider reference of the original top-up.
	pub original_reference_no: String,
	/// Caller reference of the original top-up.
	pub original_partner_reference_no: String,
	/// `X-EXTERNAL-ID` of the original top-up.
	pub original_external_id: String,
	/// Snap service code.
	pub service_code: String,
	/// Original transaction time.
	pub transaction_date: String,
	/// Amount credited.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<Amount>,
	/// Latest transaction status.
	pub latest_transaction_status: String,
	/// Status description.
	pub transaction_status_desc: String,
	/// Wallet block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_info: Option<EmoneyTopupStatusResponseAdditionalInfo>,
}
impl_snap_response!(EmoneyTopupStatusResponse);

/// `additionalInfo` of [`EmoneyTopupStatusResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmoneyTopupStatusResponseAdditionalInfo {
	/// Wallet identifier.
	pub customer_number: String,
	/// Registered wallet holder name.
	pub customer_name: String,
	/// Time the status last changed.
	pub transaction_status_date: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn topup_request_serializes_nested_amounts() {
		let request = EmoneyTopupRequest {
			partner_reference_no: "20250609103003234".into(),
			customer_number: "6281234567890".into(),
			amount: Amount::idr("50000.00"),
			fee_amount: Some(Amount::idr("1000.00")),
			transaction_date: "2025-06-09T10:30:03+07:00".into(),
			additional_info: Some(EmoneyTopupAdditionalInfo {
				source_account: "9920017573".into(),
				emoney_provider: "OVO".into(),
				callback_url: None,
			}),
			..Default::default()
		};
		let value = serde_json::to_value(&request).expect("Request should serialize.");

		assert_eq!(value["feeAmount"]["value"], "1000.00");
		assert_eq!(value["additionalInfo"]["emoneyProvider"], "OVO");
		assert!(value.get("customerName").is_none());
		assert!(value["additionalInfo"].get("callbackUrl").is_none());
	}

	#[test]
	fn status_response_tolerates_missing_fields() {
		let response: EmoneyTopupStatusResponse = serde_json::from_str(
			r#"{"responseCode":"2003900","responseMessage":"Successful","latestTransactionStatus":"00"}"#,
		)
		.expect("Partial body should decode.");

		assert_eq!(response.latest_transaction_status, "00");
		assert!(response.amount.is_none());
		assert!(response.additional_info.is_none());
	}
}
