//! Snap endpoints served by the provider, with their paths and response conventions.

// self
use crate::{_prelude::*, classify::ResponseMode};

/// Provider-defined error codes carried in `code` fields.
pub mod error_code {
	/// Request failed validation.
	pub const VALIDATION: &str = "validation_error";
	/// Caller could not be authenticated.
	pub const AUTHENTICATION: &str = "authentication_error";
	/// Caller is not allowed to perform the operation.
	pub const AUTHORIZATION: &str = "authorization_error";
	/// Resource does not exist.
	pub const NOT_FOUND: &str = "not_found";
	/// Too many requests.
	pub const RATE_LIMIT: &str = "rate_limit_exceeded";
	/// Provider failed internally.
	pub const INTERNAL_SERVER: &str = "internal_server_error";
	/// Provider is temporarily unavailable.
	pub const SERVICE_UNAVAILABLE: &str = "service_unavailable";
	/// Source account cannot cover the amount.
	pub const INSUFFICIENT_FUNDS: &str = "insufficient_funds";
}

/// Transaction status labels.
pub mod status {
	/// Accepted, not yet processed.
	pub const PENDING: &str = "pending";
	/// Being processed.
	pub const PROCESSING: &str = "processing";
	/// Completed.
	pub const SUCCESS: &str = "success";
	/// Rejected or failed.
	pub const FAILED: &str = "failed";
	/// Cancelled before completion.
	pub const CANCELLED: &str = "cancelled";
	/// Reversed after completion.
	pub const REFUNDED: &str = "refunded";
}

/// ISO 4217 currency codes accepted by the provider.
pub mod currency {
	/// Indonesian Rupiah.
	pub const IDR: &str = "IDR";
	/// US Dollar.
	pub const USD: &str = "USD";
	/// Singapore Dollar.
	pub const SGD: &str = "SGD";
}

/// Snap operations exposed by the client facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// External account inquiry.
	AccountInquiry,
	/// Inter-bank transfer.
	TransferInterbank,
	/// Transfer status inquiry.
	TransferStatus,
	/// Balance inquiry.
	BalanceInquiry,
	/// Transaction history listing.
	HistoryList,
	/// E-money top-up.
	EmoneyTopup,
	/// E-money top-up status inquiry.
	EmoneyTopupStatus,
	/// Virtual-account bill inquiry.
	VaInquiry,
	/// Virtual-account bill payment.
	VaPayment,
}
impl Endpoint {
	/// Every endpoint, in documentation order.
	pub const ALL: [Self; 9] = [
		Self::AccountInquiry,
		Self::TransferInterbank,
		Self::TransferStatus,
		Self::BalanceInquiry,
		Self::HistoryList,
		Self::EmoneyTopup,
		Self::EmoneyTopupStatus,
		Self::VaInquiry,
		Self::VaPayment,
	];

	/// Request path relative to the base URL; also the path that gets signed.
	pub const fn path(self) -> &'static str {
		match self {
			Self::AccountInquiry => "/account/v1.0/account-inquiry-external",
			Self::TransferInterbank => "/account/v1.0/transfer-interbank",
			Self::TransferStatus => "/account/v1.0/transfer/status",
			Self::BalanceInquiry => "/account/v1.0/balance-inquiry",
			Self::HistoryList => "/account/v1.0/transaction-history-list",
			Self::EmoneyTopup => "/account/v1.0/emoney/topup",
			Self::EmoneyTopupStatus => "/account/v1.0/emoney/topup-status",
			Self::VaInquiry => "/account/v1.0/transfer-va/inquiry",
			Self::VaPayment => "/account/v1.0/transfer-va/payment",
		}
	}

	/// HTTP method; every Snap operation is a `POST`.
	pub fn method(self) -> ::http::Method {
		::http::Method::POST
	}

	/// How responses from this endpoint are classified.
	///
	/// Transfer endpoints report failures through `responseCode` in an otherwise regular body,
	/// so their bodies are decoded as-is whatever the HTTP status.
	pub const fn response_mode(self) -> ResponseMode {
		match self {
			Self::TransferInterbank | Self::TransferStatus => ResponseMode::Direct,
			_ => ResponseMode::Enveloped,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::AccountInquiry => "account_inquiry",
			Self::TransferInterbank => "transfer_interbank",
			Self::TransferStatus => "transfer_status",
			Self::BalanceInquiry => "balance_inquiry",
			Self::HistoryList => "history_list",
			Self::EmoneyTopup => "emoney_topup",
			Self::EmoneyTopupStatus => "emoney_topup_status",
			Self::VaInquiry => "va_inquiry",
			Self::VaPayment => "va_payment",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// self
	use super::*;

	#[test]
	fn paths_and_labels_are_unique() {
		let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
		let labels: HashSet<_> = Endpoint::ALL.iter().map(|e| e.as_str()).collect();

		assert_eq!(paths.len(), Endpoint::ALL.len());
		assert_eq!(labels.len(), Endpoint::ALL.len());
		assert!(Endpoint::ALL.iter().all(|e| e.path().starts_with("/account/v1.0/")));
	}

	#[test]
	fn only_transfers_use_direct_mode() {
		for endpoint in Endpoint::ALL {
			let direct = matches!(endpoint, Endpoint::TransferInterbank | Endpoint::TransferStatus);

			assert_eq!(endpoint.response_mode() == ResponseMode::Direct, direct, "{endpoint}");
		}
	}
}
