//! Faspay SendMe Snap client: every call is signed with RSA-SHA256 over a canonical
//! `METHOD:PATH:BODY_DIGEST:TIMESTAMP` string, dispatched through a pluggable HTTP transport, and
//! classified into typed responses or structured errors.
//!
//! ```no_run
//! use faspay_snap::{
//! 	client::{Client, SnapServices},
//! 	config::{ClientConfig, Environment},
//! 	model::{AccountInquiryAdditionalInfo, AccountInquiryRequest},
//! 	transport::CallContext,
//! };
//!
//! # async fn run() -> faspay_snap::error::Result<()> {
//! let key = std::fs::read("certs/enc.key").expect("key file");
//! let config = ClientConfig::builder("99999", key).environment(Environment::Sandbox).build()?;
//! let client = Client::new(config)?;
//! let response = client
//! 	.account_inquiry(&CallContext::default(), &AccountInquiryRequest {
//! 		beneficiary_bank_code: "008".into(),
//! 		beneficiary_account_no: "60004400184".into(),
//! 		partner_reference_no: "20250606234037372".into(),
//! 		additional_info: Some(AccountInquiryAdditionalInfo {
//! 			source_account: "9920017573".into(),
//! 		}),
//! 	})
//! 	.await?;
//!
//! println!("{}", response.beneficiary_account_name);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod classify;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod request;
pub mod sign;
pub mod transport;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{OffsetDateTime, UtcOffset};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
