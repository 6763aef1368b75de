//! Provider-assigned identifiers sent on every Snap call.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $max:expr) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Maximum number of digits accepted by the provider.
			pub const MAX_LEN: usize = $max;

			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view, $max)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value, $max)?;

				Ok(Self(value))
			}
		}
		impl TryFrom<&str> for $name {
			type Error = IdentifierError;

			fn try_from(value: &str) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (partner, external).
		kind: &'static str,
	},
	/// The identifier contains something other than ASCII digits.
	#[error("{kind} identifier must contain only digits.")]
	NotNumeric {
		/// Kind of identifier (partner, external).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed digit count.
	#[error("{kind} identifier exceeds {max} digits.")]
	TooLong {
		/// Kind of identifier (partner, external).
		kind: &'static str,
		/// Maximum permitted digit count.
		max: usize,
	},
}

// A generated external id is the partner id, 13 digits of epoch millis, and up to 3 random
// digits, so the partner limit leaves room for both inside `ExternalId::MAX_LEN`.
def_id! { PartnerId, "Provider-assigned partner account identifier (`X-PARTNER-ID`).", "Partner", 20 }
def_id! { ExternalId, "Correlation identifier sent as `X-EXTERNAL-ID`.", "External", 36 }

fn validate_view(kind: &'static str, view: &str, max: usize) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if !view.bytes().all(|b| b.is_ascii_digit()) {
		return Err(IdentifierError::NotNumeric { kind });
	}
	if view.len() > max {
		return Err(IdentifierError::TooLong { kind, max });
	}

	Ok(())
}
