//! Private key material wrapper that keeps PEM contents out of logs.

// std
use std::path::Path;
// self
use crate::{_prelude::*, error::ConfigError};

/// Redacted PEM-encoded private key.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeyPem(Vec<u8>);
impl PrivateKeyPem {
	/// Wraps PEM bytes as provided by the caller.
	pub fn new(pem: impl Into<Vec<u8>>) -> Self {
		Self(pem.into())
	}

	/// Reads PEM bytes from `path`.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();

		std::fs::read(path)
			.map(Self)
			.map_err(|source| ConfigError::KeyRead { path: path.to_owned(), source })
	}

	/// Returns the raw PEM bytes. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		&self.0
	}
}
impl From<Vec<u8>> for PrivateKeyPem {
	fn from(value: Vec<u8>) -> Self {
		Self(value)
	}
}
impl From<&[u8]> for PrivateKeyPem {
	fn from(value: &[u8]) -> Self {
		Self(value.to_vec())
	}
}
impl From<&str> for PrivateKeyPem {
	fn from(value: &str) -> Self {
		Self(value.as_bytes().to_vec())
	}
}
impl From<String> for PrivateKeyPem {
	fn from(value: String) -> Self {
		Self(value.into_bytes())
	}
}
impl Debug for PrivateKeyPem {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("PrivateKeyPem").field(&"<redacted>").finish()
	}
}
impl Display for PrivateKeyPem {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
