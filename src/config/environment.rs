//! Sandbox and production deployments.

// self
use crate::{_prelude::*, error::ConfigError};

/// Snap deployment targeted by a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	/// Provider sandbox; requests never move real funds.
	#[default]
	Sandbox,
	/// Live provider endpoint.
	Production,
}
impl Environment {
	/// Sandbox base URL; the provider's default API host.
	pub const SANDBOX_BASE_URL: &'static str = "https://api.faspay.co.id";
	/// Production base URL.
	///
	/// Partners assigned a dedicated host override it with
	/// [`ClientConfigBuilder::base_url`](crate::config::ClientConfigBuilder::base_url).
	pub const PRODUCTION_BASE_URL: &'static str = "https://sendme.faspay.co.id";

	/// Returns a stable label suitable for config files, spans, and logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Sandbox => "sandbox",
			Self::Production => "production",
		}
	}

	/// Fixed base URL for the environment.
	pub const fn base_url(self) -> &'static str {
		match self {
			Self::Sandbox => Self::SANDBOX_BASE_URL,
			Self::Production => Self::PRODUCTION_BASE_URL,
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("sandbox") {
			Ok(Self::Sandbox)
		} else if s.eq_ignore_ascii_case("production") {
			Ok(Self::Production)
		} else {
			Err(ConfigError::InvalidEnvironment { value: s.to_owned() })
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parses_known_selectors_only() {
		assert_eq!("sandbox".parse::<Environment>().ok(), Some(Environment::Sandbox));
		assert_eq!("PRODUCTION".parse::<Environment>().ok(), Some(Environment::Production));

		for bad in ["", "staging", "prod"] {
			let err = bad.parse::<Environment>().expect_err("Unknown selector must be rejected.");

			assert!(matches!(err, ConfigError::InvalidEnvironment { ref value } if value == bad));
		}
	}

	#[test]
	fn base_urls_are_fixed() {
		assert_eq!(Environment::Sandbox.base_url(), "https://api.faspay.co.id");
		assert_eq!(Environment::Production.base_url(), "https://sendme.faspay.co.id");
	}

	#[test]
	fn serde_uses_lowercase_labels() {
		assert_eq!(
			serde_json::to_string(&Environment::Production).expect("Environment should serialize."),
			"\"production\""
		);
		assert!(serde_json::from_str::<Environment>("\"staging\"").is_err());
	}
}
