//! Partner identifiers and signing key material.

pub mod id;
pub mod secret;

pub use id::*;
pub use secret::*;
