//! Wire shapes for every Snap operation.
//!
//! Requests serialize with the provider's camelCase keys, in declaration order, and skip unset
//! optional fields. Responses tolerate missing fields so a partial body still decodes; nested
//! `additionalInfo` blocks are distinct per operation.

pub mod account;
pub mod balance;
pub mod common;
pub mod emoney;
pub mod history;
pub mod transfer;
pub mod va;

pub use account::*;
pub use balance::*;
pub use common::*;
pub use emoney::*;
pub use history::*;
pub use transfer::*;
pub use va::*;
