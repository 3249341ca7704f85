//! Caller identity for the CareDesk core
//!
//! The outer shell authenticates the caller and hands the core an
//! [`AuthIdentity`]. The core trusts it as-is and derives a [`ReadScope`]
//! from it to decide which rows the caller may see.

mod scope;
mod types;

pub use scope::ReadScope;
pub use types::{AuthIdentity, AuthRole};
