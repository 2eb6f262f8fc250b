//! # SOAR Backend
//!
//! HTTP access to the SOAR platform: the JSON client, endpoint paths and the
//! predefined-scope allow-list fetched at start-up.

pub mod client;
pub mod endpoints;
pub mod scopes;

pub use client::{SoarClient, APP_KEY_HEADER};
pub use scopes::{ScopeAllowList, DEFAULT_SCOPE};
