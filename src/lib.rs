//! # SOAR MCP
//!
//! Model Context Protocol server that exposes a SOAR (Security Orchestration,
//! Automation and Response) platform to LLM agents.
//!
//! ## Architecture
//!
//! ```text
//! stdio JSON-RPC → McpHandler → case_management tools ─┐
//!                      │                               ├→ SoarClient → SOAR REST API
//!                      └→ IntegrationRegistry → ActionInvoker ─┘
//! ```
//!
//! ## Core Components
//!
//! - **Case management**: always-on tools for cases, alerts, comments and entities
//! - **Marketplace**: descriptor tables for integration actions, enabled per process
//! - **ActionInvoker**: scope resolution, instance lookup and manual-action dispatch
//! - **SoarClient**: `reqwest` JSON client authenticated with the `AppKey` header

pub mod actions;
pub mod case_management;
pub mod cli;
pub mod config;
pub mod errors;
pub mod marketplace;
pub mod mcp;
pub mod observability;
pub mod soar;

pub use actions::{ActionDescriptor, ActionInvoker, ActionResult};
pub use config::SoarConfig;
pub use errors::{Error, Result};
pub use marketplace::IntegrationRegistry;
pub use soar::{ScopeAllowList, SoarClient};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Server name announced during MCP initialization
pub const SERVER_NAME: &str = "SecOps SOAR";
