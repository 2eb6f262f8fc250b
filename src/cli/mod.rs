//! # Command Line Interface
//!
//! Parses flags, initialises logging and wires the SOAR client, scope
//! allow-list and integration registry into the stdio MCP server.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use crate::actions::ActionInvoker;
use crate::config::SoarConfig;
use crate::marketplace::IntegrationRegistry;
use crate::mcp::{McpHandler, McpStdioServer};
use crate::observability::{init_logging, log_config_info, LoggingConfig};
use crate::soar::{ScopeAllowList, SoarClient};

#[derive(Parser, Debug)]
#[command(name = "soar-mcp")]
#[command(about = "SecOps SOAR MCP server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Comma-separated list of integration names to enable (e.g. MISP,Exchange).
    /// If not provided, no integrations are enabled.
    #[arg(long)]
    pub integrations: Option<String>,

    /// SOAR base URL (overrides SOAR_URL)
    #[arg(long)]
    pub soar_url: Option<String>,

    /// SOAR app key (overrides SOAR_APP_KEY)
    #[arg(long)]
    pub app_key: Option<String>,

    /// Request timeout in seconds (overrides SOAR_TIMEOUT_SECONDS)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// SOAR configuration from the environment with flag overrides applied
    pub fn soar_config(&self) -> crate::Result<SoarConfig> {
        SoarConfig::from_env_with(self.soar_url.clone(), self.app_key.clone(), self.timeout)
    }
}

/// Parse arguments and run the server until stdin closes
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env(cli.verbose, cli.log_json));

    info!(app_name = crate::APP_NAME, version = crate::VERSION, "Starting SecOps SOAR MCP server");

    if let Err(e) = serve(cli).await {
        error!(error = %e, "SOAR MCP server stopped");
        return Err(e);
    }
    Ok(())
}

async fn serve(cli: Cli) -> anyhow::Result<()> {
    let config = cli.soar_config().context("Failed to load SOAR configuration")?;
    log_config_info(&config);

    let client = Arc::new(SoarClient::new(&config)?);
    let scopes = ScopeAllowList::fetch(&client).await?;
    let registry = IntegrationRegistry::from_arg(cli.integrations.as_deref());

    let invoker = ActionInvoker::new(client, scopes);
    let server = McpStdioServer::new(McpHandler::new(invoker, registry));
    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "soar-mcp",
            "--integrations",
            "MISP,Exchange",
            "--soar-url",
            "https://soar.example.com",
            "--timeout",
            "12",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.integrations.as_deref(), Some("MISP,Exchange"));
        assert_eq!(cli.soar_url.as_deref(), Some("https://soar.example.com"));
        assert_eq!(cli.timeout, Some(12));
        assert!(cli.verbose);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["soar-mcp"]).unwrap();
        assert!(cli.integrations.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_soar_config_uses_flags() {
        let cli = Cli::try_parse_from([
            "soar-mcp",
            "--soar-url",
            "https://soar.example.com",
            "--app-key",
            "flag-key",
            "--timeout",
            "5",
        ])
        .unwrap();

        let config = cli.soar_config().unwrap();
        assert_eq!(config.base_url, "https://soar.example.com");
        assert_eq!(config.app_key.as_deref(), Some("flag-key"));
        assert_eq!(config.timeout_seconds, 5);
    }
}
