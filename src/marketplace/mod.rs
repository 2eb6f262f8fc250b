//! # Marketplace Integrations
//!
//! Descriptor tables for the supported marketplace integrations and the
//! registry that decides which of them are exposed as tools.

pub mod connectwise;
pub mod exchange;
pub mod misp;
pub mod sentinelonev2;
pub mod siemplify;

use tracing::{info, warn};

use crate::actions::ActionDescriptor;
use crate::mcp::protocol::Tool;

/// Every known integration and its actions
pub static INTEGRATIONS: &[(&str, &[ActionDescriptor])] = &[
    (connectwise::INTEGRATION, connectwise::ACTIONS),
    (exchange::INTEGRATION, exchange::ACTIONS),
    (misp::INTEGRATION, misp::ACTIONS),
    (sentinelonev2::INTEGRATION, sentinelonev2::ACTIONS),
    (siemplify::INTEGRATION, siemplify::ACTIONS),
];

/// Canonical form used to match `--integrations` entries: no spaces or
/// slashes, lower case.
pub fn normalize_integration_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace() && *c != '/').collect::<String>().to_lowercase()
}

/// Integrations enabled for this process
#[derive(Debug, Clone, Default)]
pub struct IntegrationRegistry {
    enabled: Vec<(&'static str, &'static [ActionDescriptor])>,
}

impl IntegrationRegistry {
    /// Enable the named integrations; unknown names are logged and skipped
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wanted: Vec<String> = names
            .into_iter()
            .map(|name| normalize_integration_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        wanted.sort();
        wanted.dedup();

        let mut enabled = Vec::new();
        for name in &wanted {
            match INTEGRATIONS
                .iter()
                .find(|(integration, _)| normalize_integration_name(integration) == *name)
            {
                Some(entry) => enabled.push(*entry),
                None => warn!(integration = %name, "Unknown integration requested, skipping"),
            }
        }

        Self { enabled }
    }

    /// Parse a comma-separated `--integrations` value. `None` enables nothing.
    pub fn from_arg(integrations: Option<&str>) -> Self {
        let Some(raw) = integrations else {
            info!("No --integrations flag provided. No integrations are enabled.");
            return Self::default();
        };

        let registry = Self::from_names(raw.split(','));
        if registry.is_empty() {
            warn!("Received --integrations flag but no known integration was listed");
        } else {
            info!(
                integrations = ?registry.integration_names().collect::<Vec<_>>(),
                tools = registry.action_count(),
                "Enabled marketplace integrations"
            );
        }
        registry
    }

    /// Every known integration
    pub fn all() -> Self {
        Self { enabled: INTEGRATIONS.to_vec() }
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn integration_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.enabled.iter().map(|(name, _)| *name)
    }

    pub fn actions(&self) -> impl Iterator<Item = &'static ActionDescriptor> + '_ {
        self.enabled.iter().flat_map(|(_, actions)| actions.iter())
    }

    pub fn action_count(&self) -> usize {
        self.enabled.iter().map(|(_, actions)| actions.len()).sum()
    }

    /// Tool definitions of every enabled action
    pub fn tools(&self) -> Vec<Tool> {
        self.actions().map(ActionDescriptor::tool).collect()
    }

    /// Look up an enabled action by tool name
    pub fn find(&self, tool_name: &str) -> Option<&'static ActionDescriptor> {
        self.actions().find(|action| action.tool_name == tool_name)
    }
}
