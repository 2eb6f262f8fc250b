//! Allow-list of predefined target-selection scopes.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::{error, info};

use super::client::SoarClient;
use super::endpoints;
use crate::errors::{Error, Result};

/// Scope used when a tool call names neither entities nor a scope
pub const DEFAULT_SCOPE: &str = "All entities";

const SCOPES_UNAVAILABLE: &str = "Failed to fetch valid scopes from SOAR, please make sure you \
     have configured the right SOAR credentials. Shutting down...";

/// Immutable set of scope names accepted by the backend.
///
/// Fetched once at start-up and shared by every action invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeAllowList {
    scopes: BTreeSet<String>,
}

impl ScopeAllowList {
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { scopes: scopes.into_iter().map(Into::into).collect() }
    }

    /// Fetch the allow-list from the backend
    pub async fn fetch(client: &SoarClient) -> Result<Self> {
        let response = client.get_json(endpoints::GET_SCOPES, &[]).await.map_err(|e| {
            error!(error = %e, "Scope fetch failed");
            Error::config(SCOPES_UNAVAILABLE)
        })?;

        let scopes = Self::from_response(&response)?;
        info!(count = scopes.len(), "Loaded predefined scopes");
        Ok(scopes)
    }

    fn from_response(response: &Value) -> Result<Self> {
        let items = response.as_array().ok_or_else(|| Error::config(SCOPES_UNAVAILABLE))?;
        let scopes = items.iter().filter_map(Value::as_str).map(str::to_string);
        Ok(Self::new(scopes))
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Allowed scope names in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Failure message for a scope outside the allow-list
    pub fn rejection_message(&self, scope: &str) -> String {
        let allowed: Vec<&str> = self.iter().collect();
        format!("Invalid scope '{}'. Allowed values are: {}", scope, allowed.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_message_is_sorted() {
        let scopes = ScopeAllowList::new(["Suspicious entities", "All entities", "All hostnames"]);
        assert_eq!(
            scopes.rejection_message("Everything"),
            "Invalid scope 'Everything'. Allowed values are: All entities, All hostnames, Suspicious entities"
        );
    }

    #[test]
    fn test_from_response_ignores_non_strings() {
        let scopes = ScopeAllowList::from_response(&json!(["All entities", 3, null, "All users"])).unwrap();
        assert_eq!(scopes.len(), 2);
        assert!(scopes.contains("All users"));
        assert!(!scopes.contains("all users"));
    }

    #[test]
    fn test_from_response_rejects_non_array() {
        let err = ScopeAllowList::from_response(&Value::Null).unwrap_err();
        assert!(err.to_string().contains("Failed to fetch valid scopes"));
    }
}
