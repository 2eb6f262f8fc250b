//! SOAR REST endpoint paths, relative to the configured base URL.

/// Execute a manual (script) action against a case
pub const EXECUTE_MANUAL_ACTION: &str = "/api/external/v1/cases/ExecuteManualAction";

/// Predefined target-selection scopes
pub const GET_SCOPES: &str = "/api/external/v1/settings/GetScopes";

/// Case collection
pub const CASES: &str = "/api/1p/external/v1/cases";

/// Entity data lookup
pub const FETCH_FULL_UNIQUE_ENTITY: &str = "/api/external/v1/entities/GetEntityData";

/// Free-text entity search
pub const SEARCH_ENTITY: &str = "/api/external/v1.0/entity-search/entities";

/// Entities grouped by alert group identifier
pub const GET_ALERT_GROUP_IDENTIFIERS_ENTITIES: &str =
    "/api/external/v1/case-overview/GetAlertsEntities";

/// Configured instances of an integration, identifiers only
pub fn integration_instances(integration: &str) -> String {
    format!("/api/1p/external/v1/integrations/{}/integrationInstances?$select=identifier", integration)
}

/// A single case
pub fn case(case_id: &str) -> String {
    format!("{}/{}", CASES, case_id)
}

/// Comments of a case
pub fn case_comments(case_id: &str) -> String {
    format!("{}/comments", case(case_id))
}

/// Alerts of a case
pub fn case_alerts(case_id: &str) -> String {
    format!("/api/1p/external/v1.0/cases/{}/caseAlerts", case_id)
}

/// Alert group identifiers of a case
pub fn case_alert_group_identifiers(case_id: &str) -> String {
    format!("{}?$select=alertGroupIdentifier", case_alerts(case_id))
}

/// Events involved in one alert of a case
pub fn alert_involved_events(case_id: &str, alert_id: &str) -> String {
    format!("/api/1p/external/v1.0/cases/{}/alerts/{}/involvedEvents", case_id, alert_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templated_paths() {
        assert_eq!(
            integration_instances("MISP"),
            "/api/1p/external/v1/integrations/MISP/integrationInstances?$select=identifier"
        );
        assert_eq!(case_comments("42"), "/api/1p/external/v1/cases/42/comments");
        assert_eq!(
            case_alert_group_identifiers("42"),
            "/api/1p/external/v1.0/cases/42/caseAlerts?$select=alertGroupIdentifier"
        );
        assert_eq!(
            alert_involved_events("42", "7"),
            "/api/1p/external/v1.0/cases/42/alerts/7/involvedEvents"
        );
    }
}
