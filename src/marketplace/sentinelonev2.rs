//! SentinelOne endpoint protection actions (API v2).

use crate::actions::{ActionDescriptor, ParamKind, ParamSpec};

pub const INTEGRATION: &str = "SentinelOneV2";

pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        tool_name: "sentinel_one_v2_add_threat_note",
        integration: INTEGRATION,
        action: "Add Threat Note",
        description: "Add a note to the threat in SentinelOne.\n\nAction Parameters: Threat ID: Required.The ID of the threat to add a note., Note: Required.A note to add to the threat.",
        params: &[
            ParamSpec::required(
                "threat_id",
                "Threat ID",
                ParamKind::Text,
                "Specify the id of the threat for which you want to add a note.",
            ),
            ParamSpec::required(
                "note",
                "Note",
                ParamKind::Text,
                "Specify the note that needs to be added to the threat.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_resolve_threat",
        integration: INTEGRATION,
        action: "Resolve Threat",
        description: "Resolve threats in SentinelOne.\n\nAction Parameters: Threat IDs: Required.A comma-separated list of threat IDs to resolve., Annotation: Optional.A justification for resolving the threat.",
        params: &[
            ParamSpec::required(
                "threat_i_ds",
                "Threat IDs",
                ParamKind::Text,
                "Specify a comma-separated list of threat IDs that need to be resolved.",
            ),
            ParamSpec::optional(
                "annotation",
                "Annotation",
                ParamKind::Text,
                "Specify an annotation describing, why the threat can be resolved.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_blacklist",
        integration: INTEGRATION,
        action: "Get Blacklist",
        description: "Get a list of all the items available in the blacklist in SentinelOne.\n\nAction Parameters: Hash: Optional.A comma-separated list of hashes to check in the blocklist.The action only returns hashes that were found.If you set the Hash, the action ignores the Limit parameter., Site IDs: Optional.A comma-separated list of site IDs to return blocklist items., Group IDs: Optional.A comma-separated list of group IDs to return blocklist items., Account Ids: Optional.A comma-separated list of account IDs to return blocklist items., Limit: Optional.A number of blocklist items to return.If you set the Hash parameter, the action ignores this parameter. The maximum value is 1000.The default value is 50., Query: Optional.A query to filter results., Use Global Blacklist: Optional.If selected, the action returns hashes from a global blocklist.Not selected by default.",
        params: &[
            ParamSpec::optional(
                "hash",
                "Hash",
                ParamKind::Text,
                "Specify a comma-separated list of hashes that need to be checked in blacklist. Only hashes that were found will be returned. If nothing is specified here action will return all hashes. Note: if \"Hash\" parameter is provided then \"Limit\" parameter is ignored.",
            ),
            ParamSpec::optional(
                "site_i_ds",
                "Site IDs",
                ParamKind::Text,
                "Specify a comma-separated list of site ids, which should be used to return blacklist items.",
            ),
            ParamSpec::optional(
                "group_i_ds",
                "Group IDs",
                ParamKind::Text,
                "Specify a comma-separated list of group ids, which should be used to return blacklist items.",
            ),
            ParamSpec::optional(
                "account_i_ds",
                "Account IDs",
                ParamKind::Text,
                "Specify a comma-separated list of account ids, which should be used to return blacklist items.",
            ),
            ParamSpec::optional(
                "limit",
                "Limit",
                ParamKind::Text,
                "Specify how many blacklist items should be returned. Note: if \"Hash\" parameter has values, then this parameter is ignored. Maximum is 1000.",
            ),
            ParamSpec::optional(
                "query",
                "Query",
                ParamKind::Text,
                "Specify the query that needs to be used in order to filter the results.",
            ),
            ParamSpec::optional(
                "use_global_blacklist",
                "Use Global Blacklist",
                ParamKind::Flag,
                "If enabled, action will also return hashes from the global blacklist.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_create_hash_exclusion_record",
        integration: INTEGRATION,
        action: "Create Hash Exclusion Record",
        description: "Add hash to the exclusion list in SentinelOne. Note: Only SHA1 hashes are supported.\n\nAction Parameters: Operation System: Required.An operation system (OS) for the hash. The possible values are as follows: windowswindows_legacy macoslinuxThe default value is windows., Site IDs: Optional. A comma-separated list of site IDs to send the hash to the exclusion list.The action requires at least one valid value., Group IDs: Optional.A comma-separated list of group ID to send the hash to the exclusion list.The action requires at least one valid value., Account IDs: Optional.A comma-separated list of account IDs to send the hash to the exclusion list., Description: Optional. Additional information related to the hash., Add to global exclusion list: Optional. If selected, the action adds a hash to the global exclusion list. If you select this parameter, the action ignores the Site IDs, Group IDs, and Account IDs parameters.",
        params: &[
            ParamSpec::required(
                "operation_system",
                "Operation System",
                ParamKind::Text,
                "Specify the OS for the hash. Possible values: windows, windows_legacy, macos, linux.",
            ),
            ParamSpec::optional(
                "site_i_ds",
                "Site IDs",
                ParamKind::Text,
                "Specify a comma-separated list of site ids, where hash needs to be sent to the exclusion list.",
            ),
            ParamSpec::optional(
                "group_i_ds",
                "Group IDs",
                ParamKind::Text,
                "Specify a comma-separated list of group ids, where hash needs to be sent to the exclusion list.",
            ),
            ParamSpec::optional(
                "account_i_ds",
                "Account IDs",
                ParamKind::Text,
                "Specify a comma-separated list of account ids, where hash needs to be sent to the exclusion list.",
            ),
            ParamSpec::optional(
                "description",
                "Description",
                ParamKind::Text,
                "Specify additional information related to the hash.",
            ),
            ParamSpec::optional(
                "add_to_global_exclusion_list",
                "Add to global exclusion list",
                ParamKind::Flag,
                "If enabled, action will add the hash to the global exclusion list. Note: when this parameter is enabled, parameters “Site IDs“, “Group IDs“ and “Account IDs“ are ignored.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_system_status",
        integration: INTEGRATION,
        action: "Get System Status",
        description: "Fetch system status.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_disconnect_agent_from_network",
        integration: INTEGRATION,
        action: "Disconnect Agent From Network",
        description: "Disconnect agent from network by it's host name or IP address.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_events_for_endpoint_hours_back",
        integration: INTEGRATION,
        action: "Get Events For Endpoint Hours Back",
        description: "Retrieve information about the latest events on the endpoint. Works with IP and Hostname entities.Note: this action uses an endpoint that has rate limiting. Only one endpoint can be processed per minute․\n\nAction Parameters: Hours Back: Required.The number of hours prior to now to fetch events., Events Amount Limit: Optional.The maximum number of events to return for every event type.The default value is 50., Include File Events Information: Optional.If selected, the action queries information about file events., Include Indicator Events Information: Optional.If selected, the action queries information about indicator events., Include DNS Events Information: Optional.If selected, the action queries information about DNS events., Include Network Actions Events Information: Optional.If selected, the action queries information about the network actions events., Include URL Events Information: Optional.If selected, the action queries information about URL events., Include Registry Events Information: Optional.If selected, the action queries information about registry events., Include Scheduled Task Events Information: Optional.If selected, the action queries information about scheduled task events.",
        params: &[
            ParamSpec::required(
                "hours_back",
                "Hours Back",
                ParamKind::Text,
                "Specify how many hours backwards to fetch events.",
            ),
            ParamSpec::optional(
                "events_amount_limit",
                "Events Amount Limit",
                ParamKind::Text,
                "Specify how many events to return per event type. Default: 50.",
            ),
            ParamSpec::optional(
                "include_file_events_information",
                "Include File Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about file events.",
            ),
            ParamSpec::optional(
                "include_indicator_events_information",
                "Include Indicator Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about indicator events.",
            ),
            ParamSpec::optional(
                "include_dns_events_information",
                "Include DNS Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about DNS events.",
            ),
            ParamSpec::optional(
                "include_network_actions_events_information",
                "Include Network Actions Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about “network actions” events.",
            ),
            ParamSpec::optional(
                "include_url_events_information",
                "Include URL Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about URL events.",
            ),
            ParamSpec::optional(
                "include_registry_events_information",
                "Include Registry Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about registry events.",
            ),
            ParamSpec::optional(
                "include_scheduled_task_events_information",
                "Include Scheduled Task Events Information",
                ParamKind::Flag,
                "If enabled, action will also query information about scheduled task events.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_create_path_exclusion_record",
        integration: INTEGRATION,
        action: "Create Path Exclusion Record",
        description: "Add path to the exclusion list in SentinelOne.\n\nAction Parameters: Path: Required. A path to add to the exclusion list., Operation System: Required.An operation system (OS) for the hash. The possible values are as follows: windowswindows_legacy macoslinuxThe default value is windows., Site IDs: Optional. A comma-separated list of site IDs to send the hash to the exclusion list.The action requires at least one valid value., Group IDs: Optional.A comma-separated list of group ID to send the hash to the exclusion list.The action requires at least one valid value., Account IDs: Optional.A comma-separated list of account IDs to send the hash to the exclusion list., Description: Optional. Additional information related to the hash., Add to global exclusion list: Optional. If selected, the action adds a hash to the global exclusion list. If you select this parameter, the action ignores the Site IDs, Group IDs, and Account IDs parameters., Include Subfolders: Optional. If selected, the action includes subfolders for the provided path. This parameter only applies if you configure a folder path in the Path parameter., Mode: Optional. A mode to use for the excluded path.The possible values are as follows:Suppress Alerts Interoperability Interoperability - Extended Performance Focus Performance Focus - Extended",
        params: &[
            ParamSpec::required(
                "path",
                "Path",
                ParamKind::Text,
                "Specify the path that needs to be added to the exclusion list.",
            ),
            ParamSpec::required(
                "operation_system",
                "Operation System",
                ParamKind::Text,
                "Specify the OS for the path. Possible values: windows, windows_legacy, macos, linux.",
            ),
            ParamSpec::optional(
                "site_i_ds",
                "Site IDs",
                ParamKind::Text,
                "Specify a comma-separated list of site ids, where path needs to be sent to the exclusion list.",
            ),
            ParamSpec::optional(
                "group_i_ds",
                "Group IDs",
                ParamKind::Text,
                "Specify a comma-separated list of group ids, where path needs to be sent to the exclusion list.",
            ),
            ParamSpec::optional(
                "account_i_ds",
                "Account IDs",
                ParamKind::Text,
                "Specify a comma-separated list of account ids, where path needs to be sent to the exclusion list.",
            ),
            ParamSpec::optional(
                "description",
                "Description",
                ParamKind::Text,
                "Specify additional information related to the path.",
            ),
            ParamSpec::optional(
                "add_to_global_exclusion_list",
                "Add to global exclusion list",
                ParamKind::Flag,
                "If enabled, action will add the path to the global exclusion list. Note: when this parameter is enabled, parameters “Site IDs“, “Group IDs“ and “Account IDs“ are ignored.",
            ),
            ParamSpec::optional(
                "include_subfolders",
                "Include Subfolders",
                ParamKind::Flag,
                "If enabled, action will include subfolders for the provided path. This feature only works, if user provides folder path and not file path.",
            ),
            ParamSpec::optional(
                "mode",
                "Mode",
                ParamKind::List,
                "Specify what mode should be used for the excluded path.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_deep_visibility_query_result",
        integration: INTEGRATION,
        action: "Get Deep Visibility Query Result",
        description: "Retrieve information about deep visibility query results. Note: this action should be used in combination with “Initiate Deep Visibility Query“.",
        params: &[
            ParamSpec::required(
                "query_id",
                "Query ID",
                ParamKind::Text,
                "Specify the ID of the query for which you want to return results. This ID is available in the JSON result of the action “Initiate Deep Visibility Query“ as “query_id“ parameter.",
            ),
            ParamSpec::optional(
                "limit",
                "Limit",
                ParamKind::Text,
                "Specify how many events to return. Default: 50. Maximum is 100.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_initiate_deep_visibility_query",
        integration: INTEGRATION,
        action: "Initiate Deep Visibility Query",
        description: "Initiate a Deep Visibility Query search. Returns query id, which should be used in the action \"Get Deep Visibility Query Result\".",
        params: &[
            ParamSpec::required(
                "query",
                "Query",
                ParamKind::Text,
                "Specify the query for the search.",
            ),
            ParamSpec::optional(
                "start_date",
                "Start Date",
                ParamKind::Text,
                "Specify the start date for the search. If nothing is specified, action will fetch events from 30 days ago.",
            ),
            ParamSpec::optional(
                "end_date",
                "End Date",
                ParamKind::Text,
                "Specify the end date for the search. If nothing is specified, action will use current time.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_threats",
        integration: INTEGRATION,
        action: "Get Threats",
        description: "Retrieve information about threats in SentinelOne.\n\nAction Parameters: Mitigation Status: Optional.A comma-separated list of threat statuses. The action only returns threats that match the configured statuses. The possible values are as follows:mitigated activeblocked suspicioussuspicious_resolved, Created until: Optional. The end time for the threats, such as 2020-03-02T21:30:13.014874Z., Created from: Optional. The start time for the threats, such as 2020-03-02T21:30:13.014874Z., Resolved Threats: Optional.If selected, the action only returns resolved threats., Threat Display Name: Optional.A display name of the threat to return., Limit: Optional.A number of threats to return.The default value is 10., API Version: Optional. A version of API to use in the action. If you don't set a value, the action uses the 2.1 version. API version impacts the JSON result structure. We recommend to set the latest API version.The possible values are as follows: 2.02.1The default value is 2.0.",
        params: &[
            ParamSpec::optional(
                "mitigation_status",
                "Mitigation Status",
                ParamKind::Text,
                "Specify the comma-separated list of threat statuses. Only threats that match the statuses will be returned. Possible values: mitigated, active, blocked, suspicious, suspicious_resolved",
            ),
            ParamSpec::optional(
                "created_until",
                "Created until",
                ParamKind::Text,
                "Specify the end time for the threats. Example: 2020-03-02T21:30:13.014874Z",
            ),
            ParamSpec::optional(
                "created_from",
                "Created from",
                ParamKind::Text,
                "Specify the start time for the threats. Example: 2020-03-02T21:30:13.014874Z",
            ),
            ParamSpec::optional(
                "resolved_threats",
                "Resolved Threats",
                ParamKind::Flag,
                "If enabled, action will only return resolved threats.",
            ),
            ParamSpec::optional(
                "threat_display_name",
                "Threat Display Name",
                ParamKind::Text,
                "Specify a display name of the threat that you want to return. Partial name will also work.",
            ),
            ParamSpec::optional(
                "limit",
                "Limit",
                ParamKind::Text,
                "Specify how many threats to return. Default: 10.",
            ),
            ParamSpec::optional(
                "api_version",
                "API Version",
                ParamKind::List,
                "Specify what version of API to use in the action. If nothing is provided connector will use version 2.1. Note: JSON result structure is different between API versions. It is recommended to use the latest one.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_enrich_endpoint",
        integration: INTEGRATION,
        action: "Enrich Endpoint",
        description: "Enrich information about the endpoint by IP address or Hostname.",
        params: &[
            ParamSpec::optional(
                "create_insight",
                "Create Insight",
                ParamKind::Flag,
                "If enabled, action will create an insight with information about endpoints.",
            ),
            ParamSpec::optional(
                "only_infected_endpoints_insights",
                "Only Infected Endpoints Insights",
                ParamKind::Flag,
                "If enabled, action will only create insights for the infected endpoints.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_initiate_full_scan",
        integration: INTEGRATION,
        action: "Initiate Full Scan",
        description: "Initiate a full disk scan on the endpoint in SentinelOne.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_mark_as_threat",
        integration: INTEGRATION,
        action: "Mark as Threat",
        description: "Marks suspicious threats as a true positive threat in SentinelOne.\n\nAction Parameters: Threat IDs: Required. A comma-separated list of detection IDs to mark as threats.",
        params: &[
            ParamSpec::required(
                "threat_i_ds",
                "Threat IDs",
                ParamKind::Text,
                "Specify a comma-separated list of threat IDs that should be marked.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_ping",
        integration: INTEGRATION,
        action: "Ping",
        description: "Test integration connectivity.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_delete_hash_blacklist_record",
        integration: INTEGRATION,
        action: "Delete Hash Blacklist Record",
        description: "Delete hashes from a blacklist in SentinelOne. Note: Only SHA1 hashes are supported.\n\nAction Parameters: Site IDs: Optional.A comma-separated list of site IDs to remove the hash., Group IDs: Optional.A comma-separated list of group IDs to remove the hash., Account IDs: Optional.A comma-separated list of account IDs to remove the hash., Remove from global black list: Optional.If selected, the action removes the hash from the global blocklist.If you select this parameter, the action ignores the Site IDs, Group IDs, and Account IDs parameters.",
        params: &[
            ParamSpec::optional(
                "site_i_ds",
                "Site IDs",
                ParamKind::Text,
                "Specify a comma-separated list of site ids, from where the hash needs to be removed.",
            ),
            ParamSpec::optional(
                "group_i_ds",
                "Group IDs",
                ParamKind::Text,
                "Specify a comma-separated list of group ids, from where the hash needs to be removed.",
            ),
            ParamSpec::optional(
                "account_i_ds",
                "Account IDs",
                ParamKind::Text,
                "Specify a comma-separated list of account ids, from where the hash needs to be removed.",
            ),
            ParamSpec::optional(
                "remove_from_global_black_list",
                "Remove from global black list",
                ParamKind::Flag,
                "If enabled, action will remove the hash from the global black list. Note: when this parameter is enabled, parameters \"Site IDs\", \"Group IDs\" and \"Account IDs\" are ignored.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_system_version",
        integration: INTEGRATION,
        action: "Get System Version",
        description: "Fetch system version.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_update_incident_status",
        integration: INTEGRATION,
        action: "Update Incident Status",
        description: "Update threat incident status in SentinelOne.\n\nAction Parameters: Threat ID: Required.A comma-separated list of threat IDs to update the incident status., Status: Required.An incident status.The possible values are as follows:UnresolvedIn Progress ResolvedThe default value is Resolved.",
        params: &[
            ParamSpec::required(
                "threat_id",
                "Threat ID",
                ParamKind::Text,
                "Specify a comma-separated list of threat ids for which you want to update the incident status.",
            ),
            ParamSpec::required(
                "status",
                "Status",
                ParamKind::List,
                "Specify the incident status.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_mitigate_threat",
        integration: INTEGRATION,
        action: "Mitigate Threat",
        description: "Executes mitigation actions on the threats in SentinelOne.\n\nAction Parameters: Mitigation action: Required.A mitigation action for the detected threats. The possible values are as follows: quarantinekill un-quarantineremediate rollback-remediateThe default value is quarantine., Threat IDs: Required.A comma-separated list of threat IDs to mitigate.",
        params: &[
            ParamSpec::required(
                "mitigation_action",
                "Mitigation action",
                ParamKind::List,
                "Specify the mitigation actions for the provided threats.",
            ),
            ParamSpec::required(
                "threat_i_ds",
                "Threat IDs",
                ParamKind::Text,
                "Specify a comma-separated list of threat IDs that should be mitigated.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_download_threat_file",
        integration: INTEGRATION,
        action: "Download Threat File",
        description: "Download file related to threat in SentinelOne. Note: Your user role must have permissions to Fetch Threat File - Admin, IR Team, SOC.\n\nAction Parameters: Threat ID: Required.The ID of the threat to download a file., Password: Required.A password for the zipped folder that contains the threat file.The password requirements are as follows:Is at least 10 characters long.Includes uppercase letters, lowercase letters, digits, and special symbols.The maximum length for the password is 256 characters., Download Folder Path: Required.A path to a folder to store the threat file., Overwrite: Required.If selected, the action overwrites a file with the identical name.Not selected by default.",
        params: &[
            ParamSpec::required(
                "threat_id",
                "Threat ID",
                ParamKind::Text,
                "Specify the id of the threat for which you want to download the file.",
            ),
            ParamSpec::required(
                "password",
                "Password",
                ParamKind::Text,
                "Specify the password for the zip that contains the threat file. Password requirements: At least 10 characters. Three of these: uppercase, lowercase, digits, special symbols. Maximum length is 256 characters.",
            ),
            ParamSpec::required(
                "download_folder_path",
                "Download Folder Path",
                ParamKind::Text,
                "Specify the path to the folder, where you want to store the threat file.",
            ),
            ParamSpec::required(
                "overwrite",
                "Overwrite",
                ParamKind::Flag,
                "If enabled, action will overwrite the file with the same name.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_agent_status",
        integration: INTEGRATION,
        action: "Get Agent Status",
        description: "Retrieve information about the status of the agents on the endpoints based on the IP or Hostname entity.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_list_sites",
        integration: INTEGRATION,
        action: "List Sites",
        description: "List available sites in SentinelOne.\n\nAction Parameters: Filter Key: Optional.The key to filter sites.The possible values are as follows:Select OneName IDThe default value is Select One., Filter Logic: Optional.The filter logic to apply.The filter logic uses the value set in the Filter Key parameter.The possible values are as follows:Not Specified EqualContainsThe default value is Not Specified., Filter Value: Optional.The value to use in the filter.The filter logic uses the value set in the Filter Key parameter.If you select Equal in the Filter Logic parameter, the action searches for the exact match among results.If you select Contains in the Filter Logic parameter, the action searches for results that contain the specified substring.If you don't set a value, the action ignores the filter., Max Records To Return: Optional.The number of records to return.The default value is 50.",
        params: &[
            ParamSpec::optional(
                "filter_key",
                "Filter Key",
                ParamKind::List,
                "Specify the key that needs to be used to filter sites.",
            ),
            ParamSpec::optional(
                "filter_logic",
                "Filter Logic",
                ParamKind::List,
                "Specify what filter logic should be applied. Filtering logic is working based on the value provided in the \"Filter Key\" parameter.",
            ),
            ParamSpec::optional(
                "filter_value",
                "Filter Value",
                ParamKind::Text,
                "Specify what value should be used in the filter. If \"Equal\" is selected, action will try to find the exact match among results and if \"Contains\" is selected, action will try to find results that contain that substring. If nothing is provided in this parameter, the filter will not be applied. Filtering logic is working based on the value  provided in the \"Filter Key\" parameter.",
            ),
            ParamSpec::optional(
                "max_records_to_return",
                "Max Records To Return",
                ParamKind::Text,
                "Specify how many records to return.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_create_hash_blacklist_record",
        integration: INTEGRATION,
        action: "Create Hash Blacklist Record",
        description: "Add hashes to a blacklist in SentinelOne. Note: Only SHA1 hashes are supported.\n\nAction Parameters: Operating System: Required.An operating system for the hash.The possible values are as follows:windows windows_legacymacos linuxThe default value is windows., Site IDs: Optional.A comma-separated list of site IDs to send to the blocklist., Group IDs: Optional.A comma-separated list of group IDs to send to the blocklist., Account IDs: Optional.A comma-separated list of account IDs to send to the blocklist., Description: Optional.Additional information related to a hash.The default value is \"\"., Add to global blocklist: Required.If selected, the action adds a hash to a global blocklist.If you select this parameter, the action ignores the Site IDs, Group IDs, and Account IDs parameters.",
        params: &[
            ParamSpec::required(
                "operating_system",
                "Operating System",
                ParamKind::Text,
                "Specify the OS for the hash. Possible values: windows, windows_legacy, macos, linux.",
            ),
            ParamSpec::optional(
                "site_i_ds",
                "Site IDs",
                ParamKind::Text,
                "Specify a comma-separated list of site ids, where hash needs to be sent to the blacklist.",
            ),
            ParamSpec::optional(
                "group_i_ds",
                "Group IDs",
                ParamKind::Text,
                "Specify a comma-separated list of group ids, where hash needs to be sent to the blacklist.",
            ),
            ParamSpec::optional(
                "account_i_ds",
                "Account IDs",
                ParamKind::Text,
                "Specify a comma-separated list of account ids, where hash needs to be sent to the blacklist.",
            ),
            ParamSpec::optional(
                "description",
                "Description",
                ParamKind::Text,
                "Specify additional information related to the hash.",
            ),
            ParamSpec::required(
                "add_to_global_black_list",
                "Add to global black list",
                ParamKind::Flag,
                "If enabled, action will add the hash to the global blacklist. Note: when this parameter is enabled, parameters “Site IDs“, “Group IDs“ and “Account IDs“ are ignored.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_reconnect_agent_to_the_network",
        integration: INTEGRATION,
        action: "Reconnect Agent To The Network",
        description: "Reconnect disconnected endpoint to the network. Works with Hostname and IP entities.\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_application_list_for_endpoint",
        integration: INTEGRATION,
        action: "Get Application List For Endpoint",
        description: "Retrieve information about available applications on the endpoint by IP or Hostname.",
        params: &[
            ParamSpec::optional(
                "max_applications_to_return",
                "Max Applications To Return",
                ParamKind::Text,
                "Specify how many applications to return. If nothing is specified action will return all of the applications.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_hash_reputation",
        integration: INTEGRATION,
        action: "Get Hash Reputation",
        description: "Retrieve information about the hashes from SentinelOne.\n\nAction Parameters: Reputation Threshold: Optional.A reputation threshold to mark entity as suspicious.If you don't set a value, the action doesn't mark any entity as suspicious.The maximum value is 10.The default value is 5., Create Insight: Optional.If selected, the action creates an insight that contains information about the reputation., Only Suspicious Hashes Insight: Optional.If selected, the action only creates an insight for hashes with the reputation exceeding or equal to the Reputation Threshold value.",
        params: &[
            ParamSpec::optional(
                "reputation_threshold",
                "Reputation Threshold",
                ParamKind::Text,
                "Specify what should be the reputation threshold in order it to be marked as suspicious. If nothing is provided, action will not mark entites as suspicious. Maximum: 10.",
            ),
            ParamSpec::optional(
                "create_insight",
                "Create Insight",
                ParamKind::Flag,
                "If enabled, action will create an insight containing information about the reputation.",
            ),
            ParamSpec::optional(
                "only_suspicious_hashes_insight",
                "Only Suspicious Hashes Insight",
                ParamKind::Flag,
                "If enabled, action will only create insight for hashes that have higher or equal reputation to “Reputation Threshold“ value.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_get_group_details",
        integration: INTEGRATION,
        action: "Get Group Details",
        description: "Retrieve detailed information about the provided groups.\n\nAction Parameters: Group Names: Required.Group names to retrieve details. This parameter accepts multiple values as a comma-separated list.",
        params: &[
            ParamSpec::required(
                "group_names",
                "Group Names",
                ParamKind::Text,
                "Specify a comma-separated list of group names for which you want to retrieve details.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_update_analyst_verdict",
        integration: INTEGRATION,
        action: "Update Analyst Verdict",
        description: "Update analyst verdict of the threat in SentinelOne.\n\nAction Parameters: Threat ID: Required.A comma-separated list of threat IDs to update the analyst verdict., Analyst Verdict: Required.An analyst verdict.The possible values are as follows:True Positive False PositiveSuspicious UndefinedThe default value is Undefined.",
        params: &[
            ParamSpec::required(
                "threat_id",
                "Threat ID",
                ParamKind::Text,
                "Specify a comma-separated list of threat ids for which you want to update the analyst verdict.",
            ),
            ParamSpec::required(
                "analyst_verdict",
                "Analyst Verdict",
                ParamKind::List,
                "Specify the analyst verdict.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "sentinel_one_v2_move_agents",
        integration: INTEGRATION,
        action: "Move Agents",
        description: "Move agents to the provided group. This action works with Hostname and IP address entities. Note: the group should be from the same site.\n\nAction Parameters: Group ID: Optional.The ID of the group to move agents., Group Name: Optional.The name of the group to move agents.If you configure both the Group ID parameter and the Group Name parameters, the action prioritizes the Group ID parameter.",
        params: &[
            ParamSpec::optional(
                "group_id",
                "Group ID",
                ParamKind::Text,
                "Specify the ID of the group, where to move the agents.",
            ),
            ParamSpec::optional(
                "group_name",
                "Group Name",
                ParamKind::Text,
                "Specify the name of the group, where to move the agents. Note: if both Group ID and Group Name are provided, action will put “Group ID“ in the priority.",
            ),
        ],
    },
];
