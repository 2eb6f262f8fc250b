//! Built-in SOAR platform actions: case, alert and entity housekeeping.

use crate::actions::{ActionDescriptor, ParamKind, ParamSpec};

pub const INTEGRATION: &str = "Siemplify";

pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        tool_name: "siemplify_get_similar_cases",
        integration: INTEGRATION,
        action: "Get Similar Cases",
        description: "Search for similar cases and return their Ids\n\nAction Parameters: Rule Generator: Optional If selected, the action searches for similar cases using the rule generator. Selected by default., Port: Optional If selected, the action searches for similar cases using port numbers. Selected by default., Category Outcome: Optional If selected, the action searches for similar cases using the category outcome.Selected by default., Entity Identifier: Optional If selected, the action searches for similar cases using the entity identifier.Selected by default., Days Back: Required. The number of days prior to today for the action to search for similar cases., Include Open Cases: OptionalIf selected, the action searches through open cases.Selected by default., Include Closed Cases: OptionalIf selected, the action searches through closed cases.Selected by default.",
        params: &[
            ParamSpec::required(
                "rule_generator",
                "Rule Generator",
                ParamKind::Flag,
                "Search for similar cases by the same Rule Generator. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "port",
                "Port",
                ParamKind::Flag,
                "Search for similar cases by the same Port number. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "category_outcome",
                "Category Outcome",
                ParamKind::Flag,
                "Search for similar cases by the same Category Outcome. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "entity_identifier",
                "Entity Identifier",
                ParamKind::Flag,
                "Search for similar cases containing the same Entity Identifier. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "days_back",
                "Days Back",
                ParamKind::Text,
                "Defines how many days back the search should look for similar cases.",
            ),
            ParamSpec::optional(
                "include_open_cases",
                "Include Open Cases",
                ParamKind::Flag,
                "Search open cases",
            ),
            ParamSpec::optional(
                "include_closed_cases",
                "Include Closed Cases",
                ParamKind::Flag,
                "Search closed cases",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_mark_as_important",
        integration: INTEGRATION,
        action: "Mark As Important",
        description: "Mark case as important\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "siemplify_create_or_update_entity_properties",
        integration: INTEGRATION,
        action: "Create Or Update Entity Properties",
        description: "Create\\Change properties for entities in an entity scope.\n\nAction Parameters: Entity Field: Required. The name of the entity field to create or update., Field Value: Required. The value to set for the specified entity field.",
        params: &[
            ParamSpec::required(
                "entity_field",
                "Entity Field",
                ParamKind::Text,
                "Field that has to be created or updated.",
            ),
            ParamSpec::required(
                "field_value",
                "Field Value",
                ParamKind::Text,
                "Value that has to be set to the field.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_change_priority",
        integration: INTEGRATION,
        action: "Change Priority",
        description: "Automatically change case priority to the given input\n\nAction Parameters: Priority: Required. The priority to set for the case.The possible values are as follows:InformativeLow MediumHigh Critical",
        params: &[
            ParamSpec::required(
                "priority",
                "Priority",
                ParamKind::Opaque,
                "Priority, which should be set for the case.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_create_gemini_case_summary",
        integration: INTEGRATION,
        action: "Create Gemini Case Summary",
        description: "Create a summary of the case using Gemini AI.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "siemplify_set_risk_score",
        integration: INTEGRATION,
        action: "Set Risk Score",
        description: "Set risk score for a SOAR case. Note: This action is only supported from Chronicle SOAR version 6.3.6 and higher.\n\nAction Parameters: Risk Score: Required. The risk score to set for the selected case.",
        params: &[
            ParamSpec::required(
                "risk_score",
                "Risk Score",
                ParamKind::Text,
                "Specify risk score that needs to be set.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_set_custom_fields",
        integration: INTEGRATION,
        action: "Set Custom Fields",
        description: "Preview. Set values for custom fields.\n\nAction Parameters: Scope: Required.The scope to set for the custom fields. The possible values are Case and Alert. The default value is Case., Custom Fields Data: Required.The values to update for the custom fields. You can update multiple custom fields in a single action run. The default value is as follows: { \"Custom Field Name 1\": \"Custom Field Value 1\", \"Custom Field Name 2\": \"Custom Field Value 2\" }, Append Values: OptionalIf selected, the action appends the inputs from the Custom Fields Data parameter to the existing values of the custom fields.If not selected, the action overwrites the existing values with the inputs from the Custom Fields Data parameter.Not selected by default.",
        params: &[
            ParamSpec::required(
                "custom_fields_data",
                "Custom Fields Data",
                ParamKind::Text,
                "The values to update for the custom fields. You can update multiple custom fields in a single action run.",
            ),
            ParamSpec::optional(
                "append_values",
                "Append Values",
                ParamKind::Flag,
                "If selected, the action appends the inputs from the \"Custom Fields Data\" parameter to the existing values of the custom fields. If not selected, the action overwrites the existing values with the inputs from the \"Custom Fields Data\" parameter. Not selected by default.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_set_case_sla",
        integration: INTEGRATION,
        action: "Set Case SLA",
        description: "Set the SLA for a case. This action has the highest priority and it will override the existing SLA defined for the specific case.\n\nAction Parameters: SLA Period: Required. The SLA breach period.The default value is 5., SLA Time Unit: Required. The time unit for the SLA period.The default value is Minutes.The possible values are as follows: MinutesHoursDays, SLA Time To Critical Period: Required. The critical SLA threshold.The default value is 4., SLA Time To Critical Unit: Required. The time unit for the critical SLA period. The default value is Minutes.The possible values are as follows:MinutesHours Days",
        params: &[
            ParamSpec::required(
                "sla_period",
                "SLA Period",
                ParamKind::Text,
                "The period of time after which the SLA is in breach.",
            ),
            ParamSpec::required(
                "sla_time_unit",
                "SLA Time Unit",
                ParamKind::List,
                "Specify the unit for SLA Time.",
            ),
            ParamSpec::required(
                "sla_time_to_critical_period",
                "SLA Time To Critical Period",
                ParamKind::Text,
                "The period of time after which the SLA enters the critical period.",
            ),
            ParamSpec::required(
                "sla_time_to_critical_unit",
                "SLA Time To Critical Unit",
                ParamKind::List,
                "Specify the unit for SLA Time To Critical.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_is_in_custom_list",
        integration: INTEGRATION,
        action: "Is In Custom List",
        description: "Check whether an Entity Identifier is part of a predefined dynamic categorized Custom List\n\nAction Parameters: Category: Required. A custom list category to check for alert entities.",
        params: &[
            ParamSpec::required(
                "category",
                "Category",
                ParamKind::Text,
                "Custom list category.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_test_siemplify_proxy",
        integration: INTEGRATION,
        action: "TestSiemplifyProxy",
        description: "Test connection to a given endpoint using proxy settings configured in Siemplify.",
        params: &[
            ParamSpec::required(
                "endpoint_url",
                "Endpoint URL",
                ParamKind::Text,
                "The endpoint to try to connect to",
            ),
            ParamSpec::required(
                "http_method",
                "HTTP Method",
                ParamKind::Text,
                "The HTTP method to use when connecting to the endpoint",
            ),
            ParamSpec::optional(
                "body",
                "Body",
                ParamKind::Text,
                "The body of the HTTP request",
            ),
            ParamSpec::required(
                "verify_ssl",
                "Verify SSL",
                ParamKind::Flag,
                "Whether to verify SSL certificate or not.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_case_tag",
        integration: INTEGRATION,
        action: "Case Tag",
        description: "Add given tag to the case the current alert is grouped to\n\nAction Parameters: Tag: Required.A tag to add to the case.",
        params: &[
            ParamSpec::required(
                "tag",
                "Tag",
                ParamKind::Text,
                "Tag to be added to the case.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_close_alert",
        integration: INTEGRATION,
        action: "Close Alert",
        description: "Closes the current alert\n\nAction Parameters: Reason: Required.A reason for closing the alert. The possible values are as follows:Malicious NotMaliciousMaintenance Inconclusive, Root Cause: Required.A primary cause for closing the alert., Comment: Required.A comment to add to the alert., Assign to User: OptionalThe user to assign the alert to., Tags: OptionalA comma-separated list of tags.",
        params: &[
            ParamSpec::required(
                "reason",
                "Reason",
                ParamKind::Opaque,
                "Alert closure reason.",
            ),
            ParamSpec::required(
                "root_cause",
                "Root Cause",
                ParamKind::Opaque,
                "Root cause of the alert closure.",
            ),
            ParamSpec::required(
                "comment",
                "Comment",
                ParamKind::Text,
                "Comment content.",
            ),
            ParamSpec::optional(
                "assign_to_user",
                "Assign To User",
                ParamKind::Opaque,
                "User that the closed case will be assigned to.",
            ),
            ParamSpec::optional(
                "tags",
                "Tags",
                ParamKind::Text,
                "Comma separated tags values.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_add_to_custom_list",
        integration: INTEGRATION,
        action: "Add to Custom List",
        description: "Add an Entity Identifier to a categorized Custom List, in order to perform future comparisons in other actions.\n\nAction Parameters: Category: Required.A custom list of categories to use.",
        params: &[
            ParamSpec::required(
                "category",
                "Category",
                ParamKind::Text,
                "Custom list category to be used.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_case_comment",
        integration: INTEGRATION,
        action: "Case Comment",
        description: "Add a comment to the case the current alert has been grouped to\n\nAction Parameters: Comment: Required.A comment to add to the case.",
        params: &[
            ParamSpec::required(
                "comment",
                "Comment",
                ParamKind::Text,
                "Comment to be added to the case.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_permitted_alert_time",
        integration: INTEGRATION,
        action: "Permitted Alert Time",
        description: "Check case time according to a given time condition\n\nAction Parameters: Permitted Start Time: Required. The start time of the permitted period for alerts., Permitted End Time: Required. The end time of the permitted period for alerts., Monday: Optional If selected, the action treats Mondays as permitted days for alerts. Not selected by default., Tuesday: Optional If selected, the action treats Tuesdays as permitted days for alerts. Selected by default., Wednesday: Optional If selected, the action treats Wednesdays as permitted days for alerts. Selected by default., Thursday: Optional If selected, the action treats Thursdays as permitted days for alerts. Not selected by default., Friday: Optional If selected, the action treats Fridays as permitted days for alerts. Not selected by default., Saturday: Optional If selected, the action treats Saturdays as permitted days for alerts. Not selected by default., Sunday: Optional If selected, the action treats Sundays as permitted days for alerts. Not selected by default., Input Timezone: Required. The timezone to use for comparing the alert time. The default value is UTC.",
        params: &[
            ParamSpec::required(
                "permitted_start_time",
                "Permitted Start Time",
                ParamKind::Text,
                "Start of the timeframe, when alerts are allowed. For example: 9:55:24",
            ),
            ParamSpec::required(
                "permitted_end_time",
                "Permitted End Time",
                ParamKind::Text,
                "End of the timeframe, when alerts are allowed. For example: 17:23:21",
            ),
            ParamSpec::optional(
                "monday",
                "Monday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::optional(
                "tuesday",
                "Tuesday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::optional(
                "wednesday",
                "Wednesday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::optional(
                "thursday",
                "Thursday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::optional(
                "friday",
                "Friday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::optional(
                "saturday",
                "Saturday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::optional(
                "sunday",
                "Sunday",
                ParamKind::Flag,
                "",
            ),
            ParamSpec::required(
                "input_timezone",
                "Input Timezone",
                ParamKind::Text,
                "Timezone name. For example: UTC",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_open_web_url",
        integration: INTEGRATION,
        action: "Open Web Url",
        description: "Generate a browser link\n\nAction Parameters: Title: Required.The title for the URL., URL: Required.The target URL.",
        params: &[
            ParamSpec::required(
                "title",
                "Title",
                ParamKind::Text,
                "Title for URL.",
            ),
            ParamSpec::required(
                "url",
                "URL",
                ParamKind::Text,
                "Target URL.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_change_case_stage",
        integration: INTEGRATION,
        action: "Change Case Stage",
        description: "Change case stage to handling\n\nAction Parameters: Stage: Required. The stage to move the case to.The possible values are as follows: TriageAssessment InvestigationIncident ImprovementResearch",
        params: &[
            ParamSpec::required(
                "stage",
                "Stage",
                ParamKind::Opaque,
                "Stage to which the case should be moved to.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_add_general_insight",
        integration: INTEGRATION,
        action: "Add General Insight",
        description: "Add a general insight configurable message to the case\n\nAction Parameters: Title: Required.The title of the insight., Message: Required.A message content to add to the entity. This parameter supports HTML elements, such as headings (&lt;h1&gt;&lt;/h1&gt;, &lt;h2&gt;&lt;/h2&gt;), paragraphs (&lt;p&gt;&lt;/p&gt;), text formatting (&lt;b&gt;&lt;/b&gt;, &lt;i&gt;&lt;/i&gt;, &lt;br&gt;), and links (&lt;a href=\"example.com\"&gt;&lt;/a&gt;)., Triggered By: OptionalA justification for the insight.",
        params: &[
            ParamSpec::required(
                "title",
                "Title",
                ParamKind::Text,
                "The title of the insight.",
            ),
            ParamSpec::required(
                "message",
                "Message",
                ParamKind::Text,
                "The message that will be placed on the insight.",
            ),
            ParamSpec::optional(
                "triggered_by",
                "Triggered By",
                ParamKind::Text,
                "A description for the cause of this insight",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_resume_alert_sla",
        integration: INTEGRATION,
        action: "Resume Alert SLA",
        description: "Automatically resume the alert SLA",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "siemplify_instruction",
        integration: INTEGRATION,
        action: "Instruction",
        description: "Set an instruction for the analyst\n\nAction Parameters: Instruction: Required. The instruction content for the analyst.",
        params: &[
            ParamSpec::required(
                "instruction",
                "Instruction",
                ParamKind::Text,
                "Instruction content.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_ping",
        integration: INTEGRATION,
        action: "Ping",
        description: "Test Connectivity\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "siemplify_get_case_details",
        integration: INTEGRATION,
        action: "Get Case Details",
        description: "This action will get all the data from a case and return a JSON result. The result includes comments, entity information, insights, playbooks that ran, alert information and events.",
        params: &[
            ParamSpec::optional(
                "fields_to_return",
                "Fields to Return",
                ParamKind::Text,
                "Specify a comma-separated list of fields that need to be returned. If nothing is provided, all fields are returned. Getting nested values can be done using \\\"Nested Keys Delimiter\\\" value to chain nested keys and list indexes. For example, if the delimiter is \\\".\\\": key_1.nested_key_1.0.nested_key_2, key_2, key_3.1.nested_key_1",
            ),
            ParamSpec::optional(
                "nested_keys_delimiter",
                "Nested Keys Delimiter",
                ParamKind::Text,
                "The delimiter to split nested keys. If missing or not provided fetching nested keys is not possible. Cannot be a comma (\\\",\\\")",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_set_scope_context_value",
        integration: INTEGRATION,
        action: "Set Scope Context Value",
        description: "Action sets a value for a key specified that is stored in the Siemplify database. Available scopes to get context values for: Alert, Case, Global. Action is not working on Siemplify entities. Note: Key Name parameter is case insensitive.",
        params: &[
            ParamSpec::required(
                "context_scope",
                "Context Scope",
                ParamKind::List,
                "Specify the Siemplify context scope to return context keys for.",
            ),
            ParamSpec::required(
                "key_name",
                "Key Name",
                ParamKind::Text,
                "Specify the key name to set context value for.",
            ),
            ParamSpec::required(
                "key_value",
                "Key Value",
                ParamKind::Text,
                "Specify the value to store under the specified key.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_add_tags_to_similar_cases",
        integration: INTEGRATION,
        action: "Add Tags To Similar Cases",
        description: "Add tags to similar cases and return their Ids\n\nAction Parameters: Rule Generator: Optional If selected, the action searches for similar cases using the rule generator. Selected by default., Port: Optional If selected, the action searches for similar cases using port numbers. Selected by default., Category Outcome: Optional If selected, the action searches for similar cases using the category outcome.Selected by default., Entity Identifier: Optional If selected, the action searches for similar cases using the entity identifier.Selected by default., Days Back: Required. The number of days before now for the action to search for similar cases., Tags: Required. A comma-separated list of tags to add to similar cases.",
        params: &[
            ParamSpec::required(
                "rule_generator",
                "Rule Generator",
                ParamKind::Flag,
                "Search for similar cases by the same Rule Generator. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "port",
                "Port",
                ParamKind::Flag,
                "Search for similar cases by the same Port number. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "category_outcome",
                "Category Outcome",
                ParamKind::Flag,
                "Search for similar cases by the same Category Outcome. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "entity_identifier",
                "Entity Identifier",
                ParamKind::Flag,
                "Search for similar cases containing the same Entity Identifier. Note: All these search criteria are joined using logical 'AND' condition and will be used in the same search.",
            ),
            ParamSpec::required(
                "days_back",
                "Days Back",
                ParamKind::Text,
                "Defines how many days back the search should look for similar cases.",
            ),
            ParamSpec::required(
                "tags",
                "Tags",
                ParamKind::Text,
                "Specify a comma-separated list of tags that you want to add to similar cases.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_add_entity_insight",
        integration: INTEGRATION,
        action: "Add Entity Insight",
        description: "Add an insight configurable message to each targeted entity\n\nAction Parameters: Message: Required.A message content to add to the entity. This parameter supports HTML elements, such as headings (&lt;h1&gt;&lt;/h1&gt;, &lt;h2&gt;&lt;/h2&gt;), paragraphs (&lt;p&gt;&lt;/p&gt;), text formatting (&lt;b&gt;&lt;/b&gt;, &lt;i&gt;&lt;/i&gt;, &lt;br&gt;), and links (&lt;a href=\"example.com\"&gt;&lt;/a&gt;).",
        params: &[
            ParamSpec::required(
                "message",
                "Message",
                ParamKind::Text,
                "Message content to be added.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_attach_playbook_to_alert",
        integration: INTEGRATION,
        action: "Attach Playbook to Alert",
        description: "Attach a specific playbook to an alert\n\nAction Parameters: Playbook Name: Required. The name of the playbook to attach to the current alert.",
        params: &[
            ParamSpec::required(
                "playbook_name",
                "Playbook Name",
                ParamKind::Opaque,
                "Playbook, which should be attached to an alert.",
            ),
            ParamSpec::optional(
                "allow_duplicates",
                "Allow Duplicates",
                ParamKind::Flag,
                "If selected, action will allow the same playbook to be attached multiple times to the alert.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_close_case",
        integration: INTEGRATION,
        action: "Close Case",
        description: "Closes the case the current alert has been grouped to\n\nAction Parameters: Reason: Required.A reason for closing the case. The possible values are as follows:Malicious NotMaliciousMaintenance Inconclusive, Root Cause: Required.A primary cause for closing the case., Comment: Required.A comment to add to the case.",
        params: &[
            ParamSpec::required(
                "reason",
                "Reason",
                ParamKind::Opaque,
                "Closure reason.",
            ),
            ParamSpec::required(
                "root_cause",
                "Root Cause",
                ParamKind::Opaque,
                "Root cause of the case closure.",
            ),
            ParamSpec::required(
                "comment",
                "Comment",
                ParamKind::Text,
                "Comment content.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_assign_case",
        integration: INTEGRATION,
        action: "Assign Case",
        description: "Assign case to specific user or usergroup\n\nAction Parameters: Assigned User: Required.A user or a user group to assign a case to.",
        params: &[
            ParamSpec::required(
                "assigned_user",
                "Assigned User",
                ParamKind::Opaque,
                "User or Usergroup to whom a case should be assigned.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_wait_for_custom_fields",
        integration: INTEGRATION,
        action: "Wait For Custom Fields",
        description: "Preview. Wait for custom fields values to continue playbook execution.\n\nAction Parameters: Scope: Required.The scope to set for the custom fields. The possible values are Case and Alert. The default value is Case., Custom Fields Data: Required.The required conditions for the custom fields to allow the action to resume running a playbook.Configure the custom field names and their required values as a JSON object.If you set conditions for multiple fields, the action waits for all fields to match their respective conditions.The action behavior depends on the input that you provide.For the action to resume running a playbook with any value in a custom field, configure an empty string for the custom field as follows: { \"Custom Field\": \"\" } For the action to resume running a playbook when the custom field equals a specific value, such as VALUE_1, specify the value for the custom field as follows: { \"Custom Field\": \"VALUE_1\" } The default value is as follows: { \"Custom Field Name 1\": \"Custom Field Value 1\", \"Custom Field Name 2\": \"Custom Field Value 2\" }",
        params: &[
            ParamSpec::required(
                "custom_fields_data",
                "Custom Fields Data",
                ParamKind::Text,
                "The conditions that are required for the custom fields for the action to resume running a playbook. Configure the custom field names and their required values as a JSON object.\nIf you set conditions for multiple fields, the action waits for all fields to match their respective conditions.\nThe action behavior depends on the input that you provide.\nFor the action to resume running a playbook with any value in a custom field, configure an empty string for the custom field as follows:\n{\n“Custom Field”: “”\n}\nFor the action to resume running a playbook when the custom field equals to a specific value (“Value 1”), specify the value for the custom field as follows:\n{\n“Custom Field”: “Value 1”\n}",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_create_entity",
        integration: INTEGRATION,
        action: "Create Entity",
        description: "Creates an entity and adds to requested alert. Note - Please make sure to read our documentation regarding the differences in the delimiters behavior, between different Siemplifys platform versions 5.6.0 inclusive and 5.6.2 exclusive, here: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/siemplify#create-entity\n\nAction Parameters: Entities Identifies: Required. A comma-separated list of entity identifiers to create in the case, such as VALUE1,VALUE2,VALUE3 ., Delimiter: Optional The delimiter used to split the input from the Entities Identifies parameter into multiple identifiers.If you don't set a value, the action treats the input as a single entity identifier. The default value is ,., Entity Type: Required. The type of the entity to create, such as HOSTNAME, USERNAME, and IP., Is Internal: Optional If selected, the action treats entities as part of an internal network.Not selected by default., Is Suspicious: Optional If selected, the action treats entities as suspicious. Not selected by default.",
        params: &[
            ParamSpec::required(
                "entities_identifies",
                "Entities Identifies",
                ParamKind::Text,
                "Entity identifier or comma-separated list of identifiers (Example: value1,value2,value3).",
            ),
            ParamSpec::optional(
                "delimiter",
                "Delimiter",
                ParamKind::Text,
                "Provide a delimiter character, with which the action will split the input it gets into a number of entities instead of a single one. If no value will be provided, action will not perform any splitting on the input, and it will be handled as a single entity. Note - Please make sure to read our documentation regarding the differences in the delimiter's behavior, between different Siemplify's platform versions 5.6.0 inclusive and 5.6.2 exclusive.",
            ),
            ParamSpec::required(
                "entity_type",
                "Entity Type",
                ParamKind::Opaque,
                "Siemplify entity type. Example: HOSTNAME / USERNAME / etc.",
            ),
            ParamSpec::required(
                "is_internal",
                "Is Internal",
                ParamKind::Flag,
                "Mark if entities are part of an internal network.",
            ),
            ParamSpec::required(
                "is_suspicious",
                "Is Suspicious",
                ParamKind::Flag,
                "Mark if entities are suspicious.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_update_case_description",
        integration: INTEGRATION,
        action: "Update Case Description",
        description: "Ability to set Case Description from playbooks.\n\nAction Parameters: Description: Required. The description to set for the case.",
        params: &[
            ParamSpec::required(
                "description",
                "Description",
                ParamKind::Text,
                "Specify what description should be set for the case.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_raise_incident",
        integration: INTEGRATION,
        action: "Raise Incident",
        description: "Raise case incident (Note - Used to mark critical true positive cases)\n\nAction Parameters: Soc Role: OptionalThe {{google_secops_name_short}} Security Operation Center (SOC) role to assign the case to.",
        params: &[
            ParamSpec::optional(
                "soc_role",
                "Soc Role",
                ParamKind::Opaque,
                "Role to which the case should be assigned.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_run_remote",
        integration: INTEGRATION,
        action: "Run Remote",
        description: "Run remote action via publisher",
        params: &[
            ParamSpec::required(
                "publisher_name",
                "Publisher Name",
                ParamKind::Text,
                "Publisher instance name to be used.",
            ),
            ParamSpec::required(
                "remote_integration_name",
                "Remote Integration Name",
                ParamKind::Text,
                "Remote integration name to be used.",
            ),
            ParamSpec::required(
                "remote_action_name",
                "Remote Action Name",
                ParamKind::Text,
                "Remote action name to be used.",
            ),
            ParamSpec::required(
                "remote_context_data",
                "Remote Context Data",
                ParamKind::Text,
                "Remote action context data.",
            ),
            ParamSpec::required(
                "remote_action_script",
                "Remote Action Script",
                ParamKind::Text,
                "Remote action script content to be executed.",
            ),
            ParamSpec::required(
                "agent_id",
                "Agent ID",
                ParamKind::Text,
                "Action's target agent id.",
            ),
            ParamSpec::required(
                "installed_integrations_shared_folder",
                "Installed Integrations Shared Folder",
                ParamKind::Text,
                "Installed Integrations Shared Folder",
            ),
            ParamSpec::optional(
                "verify_ssl",
                "Verify SSL",
                ParamKind::Flag,
                "Enables\\Disables SSL Verification between Siemplify's machine and the remote Publisher",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_pause_alert_sla",
        integration: INTEGRATION,
        action: "Pause Alert SLA",
        description: "Automatically pause the alert SLA",
        params: &[
            ParamSpec::optional(
                "message",
                "Message",
                ParamKind::Text,
                "Pause Reason",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_remove_from_custom_list",
        integration: INTEGRATION,
        action: "Remove from Custom List",
        description: "Remove an Entity Identifier from a categorized Custom List, in order to perform future comparisons in other actions.\n\nAction Parameters: Category: Required. The custom list category name from which to remove the entities.",
        params: &[
            ParamSpec::required(
                "category",
                "Category",
                ParamKind::Text,
                "Custom list category to be used.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_change_alert_priority",
        integration: INTEGRATION,
        action: "Change Alert Priority",
        description: "Automatically change the alert priority to the given input. Note: This action is compatible only with Siemplify version 5.6 and higher.\n\nAction Parameters: Alert Priority: Required. The new priority for the alert.The possible values are as follows: InformativeLow MediumHigh Critical",
        params: &[
            ParamSpec::required(
                "alert_priority",
                "Alert Priority",
                ParamKind::Opaque,
                "Priority to which the alert should be moved to.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_set_alert_sla",
        integration: INTEGRATION,
        action: "Set Alert SLA",
        description: "Set the SLA for an alert. This action has the highest priority and it will override the existing SLA defined for the specific alert.\n\nAction Parameters: SLA Period: Required. The SLA breach period.The default value is 5., SLA Time Unit: Required. The time unit for the SLA period.The default value is Minutes.The possible values are as follows: MinutesHoursDays, SLA Time To Critical Period: Required. The critical SLA threshold.The default value is 4., SLA Time To Critical Unit: Required. The time unit for the critical SLA period. The default value is Minutes.The possible values are as follows:MinutesHours Days",
        params: &[
            ParamSpec::required(
                "sla_period",
                "SLA Period",
                ParamKind::Text,
                "The period of time after which the SLA is in breach.",
            ),
            ParamSpec::required(
                "sla_time_unit",
                "SLA Time Unit",
                ParamKind::List,
                "Specify the unit for SLA Time.",
            ),
            ParamSpec::required(
                "sla_time_to_critical_period",
                "SLA Time To Critical Period",
                ParamKind::Text,
                "The period of time after which the SLA enters the critical period.",
            ),
            ParamSpec::required(
                "sla_time_to_critical_unit",
                "SLA Time To Critical Unit",
                ParamKind::List,
                "Specify the unit for SLA Time To Critical.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_get_connector_context_value",
        integration: INTEGRATION,
        action: "Get Connector Context Value",
        description: "Action gets a value stored under a specified key in the Siemplify database for a connector context. Action is not working on Siemplify entities.\n\nAction Parameters: Connector Identifier: Required. The connector identifier for which to retrieve the context value., Key Name: Required. The key name for which to retrieve the context value., Create Case Wall Table: Optional If selected, the action creates a Case Wall table with the retrieved context value, unless the value exceeds the character limit. Selected by default.",
        params: &[
            ParamSpec::required(
                "connector_identifier",
                "Connector Identifier",
                ParamKind::Text,
                "Specify connector identifier to list context keys for. Parameter works together with \"Connector Identifier Filter Logic\" parameter",
            ),
            ParamSpec::required(
                "key_name",
                "Key Name",
                ParamKind::Text,
                "Optionally specify the key name to get context value for.",
            ),
            ParamSpec::optional(
                "create_case_wall_table",
                "Create Case Wall Table",
                ParamKind::Flag,
                "If enabled, the case wall table will be created as part of action results.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_get_scope_context_value",
        integration: INTEGRATION,
        action: "Get Scope Context Value",
        description: "Action gets a value stored under a specified key in the Siemplify database. Available scopes to get context values for: Alert, Case, Global. Action is not working on Siemplify entities.\n\nAction Parameters: Context Scope: Required. The context scope to retrieve data from. Possible values are as follows:Not specified AlertCaseGlobal, Key Name: Required. The key name to retrieve the corresponding value from the specified context., Create Case Wall Table: Optional If selected, the action creates a Case Wall table with the retrieved context value, unless the value exceeds the character limit. Selected by default.",
        params: &[
            ParamSpec::required(
                "context_scope",
                "Context Scope",
                ParamKind::List,
                "Specify the Siemplify context scope to return context keys for.",
            ),
            ParamSpec::required(
                "key_name",
                "Key Name",
                ParamKind::Text,
                "Optionally specify the key name to get context value for.",
            ),
            ParamSpec::optional(
                "create_case_wall_table",
                "Create Case Wall Table",
                ParamKind::Flag,
                "If enabled, the case wall table will be created as part of action results.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "siemplify_remove_tag",
        integration: INTEGRATION,
        action: "Remove Tag",
        description: "Remove tags from a case.\n\nAction Parameters: Tag: Required.A comma-separated list of tags to remove from a case.",
        params: &[
            ParamSpec::required(
                "tag",
                "Tag",
                ParamKind::Text,
                "Specify the tag that needs to be removed. Comma seperated values.",
            ),
        ],
    },
];
