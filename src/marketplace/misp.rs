//! MISP threat-sharing platform actions.

use crate::actions::{ActionDescriptor, ParamKind, ParamSpec};

pub const INTEGRATION: &str = "MISP";

pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        tool_name: "misp_create_network_connection_misp_object",
        integration: INTEGRATION,
        action: "Create network-connection Misp Object",
        description: "Create a network-connection Object in MISP. Requires one of: Dst-port, Src-port, IP-Src, IP-Dst to be provided or “Use Entities“ parameter set to true.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event to which you want to add network-connection objects., Dst-port: Specify the destination port, which you want to add to the event., Src-port: Specify the source port, which you want to add to the event., Hostname-dst: Specify the source destination, which you want to add to the event., Hostname-src: Specify the source hostname, which you want to add to the event., IP-Src: Specify the source IP, which you want to add to the event., IP-Dst: Specify the destination IP, which you want to add to the event., Layer3-protocol: Specify the related layer 3 protocol, which you want to add to the event., Layer4-protocol: Specify the related layer 4 protocol, which you want to add to the event., Layer7-protocol: Specify the related layer 7 protocol, which you want to add to the event., Use Entities: If enabled, action will use entities in order to create objects. Supported entities: IP Address. \"Use Entities\" has priority over other parameters., IP Type: Specify what attribute type should be used with IP entities.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event to which you want to add network-connection objects.",
            ),
            ParamSpec::optional(
                "dst_port",
                "Dst-port",
                ParamKind::Text,
                "Specify the destination port, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "src_port",
                "Src-port",
                ParamKind::Text,
                "Specify the source port, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "hostname_src",
                "Hostname-src",
                ParamKind::Text,
                "Specify the source hostname, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "hostname_dst",
                "Hostname-dst",
                ParamKind::Text,
                "Specify the source destination, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "ip_src",
                "IP-Src",
                ParamKind::Text,
                "Specify the source IP, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "ip_dst",
                "IP-Dst",
                ParamKind::Text,
                "Specify the destination IP, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "layer3_protocol",
                "Layer3-protocol",
                ParamKind::Text,
                "Specify the related layer 3 protocol, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "layer4_protocol",
                "Layer4-protocol",
                ParamKind::Text,
                "Specify the related layer 4 protocol, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "layer7_protocol",
                "Layer7-protocol",
                ParamKind::Text,
                "Specify the related layer 7 protocol, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "use_entities",
                "Use Entities",
                ParamKind::Flag,
                "If enabled, action will use entities in order to create objects. Supported entities: IP Address. “Use Entities“ has priority over other parameters.",
            ),
            ParamSpec::optional(
                "ip_type",
                "IP Type",
                ParamKind::List,
                "Specify what attribute type should be used with IP entities.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_list_event_objects",
        integration: INTEGRATION,
        action: "List Event Objects",
        description: "Retrieve information about available objects in MISP event.\n\nAction Parameters: Event ID: Specify a comma-separated list of IDs and UUIDs of the events, for which you want to retrieve details., Max Objects to Return: Specify how many objects to return.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify a comma-separated list of IDs and UUIDs of the events, for which you want to retrieve details.",
            ),
            ParamSpec::optional(
                "max_objects_to_return",
                "Max Objects to Return",
                ParamKind::Text,
                "Specify how many objects to return.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_unpublish_event",
        integration: INTEGRATION,
        action: "Unpublish Event",
        description: "The action allows the user to unpublish an event. Unpublishing an event prevents it from being visible to the shared groups.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event that you want to unpublish.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event that you want to unpublish.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_create_event",
        integration: INTEGRATION,
        action: "Create Event",
        description: "Create a new event in MISP.\n\nAction Parameters: Event Name: The name of the event., Threat Level: The threat level of the event. Default: 0., Distribution: The distribution of the attribute. Default: 1., Analysis: The analysis level of the event [0-2]: Default: 0., Publish: Whether to publish the event or not., Comment: The comment of the event.",
        params: &[
            ParamSpec::required(
                "event_name",
                "Event Name",
                ParamKind::Text,
                "Specify the name for the new event.",
            ),
            ParamSpec::optional(
                "distribution",
                "Distribution",
                ParamKind::Text,
                "Specify the distribution of the event. Possible values: 0 - Organisation, 1 - Community, 2 - Connected, 3 - All. You can either provide a number or a string.",
            ),
            ParamSpec::optional(
                "threat_level",
                "Threat Level",
                ParamKind::Text,
                "Specify the threat level of the event. Possible values: 1 - High, 2 - Medium, 3 - Low, 4 - Undefined. You can either provide a number or a string.",
            ),
            ParamSpec::optional(
                "analysis",
                "Analysis",
                ParamKind::Text,
                "Specify the analysis of the event. Possible values: 0 - Initial, 1 - Ongoing, 2 - Completed. You can either provide a number or a string.",
            ),
            ParamSpec::optional(
                "publish",
                "Publish",
                ParamKind::Flag,
                "If enabled, action will publish the event to the community.",
            ),
            ParamSpec::optional(
                "comment",
                "Comment",
                ParamKind::Text,
                "Specify additional comments related to the event.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_remove_tag_from_an_attribute",
        integration: INTEGRATION,
        action: "Remove Tag from an Attribute",
        description: "Remove tags from attributes in MISP.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if \"Attribute Search\" is set to \"Provided Event\"., Tag Name: Specify a comma-separated list of tags that you want to remove from attributes., Attribute Name: Specify a comma-separated list of attribute identifiers from which you want to remove tags. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values., Category: Specify a comma-separated list of categories. If specified, action will only remove tags from attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation., Type: Specify a comma-separated list of attribute types. If specified, action will only remove tags from attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst, Object UUID: Specify the UUID of the object that contains the desired attribute., Attribute Search: Specify, where action should search for attributes. If \"Provided Event\" is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in \"Event ID\" parameter. If \"All Events\", action will search for attributes among all events and remove tags from all attributes that match our criteria., Attribute UUID: Specify a comma-separated list of attribute UUIDs from which you want to remove new tags. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values.",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers from which you want to remove tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“ or Object UUID is provided.",
            ),
            ParamSpec::required(
                "tag_name",
                "Tag Name",
                ParamKind::Text,
                "Specify a comma-separated list of tags that you want to remove from attributes.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only remove tags from attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only remove tags from attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::optional(
                "object_uuid",
                "Object UUID",
                ParamKind::Text,
                "Specify the UUID of the object that contains the desired attribute.",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs from which you want to remove new tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and remove tags from all attributes that match our criteria.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_ping",
        integration: INTEGRATION,
        action: "Ping",
        description: "Test Connectivity",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "misp_set_ids_flag_for_an_attribute",
        integration: INTEGRATION,
        action: "Set IDS Flag for an Attribute",
        description: "Set IDS flag for attributes in MISP\n\nAction Parameters: Attribute Name: Specify a comma-separated list of attribute identifiers for which you want to set an IDS flag. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values., Event ID: Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if \"Attribute Search\" is set to \"Provided Event\"., Category: Specify a comma-separated list of categories. If specified, action will only set IDS flag for attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation., Type: Specify a comma-separated list of attribute types. If specified, action will only set IDS flag for attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst, Attribute Search: Specify, where action should search for attributes. If \"Provided Event\" is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in \"Event ID\" parameter. If \"All Events\", action will search for attributes among all events and set IDS flag for all attributes that match our criteria., Attribute UUID: Specify a comma-separated list of attribute UUIDs for which you want to set an IDS flag. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values.",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers for which you want to set an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to seach for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only set IDS flag for attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only set IDS flag for attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and set IDS flag for all attributes that match our criteria.",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs for which you want to set an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_get_event_details",
        integration: INTEGRATION,
        action: "Get Event Details",
        description: "Retrieve details about events in MISP.\n\nAction Parameters: Event ID: Specify a comma-separated list of IDs or UUIDs of the events for which you want retrieve details., Return Attributes Info: If enabled, action will create a case wall table for all of the attributes that are a part of the event.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify a comma-separated list of IDs or UUIDs of the events for which you want retrieve details.",
            ),
            ParamSpec::optional(
                "return_attributes_info",
                "Return Attributes Info",
                ParamKind::Flag,
                "If enabled, action will create a case wall table for all of the attributes that are a part of the event.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_add_tag_to_an_event",
        integration: INTEGRATION,
        action: "Add Tag to an Event",
        description: "Add tags to event in MISP.\n\nAction Parameters: Event ID: The unique identifier specifying the event to add tag to., Tag Name: The name of the tag to add to an event.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, for which you want to add tags.",
            ),
            ParamSpec::required(
                "tag_name",
                "Tag Name",
                ParamKind::Text,
                "Specify a comma-separated list of tags that you want to add to events.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_remove_tag_from_an_event",
        integration: INTEGRATION,
        action: "Remove Tag from an Event",
        description: "Remove tags from event in MISP.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event, from which you want to remove tags., Tag Name: Specify a comma-separated list of tags that you want to remove from events.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, from which you want to remove tags.",
            ),
            ParamSpec::required(
                "tag_name",
                "Tag Name",
                ParamKind::Text,
                "Specify a comma-separated list of tags that you want to remove from events.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_delete_an_event",
        integration: INTEGRATION,
        action: "Delete an Event",
        description: "Delete event in MISP\n\nAction Parameters: Event ID: Specify the ID or UUID of the event that you want to delete.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event that you want to delete.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_create_ip_port_misp_object",
        integration: INTEGRATION,
        action: "Create IP-Port Misp Object",
        description: "Create a IP-Port Object in MISP. Requires one of: Dst-port, Src-port, Domain, HOSTNAME, IP-Src, IP-Dst to be provided or “Use Entities“ parameter set to true.\n\nAction Parameters: Event ID: The unique identifier of the event to add the object. Example: 1, Dst-port: Destination port., Src-port: Source port., Domain: Domain., Hostname: Hostname., IP-Src: Source IP Address., IP-Dst: Destination IP Address.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event to which you want to add IP-Port objects.",
            ),
            ParamSpec::optional(
                "dst_port",
                "Dst-port",
                ParamKind::Text,
                "Specify the destination port, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "src_port",
                "Src-port",
                ParamKind::Text,
                "Specify the source port, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "domain",
                "Domain",
                ParamKind::Text,
                "Specify the domain, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "hostname",
                "HOSTNAME",
                ParamKind::Text,
                "Specify the hostname, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "ip_src",
                "IP-Src",
                ParamKind::Text,
                "Specify the source IP, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "ip_dst",
                "IP-Dst",
                ParamKind::Text,
                "Specify the destination IP, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "use_entities",
                "Use Entities",
                ParamKind::Flag,
                "If enabled, action will use entities in order to create objects. Supported entities: IP Address. “Use Entities“ has priority over other parameters.",
            ),
            ParamSpec::optional(
                "ip_type",
                "IP Type",
                ParamKind::List,
                "Specify what attribute type should be used with IP entities.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_create_virustotal_report_object",
        integration: INTEGRATION,
        action: "Create Virustotal-Report Object",
        description: "Create a Virustotal-Report Object in MISP.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event to which you want to add URL objects., Permalink: Specify the link to the VirusTotal report, which you want to add to the event., Comment: Specify the comment, which you want to add to the event., Detection Ratio: Specify the detection ration, which you want to add to the event., Community Score: Specify the community score, which you want to add to the event., First Submission: Specify first submission of the event. Format: 2020-12-22T13:07:32Z, Last Submission: Specify last submission of the event. Format: 2020-12-22T13:07:32Z",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event to which you want to add URL objects.",
            ),
            ParamSpec::required(
                "permalink",
                "Permalink",
                ParamKind::Text,
                "Specify the link to the VirusTotal report, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "comment",
                "Comment",
                ParamKind::Text,
                "Specify the comment, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "detection_ratio",
                "Detection Ratio",
                ParamKind::Text,
                "Specify the detection ration, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "community_score",
                "Community Score",
                ParamKind::Text,
                "Specify the community score, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "first_submission",
                "First Submission",
                ParamKind::Text,
                "Specify first submission of the event. Format: 2020-12-22T13:07:32Z",
            ),
            ParamSpec::optional(
                "last_submission",
                "Last Submission",
                ParamKind::Text,
                "Specify last submission of the event. Format: 2020-12-22T13:07:32Z",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_add_sighting_to_an_attribute",
        integration: INTEGRATION,
        action: "Add Sighting to an Attribute",
        description: "Add a sighting to attributes in MISP",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers to which you want to add a new sighting. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only add sightings to attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only add sightings to attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::required(
                "sightings_type",
                "Sightings Type",
                ParamKind::List,
                "Specify the type of the Sighting.",
            ),
            ParamSpec::optional(
                "source",
                "Source",
                ParamKind::Text,
                "Specify the source for the sighting. Example: SIEM, SOAR, Siemplify.",
            ),
            ParamSpec::optional(
                "date_time",
                "Date Time",
                ParamKind::Text,
                "Specify the date time for the sighting. Format: 2020-02-10 11:00:00.",
            ),
            ParamSpec::optional(
                "object_uuid",
                "Object UUID",
                ParamKind::Text,
                "Specify the uuid of the object that contains the desired attribute",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and add sighting for all attributes that match our criteria.",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs to which you want to add a new sighting. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_enrich_entities",
        integration: INTEGRATION,
        action: "Enrich Entities",
        description: "Enrich entities based on the attributes in MISP.\n\nAction Parameters: Number of attributes to return: Specify how many attributes to return for entities., Filtering condition: Specify the filtering condition for the action. If \"Last\" is selected, action will use the oldest attribute for enrichment, if \"First\" is selected, action will use the newest attribute for enrichment., Threat Level Threshold: Specify what should be the threshold for the threat level of the event, where the entity was found. If related event exceeds or matches threshold, entity will be marked as suspicious., Attribute Search Limit: Specify how many attributes to search for per entity. This parameter has an impact on which attribute will be selected for enrichment. Default: 50.",
        params: &[
            ParamSpec::required(
                "number_of_attributes_to_return",
                "Number of attributes to return",
                ParamKind::Text,
                "Specify how many attributes to return for entities.",
            ),
            ParamSpec::required(
                "filtering_condition",
                "Filtering condition",
                ParamKind::List,
                "Specify the filtering condition for the action. If “Last“ is selected, action will use the oldest attribute for enrichment, if “First“ is selected, action will use the newest attribute for enrichment.",
            ),
            ParamSpec::optional(
                "create_insights",
                "Create Insights",
                ParamKind::Flag,
                "If enabled, action will generate an insight for every entity that was fully processed.",
            ),
            ParamSpec::optional(
                "threat_level_threshold",
                "Threat Level Threshold",
                ParamKind::List,
                "Specify what should be the threshold for the threat level of the event, where the entity was found. If related event exceeds or matches threshold, entity will be marked as suspicious.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_create_url_misp_object",
        integration: INTEGRATION,
        action: "Create Url Misp Object",
        description: "Create a URL Object in MISP. Requires “URL” to be provided or “Use Entities“ parameter set to true.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event to which you want to add URL objects., URL: Specify the URL, which you want to add to the event., Port: Specify the port, which you want to add to the event., First seen: Specify, when the URL was first seen. Format: 2020-12-22T13:07:32Z, Last seen: Specify, when the URL was last seen. Format: 2020-12-22T13:07:32Z, Domain: Specify the domain, which you want to add to the event., Text: Specify the additional text, which you want to add to the event., IP: Specify the IP, which you want to add to the event., Host: Specify the Host, which you want to add to the event., Use Entities: If enabled, action will use entities in order to create objects. Supported entities: URL. \"Use Entities\" has priority over other parameters.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event to which you want to add URL objects.",
            ),
            ParamSpec::optional(
                "url",
                "URL",
                ParamKind::Text,
                "Specify the URL, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "port",
                "Port",
                ParamKind::Text,
                "Specify the port, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "first_seen",
                "First seen",
                ParamKind::Text,
                "Specify, when the URL was first seen. Format: 2020-12-22T13:07:32Z",
            ),
            ParamSpec::optional(
                "last_seen",
                "Last seen",
                ParamKind::Text,
                "Specify, when the URL was last seen. Format: 2020-12-22T13:07:32Z",
            ),
            ParamSpec::optional(
                "domain",
                "Domain",
                ParamKind::Text,
                "Specify the domain, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "text",
                "Text",
                ParamKind::Text,
                "Specify the additional text, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "ip",
                "IP",
                ParamKind::Text,
                "Specify the IP, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "host",
                "Host",
                ParamKind::Text,
                "Specify the Host, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "use_entities",
                "Use Entities",
                ParamKind::Flag,
                "If enabled, action will use entities in order to create objects. Supported entities: URL. “Use Entities“ has priority over other parameters.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_download_file",
        integration: INTEGRATION,
        action: "Download File",
        description: "Download files related to event in MISP.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event from which you want to download files, Download Folder Path: Specify the absolute path to the folder, which should store files. If nothing is specified, action will create an attachment instead. Note: JSON result is only available, when you provide proper value for this parameter., Overwrite: If enabled, action will overwrite existing files.",
        params: &[
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event from which you want to download files",
            ),
            ParamSpec::optional(
                "download_folder_path",
                "Download Folder Path",
                ParamKind::Text,
                "Specify the absolute path to the folder, which should store files. If nothing is specified, action will create an attachment instead. Note: JSON result is only available, when you provide proper value for this parameter.",
            ),
            ParamSpec::optional(
                "overwrite",
                "Overwrite",
                ParamKind::Flag,
                "If enabled, action will overwrite existing files.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_unset_ids_flag_for_an_attribute",
        integration: INTEGRATION,
        action: "Unset IDS Flag for an Attribute",
        description: "Unset IDS flag for attributes in MISP\n\nAction Parameters: Attribute Name: Specify a comma-separated list of attribute identifiers for which you want to unset an IDS flag. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values., Event ID: Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if \"Attribute Search\" is set to \"Provided Event\"., Category: Specify a comma-separated list of categories. If specified, action will only unset IDS flag for attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation., Type: Specify a comma-separated list of attribute types. If specified, action will only unset IDS flag for attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst, Attribute Search: Specify, where action should search for attributes. If \"Provided Event\" is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in \"Event ID\" parameter. If \"All Events\", action will search for attributes among all events and unset IDS flag for all attributes that match our criteria., Attribute UUID: Specify a comma-separated list of attribute UUIDs for which you want to unset an IDS flag. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values.",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers for which you want to unset an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to seach for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only unset IDS flag for attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only unset IDS flag for attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and unset IDS flag for all attributes that match our criteria.",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs for which you want to unset an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_upload_file",
        integration: INTEGRATION,
        action: "Upload File",
        description: "Upload a file to a MISP event.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event to which you want to upload this file., File Path: Specify a comma-separated list of absolute filepaths of the files that you want to upload to MISP., Category: Specify the category for the uploaded file. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation., Distribution: Specify the distribution for the uploaded file. Possible values: 0 - Organisation, 1 - Community, 2 - Connected, 3 - All. You can either provide a number or a string., Threat Level: Specify the threat level for the uploaded file. Possible values: 1 - High, 2 - Medium, 3 - Low, 4 - Undefined. You can either provide a number or a string., Analysis: Specify the analysis of the event.Possible values: 0 - Initial, 1 - Ongoing, 2 - Completed. You can either provide a number or a string., Info: Specify additional info for the uploaded file., For Intrusion Detection System: If enabled, uploaded file will be used for intrusion detection systems., Comment: Specify additional comments related to the uploaded file.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event to which you want to upload this file.",
            ),
            ParamSpec::required(
                "file_path",
                "File Path",
                ParamKind::Text,
                "Specify a comma-separated list of absolute filepaths of the files that you want to upload to MISP.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify the category for the uploaded file. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "distribution",
                "Distribution",
                ParamKind::Text,
                "Specify the distribution for the uploaded file. Possible values: 0 - Organisation, 1 - Community, 2 - Connected, 3 - All. You can either provide a number or a string.",
            ),
            ParamSpec::required(
                "for_intrusion_detection_system",
                "For Intrusion Detection System",
                ParamKind::Flag,
                "If enabled, uploaded file will be used for intrusion detection systems.",
            ),
            ParamSpec::optional(
                "comment",
                "Comment",
                ParamKind::Text,
                "Specify additional comments related to the uploaded file.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_add_attribute",
        integration: INTEGRATION,
        action: "Add Attribute",
        description: "Add attributes based on entities to the event in MISP. Supported hashes: MD5, SHA1, SHA224, SHA256, SHA384, SHA512, SSDeep.\n\nAction Parameters: Event ID: The ID of the event., Category: The category of the attribute. Default: External analysis., Distribution: The distribution of the attribute. Default: 1., For Intrusion Detection System: Whether the attribute is used for Intrusion Detection System. Default: false., Comment: The comment to add to the attribute.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "TheSpecify the ID or UUID of the event, for which you want to add attributes.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify the category for attributes. Possible values: Targeting data, Payload delivery, Artifacts dropped, Payload installation, Persistence mechanism, Network activity, Attribution, External analysis, Social network.",
            ),
            ParamSpec::optional(
                "distribution",
                "Distribution",
                ParamKind::Text,
                "Specify the distribution of the attribute. Possible values: 0 - Organisation, 1 - Community, 2 - Connected, 3 - All, 5 - Inherit. You can either provide a number or a string.",
            ),
            ParamSpec::required(
                "for_intrusion_detection_system",
                "For Intrusion Detection System",
                ParamKind::Flag,
                "If enabled, attribute will be labeled as eligible to create an IDS signature out of it.",
            ),
            ParamSpec::optional(
                "comment",
                "Comment",
                ParamKind::Text,
                "Specify comment related to attribute.",
            ),
            ParamSpec::optional(
                "fallback_ip_type",
                "Fallback IP Type",
                ParamKind::List,
                "Specify what should be the fallback attribute type for the IP address entity.",
            ),
            ParamSpec::optional(
                "fallback_email_type",
                "Fallback Email Type",
                ParamKind::List,
                "Specify what should be the fallback attribute type for the email address entity.",
            ),
            ParamSpec::optional(
                "extract_domain",
                "Extract Domain",
                ParamKind::Flag,
                "If enabled, action will extract domain out of URL entity.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_add_tag_to_an_attribute",
        integration: INTEGRATION,
        action: "Add Tag to an Attribute",
        description: "Add tags to attributes in MISP.\n\nAction Parameters: Event ID: The identifier of the event that the attribute is associated with. Example: 1., Tag Name: The name of the tag to add to an attribute., Attribute Name: The name identifier of the attribute to tag., Category: The category which the attribute belongs to. e.g. Payload Delivery., Type: The type of the attribute. e.g. filename., Object UUID: The unique identifier for an object in the event.",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers to which you want to add tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“ or Object UUID is provided.",
            ),
            ParamSpec::required(
                "tag_name",
                "Tag Name",
                ParamKind::Text,
                "Specify a comma-separated list of tags that you want to add to attributes.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only add tags to attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only add tags to attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::optional(
                "object_uuid",
                "Object UUID",
                ParamKind::Text,
                "Specify the uuid of the object that contains the desired attribute.",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs to which you want to add new tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and add sighting for all attributes that match our criteria.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_create_file_misp_object",
        integration: INTEGRATION,
        action: "Create File Misp Object",
        description: "Create a File Object in MISP. Requires one of: FILENAME, MD5, SHA1, SHA256, SSDEEP to be provided or “Use Entities“ parameter set to true.\n\nAction Parameters: Event ID: The unique identifier of the event to add the object. Example: 1, Filename: The filename of the file., MD5: The md5 hash value of the file., SHA1: The sha1 hash value of the file., SHA256: The sha256 hash value of the file., SSDEEP: The ssdeep value of the file Example: 96:p5aAS1tN0M3t9AnTNuG6TNOt5PR1TNZdkljOXTNSnKTF3X7KsTFW+kLtW6K8i7bI:p5mb4rgQhRp7GljCbF3LKqFjkwxtU, Imphash: The MD5 hash value calculated from the imported table.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event for which you want to add file objects.",
            ),
            ParamSpec::optional(
                "filename",
                "FILENAME",
                ParamKind::Text,
                "Specify the name of the file, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "md5",
                "MD5",
                ParamKind::Text,
                "Specify the md5 of the file, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "sha1",
                "SHA1",
                ParamKind::Text,
                "Specify the sha1 of the file, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "sha256",
                "SHA256",
                ParamKind::Text,
                "Specify the sha256 of the file, which you want to add to the event.",
            ),
            ParamSpec::optional(
                "ssdeep",
                "SSDEEP",
                ParamKind::Text,
                "Specify the ssdeep of the file, which you want to add to the event. Format: size:hash:hash",
            ),
            ParamSpec::optional(
                "use_entities",
                "Use Entities",
                ParamKind::Flag,
                "If enabled, action will use entities in order to create objects. Supported entities: File name and hash. “Use Entities“ has priority over other parameters.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_get_related_events",
        integration: INTEGRATION,
        action: "Get Related Events",
        description: "Retrieve information about events that are related to entities in MISP.\n\nAction Parameters: Mark As Suspicious: If enabled, action will mark entity as suspicious, if there is at least one related event to it.",
        params: &[
            ParamSpec::optional(
                "events_limit",
                "Events Limit",
                ParamKind::Text,
                "Specify max amount of events to fetch. If not specified, all events will be fetched.",
            ),
            ParamSpec::optional(
                "mark_as_suspicious",
                "Mark As Suspicious",
                ParamKind::Flag,
                "If enabled, action will mark entity as suspicious, if there is at least one related event to it.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_publish_event",
        integration: INTEGRATION,
        action: "Publish Event",
        description: "The action allows the user to publish an event. Publishing an event shares it to the sharing group selected, making it visible to all members.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event that you want to publish.",
        params: &[
            ParamSpec::required(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event that you want to publish.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_list_sightings_of_an_attribute",
        integration: INTEGRATION,
        action: "List Sightings of an Attribute",
        description: "List available sightings for attributes in MISP\n\nAction Parameters: Attribute Name: Specify a comma-separated list of attribute identifiers for which you want to list sightings. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values., Event ID: Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if \"Attribute Search\" is set to \"Provided Event\"., Category: Specify a comma-separated list of categories. If specified, action will only list sightings for attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation., Type: Specify a comma-separated list of attribute types. If specified, action will only list sightings for attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst, Attribute Search: Specify, where action should search for attributes. If \"Provided Event\" is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in \"Event ID\" parameter. If \"All Events\", action will search for attributes among all events and list sightings for all attributes that match our criteria., Attribute UUID: Specify a comma-separated list of attribute UUIDs for which you want to list sightings. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values.",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers for which you want to list sightings. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to seach for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only list sightings for attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only list sightings for attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and list sightings for all attributes that match our criteria.",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs for which you want to list sightings. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "misp_delete_an_attribute",
        integration: INTEGRATION,
        action: "Delete an Attribute",
        description: "Delete attributes in MISP. Supported hashes: MD5, SHA1, SHA224, SHA256, SHA384, SHA512, SSDeep.\n\nAction Parameters: Event ID: Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if \"Attribute Search\" is set to \"Provided Event\"., Attribute Name: Specify a comma-separated list of attribute identifiers that you want to delete. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values., Category: Specify a comma-separated list of categories. If specified, action will only delete attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation., Type: Specify a comma-separated list of attribute types. If specified, action will only delete attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst, Object UUID: The unique identifier for an object in the event., Attribute Search: Specify, where action should search for attributes. If \"Provided Event\" is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in \"Event ID\" parameter. If \"All Events\", action will search for attributes among all events and delete all attributes that match our criteria., Attribute UUID: Specify a comma-separated list of attribute UUIDs that you want to delete. Note: If both \"Attribute Name\" and \"Attribute UUID\" are specified, action will work with \"Attribute UUID\" values.",
        params: &[
            ParamSpec::optional(
                "attribute_name",
                "Attribute Name",
                ParamKind::Text,
                "Specify a comma-separated list of attribute identifiers that you want to delete. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "event_id",
                "Event ID",
                ParamKind::Text,
                "Specify the ID or UUID of the event, where to search for attributes. This parameter is required, if “Attribute Search“ is set to “Provided Event“ or Object UUID is provided.",
            ),
            ParamSpec::optional(
                "category",
                "Category",
                ParamKind::Text,
                "Specify a comma-separated list of categories. If specified, action will only delete attributes that have matching category. If nothing is specified, action will ignore categories in attributes. Possible values: External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::optional(
                "type",
                "Type",
                ParamKind::Text,
                "Specify a comma-separated list of attribute types. If specified, action will only delete attributes that have matching attribute type. If nothing is specified, action will ignore types in attributes. Example values: md5, sha1, ip-src, ip-dst",
            ),
            ParamSpec::optional(
                "object_uuid",
                "Object UUID",
                ParamKind::Text,
                "Specify the uuid of the object that contains the desired attribute",
            ),
            ParamSpec::optional(
                "attribute_uuid",
                "Attribute UUID",
                ParamKind::Text,
                "Specify a comma-separated list of attribute UUIDs that you want to delete. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::optional(
                "attribute_search",
                "Attribute Search",
                ParamKind::List,
                "Specify, where action should search for attributes. If “Provided Event“ is selected, action will only search for attributes or attribute UUIDs in event with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will search for attributes among all events and delete all attributes that match our criteria.",
            ),
        ],
    },
];
