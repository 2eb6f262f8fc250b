//! ConnectWise Manage ticketing actions.

use crate::actions::{ActionDescriptor, ParamKind, ParamSpec};

pub const INTEGRATION: &str = "ConnectWise";

pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        tool_name: "connect_wise_create_ticket",
        integration: INTEGRATION,
        action: "Create Ticket",
        description: "Create a ConnectWise ticket\n\nAction Parameters: Company: Company name., Board: Board name, Summary: , Status: e.g. Unassigned., Priority: Example: Priority 3 - Normal Response, Owner Name: ConnectWise member name to assign this ticket to. Example: connectwise_user_1",
        params: &[
            ParamSpec::required(
                "company",
                "Company",
                ParamKind::Text,
                "Company identifier",
            ),
            ParamSpec::optional(
                "owner_name",
                "Owner Name",
                ParamKind::Text,
                "ConnectWise member name to assign this ticket to, e.g. connectwise_user_1.",
            ),
            ParamSpec::required(
                "board",
                "Board",
                ParamKind::Text,
                "Board name",
            ),
            ParamSpec::required(
                "summary",
                "Summary",
                ParamKind::Text,
                "Specify the summary for the new ticket. Note: if the summary is more than 100 characters, it will be truncated.",
            ),
            ParamSpec::required(
                "status",
                "Status",
                ParamKind::Text,
                "e.g. Unassigned",
            ),
            ParamSpec::required(
                "priority",
                "Priority",
                ParamKind::Text,
                "e.g. Priority 3 - Normal Response",
            ),
            ParamSpec::optional(
                "email_note_cc",
                "Email Note CC",
                ParamKind::Text,
                "Specify a comma-separated list of email addresses that should receive all of the notes via email.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_add_comment_to_ticket",
        integration: INTEGRATION,
        action: "Add Comment To Ticket",
        description: "Add new comment to a ticket in ConnectWise\n\nAction Parameters: Ticket ID: ConnectWise ticket ID.Example: 608718, Comment: Comment content to attach to a ticket., Internal: If checked, puts comment in the internal section.",
        params: &[
            ParamSpec::required(
                "ticket_id",
                "Ticket Id",
                ParamKind::Text,
                "ConnectWise ticket id. e.g. 608718",
            ),
            ParamSpec::required(
                "comment",
                "Comment",
                ParamKind::Text,
                "Comment content to attach to a ticket",
            ),
            ParamSpec::optional(
                "internal",
                "Internal",
                ParamKind::Flag,
                "If checked, put comment in internal section",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_get_ticket",
        integration: INTEGRATION,
        action: "Get Ticket",
        description: "Get ConnectWise ticket by ID and attach ticket JSON as a file\n\nAction Parameters: Ticket ID: Fetch a ticket by ID.",
        params: &[
            ParamSpec::required(
                "ticket_id",
                "Ticket Id",
                ParamKind::Text,
                "Fetch ticket by ID",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_create_alerts_ticket",
        integration: INTEGRATION,
        action: "Create Alerts Ticket",
        description: "Create a ConnectWise ticket for each new Siemplify alert\n\nAction Parameters: Company: Company name., Board: Board name., Status: Example: Unassigned, Priority: Example: Priority 3 - Normal Response, Initial Description: , Owner Name: ConnectWise member name to assign this ticket to.Example: connectwise_user_1.",
        params: &[
            ParamSpec::required(
                "company",
                "Company",
                ParamKind::Text,
                "Company identifier",
            ),
            ParamSpec::optional(
                "owner_name",
                "Owner Name",
                ParamKind::Text,
                "ConnectWise member name to assign this ticket to, e.g. connectwise_user_1.",
            ),
            ParamSpec::required(
                "board",
                "Board",
                ParamKind::Text,
                "Board name",
            ),
            ParamSpec::required(
                "status",
                "Status",
                ParamKind::Text,
                "e.g. Unassigned",
            ),
            ParamSpec::required(
                "priority",
                "Priority",
                ParamKind::Text,
                "e.g. Priority 3 - Normal Response",
            ),
            ParamSpec::required(
                "initial_description",
                "Initial Description",
                ParamKind::Text,
                "",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_ping",
        integration: INTEGRATION,
        action: "Ping",
        description: "Test Connectivity",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "connect_wise_close_ticket",
        integration: INTEGRATION,
        action: "Close Ticket",
        description: "Close ConnectWise ticket\n\nAction Parameters: Ticket ID: ConnectWise ticket ID. Example: 608718., Custom Close Status: If the specific system uses a custom closed status, for example Completed.",
        params: &[
            ParamSpec::required(
                "ticket_id",
                "Ticket Id",
                ParamKind::Text,
                "ConnectWise ticket id. e.g. 608718",
            ),
            ParamSpec::optional(
                "custom_close_status",
                "Custom Close Status",
                ParamKind::Text,
                "If the specific system use a custom closed status (e.g. Completed)",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_add_attachment_to_ticket",
        integration: INTEGRATION,
        action: "Add Attachment To Ticket",
        description: "Add an attachment to the ticket in ConnectWise.",
        params: &[
            ParamSpec::optional(
                "allow_only_owner_update",
                "Allow Only Owner Update",
                ParamKind::Flag,
                "If enabled, action will only allow the owner to update the attachment.",
            ),
            ParamSpec::optional(
                "display_in_customer_portal",
                "Display In Customer Portal",
                ParamKind::Flag,
                "If enabled, attachment will be shown in the customer portal.",
            ),
            ParamSpec::required(
                "filename",
                "Filename",
                ParamKind::Text,
                "Specify the filename behind the attachment. This value will be also used as a title. Note: action needs to provide the correct extension for the file.",
            ),
            ParamSpec::required(
                "base64_encoded_file",
                "Base64 Encoded File",
                ParamKind::Text,
                "Specify the base64 encoded file that needs to be added as an attachment.",
            ),
            ParamSpec::required(
                "ticket_id",
                "Ticket ID",
                ParamKind::Text,
                "Specify the ID of the ticket to which the document would need to be added.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_update_ticket",
        integration: INTEGRATION,
        action: "Update Ticket",
        description: "Update ticket details in ConnectWIse\n\nAction Parameters: Parameter: Description, Ticket ID: The ID of the ticket to be updated. Example: 609620, Summary: Updated summary., Type Name: Example: Application, SubType Name: Example: Adobe, Item Name: Example: Development, Status: New ticket status. Example: In Progress (plan of action)",
        params: &[
            ParamSpec::required(
                "ticket_id",
                "Ticket Id",
                ParamKind::Text,
                "Ticket ID to be updated. e.g. 609620",
            ),
            ParamSpec::optional(
                "summary",
                "Summary",
                ParamKind::Text,
                "Specify the summary for the updated ticket. Note: if the summary is more than 100 characters, it will be truncated.",
            ),
            ParamSpec::optional(
                "type_name",
                "Type Name",
                ParamKind::Text,
                "e.g. Application",
            ),
            ParamSpec::optional(
                "sub_type_name",
                "SubType Name",
                ParamKind::Text,
                "e.g. Adobe",
            ),
            ParamSpec::optional(
                "item_name",
                "Item Name",
                ParamKind::Text,
                "e.g. Development",
            ),
            ParamSpec::optional(
                "owner_name",
                "Owner Name",
                ParamKind::Text,
                "ConnectWise member name to assign this ticket to, e.g. connectwise_user_1.",
            ),
            ParamSpec::optional(
                "board",
                "Board",
                ParamKind::Text,
                "Board name.",
            ),
            ParamSpec::optional(
                "priority",
                "Priority",
                ParamKind::Text,
                "e.g. Priority 3 - Normal Response.",
            ),
            ParamSpec::optional(
                "status",
                "Status",
                ParamKind::Text,
                "New ticket status, e.g. In Progress (plan of action)",
            ),
            ParamSpec::optional(
                "email_note_cc",
                "Email Note CC",
                ParamKind::Text,
                "Specify a comma-separated list of email addresses that should receive all of the notes via email.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "connect_wise_delete_ticket",
        integration: INTEGRATION,
        action: "Delete Ticket",
        description: "Delete ConnectWise ticket by ID\n\nAction Parameters: Ticket ID: The ID of the ticket to be deleted. Example: 607167",
        params: &[
            ParamSpec::required(
                "ticket_id",
                "Ticket Id",
                ParamKind::Text,
                "Ticket ID to be deleted. e.g. 607167",
            ),
        ],
    },
];
