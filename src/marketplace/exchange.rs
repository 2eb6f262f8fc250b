//! Microsoft Exchange mailbox actions.

use crate::actions::{ActionDescriptor, ParamKind, ParamSpec};

pub const INTEGRATION: &str = "Exchange";

pub static ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        tool_name: "exchange_unblock_sender_by_message_id",
        integration: INTEGRATION,
        action: "Unblock Sender by Message ID",
        description: "Action will get as a parameter a list of message IDs, and will be able to unmark it as junk. Unmarking an item as junk using this action will remove the item sender's mail address from the \"Blocked Senders List\". To move it back to the inbox, please tick the appropriate checkbox in the action parameters. NOTICE - to unmark emails in all mailboxes, please configure impersonation permissions: https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed. NOTE: Action is supported only from Exchange Server version 2013 and newer, if a lower version is used, action will fail with the appropriate message.",
        params: &[
            ParamSpec::required(
                "move_items_back_to_inbox",
                "Move items back to Inbox?",
                ParamKind::Flag,
                "Should the action move the specified messages back to the inbox folder",
            ),
            ParamSpec::optional(
                "message_i_ds",
                "Message IDs",
                ParamKind::Text,
                "Filter condition, specify emails with which email ids to find. Should accept comma separated list of message ids to unmark as junk. If message id is provided, subject, sender and recipient filters are ignored.",
            ),
            ParamSpec::optional(
                "mailboxes_list_to_perform_on",
                "Mailboxes list to perform on",
                ParamKind::Text,
                "Filter condition, If you have a specific list of mailboxes you would like to conduct the operation on, for better timing, please provide them here. Should accept a comma separated list of mail addresses to unmark the messages as junk in. If a mailboxes list is provided, \"Perform Action in all Mailboxes\" parameter will be ignored.",
            ),
            ParamSpec::optional(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::optional(
                "subject_filter",
                "Subject Filter",
                ParamKind::Text,
                "Filter condition, specify subject to search for emails",
            ),
            ParamSpec::optional(
                "sender_filter",
                "Sender Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the sender of needed emails",
            ),
            ParamSpec::optional(
                "recipient_filter",
                "Recipient Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the recipient of needed emails",
            ),
            ParamSpec::optional(
                "unmark_all_matching_emails",
                "Unmark All Matching Emails",
                ParamKind::Flag,
                "Filter condition, specify if action should Unmark all matched by criteria emails from the mailbox or Unmark only first match.",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, move to junk and block sender emails in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action  in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
            ParamSpec::optional(
                "time_frame_minutes",
                "Time Frame (minutes)",
                ParamKind::Text,
                "Filter condition, specify in what time frame in minutes should action look for emails.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_send_mail",
        integration: INTEGRATION,
        action: "Send Mail",
        description: "Send Email from specific mailbox to an arbitrary list of recipients. Action can be used to inform users about specific alerts created in the Siemplify or inform about the results of processing of specific alerts.",
        params: &[
            ParamSpec::required(
                "subject",
                "Subject",
                ParamKind::Text,
                "The mail subject part",
            ),
            ParamSpec::required(
                "send_to",
                "Send to",
                ParamKind::Text,
                "Arbitrary comma separated list of email addresses for the email recipients. For example: user1@company.co, user2@company.co",
            ),
            ParamSpec::optional(
                "cc",
                "CC",
                ParamKind::Text,
                "Arbitrary comma separated list of email addresses to be put in the CC field of email. Format is the same as for the \"Send to\" field",
            ),
            ParamSpec::optional(
                "bcc",
                "BCC",
                ParamKind::Text,
                "Arbitrary comma separated list of email addresses to be put in the BCC field of email. Format is the same as for the \"Send to\" field",
            ),
            ParamSpec::optional(
                "attachments_paths",
                "Attachments Paths",
                ParamKind::Text,
                "Comma separated list of attachments file paths stored on the server for addition to the email. For example: C:\\<Siemplify work dir>\\file1.pdf, C:\\<Siemplify work dir>\\image2.jpg",
            ),
            ParamSpec::required(
                "mail_content",
                "Mail content",
                ParamKind::Email,
                "The email body part",
            ),
            ParamSpec::optional(
                "reply_to_recipients",
                "Reply-To Recipients",
                ParamKind::Text,
                "Specify a comma-separated list of recipients that will be used in the \"Reply-To\" header. Note: The Reply-To header is added when the originator of the message wants any replies to the message to go to that particular email address rather than the one in the \"From:\" address.",
            ),
            ParamSpec::optional(
                "base64_encoded_certificate",
                "Base64 Encoded Certificate",
                ParamKind::Text,
                "Specify a base64 encoded certificate that will be used to either encrypt or sign the email. Note: for signing you need to also provide \"Base64 Encoded Signature\". For encryption, only this parameter needs to have a value.",
            ),
            ParamSpec::optional(
                "base64_encoded_signature",
                "Base64 Encoded Signature",
                ParamKind::Text,
                "Specify a base64 encoded signature that will be used to sign the email. Note: \"Base64 Encoded Certificate\" needs to be provided as well for signature to work and contain the signing certificate.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_add_domains_to_exchange_siemplify_inbox_rules",
        integration: INTEGRATION,
        action: "Add Domains to Exchange-Siemplify Inbox Rules",
        description: "Action will get as a parameter a list of Domains, and will be able to create or update a rule, filtering the domains from your mailboxes. Actions can be modified in the parameters using rule parameter. WARNING: Action will modify your current users inbox rules, using EWS. NOTICE - to perform operation, please configure EDiscovery Group and Author permissions. For full details, please visit: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/exchang. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.",
        params: &[
            ParamSpec::optional(
                "domains",
                "Domains",
                ParamKind::Text,
                "Specify the Domains you would like to add to the rule, in a comma separated list.",
            ),
            ParamSpec::required(
                "rule_to_add_domains_to",
                "Rule to add Domains to",
                ParamKind::List,
                "Specify the rule to add the Domains to. If the rule doesn't exist - action will create it where it's missing.",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, action will be performed in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_send_thread_reply",
        integration: INTEGRATION,
        action: "Send Thread Reply",
        description: "Send a message as a reply to the email thread.\n\nAction Parameters: Message ID: Required The ID of the message to send a reply to., Folder Name: Required A comma-separated list of mailbox folders in which to run a search for an email.You can set mail-specific folders, for example, Gmail/All Mail to run a search in all of the Gmail mailbox folders. Additionally, the folder name must match the IMAP folder. If the folder name contains spaces, wrap spaces in double quotes. The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Content: Required A content of the reply., Attachment Paths: Optional A comma-separated list of paths to file attachments stored on the server., Reply All: Optional If selected, the action sends a reply to all recipients related to the original email and the ignores the Reply To parameter.Selected by default., Reply To: Required A comma-separated list of emails to send the reply to. If you don't set a value and don't select the Reply All parameter, the action only sends a reply to the sender of the email. If you select the Reply All parameter, the action ignores this parameter.",
        params: &[
            ParamSpec::required(
                "message_id",
                "Message ID",
                ParamKind::Text,
                "Specify the ID of the message to which you want to send a reply.",
            ),
            ParamSpec::required(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "content",
                "Content",
                ParamKind::Email,
                "Specify the content of the reply.",
            ),
            ParamSpec::optional(
                "attachments_paths",
                "Attachments Paths",
                ParamKind::Text,
                "Specify a comma separated list of attachments file paths stored on the server for addition to the email.",
            ),
            ParamSpec::required(
                "reply_all",
                "Reply All",
                ParamKind::Flag,
                "If enabled, action will send a reply to all recipients related to the original email. Note: this parameter has priority over “Reply To“ parameter.",
            ),
            ParamSpec::optional(
                "reply_to",
                "Reply To",
                ParamKind::Text,
                "Specify a comma-separated list of emails to which you want to send this reply. If nothing is provided and “Reply All“ is disabled, action will only send a reply to the sender of the email. If “Reply All“ is enabled, action will ignore this parameter.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_search_mails",
        integration: INTEGRATION,
        action: "Search Mails",
        description: "Search for specific emails in configured mailbox using multiple provided search criteria. Action return information on found in mailbox emails in JSON format. NOTICE - to search for an email in all mailboxes, please configure impersonation permissions. https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange. Note: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.\n\nAction Parameters: Folder Name: Optional A mailbox folder to search an email in.This parameter accepts a comma-separated list of folders.The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Subject Filter: Optional A filter condition which specifies the email subject to search for., Sender Filter: Optional A filter condition to specify the sender of requested emails., Recipient Filter: Optional A filter condition to specify the recipient of requested emails., Time Frame (minutes): Optional A period in minutes to search for emails., Only Unread: Optional If selected, the action searches only for unread emails. Not selected by default., Max Emails To Return: OptionalThe maximum number of emails to return in the action result., Search in all mailboxes: OptionalIf selected, the action runs a search in all mailboxes that are accessible using current impersonation settings. Not selected by default., How many mailboxes to process in a single batch: Required The number of mailboxes to process in a single batch (single connection to the mail server).If you select the Search in all mailboxes parameter, the action works in batches. The default value is 25., Start Time: OptionalThe start time for running the email search. The format to use is ISO 8601. This parameter has a priority over the Time Frame (minutes) parameter., End Time: OptionalThe end time for running the email search. The format to use is ISO 8601. If you don't set a value and the Start Time parameter is valid, the action sets the End Time value to the current time., Mailboxes: Optional A comma-separated list of mailboxes to run a search through.This parameter has priority over the Search in all mailboxes parameter., Message IDs: Optional A comma-separated list of message IDs to search for. This filter has priority over other filter conditions., Body Regex Filter: OptionalA regular expression pattern to search for in the email body.",
        params: &[
            ParamSpec::optional(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::optional(
                "message_i_ds",
                "Message IDs",
                ParamKind::Text,
                "Specify a comma-separated list of message ids that need to be searched. Note: this filter has priority over the other ones.",
            ),
            ParamSpec::optional(
                "subject_filter",
                "Subject Filter",
                ParamKind::Text,
                "Filter condition, specify what subject to search for emails",
            ),
            ParamSpec::optional(
                "sender_filter",
                "Sender Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the sender of needed emails",
            ),
            ParamSpec::optional(
                "recipient_filter",
                "Recipient Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the recipient of needed emails",
            ),
            ParamSpec::optional(
                "time_frame_minutes",
                "Time Frame (minutes)",
                ParamKind::Text,
                "Filter condition, specify in what time frame in minutes should action look for emails",
            ),
            ParamSpec::optional(
                "only_unread",
                "Only Unread",
                ParamKind::Flag,
                "Filter condition, specify if search should look only for unread emails",
            ),
            ParamSpec::optional(
                "max_emails_to_return",
                "Max Emails To Return",
                ParamKind::Text,
                "Return max X emails as an action result",
            ),
            ParamSpec::optional(
                "search_in_all_mailboxes",
                "Search in all mailboxes",
                ParamKind::Flag,
                "If checked, search in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Search in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
            ParamSpec::optional(
                "mailboxes",
                "Mailboxes",
                ParamKind::Text,
                "Specify a comma-separated list of mailboxes that need to be searched. This parameter has priority over \"Search in all mailboxes\".",
            ),
            ParamSpec::optional(
                "start_time",
                "Start Time",
                ParamKind::Text,
                "Specify the start time for the email search. Format: ISO 8601. This parameter has a priority over \"Time Frame (minutes)\".",
            ),
            ParamSpec::optional(
                "end_time",
                "End Time",
                ParamKind::Text,
                "Specify the end time for the email search. Format: ISO 8601. If nothing is provided and \"Start Time\" is valid then this parameter will use current time.",
            ),
            ParamSpec::optional(
                "body_regex_filter",
                "Body Regex Filter",
                ParamKind::Text,
                "Specify a regex pattern that needs to be searched in body part of the email.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_wait_for_vote_mail_results",
        integration: INTEGRATION,
        action: "Wait for Vote Mail Results",
        description: "Use this action to fetch the responses of a vote mail sent by the \"Send Vote Mail\" action, in order to wait for the responses and get them inside Siemplify.\n\nAction Parameters: Vote Mail message_id: Required The message ID of the vote email.If the message is sent using the Send Vote Mail action, select the SendVoteMail.JSONResult|message_id field as a placeholder., Mail Recipients: Required A comma-separated list of recipient emails the current action awaits the response from.Select the SendVoteMail.JSONResult|to_recipients field as a placeholder., Folder to Check for Reply: Required A mailbox folder to search for the user reply in. The action runs a search in the mailbox which the email containing a question was sent from.This parameter also accepts a comma-separated list of folders. The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore. This parameter is case-sensitive. The default value is Inbox., Folder to Check for Sent Mail: Required A mailbox folder to search for the sent mail in. The action runs a search in the mailbox which the email containing a question was sent from. This parameter also accepts a comma-separated list of folders. The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore.This parameter is case-sensitive. The default value is Sent Items., How long to wait for recipient reply (minutes): Required A period for the action to wait for the user reply before marking it as timed out.The default value is 1440 minutes., Wait for All Recipients to Reply?: Optional If selected, the action waits for responses from all recipients until reaching a timeout or proceeding with the first reply. Selected by default.",
        params: &[
            ParamSpec::required(
                "vote_mail_message_id",
                "Vote Mail message_id",
                ParamKind::Text,
                "Message_id of the vote email, which current action would be waiting for. If message has been sent using Send Vote Mail action, please select SendVoteMail.JSONResult|message_id field as a placeholder.",
            ),
            ParamSpec::required(
                "mail_recipients",
                "Mail Recipients",
                ParamKind::Text,
                "Comma-separated list of recipient emails, response from which current action would be waiting for. Please select SendVoteMail.JSONResult|to_recipients field as a placeholder.",
            ),
            ParamSpec::required(
                "folder_to_check_for_reply",
                "Folder to Check for Reply",
                ParamKind::Text,
                "Parameter can be used to specify mailbox email folder (mailbox that was used to send the email with question) to search for the user reply in this folder. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "folder_to_check_for_sent_mail",
                "Folder to check for Sent Mail",
                ParamKind::Text,
                "Parameter can be used to specify mailbox email folder (mailbox that was used to send the email with question) to search for the sent mail in this folder. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive.",
            ),
            ParamSpec::required(
                "how_long_to_wait_for_recipient_reply_minutes",
                "How long to wait for recipient reply (minutes)",
                ParamKind::Text,
                "How long in minutes to wait for the user's reply before marking it timed out.",
            ),
            ParamSpec::optional(
                "wait_for_all_recipients_to_reply",
                "Wait for All Recipients to Reply?",
                ParamKind::Flag,
                "Parameter can be used to define if there are multiple recipients - should the Action wait for responses from all of recipients until timeout, or Action should wait for first reply to proceed.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_generate_token",
        integration: INTEGRATION,
        action: "Generate Token",
        description: "For integration configuration with Oauth authentication, get a refresh token using the authorization URL received in the Get Authorization action.",
        params: &[
            ParamSpec::required(
                "authorization_url",
                "Authorization URL",
                ParamKind::Text,
                "Use the authorization URL received in the Get Authorization URL action to request a refresh token.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_send_vote_mail",
        integration: INTEGRATION,
        action: "Send Vote Mail",
        description: "Send emails with easy answering options, to allow stakeholders to be combined in the automated processes without accessing the Siemplify UI.",
        params: &[
            ParamSpec::required(
                "subject",
                "Subject",
                ParamKind::Text,
                "The mail subject part",
            ),
            ParamSpec::required(
                "send_to",
                "Send To",
                ParamKind::Text,
                "Arbitrary comma separated list of email addresses for the email recipients. For example: user1@company.co, user2@company.co",
            ),
            ParamSpec::optional(
                "cc",
                "CC",
                ParamKind::Text,
                "Arbitrary comma separated list of email addresses to be put in the CC field of email. Format is the same as for the \"Send to\" field",
            ),
            ParamSpec::optional(
                "bcc",
                "BCC",
                ParamKind::Text,
                "Arbitrary comma separated list of email addresses to be put in the BCC field of email. Format is the same as for the \"Send to\" field",
            ),
            ParamSpec::optional(
                "attachments_paths",
                "Attachments Paths",
                ParamKind::Text,
                "Comma separated list of attachments file paths stored on the server for addition to the email. For example: C:\\<Siemplify work dir>\\file1.pdf, C:\\<Siemplify work dir>\\image2.jpg",
            ),
            ParamSpec::required(
                "question_or_decision_description",
                "Question or Decision Description",
                ParamKind::Email,
                "The question you would like to ask, or describe the decision you would like the recipient to be able to respond to",
            ),
            ParamSpec::required(
                "structure_of_voting_options",
                "Structure of voting options",
                ParamKind::List,
                "Choose the structure of the vote to be sent to the recipients",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_list_exchange_siemplify_inbox_rules",
        integration: INTEGRATION,
        action: "List Exchange-Siemplify Inbox Rules",
        description: "Action will get as a parameter a rule name, from the Exchange-Siemplify Inbox rules, and will list it. If no mailboxes to list for will be provided, the rules for the logged in user will be listed. NOTICE - to perform operation, please configure EDiscovery Group and Author permissions. For full details, please visit: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/exchang. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.",
        params: &[
            ParamSpec::required(
                "rule_name_to_list",
                "Rule Name To List",
                ParamKind::List,
                "Specify the Rule name you would like to list from the relevant mailboxes",
            ),
            ParamSpec::optional(
                "mailboxes_list_to_perform_on",
                "Mailboxes list to perform on",
                ParamKind::Text,
                "Filter condition, If you have a specific list of mailboxes you would like to conduct the operation on, for better timing, please provide them here. Should accept a comma separated list of mail addresses to list the rules from. If a mailboxes list is provided, \"Perform Action in all Mailboxes\" parameter will be ignored.",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, action will be performed in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_delete_exchange_siemplify_inbox_rules",
        integration: INTEGRATION,
        action: "Delete Exchange-Siemplify Inbox Rules",
        description: "Action will get as a parameter a rule name and will delete it from all the specified mailboxes. WARNING: Action will modify your current users inbox rules, using EWS. NOTICE - to perform operation, please configure EDiscovery Group and Author permissions. For full details, please visit: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/exchang. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.",
        params: &[
            ParamSpec::required(
                "rule_name_to_delete",
                "Rule Name To Delete",
                ParamKind::List,
                "Specify the Rule name you would like to completely delete from the relevant mailboxes",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, action will be performed in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_move_mail_to_folder",
        integration: INTEGRATION,
        action: "Move Mail To Folder",
        description: "Move one or multiple emails from source email folder to another folder in mailbox. NOTICE - to search and move emails in all mailboxes, please configure impersonation permissions. https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange. Note: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.\n\nAction Parameters: Source Folder Name: Required A source folder to move emails from., Destination Folder Name: Required A destination folder to move emails to., Subject Filter: Optional A filter condition to search emails by specific subject., Message IDs: Optional A filter condition to search for emails with specific email IDs. This parameter also accepts a comma-separated list of message IDs to search for. If you provide the message ID, the action ignores the Subject Filter parameter., Only Unread: Optional A filter condition to search only for unread emails. Not selected by default., Move In All Mailboxes: Optional If selected, the action searches and moves emails in all mailboxes accessible through current impersonalization settings. Not selected by default., How many mailboxes to process in a single batch: Required The number of mailboxes to process in a single batch (single connection to the mail server).If you select the Move In All Mailboxes parameter, the action works in batches. The default value is 25., Time Frame (minutes): Optional A period in minutes to search for emails., Limit the Amount of Information Returned in the JSON Result: Optional If selected, the action returns information only about the key email fields. If not selected, the action returns information about all email fields.Selected by default., Disable the Action JSON Result: Optional If selected, the action doesn't return the JSON result. Not selected by default.",
        params: &[
            ParamSpec::required(
                "source_folder_name",
                "Source Folder Name",
                ParamKind::Text,
                "Source folder to move emails from. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "destination_folder_name",
                "Destination Folder Name",
                ParamKind::Text,
                "Destination folder to move emails to. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::optional(
                "source_mailbox",
                "Source Mailbox",
                ParamKind::Text,
                "Specify the source mailbox to move the email from. Parameter accepts multiple values as a comma-separated string. If multiple values are provided, matching emails are copied from every accessible specified mailbox",
            ),
            ParamSpec::optional(
                "destination_mailbox",
                "Destination Mailbox",
                ParamKind::Text,
                "Specify the destination mailbox to move the matching emails to",
            ),
            ParamSpec::optional(
                "message_i_ds",
                "Message IDs",
                ParamKind::Text,
                "Filter condition, specify emails with which email ids to find. Should accept comma separated multiple message ids. If message id is provided, subject filter is ignored",
            ),
            ParamSpec::optional(
                "subject_filter",
                "Subject Filter",
                ParamKind::Text,
                "Filter condition, specify what subject to search for emails",
            ),
            ParamSpec::optional(
                "only_unread",
                "Only Unread",
                ParamKind::Flag,
                "Filter condition, specify if search should look only for unread emails",
            ),
            ParamSpec::optional(
                "move_in_all_mailboxes",
                "Move in all mailboxes",
                ParamKind::Flag,
                "If checked, search and move emails in all mailboxes accessible with current impersonalization settings. If the source or destination mailbox is specified, this parameter is ignored. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Move in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
            ParamSpec::optional(
                "time_frame_minutes",
                "Time Frame (minutes)",
                ParamKind::Text,
                "Filter condition, specify in what time frame in minutes should action look for emails",
            ),
            ParamSpec::optional(
                "limit_the_amount_of_information_returned_in_the_json_result",
                "Limit the Amount of Information Returned in the JSON Result",
                ParamKind::Flag,
                "If enabled, the amount of information returned by the action will be limited only to the key email fields.",
            ),
            ParamSpec::optional(
                "disable_the_action_json_result",
                "Disable the Action JSON Result",
                ParamKind::Flag,
                "If enabled, action will not return JSON result.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_send_email_and_wait",
        integration: INTEGRATION,
        action: "Send Email And Wait",
        description: "Send email and wait action, Send to field is comma separated. Note: Sender's display name can be configured in the client under the account settings",
        params: &[
            ParamSpec::required(
                "subject",
                "Subject",
                ParamKind::Text,
                "The subject of the email",
            ),
            ParamSpec::required(
                "send_to",
                "Send to",
                ParamKind::Text,
                "Recipient email address. Multiple addresses can be separated by commas",
            ),
            ParamSpec::optional(
                "cc",
                "CC",
                ParamKind::Text,
                "CC email address. Multiple addresses can be separated by commas",
            ),
            ParamSpec::optional(
                "bcc",
                "BCC",
                ParamKind::Text,
                "bcc email address. Multiple addresses can be separated by commas",
            ),
            ParamSpec::required(
                "mail_content",
                "Mail content",
                ParamKind::Email,
                "Email body",
            ),
            ParamSpec::optional(
                "fetch_response_attachments",
                "Fetch Response Attachments",
                ParamKind::Flag,
                "Allows attachment of files from response mail.",
            ),
            ParamSpec::optional(
                "folder_to_check_for_reply",
                "Folder to Check for Reply",
                ParamKind::Text,
                "Parameter can be used to specify mailbox email folder (mailbox that was used to send the email with question) to search for the user reply in this folder. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_ping",
        integration: INTEGRATION,
        action: "Ping",
        description: "Test connectivity to Microsoft Exchange instance with parameters provided at the integration configuration page on Marketplace tab.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "exchange_extract_eml_data",
        integration: INTEGRATION,
        action: "Extract EML Data",
        description: "Extract data from email's EML attachments.\n\nAction Parameters: Folder Name: Optional Folder to fetch an email from.Default value is Inbox. The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Message ID: Required Message ID, such as 1701cf01ba314032b2f1df43262a7723@example.com., Regex Map JSON: Optional Regular expression to select emails based on matching the email body part, for example, {ips: \\d{1,3}\\.\\d{1,3}\\.\\d{1,3}\\.\\d{1,3}}.",
        params: &[
            ParamSpec::optional(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Folder to fetch from. Default is Inbox. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "message_id",
                "Message ID",
                ParamKind::Text,
                "e.g. <1701cf01ba314032b2f1df43262a7723@gmail.com>",
            ),
            ParamSpec::optional(
                "regex_map_json",
                "Regex Map JSON",
                ParamKind::TextOrObject,
                "e.g. {ips: \\b\\\\d{1,3}\\\\.\\\\d{1,3}\\\\.\\\\d{1,3}\\\\.\\\\d{1,3}\\b}",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_remove_domains_from_exchange_siemplify_inbox_rules",
        integration: INTEGRATION,
        action: "Remove Domains from Exchange-Siemplify Inbox Rules",
        description: "Action will get as a parameter a list of Domains, and will be able to remove the provided domains from the existing rules. WARNING: Action will modify your current users inbox rules, using EWS. NOTICE - to perform operation, please configure EDiscovery Group and Author permissions. For full details, please visit: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/exchang. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.",
        params: &[
            ParamSpec::optional(
                "domains",
                "Domains",
                ParamKind::Text,
                "Specify the Domains you would like to remove from the rule, in a comma separated list.",
            ),
            ParamSpec::required(
                "rule_to_remove_domains_from",
                "Rule to remove Domains from",
                ParamKind::List,
                "Specify the rule to remove the Domains from. If the rule doesn’t exist - action will do nothing.",
            ),
            ParamSpec::optional(
                "remove_domains_from_all_available_rules",
                "Remove Domains from all available Rules",
                ParamKind::Flag,
                "Specify whether action should look for the provided domains in all of Siemplify inbox rules.",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, action will be performed in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_remove_senders_from_exchange_siemplify_inbox_rules",
        integration: INTEGRATION,
        action: "Remove Senders from Exchange-Siemplify Inbox Rules",
        description: "Action will get as a parameter a list of Senders, or will work on User entities (if parameters are not provided), and will be able to remove the provided Senders from the existing rules. WARNING: Action will modify your current users inbox rules, using EWS. NOTICE - to perform operation, please configure EDiscovery Group and Author permissions. For full details, please visit: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/exchang. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.",
        params: &[
            ParamSpec::optional(
                "senders",
                "Senders",
                ParamKind::Text,
                "Specify the Senders you would like to remove from the rule, in a comma separated list. If no parameter will be provided, action will work with entities.",
            ),
            ParamSpec::required(
                "rule_to_remove_senders_from",
                "Rule to remove Senders from",
                ParamKind::List,
                "Specify the rule to remove the Senders from. If the rule doesn't exist - action will do nothing.",
            ),
            ParamSpec::optional(
                "remove_senders_from_all_available_rules",
                "Remove Senders from all available Rules",
                ParamKind::Flag,
                "Specify whether action should look for the provided Senders in all of Siemplify inbox rules.",
            ),
            ParamSpec::optional(
                "should_remove_senders_domains_from_the_corresponding_domains_list_rule_as_well",
                "Should remove senders' domains from the corresponding Domains List rule as well?",
                ParamKind::Flag,
                "Specify whether the action should automatically take the domains of the provided email addresses and remove them as well from the corresponding domain rules (same rule action for domains)",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, action will be performed in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_save_mail_attachments_to_the_case",
        integration: INTEGRATION,
        action: "Save Mail Attachments To The Case",
        description: "Save email attachments from email stored in monitored mailbox to the Case Wall.\n\nAction Parameters: Folder Name: Required A mailbox folder to search an email in.This parameter also accepts a comma-separated list of folders.The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Message IDs: Required The message ID to find a specific email and download attachments from it., Attachment To Save: Optional If you don't configure this parameter, the action saves all email attachments to the Case Wall by default. Otherwise, the action saves only the attachment which you specified to the Case Wall.",
        params: &[
            ParamSpec::required(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "message_id",
                "Message ID",
                ParamKind::Text,
                "Message id to find an email to download attachments from.",
            ),
            ParamSpec::optional(
                "attachment_to_save",
                "Attachment To Save",
                ParamKind::Text,
                "If parameter is not specified - save all email attachments to the case wall. If parameter specified - save only matching attachment to the case wall.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_download_attachments",
        integration: INTEGRATION,
        action: "Download Attachments",
        description: "Download email attachments from email to specific file path on Siemplify server. NOTICE - to search for an email in all mailboxes, please configure impersonation permissions. https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange. Note: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed. Additionally, please note that if the downloaded attachments have \"/\" or \"\" characters in the names, those will be replaced with the '_' character.\n\nAction Parameters: Folder Name: Optional A mailbox folder to search an email in.This parameter accepts a comma-separated list of folders.The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Download Path: Required A path on the {{google_secops_name_short}} server to download email attachments., Message IDs: Optional A filter condition to search for emails with specific email IDs. This parameter accepts a comma-separated list of message IDs to search for. If you provide the message ID, the action ignores the Subject Filter parameter., Subject Filter: Optional A filter condition that specifies the email subject to search for., Sender Filter: Optional A filter condition that specifies the email sender to search for., Only Unread: Optional If selected, the action downloads attachments only from unread emails. Not selected by default., Download Attachments from EML: Optional If selected, the action downloads attachments from attached EML files. Not selected by default., Download Attachments to unique path?: Optional If selected, the action downloads attachments to a unique path under the value provided in the Download Path parameter to avoid overwriting the previously downloaded attachments. Not selected by default., Search in all mailboxes: Optional If selected, the action runs a search in all mailboxes accessible using the current impersonation settings.Not selected by default., How many mailboxes to process in a single batch: Required The number of mailboxes to process in a single batch (single connection to the mail server). If you selected the Search in all mailboxes parameter, the action works in batches.The default value is 25., Mailboxes: Optional A comma-separated list of mailboxes to run a search through.This parameter has a priority over the Search in all mailboxes parameter.",
        params: &[
            ParamSpec::required(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "download_path",
                "Download Path",
                ParamKind::Text,
                "File path on the server where to download the email attachments",
            ),
            ParamSpec::optional(
                "message_i_ds",
                "Message IDs",
                ParamKind::Text,
                "Filter condition, specify emails with which email ids to find. Should accept comma separated multiple message ids. If message id is provided, subject filter is ignored",
            ),
            ParamSpec::optional(
                "subject_filter",
                "Subject Filter",
                ParamKind::Text,
                "Filter condition to search emails by specific subject",
            ),
            ParamSpec::optional(
                "sender_filter",
                "Sender Filter",
                ParamKind::Text,
                "Filter condition to search emails by specific sender",
            ),
            ParamSpec::optional(
                "only_unread",
                "Only Unread",
                ParamKind::Flag,
                "If checked, download attachments only from unread emails",
            ),
            ParamSpec::optional(
                "download_attachments_from_eml",
                "Download Attachments from EML",
                ParamKind::Flag,
                "If checked, download attachments also from attached EML files",
            ),
            ParamSpec::optional(
                "download_attachments_to_unique_path",
                "Download Attachments to unique path?",
                ParamKind::Flag,
                "If checked, download attachments to unique path  under file path provided in “Download Path” parameter to avoid previously downloaded attachments overwrite.",
            ),
            ParamSpec::optional(
                "search_in_all_mailboxes",
                "Search in all mailboxes",
                ParamKind::Flag,
                "If checked, search in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Search in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
            ParamSpec::optional(
                "mailboxes",
                "Mailboxes",
                ParamKind::Text,
                "Specify a comma-separated list of mailboxes that need to be searched. This parameter has priority over \"Search in all mailboxes\".",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_send_mail_html",
        integration: INTEGRATION,
        action: "Send Mail HTML",
        description: "Send an email with HTML template content, Send to field is comma separated. Note: Sender's display name can be configured in the client under the account settings\n\nAction Parameters: Subject: Required The email subject., Send to: Required A comma-separated list of email addresses for the email recipients., CC: Optional A comma-separated list of email addresses for the email CC field., BCC: Optional A comma-separated list of email addresses for the email BCC field., Attachments Paths: Optional A comma-separated list of paths for file attachments stored on the server, for example, C:\\FILE_DIRECTORYile.pdf, C:\\FILE_DIRECTORY\\image.jpg., Mail content: Required The email body.",
        params: &[
            ParamSpec::required(
                "subject",
                "Subject",
                ParamKind::Text,
                "The subject of the email",
            ),
            ParamSpec::required(
                "send_to",
                "Send to",
                ParamKind::Text,
                "Recipient email address. Multiple addresses can be separated by commas",
            ),
            ParamSpec::optional(
                "cc",
                "CC",
                ParamKind::Text,
                "CC email address. Multiple addresses can be separated by commas",
            ),
            ParamSpec::optional(
                "bcc",
                "BCC",
                ParamKind::Text,
                "BCC email address. Multiple addresses can be separated by commas",
            ),
            ParamSpec::optional(
                "attachments_paths",
                "Attachments Paths",
                ParamKind::Text,
                "Full path to attachments to be uploaded. Comma sepreated. e.g. C:\\Desktop\\x.txt,C:\\Desktop\\sample.txt",
            ),
            ParamSpec::required(
                "mail_content",
                "Mail content",
                ParamKind::Email,
                "Mail body",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_delete_mail",
        integration: INTEGRATION,
        action: "Delete Mail",
        description: "Delete one or multiple email from the mailbox that matches search criterias. Delete can be done for the first email that matched the search criteria, or it can be done for all matching emails. NOTICE - to delete emails in all mailboxes, please configure impersonation permissions. https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange. Note: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.\n\nAction Parameters: Folder Name: Optional A mailbox folder to search an email in.This parameter accepts a comma-separated list of folders.The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Message IDs: Optional A filter condition to search for emails with specific email IDs. This parameter accepts a comma-separated list of message IDs to search for. If you provide the message ID, the action ignores the Subject Filter, Sender Filter, and Recipient Filter parameters., Subject Filter: Optional A filter condition that specifies the email subject to search for., Sender Filter: Optional A filter condition that specifies the sender of requested emails., Recipient Filter: Optional A filter condition that specifies the recipient of requested emails., Delete All Matching Emails: Optional If selected, the action deletes all emails that match the criteria. If not selected, the action deletes only the first matching email. Not selected by default., Delete from all mailboxes: Optional If selected, the action deletes emails in all mailboxes that are accessible using the current impersonation settings., How many mailboxes to process in a single batch: Required The number of mailboxes to process in a single batch (single connection to the mail server). If you selected the Delete from all mailboxes parameter, the action works in batches. The default value is 25., Time Frame (minutes): Optional The period in minutes to search for emails.",
        params: &[
            ParamSpec::optional(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::optional(
                "message_i_ds",
                "Message IDs",
                ParamKind::Text,
                "Filter condition, specify emails with which email ids to find. Should accept comma separated list of message ids to search for. If message id is provided, subject, sender and recipient filters are ignored.",
            ),
            ParamSpec::optional(
                "mailboxes",
                "Mailboxes",
                ParamKind::Text,
                "Specify a comma-separated list of mailboxes that need to be searched. This parameter has priority over “Delete in all mailboxes“.",
            ),
            ParamSpec::optional(
                "subject_filter",
                "Subject Filter",
                ParamKind::Text,
                "Filter condition, specify subject to search for emails",
            ),
            ParamSpec::optional(
                "sender_filter",
                "Sender Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the sender of needed emails",
            ),
            ParamSpec::optional(
                "recipient_filter",
                "Recipient Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the recipient of needed emails",
            ),
            ParamSpec::optional(
                "delete_all_matching_emails",
                "Delete All Matching Emails",
                ParamKind::Flag,
                "Filter condition, specify if action should delete all matched by criteria emails from the mailbox or delete only first match.",
            ),
            ParamSpec::optional(
                "delete_from_all_mailboxes",
                "Delete from all mailboxes",
                ParamKind::Flag,
                "If checked, delete emails in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Delete from all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
            ParamSpec::optional(
                "time_frame_minutes",
                "Time Frame (minutes)",
                ParamKind::Text,
                "Filter condition, specify in what time frame in minutes should action look for emails",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_get_mail_eml_file",
        integration: INTEGRATION,
        action: "Get Mail EML File",
        description: "Fetch message EML file.\n\nAction Parameters: Folder Name: Optional A folder to fetch an email from.The Exchange integration uses backslashes as separators to specify subfolders, such as folder/subfolder1/subfolder2. To avoid the timeout error or action failure, replace backslashes in folder or subfolder names with other characters like underscore., Message ID: RequiredThe message ID, such as 1701cf01ba314032b2f1df43262a7723@example.com., Base64 Encode: Optional If selected, the action encodes the mail file with in a base64 format. Not selected by default.",
        params: &[
            ParamSpec::optional(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Folder to fetch from. Default is Inbox. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::required(
                "message_id",
                "Message ID",
                ParamKind::Text,
                "",
            ),
            ParamSpec::required(
                "base64_encode",
                "Base64 Encode",
                ParamKind::Flag,
                "",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_get_account_out_of_facility_settings",
        integration: INTEGRATION,
        action: "Get Account Out Of Facility Settings",
        description: "Get account out of facility (OOF) settings for the provided Siemplify User entity. Note 1: If the target User entity is a username, not a mail address, please run Enrich Entities from Active Directory integration first to try to use the information about User's mail stored in Active Directory. Note 2: For integration to return the information, it should have delegation or impersonation permissions to the target account mailbox. Link to impersonation permission configuration: https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange\n\nAction Parameters: None.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "exchange_add_senders_to_exchange_siemplify_inbox_rule",
        integration: INTEGRATION,
        action: "Add Senders to Exchange-Siemplify Inbox Rule",
        description: "Action will get as a parameter a list of Email Addresses, or will work on User entities with Email regexes (if parameters are not provided), and will be able to create a new rule, filtering the senders from your mailboxes. Actions can be modified in the parameters using the rule parameter. WARNING: Action will modify your current users inbox rules, using EWS. NOTICE - to perform operation, please configure EDiscovery Group and Author permissions. For full details, please visit: https://cloud.google.com/chronicle/docs/soar/marketplace-integrations/exchang. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed.",
        params: &[
            ParamSpec::optional(
                "senders",
                "Senders",
                ParamKind::Text,
                "Specify the Senders you would like to add to the rule, in a comma separated list. If no parameter will be provided, action will work with User entities.",
            ),
            ParamSpec::required(
                "rule_to_add_senders_to",
                "Rule to add senders to",
                ParamKind::List,
                "Specify the rule to add the sender to. If the rule doesn't exist - action will create it where it's missing.",
            ),
            ParamSpec::optional(
                "should_add_senders_domain_to_the_corresponding_domains_list_rule_as_well",
                "Should add senders' domain to the corresponding Domains List rule as well?",
                ParamKind::Flag,
                "Specify whether the action should automatically take the domains of the provided email addresses and add them as well to the corresponding domain rules (same rule action for domains)",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, action will be performed in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_get_authorization",
        integration: INTEGRATION,
        action: "Get Authorization",
        description: "For integration configuration with Oauth authentication, run the action and browse to the received URL to get a link with access code. That link needs to be provided to the Generate Token action next to get the refresh token.",
        params: &[],
    },
    ActionDescriptor {
        tool_name: "exchange_block_sender_by_message_id",
        integration: INTEGRATION,
        action: "Block Sender by Message ID",
        description: "Action will get as a parameter a list of message IDs, and will be able to mark it as junk. Marking an item as junk using this action will add the item sender's mail address to the \"Blocked Senders List\", and will also move it to the \"Junk\" folder. NOTICE - to mark emails in all mailboxes, please configure impersonation permissions: https://docs.microsoft.com/en-us/exchange/client-developer/exchange-web-services/impersonation-and-ews-in-exchange. NOTE: Action is running as async, please adjust script timeout value in Siemplify IDE for action as needed. NOTE: Action is supported only from Exchange Server version 2013 and newer, if a lower version is used, action will fail with the appropriate message.",
        params: &[
            ParamSpec::required(
                "move_item_to_junk_folder",
                "Move item to Junk folder?",
                ParamKind::Flag,
                "Should the action move the specified messages to the junk folder",
            ),
            ParamSpec::optional(
                "message_i_ds",
                "Message IDs",
                ParamKind::Text,
                "Filter condition, specify emails with which message ids to find. Should accept comma separated list of message ids to mark as junk. If message id is provided, subject, sender and recipient filters are ignored.",
            ),
            ParamSpec::optional(
                "mailboxes_list_to_perform_on",
                "Mailboxes list to perform on",
                ParamKind::Text,
                "Filter condition, If you have a specific list of mailboxes you would like to conduct the operation on, for better timing, please provide them here. Should accept a comma separated list of mail addresses, to mark the messages as junk in. If a mailboxes list is provided, \"Perform Action in all Mailboxes\" parameter will be ignored.",
            ),
            ParamSpec::optional(
                "folder_name",
                "Folder Name",
                ParamKind::Text,
                "Parameter can be used to specify email folder on the mailbox to search for the emails. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::optional(
                "subject_filter",
                "Subject Filter",
                ParamKind::Text,
                "Filter condition, specify subject to search for emails",
            ),
            ParamSpec::optional(
                "sender_filter",
                "Sender Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the sender of needed emails",
            ),
            ParamSpec::optional(
                "recipient_filter",
                "Recipient Filter",
                ParamKind::Text,
                "Filter condition, specify who should be the recipient of needed emails",
            ),
            ParamSpec::optional(
                "mark_all_matching_emails",
                "Mark All Matching Emails",
                ParamKind::Flag,
                "Filter condition, specify if action should Mark all matched by criteria emails from the mailbox or Mark only first match.",
            ),
            ParamSpec::optional(
                "perform_action_in_all_mailboxes",
                "Perform action in all mailboxes",
                ParamKind::Flag,
                "If checked, move to junk and block sender emails in all mailboxes accessible with current impersonalization settings. If delegated access is used, implicitly specify the mailboxes to search in the \"Mailboxes\" parameter.",
            ),
            ParamSpec::optional(
                "how_many_mailboxes_to_process_in_a_single_batch",
                "How many mailboxes to process in a single batch",
                ParamKind::Text,
                "In case \"Perform action in all mailboxes\" is checked, action works in batches, this parameter controls how many mailboxes action should process in single batch (single connection to mail server).",
            ),
            ParamSpec::optional(
                "time_frame_minutes",
                "Time Frame (minutes)",
                ParamKind::Text,
                "Filter condition, specify in what time frame in minutes should action look for emails.",
            ),
        ],
    },
    ActionDescriptor {
        tool_name: "exchange_wait_for_mail_from_user",
        integration: INTEGRATION,
        action: "Wait for mail from user",
        description: "Wait for user's response based on an email sent via Send Email action. Note: please adjust the async timeout for action (polling timeout) and global action timeout in Siemplify server configuration as needed. Action input parameter \"How long to wait for recipient reply (minutes)\" cant be bigger than Siemplify server global timeout value.",
        params: &[
            ParamSpec::required(
                "mail_message_id",
                "Mail message_id",
                ParamKind::Text,
                "Message_id of the email, which current action would be waiting for. If message has been sent using Send Email action, please select SendEmail.JSONResult|message_id field as a placeholder.",
            ),
            ParamSpec::required(
                "mail_date",
                "Mail Date",
                ParamKind::Text,
                "Send timestamp of the email, which current action would be waiting for. If message has been sent using Send Email action, please select SendEmail.JSONResult|email_date field as a placeholder.",
            ),
            ParamSpec::required(
                "mail_recipients",
                "Mail Recipients",
                ParamKind::Text,
                "Comma-separated list of recipient emails, response from which current action would be waiting for. If message has been sent using Send Email action, please select Select SendEmail.JSONResult|to_recipients field as a placeholder.",
            ),
            ParamSpec::required(
                "how_long_to_wait_for_recipient_reply_minutes",
                "How long to wait for recipient reply (minutes)",
                ParamKind::Text,
                "How long in minutes to wait for the user's reply before marking it timed out.",
            ),
            ParamSpec::optional(
                "wait_for_all_recipients_to_reply",
                "Wait for All Recipients to Reply?",
                ParamKind::Flag,
                "Parameter can be used to define if there are multiple recipients - should the Action wait for responses from all of recipients until timeout, or Action should wait for first reply to proceed.",
            ),
            ParamSpec::optional(
                "wait_stage_exclude_pattern",
                "Wait Stage Exclude pattern",
                ParamKind::Text,
                "Regular expression to exclude specific replies from the wait stage. Works with body part of email. Example is, to exclude automatic Out-Of-Office emails to be considered as recipient reply, and instead wait for actual user reply.",
            ),
            ParamSpec::optional(
                "folder_to_check_for_reply",
                "Folder to Check for Reply",
                ParamKind::Text,
                "Parameter can be used to specify mailbox email folder (mailbox that was used to send the email with question) to search for the user reply in this folder. Parameter should also accept comma separated list of folders to check the user response in multiple folders. Parameter is case sensitive. '/' separator can be used to specify a subfolder to search in, example: Inbox/Subfolder",
            ),
            ParamSpec::optional(
                "fetch_response_attachments",
                "Fetch Response Attachments",
                ParamKind::Flag,
                "If selected, if recipient replies with attachment - fetch recipient response and add it as attachment for the action result",
            ),
        ],
    },
];
