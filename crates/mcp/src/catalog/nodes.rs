//! Static node-type catalog.

use once_cell::sync::Lazy;

/// Descriptor for one automation node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeType {
    /// Human-facing name, e.g. "Slack".
    pub display_name: &'static str,
    /// Canonical type string used inside workflow documents.
    pub type_name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Canned documentation blob returned by `get_node_documentation`.
    pub documentation: &'static str,
}

static NODE_TYPES: Lazy<Vec<NodeType>> = Lazy::new(|| {
    vec![
        NodeType {
            display_name: "Manual Trigger",
            type_name: "nodeflow-nodes-base.manualTrigger",
            category: "Trigger",
            description: "Starts the workflow when executed manually from the editor",
            documentation: "The Manual Trigger node starts a workflow on demand. It takes no \
parameters and emits a single empty item. Use it while building and testing a workflow before \
wiring up a production trigger.",
        },
        NodeType {
            display_name: "Webhook",
            type_name: "nodeflow-nodes-base.webhook",
            category: "Trigger",
            description: "Starts the workflow when an HTTP request hits a generated URL",
            documentation: "The Webhook node listens on a generated URL and starts the workflow \
when a request arrives. Configure the HTTP method, path, and response mode. Pair it with a \
Respond to Webhook node to control the reply body.",
        },
        NodeType {
            display_name: "Schedule Trigger",
            type_name: "nodeflow-nodes-base.scheduleTrigger",
            category: "Trigger",
            description: "Starts the workflow on a fixed interval or cron expression",
            documentation: "The Schedule Trigger node fires on an interval (seconds to months) or \
a cron expression. Each firing emits one item carrying the scheduled timestamp.",
        },
        NodeType {
            display_name: "HTTP Request",
            type_name: "nodeflow-nodes-base.httpRequest",
            category: "Core",
            description: "Makes an HTTP request and returns the response data",
            documentation: "The HTTP Request node calls any URL with a configurable method, \
headers, query parameters, and body. Authentication can reference stored credentials. The \
response is parsed as JSON when possible and returned as item data.",
        },
        NodeType {
            display_name: "Set",
            type_name: "nodeflow-nodes-base.set",
            category: "Core",
            description: "Sets, renames, or removes fields on passing items",
            documentation: "The Set node edits item fields. Add key/value pairs to write, use dot \
notation for nested paths, and optionally keep only the fields you set.",
        },
        NodeType {
            display_name: "Code",
            type_name: "nodeflow-nodes-base.code",
            category: "Development",
            description: "Runs custom JavaScript against the incoming items",
            documentation: "The Code node executes a JavaScript snippet once per batch or once \
per item. The incoming items are available as `items`; return an array of objects with a `json` \
key to emit new items.",
        },
        NodeType {
            display_name: "IF",
            type_name: "nodeflow-nodes-base.if",
            category: "Logic",
            description: "Routes items to a true or false branch based on conditions",
            documentation: "The IF node compares one or more values (string, number, boolean, \
date) and sends each item to the true or false output. Combine conditions with AND/OR.",
        },
        NodeType {
            display_name: "Switch",
            type_name: "nodeflow-nodes-base.switch",
            category: "Logic",
            description: "Routes items to one of several outputs based on a value",
            documentation: "The Switch node routes items across up to four outputs by matching a \
value against per-output rules, with an optional fallback output for unmatched items.",
        },
        NodeType {
            display_name: "Merge",
            type_name: "nodeflow-nodes-base.merge",
            category: "Logic",
            description: "Combines items from two input branches into one stream",
            documentation: "The Merge node joins two input streams. Modes include append, merge \
by key, and wait-for-both. Use it to bring branched data back together.",
        },
        NodeType {
            display_name: "Slack",
            type_name: "nodeflow-nodes-base.slack",
            category: "Communication",
            description: "Sends messages and interacts with Slack channels and users",
            documentation: "The Slack node posts messages, updates them, and manages channels. \
Select a resource (message, channel, user) and an operation, then fill the channel and text \
fields. Requires a Slack credential with the relevant scopes.",
        },
        NodeType {
            display_name: "Email Send",
            type_name: "nodeflow-nodes-base.emailSend",
            category: "Communication",
            description: "Sends an email through a configured SMTP credential",
            documentation: "The Email Send node sends mail via SMTP. Configure from/to addresses, \
subject, and a text or HTML body; attachments can reference binary item data.",
        },
        NodeType {
            display_name: "Google Sheets",
            type_name: "nodeflow-nodes-base.googleSheets",
            category: "Data",
            description: "Reads and writes rows in a Google Sheets spreadsheet",
            documentation: "The Google Sheets node appends, reads, updates, and deletes rows. \
Pick a spreadsheet and sheet, then map item fields to columns. Requires a Google credential.",
        },
        NodeType {
            display_name: "Postgres",
            type_name: "nodeflow-nodes-base.postgres",
            category: "Data",
            description: "Runs queries against a PostgreSQL database",
            documentation: "The Postgres node executes queries or inserts/updates rows. Use \
parameter placeholders to bind item values safely. Requires a Postgres credential.",
        },
        NodeType {
            display_name: "Respond to Webhook",
            type_name: "nodeflow-nodes-base.respondToWebhook",
            category: "Core",
            description: "Returns a custom response from a webhook-triggered workflow",
            documentation: "The Respond to Webhook node ends the webhook exchange with a chosen \
status code, headers, and body. The paired Webhook node must use the 'respond via node' mode.",
        },
    ]
});

/// All known node descriptors in catalog order.
pub fn all_nodes() -> &'static [NodeType] {
    &NODE_TYPES
}

/// Case-insensitive lookup by display name or canonical type string.
pub fn find_node(name: &str) -> Option<&'static NodeType> {
    let trimmed = name.trim();
    NODE_TYPES
        .iter()
        .find(|node| node.display_name.eq_ignore_ascii_case(trimmed) || node.type_name.eq_ignore_ascii_case(trimmed))
}

/// Distinct categories with the number of nodes in each, in catalog order.
pub fn categories() -> Vec<(&'static str, usize)> {
    let mut ordered: Vec<(&'static str, usize)> = Vec::new();
    for node in NODE_TYPES.iter() {
        match ordered.iter_mut().find(|(name, _)| *name == node.category) {
            Some((_, count)) => *count += 1,
            None => ordered.push((node.category, 1)),
        }
    }
    ordered
}
