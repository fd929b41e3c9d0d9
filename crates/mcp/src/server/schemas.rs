use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for `list_nodes`.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListNodesRequest {
    /// Optional category filter matched case-insensitively as a substring.
    #[schemars(description = "Optional category or name fragment to filter nodes, e.g. 'trigger' or 'slack'.")]
    pub category: Option<String>,
}

/// Parameters for `get_node_info` and `get_node_documentation`.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NodeNameRequest {
    /// Display name or canonical type string of the node.
    #[schemars(description = "Node display name (e.g. 'Slack') or type string (e.g. 'nodeflow-nodes-base.slack').")]
    pub node_name: String,
}

/// Parameters for `search_nodes`.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchNodesRequest {
    /// Free-text query matched against name, type, category, and description.
    #[schemars(description = "Free-text query for node discovery.")]
    pub query: String,
}

/// Parameters for `list_node_categories`, which takes no arguments.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, Default)]
pub struct ListNodeCategoriesRequest {}

/// Parameters for `create_test_workflow`.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestWorkflowRequest {
    /// Workflow seed keyword, one of the known workflow types.
    #[schemars(description = "Workflow type to generate: manual, webhook, schedule, http, or slack.")]
    pub workflow_type: String,
    /// Optional workflow name; a default is derived from the type.
    #[schemars(description = "Optional name for the generated workflow.")]
    pub custom_name: Option<String>,
}

/// Parameters for `validate_workflow`.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidateWorkflowRequest {
    /// The workflow document to check. Required; its absence is an
    /// invalid-params error rather than a validation finding.
    #[schemars(description = "Workflow JSON document with name, nodes, and connections.")]
    pub workflow: Option<Value>,
}

/// Parameters for `get_workflow_template`.
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplateRequest {
    /// Name of the canned template to fetch.
    #[schemars(description = "Template name: webhook-to-slack, scheduled-http-fetch, or data-transform.")]
    pub template_name: String,
}
