//! The fixed tool catalog advertised by `tools/list`.

use once_cell::sync::Lazy;
use schemars::{JsonSchema, SchemaGenerator};
use serde::Serialize;
use serde_json::{Value, json};

use crate::server::schemas::{
    CreateTestWorkflowRequest, ListNodeCategoriesRequest, ListNodesRequest, NodeNameRequest, SearchNodesRequest,
    ValidateWorkflowRequest, WorkflowTemplateRequest,
};

/// Descriptor for one invocable tool, serialized into `tools/list` responses.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static TOOLS: Lazy<Vec<ToolDescriptor>> = Lazy::new(|| {
    vec![
        descriptor::<ListNodesRequest>(
            "list_nodes",
            "List available automation nodes, optionally filtered by category or name fragment.",
        ),
        descriptor::<NodeNameRequest>(
            "get_node_info",
            "Get the description, category, and type string for a node by name.",
        ),
        descriptor::<SearchNodesRequest>(
            "search_nodes",
            "Search nodes by free text across name, type, category, and description.",
        ),
        descriptor::<NodeNameRequest>("get_node_documentation", "Get the documentation text for a node by name."),
        descriptor::<ListNodeCategoriesRequest>("list_node_categories", "List node categories with node counts."),
        descriptor::<CreateTestWorkflowRequest>(
            "create_test_workflow",
            "Generate a ready-to-import test workflow JSON document for a workflow type.",
        ),
        descriptor::<ValidateWorkflowRequest>(
            "validate_workflow",
            "Check a workflow document for required structural fields and report errors and warnings.",
        ),
        descriptor::<WorkflowTemplateRequest>("get_workflow_template", "Fetch a complete example workflow by template name."),
    ]
});

/// The fixed tool descriptor list advertised to clients.
pub fn tool_descriptors() -> &'static [ToolDescriptor] {
    &TOOLS
}

fn descriptor<T: JsonSchema>(name: &'static str, description: &'static str) -> ToolDescriptor {
    ToolDescriptor {
        name,
        description,
        input_schema: input_schema::<T>(),
    }
}

fn input_schema<T: JsonSchema>() -> Value {
    let schema = SchemaGenerator::default().into_root_schema_for::<T>();
    serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" }))
}
