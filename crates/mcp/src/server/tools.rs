//! Tool handlers. Each one formats a lookup from the catalog tables into a
//! text block wrapped in the MCP content envelope.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::catalog::{all_nodes, categories, find_node, template, template_names, workflow_seed, workflow_seed_names};
use crate::protocol::{JsonRpcError, text_result};
use crate::server::schemas::{
    CreateTestWorkflowRequest, ListNodesRequest, NodeNameRequest, SearchNodesRequest, ValidateWorkflowRequest,
    WorkflowTemplateRequest,
};

/// Invoke a tool by name with the raw `arguments` object.
pub fn call_tool(name: &str, arguments: Value) -> Result<Value, JsonRpcError> {
    match name {
        "list_nodes" => Ok(list_nodes(parse_args(arguments)?)),
        "get_node_info" => Ok(get_node_info(parse_args(arguments)?)),
        "search_nodes" => Ok(search_nodes(parse_args(arguments)?)),
        "get_node_documentation" => Ok(get_node_documentation(parse_args(arguments)?)),
        "list_node_categories" => Ok(list_node_categories()),
        "create_test_workflow" => create_test_workflow(parse_args(arguments)?),
        "validate_workflow" => validate_workflow(parse_args(arguments)?),
        "get_workflow_template" => get_workflow_template(parse_args(arguments)?),
        other => Err(JsonRpcError::method_not_found(format!("Unknown tool: {other}"))),
    }
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments).map_err(|error| JsonRpcError::invalid_params(format!("invalid tool arguments: {error}"), None))
}

fn list_nodes(request: ListNodesRequest) -> Value {
    let category = request.category.as_deref().map(str::trim).unwrap_or("");
    let filter = category.to_ascii_lowercase();
    let matches: Vec<_> = all_nodes()
        .iter()
        .filter(|node| {
            filter.is_empty()
                || node.display_name.to_ascii_lowercase().contains(&filter)
                || node.category.to_ascii_lowercase().contains(&filter)
        })
        .collect();

    if matches.is_empty() {
        let known: Vec<_> = categories().iter().map(|(name, _)| *name).collect();
        return text_result(format!(
            "No nodes match \"{}\". Known categories: {}.",
            category,
            known.join(", ")
        ));
    }

    let header = if filter.is_empty() {
        format!("Available nodes ({}):", matches.len())
    } else {
        format!("Nodes matching \"{}\" ({}):", category, matches.len())
    };
    let mut text = header;
    for node in matches {
        text.push_str(&format!(
            "\n\n- {} ({}) [{}]\n  {}",
            node.display_name, node.type_name, node.category, node.description
        ));
    }
    text_result(text)
}

fn get_node_info(request: NodeNameRequest) -> Value {
    match find_node(&request.node_name) {
        Some(node) => text_result(format!(
            "Node: {}\nType: {}\nCategory: {}\n\n{}",
            node.display_name, node.type_name, node.category, node.description
        )),
        // Unknown names never error; answer with a generic description.
        None => text_result(format!(
            "Node: {name}\nType: unknown\nCategory: uncategorized\n\n\
{name} is not in the built-in catalog. It is likely a community or custom node; \
reference it by its package type string and consult the package documentation for its parameters.",
            name = request.node_name.trim()
        )),
    }
}

fn search_nodes(request: SearchNodesRequest) -> Value {
    let query = request.query.trim().to_ascii_lowercase();
    let matches: Vec<_> = all_nodes()
        .iter()
        .filter(|node| {
            node.display_name.to_ascii_lowercase().contains(&query)
                || node.type_name.to_ascii_lowercase().contains(&query)
                || node.category.to_ascii_lowercase().contains(&query)
                || node.description.to_ascii_lowercase().contains(&query)
        })
        .collect();

    if matches.is_empty() {
        return text_result(format!(
            "No nodes found for \"{}\". Try a broader term like \"trigger\" or \"http\".",
            request.query.trim()
        ));
    }

    let mut text = format!("Found {} node(s) for \"{}\":", matches.len(), request.query.trim());
    for node in matches {
        text.push_str(&format!(
            "\n\n- {} ({}) [{}]\n  {}",
            node.display_name, node.type_name, node.category, node.description
        ));
    }
    text_result(text)
}

fn get_node_documentation(request: NodeNameRequest) -> Value {
    match find_node(&request.node_name) {
        Some(node) => text_result(format!("# {} node\n\n{}", node.display_name, node.documentation)),
        None => text_result(format!(
            "# {name} node\n\nNo built-in documentation is available for {name}. \
Community and custom nodes document their parameters in their own package; \
use get_node_info on a catalog node or search_nodes to find a built-in alternative.",
            name = request.node_name.trim()
        )),
    }
}

fn list_node_categories() -> Value {
    let mut text = String::from("Node categories:");
    for (category, count) in categories() {
        let noun = if count == 1 { "node" } else { "nodes" };
        text.push_str(&format!("\n- {category} ({count} {noun})"));
    }
    text_result(text)
}

fn create_test_workflow(request: CreateTestWorkflowRequest) -> Result<Value, JsonRpcError> {
    let workflow_type = request.workflow_type.trim();
    let Some(seed) = workflow_seed(workflow_type) else {
        return Err(JsonRpcError::invalid_params(
            format!("unknown workflow type '{workflow_type}'"),
            Some(json!({
                "workflowType": workflow_type,
                "knownTypes": workflow_seed_names(),
            })),
        ));
    };

    let name = request
        .custom_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Test {} Workflow", capitalize(workflow_type)));

    let mut workflow = seed.clone();
    workflow["name"] = Value::String(name.clone());
    workflow["meta"] = json!({ "generatedAt": chrono::Utc::now().to_rfc3339() });

    let document = serde_json::to_string_pretty(&workflow).unwrap_or_else(|_| workflow.to_string());
    Ok(text_result(format!("Generated test workflow \"{name}\":\n\n{document}")))
}

fn validate_workflow(request: ValidateWorkflowRequest) -> Result<Value, JsonRpcError> {
    let Some(workflow) = request.workflow else {
        return Err(JsonRpcError::invalid_params("the 'workflow' argument is required", None));
    };

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let has_name = workflow.get("name").and_then(Value::as_str).is_some_and(|name| !name.trim().is_empty());
    if !has_name {
        errors.push("workflow is missing a name".to_string());
    }

    match workflow.get("nodes") {
        Some(Value::Array(nodes)) => {
            for (index, node) in nodes.iter().enumerate() {
                let label = node
                    .get("name")
                    .and_then(Value::as_str)
                    .map(|name| format!("node \"{name}\""))
                    .unwrap_or_else(|| format!("node #{index}"));
                for field in ["id", "name", "type", "position"] {
                    if node.get(field).is_none() {
                        errors.push(format!("{label} is missing {field}"));
                    }
                }
                if node.get("typeVersion").is_none() {
                    warnings.push(format!("{label} is missing typeVersion"));
                }
            }
        }
        _ => errors.push("workflow is missing a nodes array".to_string()),
    }

    if !workflow.get("connections").is_some_and(Value::is_object) {
        errors.push("workflow is missing a connections object".to_string());
    }

    let status = if errors.is_empty() { "VALID" } else { "INVALID" };
    let mut text = format!(
        "Workflow validation result\nStatus: {status}\nErrors: {}\nWarnings: {}",
        errors.len(),
        warnings.len()
    );
    if !errors.is_empty() || !warnings.is_empty() {
        text.push('\n');
        for error in &errors {
            text.push_str(&format!("\n- error: {error}"));
        }
        for warning in &warnings {
            text.push_str(&format!("\n- warning: {warning}"));
        }
    }
    Ok(text_result(text))
}

fn get_workflow_template(request: WorkflowTemplateRequest) -> Result<Value, JsonRpcError> {
    let template_name = request.template_name.trim();
    let Some(document) = template(template_name) else {
        return Err(JsonRpcError::invalid_params(
            format!("unknown template '{template_name}'"),
            Some(json!({
                "templateName": template_name,
                "knownTemplates": template_names(),
            })),
        ));
    };

    let encoded = serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string());
    Ok(text_result(format!("Template \"{template_name}\":\n\n{encoded}")))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &Value) -> &str {
        result["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn test_list_nodes_slack_category_matches_slack() {
        let result = call_tool("list_nodes", json!({ "category": "slack" })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("- Slack (nodeflow-nodes-base.slack)"));
        assert!(text.contains("(1)"), "exactly one match: {text}");
    }

    #[test]
    fn test_list_nodes_echoes_the_category_as_given() {
        let result = call_tool("list_nodes", json!({ "category": "  Trigger " })).unwrap();
        let text = text_of(&result);
        assert!(text.starts_with("Nodes matching \"Trigger\" (3):"), "{text}");

        let result = call_tool("list_nodes", json!({ "category": "Blockchain" })).unwrap();
        assert!(text_of(&result).contains("No nodes match \"Blockchain\""));
    }

    #[test]
    fn test_list_nodes_without_category_lists_everything() {
        let result = call_tool("list_nodes", json!({})).unwrap();
        let text = text_of(&result);
        assert!(text.starts_with(&format!("Available nodes ({})", all_nodes().len())));
    }

    #[test]
    fn test_list_nodes_unmatched_category_names_known_categories() {
        let result = call_tool("list_nodes", json!({ "category": "blockchain" })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("No nodes match"));
        assert!(text.contains("Trigger"));
    }

    #[test]
    fn test_get_node_info_known_node() {
        let result = call_tool("get_node_info", json!({ "nodeName": "slack" })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("Node: Slack"));
        assert!(text.contains("Type: nodeflow-nodes-base.slack"));
    }

    #[test]
    fn test_get_node_info_unknown_node_falls_back() {
        let result = call_tool("get_node_info", json!({ "nodeName": "Frobnicator" })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("Frobnicator"));
        assert!(text.contains("not in the built-in catalog"));
        assert_eq!(result["isError"], false);
    }

    #[test]
    fn test_search_nodes_matches_descriptions() {
        let result = call_tool("search_nodes", json!({ "query": "spreadsheet" })).unwrap();
        assert!(text_of(&result).contains("Google Sheets"));
    }

    #[test]
    fn test_search_nodes_no_hits_is_not_an_error() {
        let result = call_tool("search_nodes", json!({ "query": "quantum" })).unwrap();
        assert!(text_of(&result).contains("No nodes found"));
    }

    #[test]
    fn test_documentation_lookup_and_fallback() {
        let result = call_tool("get_node_documentation", json!({ "nodeName": "Webhook" })).unwrap();
        assert!(text_of(&result).contains("# Webhook node"));

        let result = call_tool("get_node_documentation", json!({ "nodeName": "Frobnicator" })).unwrap();
        assert!(text_of(&result).contains("No built-in documentation"));
    }

    #[test]
    fn test_list_node_categories_counts() {
        let result = call_tool("list_node_categories", json!({})).unwrap();
        let text = text_of(&result);
        assert!(text.contains("- Trigger (3 nodes)"));
        assert!(text.contains("- Communication (2 nodes)"));
    }

    #[test]
    fn test_create_test_workflow_defaults_the_name() {
        let result = call_tool("create_test_workflow", json!({ "workflowType": "webhook" })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("Test Webhook Workflow"));
        assert!(text.contains("\"nodeflow-nodes-base.webhook\""));
    }

    #[test]
    fn test_create_test_workflow_honors_custom_name() {
        let result = call_tool(
            "create_test_workflow",
            json!({ "workflowType": "slack", "customName": "Ping #general" }),
        )
        .unwrap();
        assert!(text_of(&result).contains("\"Ping #general\""));
    }

    #[test]
    fn test_create_test_workflow_unknown_type_is_32602() {
        let error = call_tool("create_test_workflow", json!({ "workflowType": "unknown_type" })).unwrap_err();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
        assert!(error.message.contains("unknown_type"));
        assert_eq!(error.data.unwrap()["knownTypes"][0], "manual");
    }

    #[test]
    fn test_validate_workflow_minimal_valid() {
        let result = call_tool(
            "validate_workflow",
            json!({ "workflow": { "name": "x", "nodes": [], "connections": {} } }),
        )
        .unwrap();
        let text = text_of(&result);
        assert!(text.contains("Status: VALID"));
        assert!(text.contains("Errors: 0"));
    }

    #[test]
    fn test_validate_workflow_missing_nodes_array() {
        let result = call_tool("validate_workflow", json!({ "workflow": { "name": "x", "connections": {} } })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("Status: INVALID"));
        assert!(text.contains("missing a nodes array"));
    }

    #[test]
    fn test_validate_workflow_reports_per_node_findings() {
        let workflow = json!({
            "name": "broken",
            "nodes": [
                { "name": "Webhook", "type": "nodeflow-nodes-base.webhook", "position": [0, 0] },
                { "id": "b", "name": "Slack", "type": "nodeflow-nodes-base.slack", "position": [1, 1], "typeVersion": 2 },
            ],
            "connections": {},
        });
        let result = call_tool("validate_workflow", json!({ "workflow": workflow })).unwrap();
        let text = text_of(&result);
        assert!(text.contains("Status: INVALID"));
        assert!(text.contains("node \"Webhook\" is missing id"));
        assert!(text.contains("warning: node \"Webhook\" is missing typeVersion"));
        assert!(!text.contains("node \"Slack\" is missing"));
    }

    #[test]
    fn test_validate_workflow_without_workflow_object_is_32602() {
        let error = call_tool("validate_workflow", json!({})).unwrap_err();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
        assert!(error.message.contains("workflow"));
    }

    #[test]
    fn test_get_workflow_template_round_trip() {
        let result = call_tool("get_workflow_template", json!({ "templateName": "webhook-to-slack" })).unwrap();
        assert!(text_of(&result).contains("\"Webhook to Slack\""));
    }

    #[test]
    fn test_get_workflow_template_unknown_is_32602() {
        let error = call_tool("get_workflow_template", json!({ "templateName": "nope" })).unwrap_err();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
        assert!(error.message.contains("nope"));
    }

    #[test]
    fn test_unknown_tool_is_32601() {
        let error = call_tool("run_workflow", json!({})).unwrap_err();
        assert_eq!(error.code, JsonRpcError::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_missing_required_argument_is_32602() {
        let error = call_tool("search_nodes", json!({})).unwrap_err();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
    }
}
