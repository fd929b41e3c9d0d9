//! Canned workflow documents: per-type seeds and named example templates.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Workflow-type keyword -> skeleton document for `create_test_workflow`.
///
/// The `name` field of each seed is filled in per request.
static WORKFLOW_SEEDS: Lazy<IndexMap<&'static str, Value>> = Lazy::new(|| {
    let mut seeds = IndexMap::new();
    seeds.insert(
        "manual",
        json!({
            "name": "",
            "active": false,
            "nodes": [
                {
                    "id": "manual-trigger-1",
                    "name": "Manual Trigger",
                    "type": "nodeflow-nodes-base.manualTrigger",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": {}
                },
                {
                    "id": "set-1",
                    "name": "Set",
                    "type": "nodeflow-nodes-base.set",
                    "typeVersion": 2,
                    "position": [470, 300],
                    "parameters": {
                        "fields": [{ "name": "message", "value": "hello from nodeflow" }]
                    }
                }
            ],
            "connections": {
                "Manual Trigger": {
                    "main": [[{ "node": "Set", "type": "main", "index": 0 }]]
                }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    seeds.insert(
        "webhook",
        json!({
            "name": "",
            "active": false,
            "nodes": [
                {
                    "id": "webhook-1",
                    "name": "Webhook",
                    "type": "nodeflow-nodes-base.webhook",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": { "httpMethod": "POST", "path": "test-hook", "responseMode": "responseNode" }
                },
                {
                    "id": "respond-1",
                    "name": "Respond to Webhook",
                    "type": "nodeflow-nodes-base.respondToWebhook",
                    "typeVersion": 1,
                    "position": [470, 300],
                    "parameters": { "respondWith": "json", "responseBody": "={{ { \"ok\": true } }}" }
                }
            ],
            "connections": {
                "Webhook": {
                    "main": [[{ "node": "Respond to Webhook", "type": "main", "index": 0 }]]
                }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    seeds.insert(
        "schedule",
        json!({
            "name": "",
            "active": false,
            "nodes": [
                {
                    "id": "schedule-1",
                    "name": "Schedule Trigger",
                    "type": "nodeflow-nodes-base.scheduleTrigger",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": { "rule": { "interval": [{ "field": "hours", "hoursInterval": 1 }] } }
                },
                {
                    "id": "code-1",
                    "name": "Code",
                    "type": "nodeflow-nodes-base.code",
                    "typeVersion": 2,
                    "position": [470, 300],
                    "parameters": { "jsCode": "return items;" }
                }
            ],
            "connections": {
                "Schedule Trigger": {
                    "main": [[{ "node": "Code", "type": "main", "index": 0 }]]
                }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    seeds.insert(
        "http",
        json!({
            "name": "",
            "active": false,
            "nodes": [
                {
                    "id": "manual-trigger-1",
                    "name": "Manual Trigger",
                    "type": "nodeflow-nodes-base.manualTrigger",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": {}
                },
                {
                    "id": "http-1",
                    "name": "HTTP Request",
                    "type": "nodeflow-nodes-base.httpRequest",
                    "typeVersion": 4,
                    "position": [470, 300],
                    "parameters": { "method": "GET", "url": "https://example.com/api/status" }
                }
            ],
            "connections": {
                "Manual Trigger": {
                    "main": [[{ "node": "HTTP Request", "type": "main", "index": 0 }]]
                }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    seeds.insert(
        "slack",
        json!({
            "name": "",
            "active": false,
            "nodes": [
                {
                    "id": "manual-trigger-1",
                    "name": "Manual Trigger",
                    "type": "nodeflow-nodes-base.manualTrigger",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": {}
                },
                {
                    "id": "slack-1",
                    "name": "Slack",
                    "type": "nodeflow-nodes-base.slack",
                    "typeVersion": 2,
                    "position": [470, 300],
                    "parameters": { "resource": "message", "operation": "post", "channel": "#general", "text": "Test message" }
                }
            ],
            "connections": {
                "Manual Trigger": {
                    "main": [[{ "node": "Slack", "type": "main", "index": 0 }]]
                }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    seeds
});

/// Template name -> complete example workflow for `get_workflow_template`.
static TEMPLATES: Lazy<IndexMap<&'static str, Value>> = Lazy::new(|| {
    let mut templates = IndexMap::new();
    templates.insert(
        "webhook-to-slack",
        json!({
            "name": "Webhook to Slack",
            "active": false,
            "nodes": [
                {
                    "id": "webhook-1",
                    "name": "Webhook",
                    "type": "nodeflow-nodes-base.webhook",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": { "httpMethod": "POST", "path": "incoming-alert" }
                },
                {
                    "id": "if-1",
                    "name": "IF",
                    "type": "nodeflow-nodes-base.if",
                    "typeVersion": 2,
                    "position": [470, 300],
                    "parameters": {
                        "conditions": [{ "leftValue": "={{ $json.severity }}", "operator": "equals", "rightValue": "critical" }]
                    }
                },
                {
                    "id": "slack-1",
                    "name": "Slack",
                    "type": "nodeflow-nodes-base.slack",
                    "typeVersion": 2,
                    "position": [690, 200],
                    "parameters": { "resource": "message", "operation": "post", "channel": "#alerts", "text": "={{ $json.message }}" }
                }
            ],
            "connections": {
                "Webhook": { "main": [[{ "node": "IF", "type": "main", "index": 0 }]] },
                "IF": { "main": [[{ "node": "Slack", "type": "main", "index": 0 }]] }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    templates.insert(
        "scheduled-http-fetch",
        json!({
            "name": "Scheduled HTTP Fetch",
            "active": false,
            "nodes": [
                {
                    "id": "schedule-1",
                    "name": "Schedule Trigger",
                    "type": "nodeflow-nodes-base.scheduleTrigger",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": { "rule": { "interval": [{ "field": "minutes", "minutesInterval": 15 }] } }
                },
                {
                    "id": "http-1",
                    "name": "HTTP Request",
                    "type": "nodeflow-nodes-base.httpRequest",
                    "typeVersion": 4,
                    "position": [470, 300],
                    "parameters": { "method": "GET", "url": "https://example.com/api/metrics" }
                },
                {
                    "id": "sheets-1",
                    "name": "Google Sheets",
                    "type": "nodeflow-nodes-base.googleSheets",
                    "typeVersion": 4,
                    "position": [690, 300],
                    "parameters": { "operation": "append", "sheetName": "Metrics" }
                }
            ],
            "connections": {
                "Schedule Trigger": { "main": [[{ "node": "HTTP Request", "type": "main", "index": 0 }]] },
                "HTTP Request": { "main": [[{ "node": "Google Sheets", "type": "main", "index": 0 }]] }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    templates.insert(
        "data-transform",
        json!({
            "name": "Data Transform",
            "active": false,
            "nodes": [
                {
                    "id": "manual-trigger-1",
                    "name": "Manual Trigger",
                    "type": "nodeflow-nodes-base.manualTrigger",
                    "typeVersion": 1,
                    "position": [250, 300],
                    "parameters": {}
                },
                {
                    "id": "postgres-1",
                    "name": "Postgres",
                    "type": "nodeflow-nodes-base.postgres",
                    "typeVersion": 2,
                    "position": [470, 300],
                    "parameters": { "operation": "executeQuery", "query": "SELECT * FROM orders WHERE created_at > now() - interval '1 day'" }
                },
                {
                    "id": "code-1",
                    "name": "Code",
                    "type": "nodeflow-nodes-base.code",
                    "typeVersion": 2,
                    "position": [690, 300],
                    "parameters": { "jsCode": "return items.map(item => ({ json: { total: item.json.amount * 100 } }));" }
                },
                {
                    "id": "merge-1",
                    "name": "Merge",
                    "type": "nodeflow-nodes-base.merge",
                    "typeVersion": 3,
                    "position": [910, 300],
                    "parameters": { "mode": "append" }
                }
            ],
            "connections": {
                "Manual Trigger": { "main": [[{ "node": "Postgres", "type": "main", "index": 0 }]] },
                "Postgres": { "main": [[{ "node": "Code", "type": "main", "index": 0 }]] },
                "Code": { "main": [[{ "node": "Merge", "type": "main", "index": 0 }]] }
            },
            "settings": { "executionOrder": "v1" }
        }),
    );
    templates
});

/// Look up a workflow seed by type keyword, case-insensitively.
pub fn workflow_seed(workflow_type: &str) -> Option<&'static Value> {
    let normalized = workflow_type.trim().to_ascii_lowercase();
    WORKFLOW_SEEDS.get(normalized.as_str())
}

/// Known workflow-type keywords in declaration order.
pub fn workflow_seed_names() -> Vec<&'static str> {
    WORKFLOW_SEEDS.keys().copied().collect()
}

/// Look up a named template, case-insensitively.
pub fn template(template_name: &str) -> Option<&'static Value> {
    let normalized = template_name.trim().to_ascii_lowercase();
    TEMPLATES.get(normalized.as_str())
}

/// Known template names in declaration order.
pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_is_a_complete_workflow() {
        for name in workflow_seed_names() {
            let seed = workflow_seed(name).unwrap();
            assert!(seed["nodes"].is_array(), "seed '{name}' has nodes");
            assert!(seed["connections"].is_object(), "seed '{name}' has connections");
            for node in seed["nodes"].as_array().unwrap() {
                assert!(node["id"].is_string());
                assert!(node["name"].is_string());
                assert!(node["type"].is_string());
                assert!(node["position"].is_array());
                assert!(node["typeVersion"].is_number());
            }
        }
    }

    #[test]
    fn test_seed_lookup_is_case_insensitive() {
        assert!(workflow_seed("Webhook").is_some());
        assert!(workflow_seed(" SCHEDULE ").is_some());
        assert!(workflow_seed("unknown_type").is_none());
    }

    #[test]
    fn test_templates_present() {
        assert_eq!(template_names(), vec!["webhook-to-slack", "scheduled-http-fetch", "data-transform"]);
        let slack = template("Webhook-To-Slack").unwrap();
        assert_eq!(slack["name"], "Webhook to Slack");
    }

    #[test]
    fn test_template_connections_reference_existing_nodes() {
        // The validator never checks this, so the canned data must be right
        // by construction.
        for name in template_names() {
            let doc = template(name).unwrap();
            let node_names: Vec<&str> = doc["nodes"]
                .as_array()
                .unwrap()
                .iter()
                .map(|node| node["name"].as_str().unwrap())
                .collect();
            for (source, outputs) in doc["connections"].as_object().unwrap() {
                assert!(node_names.contains(&source.as_str()), "source '{source}' exists in '{name}'");
                for branch in outputs["main"].as_array().unwrap() {
                    for target in branch.as_array().unwrap() {
                        let target_name = target["node"].as_str().unwrap();
                        assert!(node_names.contains(&target_name), "target '{target_name}' exists in '{name}'");
                    }
                }
            }
        }
    }
}
