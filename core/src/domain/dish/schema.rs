use serde_json::json;

/// Returns the JSON schema for menu parsing LLM responses
pub fn get_menu_parse_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "description": { "type": "string" }
            },
            "required": ["name", "description"]
        }
    })
}
