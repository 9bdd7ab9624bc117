//! Capability Types for MCP Configuration Documents
//!
//! Typed views over the named sections of an `mcp.json` document:
//! - `sequential-thinking`
//! - `tools`
//! - `resources`
//! - `prompts`
//!
//! Parsing here is lenient by construction. A section with an unexpected shape
//! degrades to defaults instead of failing the document.

use serde::Serialize;
use serde_json::{Map, Value};

/// Step count used when `steps` is absent or invalid
pub const DEFAULT_SEQUENTIAL_THINKING_STEPS: u32 = 3;

/// Top-level key of the sequential-thinking section
pub const SEQUENTIAL_THINKING_KEY: &str = "sequential-thinking";
pub const TOOLS_KEY: &str = "tools";
pub const RESOURCES_KEY: &str = "resources";
pub const PROMPTS_KEY: &str = "prompts";

/// Every top-level section this crate knows how to interpret
pub const RECOGNIZED_SECTIONS: &[&str] = &[SEQUENTIAL_THINKING_KEY, TOOLS_KEY, RESOURCES_KEY, PROMPTS_KEY];

// =============================================================================
// Sequential Thinking
// =============================================================================

/// The `sequential-thinking` capability section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequentialThinking {
    /// Active only when the document says exactly `true`
    pub enabled: bool,

    /// Validated step count, `None` when absent or invalid
    pub steps: Option<u32>,

    /// Free-text description
    pub description: Option<String>,

    /// Any other keys in the section, in document order
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl SequentialThinking {
    /// Build from the raw section value.
    ///
    /// A non-object section is present but disabled.
    pub fn from_value(value: &Value) -> Self {
        let Some(section) = value.as_object() else {
            tracing::warn!("'{}' section is not an object, treating it as disabled", SEQUENTIAL_THINKING_KEY);
            return Self::default();
        };

        let enabled = matches!(section.get("enabled"), Some(Value::Bool(true)));
        let steps = section.get("steps").and_then(|raw| {
            let parsed = parse_steps(raw);
            if parsed.is_none() {
                tracing::warn!(
                    "Invalid sequential-thinking steps value {}, using default {}",
                    raw,
                    DEFAULT_SEQUENTIAL_THINKING_STEPS
                );
            }
            parsed
        });
        let description = section
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);

        let extra = section
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "enabled" | "steps" | "description"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            enabled,
            steps,
            description,
            extra,
        }
    }

    /// Configured step count, or the default
    pub fn effective_steps(&self) -> u32 {
        self.steps.unwrap_or(DEFAULT_SEQUENTIAL_THINKING_STEPS)
    }
}

/// Accept only positive integers that fit in a `u32`
fn parse_steps(raw: &Value) -> Option<u32> {
    raw.as_u64()
        .filter(|steps| *steps > 0)
        .and_then(|steps| u32::try_from(steps).ok())
}

// =============================================================================
// Tools / Resources / Prompts
// =============================================================================

/// Entry of the `tools` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub description: String,
}

/// Entry of the `resources` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// Entry of the `prompts` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    pub id: String,
    pub title: String,
}

impl ToolEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            name: string_field(value, "name", "Unnamed tool"),
            description: string_field(value, "description", "No description"),
        }
    }
}

impl ResourceEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            id: string_field(value, "id", "Unknown ID"),
            resource_type: string_field(value, "type", "Unknown type"),
        }
    }
}

impl PromptEntry {
    fn from_value(value: &Value) -> Self {
        Self {
            id: string_field(value, "id", "Unknown ID"),
            title: string_field(value, "title", "Untitled"),
        }
    }
}

pub fn parse_tools(value: &Value) -> Vec<ToolEntry> {
    list_entries(TOOLS_KEY, value, ToolEntry::from_value)
}

pub fn parse_resources(value: &Value) -> Vec<ResourceEntry> {
    list_entries(RESOURCES_KEY, value, ResourceEntry::from_value)
}

pub fn parse_prompts(value: &Value) -> Vec<PromptEntry> {
    list_entries(PROMPTS_KEY, value, PromptEntry::from_value)
}

fn list_entries<T>(key: &str, value: &Value, parse: fn(&Value) -> T) -> Vec<T> {
    match value.as_array() {
        Some(items) => items.iter().map(parse).collect(),
        None => {
            tracing::warn!("'{}' section is not a list, ignoring its contents", key);
            Vec::new()
        }
    }
}

fn string_field(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequential_thinking_full_section() {
        let st = SequentialThinking::from_value(&json!({
            "enabled": true,
            "steps": 5,
            "description": "test"
        }));

        assert!(st.enabled);
        assert_eq!(st.steps, Some(5));
        assert_eq!(st.effective_steps(), 5);
        assert_eq!(st.description.as_deref(), Some("test"));
        assert!(st.extra.is_empty());
    }

    #[test]
    fn test_sequential_thinking_enabled_must_be_true() {
        for value in [json!("true"), json!(1), json!(null), json!(false)] {
            let st = SequentialThinking::from_value(&json!({ "enabled": value }));
            assert!(!st.enabled, "enabled = {} should not count", value);
        }
    }

    #[test]
    fn test_invalid_steps_fall_back_to_default() {
        for value in [json!(0), json!(-2), json!(2.5), json!("5"), json!(null), json!(u64::MAX)] {
            let st = SequentialThinking::from_value(&json!({ "enabled": true, "steps": value }));
            assert_eq!(st.steps, None, "steps = {}", value);
            assert_eq!(st.effective_steps(), DEFAULT_SEQUENTIAL_THINKING_STEPS);
        }
    }

    #[test]
    fn test_non_object_section_is_disabled() {
        let st = SequentialThinking::from_value(&json!(true));
        assert!(!st.enabled);
        assert_eq!(st.effective_steps(), 3);
    }

    #[test]
    fn test_extra_keys_are_kept_in_order() {
        let st = SequentialThinking::from_value(&json!({
            "enabled": true,
            "strategy": "depth-first",
            "budget": 10
        }));

        let keys: Vec<&str> = st.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["strategy", "budget"]);
    }

    #[test]
    fn test_list_sections_use_defaults() {
        let tools = parse_tools(&json!([
            { "name": "search", "description": "Web search" },
            { "name": "calc" },
            "not-an-object"
        ]));

        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].description, "Web search");
        assert_eq!(tools[1].description, "No description");
        assert_eq!(tools[2].name, "Unnamed tool");

        let resources = parse_resources(&json!([{ "id": "docs" }]));
        assert_eq!(resources[0].resource_type, "Unknown type");

        let prompts = parse_prompts(&json!([{ "title": "Review" }]));
        assert_eq!(prompts[0].id, "Unknown ID");
        assert_eq!(prompts[0].title, "Review");
    }

    #[test]
    fn test_non_list_section_is_empty() {
        assert!(parse_tools(&json!({ "name": "search" })).is_empty());
        assert!(parse_prompts(&json!("prompts")).is_empty());
    }
}
