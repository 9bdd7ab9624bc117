//! Startup status panels for the MCP configuration.
//!
//! Pure functions of an optional `CapabilityModel`: no I/O, no global state.

use super::panel::{DisplayBlock, Tone};
use crate::mcp::{CapabilityModel, ConfigError};
use crate::models::capability::DEFAULT_SEQUENTIAL_THINKING_STEPS;
use serde_json::Value;

pub const NO_CONFIGURATION: &str = "No MCP configuration found";
const NOT_SET: &str = "not set";
const NO_DESCRIPTION: &str = "no description provided";

/// Overview of the whole configuration
pub fn render_overview(model: Option<&CapabilityModel>) -> DisplayBlock {
    let Some(model) = model else {
        return DisplayBlock::new("MCP Status", Tone::Notice).text(NO_CONFIGURATION);
    };

    let mut block = DisplayBlock::new("MCP Configuration", Tone::Success)
        .field("Path", model.path().display().to_string())
        .field("Version", model.version().unwrap_or(NOT_SET))
        .field("Recognized", join_or_none(&model.recognized_sections()))
        .field("Unrecognized", join_or_none(&model.unrecognized_sections()));

    block = match model.sequential_thinking() {
        Some(st) => {
            let status = if st.enabled { "Enabled" } else { "Disabled" };
            let mut block = block
                .field("Sequential Thinking", status)
                .nested("steps", steps_text(st.steps), 1)
                .nested("description", st.description.as_deref().unwrap_or(NO_DESCRIPTION), 1);
            for (key, value) in &st.extra {
                block = block.nested(key.as_str(), value_text(value), 1);
            }
            block
        }
        None => block.field("Sequential Thinking", "not configured"),
    };

    if let Some(tools) = model.tools() {
        block = block.field("Tools", format!("{} defined", tools.len()));
        for tool in tools {
            block = block.nested(tool.name.as_str(), tool.description.as_str(), 1);
        }
    }

    if let Some(resources) = model.resources() {
        block = block.field("Resources", format!("{} defined", resources.len()));
        for resource in resources {
            block = block.nested(resource.id.as_str(), resource.resource_type.as_str(), 1);
        }
    }

    if let Some(prompts) = model.prompts() {
        block = block.field("Prompts", format!("{} defined", prompts.len()));
        for prompt in prompts {
            block = block.nested(prompt.id.as_str(), prompt.title.as_str(), 1);
        }
    }

    block
}

/// Focused panel for the sequential-thinking capability
pub fn render_sequential_thinking_status(model: Option<&CapabilityModel>) -> DisplayBlock {
    let Some(model) = model else {
        return DisplayBlock::new("Sequential Thinking Status", Tone::Notice).text(NO_CONFIGURATION);
    };

    match model.sequential_thinking() {
        Some(st) if st.enabled => DisplayBlock::new("Sequential Thinking", Tone::Success)
            .field("Status", "Enabled")
            .field("Steps", steps_text(st.steps))
            .field("Description", st.description.as_deref().unwrap_or(NO_DESCRIPTION)),
        _ => DisplayBlock::new("Sequential Thinking Status", Tone::Notice)
            .text("Sequential Thinking is not enabled"),
    }
}

/// Diagnostic panel for a configuration that could not be used
pub fn render_error(error: &ConfigError) -> DisplayBlock {
    let block = DisplayBlock::new("MCP Error", Tone::Error)
        .field("Path", error.path().display().to_string())
        .field("Error", error.to_string());

    if error.is_recoverable() {
        block.text("Pass --allow-unversioned to load it anyway")
    } else {
        block
    }
}

fn steps_text(steps: Option<u32>) -> String {
    match steps {
        Some(steps) => steps.to_string(),
        None => format!("{} (default)", DEFAULT_SEQUENTIAL_THINKING_STEPS),
    }
}

fn join_or_none(sections: &[&str]) -> String {
    if sections.is_empty() {
        "none".to_string()
    } else {
        sections.join(", ")
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
