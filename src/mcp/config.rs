//! MCP Capability Model
//!
//! Loads an `mcp.json` document into an immutable, typed model.
//!
//! Document shape:
//! ```json
//! {
//!   "version": "1.0",
//!   "sequential-thinking": { "enabled": true, "steps": 5, "description": "..." },
//!   "tools": [{ "name": "...", "description": "..." }]
//! }
//! ```
//!
//! Unknown top-level sections are kept verbatim and exposed as extra sections.

use super::error::ConfigError;
use crate::models::capability::{
    parse_prompts, parse_resources, parse_tools, PromptEntry, ResourceEntry, SequentialThinking,
    ToolEntry, DEFAULT_SEQUENTIAL_THINKING_STEPS, PROMPTS_KEY, RECOGNIZED_SECTIONS, RESOURCES_KEY,
    SEQUENTIAL_THINKING_KEY, TOOLS_KEY,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

const VERSION_KEY: &str = "version";

/// How a document without `version` is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionPolicy {
    /// Missing version is a `ConfigError::MissingVersion`
    #[default]
    Required,
    /// Missing version is accepted and reported as not set
    Optional,
}

/// Parsed MCP configuration
#[derive(Debug, Clone)]
pub struct CapabilityModel {
    path: PathBuf,
    raw: Map<String, Value>,
    version: Option<String>,
    sequential_thinking: Option<SequentialThinking>,
    tools: Option<Vec<ToolEntry>>,
    resources: Option<Vec<ResourceEntry>>,
    prompts: Option<Vec<PromptEntry>>,
    extra_sections: Map<String, Value>,
}

impl CapabilityModel {
    /// Load a configuration file, requiring a version
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, VersionPolicy::Required)
    }

    /// Load a configuration file with an explicit version policy
    pub fn load_with(path: impl AsRef<Path>, policy: VersionPolicy) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let model = Self::from_json_slice(&content, path, policy)?;
        tracing::info!("Loaded MCP configuration from {}", path.display());
        Ok(model)
    }

    /// Parse a document already in memory. `path` is used for reporting only.
    pub fn from_json_str(
        content: &str,
        path: impl Into<PathBuf>,
        policy: VersionPolicy,
    ) -> Result<Self, ConfigError> {
        Self::from_json_slice(content.as_bytes(), path, policy)
    }

    /// Parse raw file bytes. Invalid UTF-8 is a `ParseFailure`, not an I/O error.
    pub fn from_json_slice(
        content: &[u8],
        path: impl Into<PathBuf>,
        policy: VersionPolicy,
    ) -> Result<Self, ConfigError> {
        let path = path.into();
        let raw: Map<String, Value> = match serde_json::from_slice(content) {
            Ok(raw) => raw,
            Err(source) => {
                tracing::debug!("Error parsing MCP configuration {}: {}", path.display(), source);
                return Err(ConfigError::ParseFailure { path, source });
            }
        };

        let version = raw.get(VERSION_KEY).and_then(version_text);
        if version.is_none() && policy == VersionPolicy::Required {
            return Err(ConfigError::MissingVersion { path });
        }

        let sequential_thinking = raw.get(SEQUENTIAL_THINKING_KEY).map(SequentialThinking::from_value);
        if sequential_thinking.is_some() {
            tracing::info!("Sequential thinking configuration detected");
        }

        let extra_sections: Map<String, Value> = raw
            .iter()
            .filter(|(key, _)| key.as_str() != VERSION_KEY && !RECOGNIZED_SECTIONS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !extra_sections.is_empty() {
            tracing::debug!(
                "Preserving unrecognized MCP sections: {}",
                extra_sections.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }

        Ok(Self {
            tools: raw.get(TOOLS_KEY).map(parse_tools),
            resources: raw.get(RESOURCES_KEY).map(parse_resources),
            prompts: raw.get(PROMPTS_KEY).map(parse_prompts),
            path,
            version,
            sequential_thinking,
            extra_sections,
            raw,
        })
    }

    // =========================================================================
    // Capability Queries
    // =========================================================================

    /// True iff `sequential-thinking.enabled` is exactly `true`
    pub fn has_sequential_thinking(&self) -> bool {
        self.sequential_thinking
            .as_ref()
            .is_some_and(|st| st.enabled)
    }

    /// Configured step count, falling back to the default. Never fails.
    pub fn sequential_thinking_steps(&self) -> u32 {
        self.sequential_thinking
            .as_ref()
            .map_or(DEFAULT_SEQUENTIAL_THINKING_STEPS, SequentialThinking::effective_steps)
    }

    pub fn sequential_thinking(&self) -> Option<&SequentialThinking> {
        self.sequential_thinking.as_ref()
    }

    pub fn tools(&self) -> Option<&[ToolEntry]> {
        self.tools.as_deref()
    }

    pub fn resources(&self) -> Option<&[ResourceEntry]> {
        self.resources.as_deref()
    }

    pub fn prompts(&self) -> Option<&[PromptEntry]> {
        self.prompts.as_deref()
    }

    // =========================================================================
    // Document Accessors
    // =========================================================================

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The document as parsed
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Sections this crate does not interpret, in document order
    pub fn extra_sections(&self) -> &Map<String, Value> {
        &self.extra_sections
    }

    /// Recognized capability sections present in the document, in document order
    pub fn recognized_sections(&self) -> Vec<&str> {
        self.raw
            .keys()
            .map(String::as_str)
            .filter(|key| RECOGNIZED_SECTIONS.contains(key))
            .collect()
    }

    pub fn unrecognized_sections(&self) -> Vec<&str> {
        self.extra_sections.keys().map(String::as_str).collect()
    }
}

/// Load a configuration file, requiring a version
pub fn load_config(path: impl AsRef<Path>) -> Result<CapabilityModel, ConfigError> {
    CapabilityModel::load(path)
}

fn version_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<CapabilityModel, ConfigError> {
        CapabilityModel::from_json_str(content, "mcp.json", VersionPolicy::Required)
    }

    #[test]
    fn test_full_sequential_thinking_document() {
        let model = parse(
            r#"{"version":"1.0","sequential-thinking":{"enabled":true,"steps":5,"description":"test"}}"#,
        )
        .unwrap();

        assert_eq!(model.version(), Some("1.0"));
        assert!(model.has_sequential_thinking());
        assert_eq!(model.sequential_thinking_steps(), 5);
        assert_eq!(
            model.sequential_thinking().and_then(|st| st.description.as_deref()),
            Some("test")
        );
    }

    #[test]
    fn test_version_only_document() {
        let model = parse(r#"{"version":"1.0"}"#).unwrap();

        assert!(!model.has_sequential_thinking());
        assert_eq!(model.sequential_thinking_steps(), 3);
        assert!(model.recognized_sections().is_empty());
        assert!(model.unrecognized_sections().is_empty());
    }

    #[test]
    fn test_disabled_section_keeps_steps() {
        let model =
            parse(r#"{"version":"1.0","sequential-thinking":{"enabled":false,"steps":7}}"#).unwrap();

        assert!(!model.has_sequential_thinking());
        assert_eq!(model.sequential_thinking_steps(), 7);
    }

    #[test]
    fn test_invalid_steps_degrade_to_default() {
        for steps in ["0", "-1", "1.5", "\"four\"", "null", "[]"] {
            let content = format!(
                r#"{{"version":"1.0","sequential-thinking":{{"enabled":true,"steps":{}}}}}"#,
                steps
            );
            let model = parse(&content).unwrap();
            assert!(model.has_sequential_thinking());
            assert_eq!(model.sequential_thinking_steps(), 3, "steps = {}", steps);
        }
    }

    #[test]
    fn test_malformed_json_is_parse_failure() {
        let err = parse("This is not valid JSON").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailure { .. }));
        assert_eq!(err.path(), Path::new("mcp.json"));
    }

    #[test]
    fn test_non_object_root_is_parse_failure() {
        assert!(matches!(parse("[1, 2, 3]"), Err(ConfigError::ParseFailure { .. })));
        assert!(matches!(parse("\"1.0\""), Err(ConfigError::ParseFailure { .. })));
    }

    #[test]
    fn test_missing_version() {
        let err = parse(r#"{"sequential-thinking":{"enabled":true}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion { .. }));

        let err = parse(r#"{"version":null}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion { .. }));
    }

    #[test]
    fn test_optional_version_policy() {
        let model = CapabilityModel::from_json_str(
            r#"{"sequential-thinking":{"enabled":true}}"#,
            "mcp.json",
            VersionPolicy::Optional,
        )
        .unwrap();

        assert_eq!(model.version(), None);
        assert!(model.has_sequential_thinking());
    }

    #[test]
    fn test_numeric_version_is_accepted() {
        let model = parse(r#"{"version":2}"#).unwrap();
        assert_eq!(model.version(), Some("2"));
    }

    #[test]
    fn test_unknown_sections_are_preserved() {
        let model = parse(
            r#"{
                "version": "1.0",
                "memory": {"enabled": true},
                "tools": [{"name": "search"}],
                "sampling": [1, 2]
            }"#,
        )
        .unwrap();

        assert_eq!(model.recognized_sections(), vec!["tools"]);
        assert_eq!(model.unrecognized_sections(), vec!["memory", "sampling"]);
        assert_eq!(model.extra_sections()["memory"]["enabled"], Value::Bool(true));
        assert_eq!(model.tools().map(<[ToolEntry]>::len), Some(1));
        assert!(model.resources().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mcp.json");
        std::fs::write(
            &path,
            r#"{"version": "1.0", "sequential-thinking": {"enabled": true, "steps": 3}}"#,
        )
        .unwrap();

        let model = load_config(&path).unwrap();
        assert_eq!(model.path(), path.as_path());
        assert!(model.has_sequential_thinking());
        assert_eq!(model.raw().len(), 2);
    }

    #[test]
    fn test_invalid_utf8_is_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mcp.json");
        std::fs::write(&path, b"{\"version\":\"1.0\",\"x\":\"\xff\xfe\"}").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailure { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_from_json_slice_matches_from_json_str() {
        let content = r#"{"version":"1.0","sequential-thinking":{"enabled":true,"steps":4}}"#;
        let from_str = CapabilityModel::from_json_str(content, "mcp.json", VersionPolicy::Required).unwrap();
        let from_slice =
            CapabilityModel::from_json_slice(content.as_bytes(), "mcp.json", VersionPolicy::Required).unwrap();

        assert_eq!(from_str.raw(), from_slice.raw());
        assert_eq!(from_slice.sequential_thinking_steps(), 4);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_config(temp_dir.path().join("non_existent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
