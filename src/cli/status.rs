use crate::mcp::{discover, Discovery, DiscoveryOptions, SearchScope, VersionPolicy};
use crate::ui::{render_error, render_overview, render_sequential_thinking_status, DisplayBlock};
use crate::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Flags shared by every status command
#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
    /// Workspace directory to inspect (default: current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Also look for mcp.json in parent directories
    #[arg(long)]
    pub search_parents: bool,

    /// Load configurations that have no version field
    #[arg(long)]
    pub allow_unversioned: bool,
}

impl StatusArgs {
    pub fn options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            scope: if self.search_parents {
                SearchScope::Ancestors
            } else {
                SearchScope::Workspace
            },
            version_policy: if self.allow_unversioned {
                VersionPolicy::Optional
            } else {
                VersionPolicy::Required
            },
        }
    }

    fn discover(&self) -> Discovery {
        discover(self.dir.as_deref(), &self.options())
    }
}

/// Which panels a command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panels {
    Overview,
    SequentialThinking,
    All,
}

pub fn run(args: &StatusArgs, panels: Panels) -> Result<()> {
    let discovery = args.discover();
    for block in panels_for(&discovery, panels) {
        println!("{}", block.render_styled());
    }
    Ok(())
}

/// Blocks to show for a discovery, diagnostic first
pub fn panels_for(discovery: &Discovery, panels: Panels) -> Vec<DisplayBlock> {
    let mut blocks = Vec::new();
    if let Some(err) = &discovery.diagnostic {
        blocks.push(render_error(err));
    }

    let model = discovery.model();
    if matches!(panels, Panels::Overview | Panels::All) {
        blocks.push(render_overview(model));
    }
    if matches!(panels, Panels::SequentialThinking | Panels::All) {
        blocks.push(render_sequential_thinking_status(model));
    }
    blocks
}

// =============================================================================
// Check
// =============================================================================

/// Machine-readable summary of a discovery
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub found: bool,
    pub path: Option<PathBuf>,
    pub loaded: bool,
    pub version: Option<String>,
    pub sequential_thinking: SequentialThinkingReport,
    pub recognized_sections: Vec<String>,
    pub unrecognized_sections: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SequentialThinkingReport {
    pub enabled: bool,
    pub steps: u32,
    pub description: Option<String>,
}

impl CheckReport {
    pub fn from_discovery(discovery: &Discovery) -> Self {
        let model = discovery.model();
        Self {
            found: discovery.path.is_some(),
            path: discovery.path.clone(),
            loaded: model.is_some(),
            version: model.and_then(|m| m.version()).map(str::to_string),
            sequential_thinking: SequentialThinkingReport {
                enabled: model.is_some_and(|m| m.has_sequential_thinking()),
                steps: model.map_or(
                    crate::models::capability::DEFAULT_SEQUENTIAL_THINKING_STEPS,
                    |m| m.sequential_thinking_steps(),
                ),
                description: model
                    .and_then(|m| m.sequential_thinking())
                    .and_then(|st| st.description.clone()),
            },
            recognized_sections: model.map(|m| owned(m.recognized_sections())).unwrap_or_default(),
            unrecognized_sections: model.map(|m| owned(m.unrecognized_sections())).unwrap_or_default(),
            error: discovery.diagnostic.as_ref().map(ToString::to_string),
        }
    }
}

fn owned(sections: Vec<&str>) -> Vec<String> {
    sections.into_iter().map(str::to_string).collect()
}

pub fn run_check(args: &StatusArgs, json: bool) -> Result<()> {
    let report = CheckReport::from_discovery(&args.discover());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match (&report.path, &report.error) {
        (None, _) => println!("{}", "○ No MCP configuration found".yellow()),
        (Some(path), Some(err)) => {
            println!("{}", format!("✗ {}", path.display()).red());
            println!("  {}", err);
        }
        (Some(path), None) => {
            println!("{}", format!("✓ {}", path.display()).green());
            println!("  Version: {}", report.version.as_deref().unwrap_or("not set"));
            println!(
                "  Sequential Thinking: {} ({} steps)",
                if report.sequential_thinking.enabled {
                    "Enabled".green()
                } else {
                    "Disabled".yellow()
                },
                report.sequential_thinking.steps
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir) -> StatusArgs {
        StatusArgs {
            dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_options_from_flags() {
        let args = StatusArgs {
            dir: None,
            search_parents: true,
            allow_unversioned: true,
        };
        let options = args.options();
        assert_eq!(options.scope, SearchScope::Ancestors);
        assert_eq!(options.version_policy, VersionPolicy::Optional);

        let defaults = StatusArgs::default().options();
        assert_eq!(defaults.scope, SearchScope::Workspace);
        assert_eq!(defaults.version_policy, VersionPolicy::Required);
    }

    #[test]
    fn test_panels_without_configuration() {
        let temp_dir = TempDir::new().unwrap();
        let blocks = panels_for(&args_for(&temp_dir).discover(), Panels::All);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title(), "MCP Status");
        assert_eq!(blocks[1].title(), "Sequential Thinking Status");
    }

    #[test]
    fn test_panels_put_diagnostic_first() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("mcp.json"), "This is not valid JSON").unwrap();

        let blocks = panels_for(&args_for(&temp_dir).discover(), Panels::Overview);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title(), "MCP Error");
        assert!(blocks[1].to_string().contains("No MCP configuration found"));
    }

    #[test]
    fn test_check_report() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("mcp.json"),
            r#"{"version": "1.0", "sequential-thinking": {"enabled": true, "steps": 5}, "memory": {}}"#,
        )
        .unwrap();

        let report = CheckReport::from_discovery(&args_for(&temp_dir).discover());
        assert!(report.found && report.loaded);
        assert_eq!(report.version.as_deref(), Some("1.0"));
        assert!(report.sequential_thinking.enabled);
        assert_eq!(report.sequential_thinking.steps, 5);
        assert_eq!(report.recognized_sections, vec!["sequential-thinking"]);
        assert_eq!(report.unrecognized_sections, vec!["memory"]);
        assert!(report.error.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sequential_thinking"]["steps"], 5);
    }

    #[test]
    fn test_check_report_absent() {
        let temp_dir = TempDir::new().unwrap();
        let report = CheckReport::from_discovery(&args_for(&temp_dir).discover());

        assert!(!report.found);
        assert!(!report.loaded);
        assert_eq!(report.sequential_thinking.steps, 3);
        assert!(report.recognized_sections.is_empty());
    }
}
