// mcp-inspect - MCP configuration detection and startup status
// Finds a workspace mcp.json, exposes its capabilities and renders status panels

pub mod cli;
pub mod mcp;
pub mod models;
pub mod ui;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use mcp::{
    detect_config, discover, load_config, CapabilityModel, ConfigError, Discovery, SearchScope,
    VersionPolicy,
};
pub use ui::{render_overview, render_sequential_thinking_status, DisplayBlock};
