//! MCP (Model Context Protocol) configuration support
//!
//! Detects a workspace `mcp.json`, loads it into an immutable capability model
//! and composes both steps for host startup.
//!
//! ## Flow
//! - `detect_config` - find `mcp.json` in the workspace
//! - `load_config` - parse it into a `CapabilityModel`
//! - `discover` - both, degrading every failure to "no configuration"
//!
//! Only the local configuration file is handled here. There is no transport
//! or session layer.

pub mod config;
pub mod discovery;
pub mod error;
pub mod locator;

pub use config::{load_config, CapabilityModel, VersionPolicy};
pub use discovery::{discover, Discovery, DiscoveryOptions};
pub use error::ConfigError;
pub use locator::{detect_config, detect_config_in, SearchScope, CONFIG_FILE_NAME};
