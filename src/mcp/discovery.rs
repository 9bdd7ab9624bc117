//! Startup discovery: detect, then load, never fail.
//!
//! Every failure degrades to "no configuration" plus a diagnostic the host may
//! show or drop.

use super::config::{CapabilityModel, VersionPolicy};
use super::error::ConfigError;
use super::locator::{detect_config_in, SearchScope};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryOptions {
    pub scope: SearchScope,
    pub version_policy: VersionPolicy,
}

/// Outcome of a discovery run
#[derive(Debug, Default)]
pub struct Discovery {
    /// Detected file, if any
    pub path: Option<PathBuf>,
    /// Loaded model, absent on any failure
    pub model: Option<CapabilityModel>,
    /// Why the model is absent when a file was involved
    pub diagnostic: Option<ConfigError>,
}

impl Discovery {
    pub fn model(&self) -> Option<&CapabilityModel> {
        self.model.as_ref()
    }

    /// True when no `mcp.json` exists at all
    pub fn is_absent(&self) -> bool {
        self.path.is_none() && self.diagnostic.is_none()
    }
}

/// Run detection and loading from `start_dir` (or the working directory)
pub fn discover(start_dir: Option<&Path>, options: &DiscoveryOptions) -> Discovery {
    let path = match detect_config_in(start_dir, options.scope) {
        Ok(Some(path)) => path,
        Ok(None) => return Discovery::default(),
        Err(err) => {
            tracing::warn!("Proceeding without MCP configuration: {}", err);
            return Discovery {
                path: Some(err.path().to_path_buf()),
                model: None,
                diagnostic: Some(err),
            };
        }
    };

    match CapabilityModel::load_with(&path, options.version_policy) {
        Ok(model) => Discovery {
            path: Some(path),
            model: Some(model),
            diagnostic: None,
        },
        Err(err) => {
            tracing::warn!("Proceeding without MCP configuration: {}", err);
            Discovery {
                path: Some(path),
                model: None,
                diagnostic: Some(err),
            }
        }
    }
}
