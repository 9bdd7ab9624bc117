//! Locates the workspace `mcp.json`.
//!
//! Detection only looks at the given directory unless the caller opts into
//! `SearchScope::Ancestors`. A configuration belongs to the workspace it sits
//! in; a parent project's file is not picked up implicitly.

use super::error::ConfigError;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Conventional configuration file name
pub const CONFIG_FILE_NAME: &str = "mcp.json";

/// Which directories detection looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Only the start directory
    #[default]
    Workspace,
    /// The start directory, then each parent up to the root. Nearest wins.
    Ancestors,
}

/// Detect `mcp.json` in the current working directory
pub fn detect_config(start_dir: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    detect_config_in(start_dir, SearchScope::Workspace)
}

/// Detect `mcp.json` starting from `start_dir` (or the working directory).
///
/// Returns `Ok(None)` when no file is present. A present but unreadable file
/// is a `ConfigError::Io`.
pub fn detect_config_in(
    start_dir: Option<&Path>,
    scope: SearchScope,
) -> Result<Option<PathBuf>, ConfigError> {
    let start = match start_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("."),
            source,
        })?,
    };
    // Fall back to the path as given when it cannot be resolved
    let start = std::fs::canonicalize(&start).unwrap_or(start);

    let candidates: Vec<&Path> = match scope {
        SearchScope::Workspace => vec![start.as_path()],
        SearchScope::Ancestors => start.ancestors().collect(),
    };

    for dir in candidates {
        if let Some(path) = check_dir(dir)? {
            tracing::info!("MCP configuration detected: {}", path.display());
            return Ok(Some(path));
        }
    }

    tracing::debug!("No MCP configuration found from {}", start.display());
    Ok(None)
}

fn check_dir(dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    match std::fs::metadata(&path) {
        Ok(metadata) if !metadata.is_file() => return Ok(None),
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Io { path, source }),
    }

    File::open(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(Some(path))
}
