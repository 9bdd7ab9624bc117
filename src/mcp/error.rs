use std::path::{Path, PathBuf};

/// Failures while detecting or loading an MCP configuration.
///
/// A missing file is not an error: detection reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read MCP configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid MCP configuration file {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("MCP configuration {} has no version", path.display())]
    MissingVersion { path: PathBuf },
}

impl ConfigError {
    /// File the error refers to
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::ParseFailure { path, .. }
            | ConfigError::MissingVersion { path } => path,
        }
    }

    /// Soft failures the host may override (see `VersionPolicy::Optional`)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConfigError::MissingVersion { .. })
    }
}
