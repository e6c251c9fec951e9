//! Error types for package scaffolding.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while creating a package.
///
/// Every variant is terminal for the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No package name was given, or it was empty.
    #[error("a package name is required")]
    MissingArgument,

    /// The target package directory is already present.
    #[error("Package {name} already exists!")]
    PackageAlreadyExists { name: String },

    /// Creating a directory or writing a file failed.
    ///
    /// Files written before the failure are left in place.
    #[error("{source}")]
    FilesystemWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated JSON file could not be serialized.
    #[error("failed to render {file}: {source}")]
    RenderFailed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// The workspace root could not be derived from the executable location.
    #[error("cannot resolve workspace root: {0}")]
    WorkspaceUnresolved(String),
}

impl ScaffoldError {
    /// Short machine-readable name of the variant, used for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ScaffoldError::MissingArgument => "MissingArgument",
            ScaffoldError::PackageAlreadyExists { .. } => "PackageAlreadyExists",
            ScaffoldError::FilesystemWriteFailure { .. } => "FilesystemWriteFailure",
            ScaffoldError::RenderFailed { .. } => "RenderFailed",
            ScaffoldError::WorkspaceUnresolved(_) => "WorkspaceUnresolved",
        }
    }

    pub(crate) fn render_failed(file: &str, source: serde_json::Error) -> Self {
        ScaffoldError::RenderFailed {
            file: file.to_string(),
            source,
        }
    }

    pub(crate) fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::FilesystemWriteFailure {
            path: path.into(),
            source,
        }
    }
}
