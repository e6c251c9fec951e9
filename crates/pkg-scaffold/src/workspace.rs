//! Workspace root resolution.
//!
//! The tool is installed two directories below the workspace root
//! (`<root>/tools/bin/create-package`), so the root is found by walking up
//! from the executable rather than from the current directory.

use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Directory under the workspace root that holds every package.
pub const PACKAGES_DIR: &str = "packages";

/// A monorepo workspace rooted at a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// A workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace { root: root.into() }
    }

    /// Resolve the workspace from the running executable's location.
    pub fn from_exe() -> ScaffoldResult<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| ScaffoldError::WorkspaceUnresolved(e.to_string()))?;
        Self::from_install_path(&exe)
    }

    /// Resolve the workspace from the path of an installed tool: the
    /// directory containing `tool`, walked up two levels.
    pub fn from_install_path(tool: &Path) -> ScaffoldResult<Self> {
        tool.ancestors()
            .nth(3)
            .filter(|root| !root.as_os_str().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                ScaffoldError::WorkspaceUnresolved(format!(
                    "'{}' is fewer than three levels below a directory",
                    tool.display()
                ))
            })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/packages/<name>`.
    ///
    /// Plain path joining: a name such as `../evil` is not rejected and
    /// resolves outside `packages/`.
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.root.join(PACKAGES_DIR).join(name)
    }
}
