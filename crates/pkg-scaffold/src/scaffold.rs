//! Package scaffolding for `create-package`.
//!
//! A single linear sequence: existence check, directory creation, rendering,
//! and four writes. There is no rollback; a failed write leaves earlier files
//! in place. The existence check and the directory creation are not atomic.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ScaffoldConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::{PackageTemplate, SOURCE_DIR};
use crate::workspace::Workspace;

/// A package that was just written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldedPackage {
    pub name: String,
    pub scoped_name: String,
    pub dir: PathBuf,
    /// Written files, relative to `dir`, in write order.
    pub files: Vec<PathBuf>,
}

/// Create `packages/<name>` inside `workspace`.
///
/// Fails with [`ScaffoldError::PackageAlreadyExists`] without touching the
/// filesystem if the directory is already present.
pub fn scaffold(
    workspace: &Workspace,
    name: &str,
    config: &ScaffoldConfig,
) -> ScaffoldResult<ScaffoldedPackage> {
    if name.is_empty() {
        return Err(ScaffoldError::MissingArgument);
    }

    let package_dir = workspace.package_dir(name);
    if package_dir.exists() {
        warn!(dir = %package_dir.display(), "package directory already exists");
        return Err(ScaffoldError::PackageAlreadyExists {
            name: name.to_string(),
        });
    }

    let src_dir = package_dir.join(SOURCE_DIR);
    fs::create_dir_all(&src_dir).map_err(|e| ScaffoldError::write_failed(&src_dir, e))?;
    debug!(dir = %src_dir.display(), "created source directory");

    let template = PackageTemplate::render(name, config)?;
    let mut files = Vec::with_capacity(template.files.len());
    for file in &template.files {
        let path = package_dir.join(&file.relative_path);
        write_file(&path, &file.contents)?;
        debug!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        files.push(file.relative_path.clone());
    }

    let scoped_name = config.scoped_name(name);
    info!(package = %scoped_name, dir = %package_dir.display(), "package created");

    Ok(ScaffoldedPackage {
        name: name.to_string(),
        scoped_name,
        dir: package_dir,
        files,
    })
}

/// Write `contents` to `path`; the handle is closed when this returns.
fn write_file(path: &Path, contents: &str) -> ScaffoldResult<()> {
    let mut file = File::create(path).map_err(|e| ScaffoldError::write_failed(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| ScaffoldError::write_failed(path, e))
}
