//! Rendering of the four files that make up a new package.
//!
//! ```text
//! <name>/
//!   package.json
//!   tsconfig.json
//!   tsup.config.ts
//!   src/
//!     index.ts
//! ```

use std::path::PathBuf;

use crate::config::ScaffoldConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::manifest::{PackageJson, INITIAL_VERSION};
use crate::tsconfig::TsConfig;

pub const MANIFEST_FILE: &str = "package.json";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const BUILD_CONFIG_FILE: &str = "tsup.config.ts";
pub const SOURCE_DIR: &str = "src";
pub const ENTRY_FILE: &str = "index.ts";

/// A single file to be written, relative to the package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// The full set of generated files for one package, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTemplate {
    pub files: Vec<GeneratedFile>,
}

impl PackageTemplate {
    /// Render every file for a package called `name`.
    pub fn render(name: &str, config: &ScaffoldConfig) -> ScaffoldResult<Self> {
        let manifest = PackageJson::for_package(name, config)
            .to_json()
            .map_err(|e| ScaffoldError::render_failed(MANIFEST_FILE, e))?;
        let tsconfig = TsConfig::for_package(config)
            .to_json()
            .map_err(|e| ScaffoldError::render_failed(TSCONFIG_FILE, e))?;

        Ok(PackageTemplate {
            files: vec![
                GeneratedFile {
                    relative_path: PathBuf::from(MANIFEST_FILE),
                    contents: manifest,
                },
                GeneratedFile {
                    relative_path: PathBuf::from(TSCONFIG_FILE),
                    contents: tsconfig,
                },
                GeneratedFile {
                    relative_path: PathBuf::from(BUILD_CONFIG_FILE),
                    contents: tsup_config().to_string(),
                },
                GeneratedFile {
                    relative_path: PathBuf::from(SOURCE_DIR).join(ENTRY_FILE),
                    contents: entry_module(name),
                },
            ],
        })
    }
}

/// Build configuration: one entry, CommonJS and ES module output, type
/// declarations, no code splitting, source maps, clean before build.
pub fn tsup_config() -> &'static str {
    r#"import { defineConfig } from 'tsup'

export default defineConfig({
  entry: ['src/index.ts'],
  format: ['cjs', 'esm'],
  dts: true,
  splitting: false,
  sourcemap: true,
  clean: true,
})
"#
}

/// Entry module with a greeting helper and a default export naming the package.
pub fn entry_module(name: &str) -> String {
    format!(
        r#"export const hello = (name: string) => `Hello from {package}, ${{name}}!`

export default {{
  name: '{package}',
  version: '{version}',
}}
"#,
        package = name,
        version = INITIAL_VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_produces_four_files_in_write_order() {
        let template = PackageTemplate::render("widgets", &ScaffoldConfig::default()).unwrap();
        let paths: Vec<PathBuf> = template
            .files
            .iter()
            .map(|f| f.relative_path.clone())
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("package.json"),
                PathBuf::from("tsconfig.json"),
                PathBuf::from("tsup.config.ts"),
                PathBuf::from("src").join("index.ts"),
            ]
        );
    }

    #[test]
    fn entry_module_default_export_names_package() {
        let content = entry_module("widgets");
        assert!(content.contains("  name: 'widgets',"), "{content}");
        assert!(content.contains("  version: '1.0.0',"));
        assert!(
            content.contains("`Hello from widgets, ${name}!`"),
            "template literal should keep the runtime placeholder: {content}"
        );
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn tsup_config_declares_dual_format_build() {
        let content = tsup_config();
        assert!(content.contains("entry: ['src/index.ts']"));
        assert!(content.contains("format: ['cjs', 'esm']"));
        assert!(content.contains("dts: true"));
        assert!(content.contains("splitting: false"));
        assert!(content.contains("sourcemap: true"));
        assert!(content.contains("clean: true"));
    }

    #[test]
    fn render_is_deterministic() {
        let config = ScaffoldConfig::default();
        let a = PackageTemplate::render("utils", &config).unwrap();
        let b = PackageTemplate::render("utils", &config).unwrap();
        assert_eq!(a, b);
    }
}
