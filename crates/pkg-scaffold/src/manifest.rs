//! The generated `package.json` manifest.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ScaffoldConfig;

/// Version every freshly scaffolded package starts at.
pub const INITIAL_VERSION: &str = "1.0.0";

/// A package's `package.json`.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub main: String,
    pub module: String,
    pub types: String,
    pub files: Vec<String>,
    pub scripts: Scripts,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// The fixed script table.
///
/// `test` and `lint` are stubs that succeed without doing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scripts {
    pub dev: String,
    pub build: String,
    pub test: String,
    pub lint: String,
    #[serde(rename = "type-check")]
    pub type_check: String,
    pub clean: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Scripts {
            dev: "tsup --watch".to_string(),
            build: "tsup".to_string(),
            test: "echo 'No tests yet'".to_string(),
            lint: "echo 'No linting yet'".to_string(),
            type_check: "tsc --noEmit".to_string(),
            clean: "rm -rf dist *.tsbuildinfo".to_string(),
        }
    }
}

impl PackageJson {
    /// Build the manifest for a new package called `name`.
    pub fn for_package(name: &str, config: &ScaffoldConfig) -> Self {
        let dev_dependencies = ["tsup", "typescript"]
            .into_iter()
            .map(|dep| (dep.to_string(), config.shared_version.clone()))
            .collect();

        PackageJson {
            name: config.scoped_name(name),
            version: INITIAL_VERSION.to_string(),
            module_type: "module".to_string(),
            main: "./dist/index.js".to_string(),
            module: "./dist/index.mjs".to_string(),
            types: "./dist/index.d.ts".to_string(),
            files: vec!["dist".to_string()],
            scripts: Scripts::default(),
            dev_dependencies,
        }
    }

    /// Serialize with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl FromStr for PackageJson {
    type Err = serde_json::Error;

    /// Parse a manifest from a JSON string.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_names_scoped_package() {
        let manifest = PackageJson::for_package("widgets", &ScaffoldConfig::default());
        assert_eq!(manifest.name, "@myproject/widgets");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.module_type, "module");
        assert_eq!(manifest.files, vec!["dist"]);
    }

    #[test]
    fn test_and_lint_are_noop_stubs() {
        let manifest = PackageJson::for_package("widgets", &ScaffoldConfig::default());
        assert!(manifest.scripts.test.starts_with("echo "));
        assert!(manifest.scripts.lint.starts_with("echo "));
        assert_eq!(manifest.scripts.build, "tsup");
        assert_eq!(manifest.scripts.type_check, "tsc --noEmit");
    }

    #[test]
    fn dev_dependencies_pin_shared_version() {
        let manifest = PackageJson::for_package("widgets", &ScaffoldConfig::default());
        let keys: Vec<&String> = manifest.dev_dependencies.keys().collect();
        assert_eq!(keys, vec!["tsup", "typescript"]);
        assert!(manifest
            .dev_dependencies
            .values()
            .all(|v| v == "workspace:*"));
    }

    #[test]
    fn json_keys_follow_npm_spelling_and_order() {
        let json = PackageJson::for_package("widgets", &ScaffoldConfig::default())
            .to_json()
            .unwrap();

        let expected_order = [
            "\"name\":",
            "\"version\":",
            "\"type\":",
            "\"main\":",
            "\"module\":",
            "\"types\":",
            "\"files\":",
            "\"scripts\":",
            "\"devDependencies\":",
        ];
        let positions: Vec<usize> = expected_order
            .iter()
            .map(|key| json.find(key).unwrap_or_else(|| panic!("missing {key}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");

        assert!(json.contains("\"type-check\": \"tsc --noEmit\""));
        assert!(json.starts_with("{\n  \"name\": \"@myproject/widgets\""));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn custom_scope_flows_into_name() {
        let config = ScaffoldConfig::default().with_scope("acme");
        let manifest = PackageJson::for_package("ui", &config);
        assert_eq!(manifest.name, "@acme/ui");

        let parsed: PackageJson = manifest.to_json().unwrap().parse().unwrap();
        assert_eq!(parsed, manifest);
    }
}
