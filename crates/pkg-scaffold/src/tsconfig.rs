//! The generated `tsconfig.json`.

use serde::{Deserialize, Serialize};

use crate::config::ScaffoldConfig;

/// A package-level TypeScript configuration extending the shared base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsConfig {
    pub extends: String,
    #[serde(rename = "compilerOptions")]
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// The only options a package overrides; everything else comes from the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerOptions {
    #[serde(rename = "rootDir")]
    pub root_dir: String,
    #[serde(rename = "outDir")]
    pub out_dir: String,
    pub composite: bool,
}

impl TsConfig {
    pub fn for_package(config: &ScaffoldConfig) -> Self {
        TsConfig {
            extends: config.base_tsconfig.clone(),
            compiler_options: CompilerOptions {
                root_dir: "./src".to_string(),
                out_dir: "./dist".to_string(),
                composite: true,
            },
            include: vec!["src/**/*".to_string()],
            exclude: vec!["**/*.test.ts".to_string(), "**/*.spec.ts".to_string()],
        }
    }

    /// Serialize with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
