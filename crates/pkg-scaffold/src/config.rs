//! Scaffolding configuration.

/// Scope used for generated package names (`@<scope>/<name>`).
pub const DEFAULT_SCOPE: &str = "myproject";

/// Version specifier shared by every workspace build-tool dependency.
pub const SHARED_WORKSPACE_VERSION: &str = "workspace:*";

/// Shared base TypeScript configuration, relative to a package directory.
pub const BASE_TSCONFIG: &str = "../../configs/typescript/base.json";

/// Knobs that feed the generated files.
///
/// The defaults reproduce the workspace conventions exactly; the CLI only
/// overrides `scope`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Package scope without the leading `@`.
    pub scope: String,
    /// Version specifier for `tsup` and `typescript` dev dependencies.
    pub shared_version: String,
    /// Path the generated `tsconfig.json` extends.
    pub base_tsconfig: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        ScaffoldConfig {
            scope: DEFAULT_SCOPE.to_string(),
            shared_version: SHARED_WORKSPACE_VERSION.to_string(),
            base_tsconfig: BASE_TSCONFIG.to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Use a different package scope, keeping the other defaults.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// The scoped module name for `name`, e.g. `@myproject/utils`.
    pub fn scoped_name(&self, name: &str) -> String {
        format!("@{}/{}", self.scope, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_is_myproject() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.scoped_name("utils"), "@myproject/utils");
        assert_eq!(config.shared_version, "workspace:*");
    }

    #[test]
    fn with_scope_overrides_only_scope() {
        let config = ScaffoldConfig::default().with_scope("acme");
        assert_eq!(config.scoped_name("ui"), "@acme/ui");
        assert_eq!(config.base_tsconfig, BASE_TSCONFIG);
    }
}
