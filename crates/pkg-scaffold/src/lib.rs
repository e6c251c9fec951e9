pub mod config;
pub mod error;
pub mod manifest;
pub mod scaffold;
pub mod templates;
pub mod tsconfig;
pub mod workspace;

// Re-export key types for convenience.
pub use config::ScaffoldConfig;
pub use error::{ScaffoldError, ScaffoldResult};
pub use manifest::PackageJson;
pub use scaffold::{scaffold, ScaffoldedPackage};
pub use templates::{GeneratedFile, PackageTemplate};
pub use tsconfig::TsConfig;
pub use workspace::Workspace;
