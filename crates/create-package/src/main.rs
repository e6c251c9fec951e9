//! The `create-package` CLI.
//!
//! `create-package <package-name>` creates `packages/<package-name>` in the
//! workspace with a manifest, a tsconfig, a tsup config and `src/index.ts`.
//!
//! Options:
//! - `--root` - Workspace root (default: two levels above the executable's directory)
//! - `--scope` - Scope for the generated package name (default: `myproject`)
//! - `--json` - Report the result as a single JSON object
//! - `-v` - Increase log verbosity (repeatable)

mod logging;

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use pkg_scaffold::config::DEFAULT_SCOPE;
use pkg_scaffold::{scaffold, ScaffoldConfig, ScaffoldError, ScaffoldedPackage, Workspace};

const BIN_NAME: &str = "create-package";

#[derive(Parser)]
#[command(name = BIN_NAME, version, about = "Create a new package in the workspace")]
struct Cli {
    /// Name of the package to create under packages/
    #[arg(allow_hyphen_values = true)]
    package_name: Option<String>,

    /// Arguments after the package name are ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Workspace root (defaults to two levels above the executable's directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Scope for the generated package name, without the leading '@'
    #[arg(long, default_value = DEFAULT_SCOPE)]
    scope: String,

    /// Output the result as JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Every usage error exits 1, like a missing package name.
            eprint!("{}", e);
            print_usage();
            process::exit(1);
        }
    };
    logging::init(cli.verbose);
    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    match run(&cli) {
        Ok(created) => {
            if cli.json {
                match serde_json::to_string(&created) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error creating package: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                print_success(&created);
            }
        }
        Err(e) => {
            report_error(&e, cli.json);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<ScaffoldedPackage, ScaffoldError> {
    let name = match cli.package_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ScaffoldError::MissingArgument),
    };

    let workspace = match &cli.root {
        Some(root) => Workspace::new(root),
        None => Workspace::from_exe()?,
    };
    tracing::debug!(root = %workspace.root().display(), "resolved workspace");

    let config = ScaffoldConfig::default().with_scope(&cli.scope);
    scaffold(&workspace, name, &config)
}

fn print_success(created: &ScaffoldedPackage) {
    println!("✅ Package {} created successfully!", created.scoped_name);
    println!("📁 Location: {}", created.dir.display());
    println!();
    println!("Next steps:");
    println!("1. pnpm install");
    println!("2. pnpm build --filter {}", created.scoped_name);
}

fn print_usage() {
    println!("Usage: {} <package-name>", BIN_NAME);
    println!("Example: {} utils", BIN_NAME);
}

fn report_error(err: &ScaffoldError, json: bool) {
    if json {
        let msg = serde_json::json!({
            "error": err.kind(),
            "message": err.to_string(),
        });
        eprintln!("{}", msg);
        return;
    }

    match err {
        ScaffoldError::MissingArgument => print_usage(),
        ScaffoldError::FilesystemWriteFailure { .. } => {
            eprintln!("Error creating package: {}", err);
        }
        _ => eprintln!("Error: {}", err),
    }
}
