//! Permissions Sample Entry Point
//!
//! Resolves the permissions granted by a list of roles and checks them
//! against a list of required permissions.
//!
//! ```text
//! permissions --role editor --require read --require publish
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use permissions::{Permission, RoleCatalog, sorted};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniset::Set;

/// Check role permissions.
#[derive(Debug, Parser)]
#[command(name = "permissions", version)]
struct Arguments {
    /// Role to grant; may be repeated.
    #[arg(short, long = "role")]
    roles: Vec<String>,

    /// Permission the request needs; may be repeated.
    #[arg(short = 'q', long = "require")]
    required: Vec<String>,

    /// Print the defined roles and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,permissions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arguments = Arguments::parse();
    let catalog = RoleCatalog::builtin();

    if arguments.list {
        for name in catalog.role_names() {
            let permissions = catalog.resolve([name])?;
            println!("{name}: {}", sorted(&permissions).join(", "));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let required: Set<Permission> = arguments
        .required
        .iter()
        .map(|name| known_permission(&catalog, name))
        .collect::<anyhow::Result<_>>()?;

    let decision = catalog
        .authorize(arguments.roles.iter().map(String::as_str), &required)
        .context("failed to resolve roles")?;

    tracing::info!(
        roles = arguments.roles.len(),
        granted = decision.granted.len(),
        missing = decision.missing.len(),
        "authorization evaluated"
    );

    println!("granted: {}", sorted(&decision.granted).join(", "));
    if decision.is_allowed() {
        println!("allowed");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("denied, missing: {}", sorted(&decision.missing).join(", "));
        Ok(ExitCode::FAILURE)
    }
}

/// Maps a permission name to the catalog's interned name.
fn known_permission(catalog: &RoleCatalog, name: &str) -> anyhow::Result<Permission> {
    let every_permission = catalog.resolve(catalog.role_names())?;
    every_permission
        .iter()
        .copied()
        .find(|permission| *permission == name)
        .with_context(|| format!("unknown permission `{name}`"))
}
