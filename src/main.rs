use anyhow::Result;
use clap::{Parser, Subcommand};
use flock_core::catalog::{self, defaults, PermissionCatalog};
use flock_core::config::Config;
use flock_core::domain::User;
use flock_core::middleware::{check_permission, PermissionDecision};
use flock_core::repository::{self, rbac::PermissionRepositoryImpl};
use flock_core::{telemetry, Gate};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "flock-core", version, about = "Inspect and evaluate Flock permissions")]
struct Cli {
    /// Use the built-in role matrix instead of the database
    #[arg(long, global = true)]
    defaults: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide whether a role may exercise any of the given abilities
    Check {
        #[arg(long)]
        role: String,
        #[arg(long, default_value_t = 0)]
        user_id: i64,
        /// Repeat for "any of" semantics
        #[arg(long = "ability", required = true)]
        abilities: Vec<String>,
    },
    /// List roles and the abilities they resolve to
    Roles,
    /// List registered abilities
    Abilities,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    telemetry::init(&config.telemetry);

    let cli = Cli::parse();
    let catalog = load(&config, cli.defaults).await?;

    match cli.command {
        Command::Check {
            role,
            user_id,
            abilities,
        } => {
            let gate = Gate::new(Arc::new(catalog));
            let user = User::new(user_id, "cli", role);
            match check_permission(&gate, Some(&user), abilities.as_slice()) {
                PermissionDecision::Allow => {
                    println!("allow");
                    Ok(ExitCode::SUCCESS)
                }
                PermissionDecision::Forbidden { required } => {
                    println!("forbidden (required: {})", required.join(", "));
                    Ok(ExitCode::FAILURE)
                }
                PermissionDecision::Unauthenticated => {
                    println!("unauthenticated");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Roles => {
            for role in catalog.role_names() {
                let mut held: Vec<&str> =
                    catalog.resolve(role).iter().map(String::as_str).collect();
                held.sort_unstable();
                println!("{role}: {}", held.join(", "));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Abilities => {
            for ability in catalog.abilities() {
                println!("{ability}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn load(config: &Config, use_defaults: bool) -> Result<PermissionCatalog> {
    if use_defaults {
        info!("Using built-in permission catalog");
        return Ok(defaults::default_catalog());
    }

    let Some(database) = &config.database else {
        info!("DATABASE_URL not set, no abilities registered");
        return Ok(PermissionCatalog::unavailable());
    };

    let catalog = match repository::connect(database).await {
        Ok(pool) => catalog::load_catalog(&PermissionRepositoryImpl::new(pool)).await,
        Err(e) => {
            tracing::debug!(error = %e, "Permission database unreachable");
            PermissionCatalog::unavailable()
        }
    };

    if !catalog.is_available() {
        eprintln!("warning: permission catalog unavailable, only admin is allowed");
    }

    Ok(catalog)
}
