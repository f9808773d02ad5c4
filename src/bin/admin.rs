//! CLI administration tool for user-service.
//!
//! Manages users and checks the database directly, without going through
//! the HTTP API. Every user command runs through [`UserService`], so the
//! same validation and uniqueness rules apply as for HTTP requests.
//!
//! # Usage
//!
//! ```bash
//! # List users (ascending by name, or descending with --desc)
//! cargo run --bin admin -- users list --desc
//!
//! # Create a user (prompts for the name when omitted)
//! cargo run --bin admin -- users create "John Doe"
//!
//! # Rename a user
//! cargo run --bin admin -- users rename "John Doe" "Jonathan"
//!
//! # Delete a user
//! cargo run --bin admin -- users delete "Jonathan"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use user_service::application::services::UserService;
use user_service::config::{self, StoreBackend};
use user_service::infrastructure::persistence::PgUserRepository;
use user_service::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users ordered by name
    List {
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Create a new user
    Create {
        /// Display name (prompted when omitted)
        name: Option<String>,
    },

    /// Rename an existing user
    Rename { old_name: String, new_name: String },

    /// Delete a user by name
    Delete {
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.store_backend != StoreBackend::Postgres {
        anyhow::bail!("The admin tool only works with STORE_BACKEND=postgres");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Users { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::List { desc } => list_users(&service, desc).await?,
        UserAction::Create { name } => create_user(&service, name).await?,
        UserAction::Rename { old_name, new_name } => {
            rename_user(&service, &old_name, &new_name).await?
        }
        UserAction::Delete { name, yes } => delete_user(&service, &name, yes).await?,
    }

    Ok(())
}

/// Lists all users as a table.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID     Name
///   ──────────────────────────────────────
///   1      Alice
///   2      Bob
/// ```
async fn list_users(service: &UserService, desc: bool) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let order = if desc { "desc" } else { "asc" };
    let users = match service.list_users(None, Some(order)).await {
        Ok(users) => users,
        Err(user_service::AppError::NotFound { .. }) => {
            println!("{}", "  No users found".yellow());
            println!();
            println!(
                "  Create one with: {} admin users create",
                "cargo run --bin".bright_cyan()
            );
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to list users: {}", e)),
    };

    println!(
        "  {:<6} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    for user in &users {
        println!(
            "  {:<6} {}",
            user.id.to_string().bright_black(),
            user.name.cyan()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a user, prompting for the name if it was not given.
async fn create_user(service: &UserService, name: Option<String>) -> Result<()> {
    println!("{}", "Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let user = service
        .create_user(Some(&name))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!(
        "{} {} (id {})",
        "Created".green().bold(),
        user.name.cyan(),
        user.id.to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Renames a user identified by its current name.
async fn rename_user(service: &UserService, old_name: &str, new_name: &str) -> Result<()> {
    let user = service
        .update_user_by_name(Some(old_name), Some(new_name))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to rename user: {}", e))?;

    println!(
        "{} {} → {} (id {})",
        "Renamed".green().bold(),
        old_name.bright_black(),
        user.name.cyan(),
        user.id.to_string().bright_black()
    );

    Ok(())
}

/// Deletes a user by name after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is passed
async fn delete_user(service: &UserService, name: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let user = service
        .get_user_by_name(Some(name))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  User: {}", user.name.cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user_by_id(&user.id.to_string())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database Info".bright_blue().bold());
            println!();
            println!("  Version: {}", version.bright_black());
            println!(
                "  Users:   {}",
                users_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
