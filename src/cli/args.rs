//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// PG Manager - Paying-guest hostel management API
#[derive(Parser, Debug)]
#[command(name = "pg-manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Insert rooms and the admin account
    Seed(SeedArgs),
}

/// Arguments for the serve command
///
/// Unset values fall back to `SERVER_HOST` / `SERVER_PORT` from the config.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Drop every table and re-run all migrations
    Fresh {
        /// Confirm that rooms, admins and guests will be erased
        #[arg(long)]
        yes: bool,
    },
}

/// Arguments for the seed command
///
/// Existing rooms and admins are left untouched, so seeding is repeatable.
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Room number to create (repeatable)
    #[arg(short, long = "room", value_name = "NUMBER")]
    pub rooms: Vec<i32>,

    /// Admin login email
    #[arg(long, env = "ADMIN_EMAIL", requires = "admin_password")]
    pub admin_email: Option<String>,

    /// Admin login password
    #[arg(long, env = "ADMIN_PASSWORD", requires = "admin_email")]
    pub admin_password: Option<String>,
}
