//! Seed command - Inserts rooms and the admin account.
//!
//! Rooms and admins are never created through the HTTP API.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence, UnitOfWork};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    tracing::info!("Seeding database...");

    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let uow = Persistence::new(db.get_connection());
    seed(&uow, &args).await
}

/// Create every missing room and the admin account if absent.
pub async fn seed<U: UnitOfWork>(uow: &U, args: &SeedArgs) -> AppResult<()> {
    for &room_number in &args.rooms {
        if uow.rooms().find_by_number(room_number).await?.is_some() {
            tracing::info!(room_number, "Room already exists, skipping");
            continue;
        }
        uow.rooms().create(room_number).await?;
        tracing::info!(room_number, "Room created");
    }

    if let (Some(email), Some(password)) = (&args.admin_email, &args.admin_password) {
        if uow.admins().exists_by_email(email).await? {
            tracing::info!(email = %email, "Admin already exists, skipping");
        } else {
            uow.admins().create(email.clone(), password.clone()).await?;
            tracing::info!(email = %email, "Admin created");
        }
    }

    tracing::info!("Seeding completed");
    Ok(())
}
