//! Migrate command - Schema management for the admins, rooms and guests tables.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Resetting drops the seeded rooms and admin along with every guest
    if let MigrateAction::Fresh { yes: false } = args.action {
        return Err(AppError::internal(
            "`migrate fresh` drops all rooms, admins and guests; re-run with --yes",
        ));
    }

    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config).await?;
    let status = db.migration_status().await?;

    match args.action {
        MigrateAction::Up => {
            let pending: Vec<_> = status
                .iter()
                .filter(|(_, applied)| !applied)
                .map(|(name, _)| name.as_str())
                .collect();

            if pending.is_empty() {
                tracing::info!("Schema is up to date");
                return Ok(());
            }

            db.run_migrations().await?;
            for name in pending {
                tracing::info!(migration = name, "Applied");
            }
        }
        MigrateAction::Down => {
            let Some((last, _)) = status.iter().rev().find(|(_, applied)| *applied) else {
                tracing::info!("Nothing to roll back");
                return Ok(());
            };

            db.rollback_migration().await?;
            tracing::info!(migration = %last, "Rolled back");
        }
        MigrateAction::Status => {
            let applied = status.iter().filter(|(_, applied)| *applied).count();
            for (name, is_applied) in &status {
                println!("{}: {}", name, if *is_applied { "applied" } else { "pending" });
            }
            println!("{} of {} migrations applied", applied, status.len());
        }
        MigrateAction::Fresh { .. } => {
            tracing::warn!("Dropping all tables and re-running migrations");
            db.fresh_migrations().await?;
            tracing::info!(
                migrations = status.len(),
                "Schema recreated; run `seed` to restore rooms and the admin"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_requires_confirmation() {
        let args = MigrateArgs {
            action: MigrateAction::Fresh { yes: false },
        };

        // Refused before any connection attempt
        let result = execute(args, Config::default()).await;

        assert!(matches!(result, Err(AppError::Internal(msg)) if msg.contains("--yes")));
    }
}
