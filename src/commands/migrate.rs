//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config).await?;

    let result = run(&db, args.action).await;
    db.close().await?;
    result
}

async fn run(db: &Database, action: MigrateAction) -> AppResult<()> {
    match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let status = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, status);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_after_up_lists_every_migration_applied() {
        let db = Database::connect_without_migrations(&Config::in_memory())
            .await
            .unwrap();

        run(&db, MigrateAction::Up).await.unwrap();
        let status = db.migration_status().await.unwrap();

        assert_eq!(status.len(), 3);
        assert!(status.iter().all(|(_, applied)| *applied));
    }

    #[tokio::test]
    async fn test_down_rolls_back_last_migration() {
        let db = Database::connect_without_migrations(&Config::in_memory())
            .await
            .unwrap();

        run(&db, MigrateAction::Up).await.unwrap();
        run(&db, MigrateAction::Down).await.unwrap();
        let status = db.migration_status().await.unwrap();

        assert_eq!(
            status.iter().filter(|(_, applied)| *applied).count(),
            2
        );
        assert!(!status[2].1);
    }
}
