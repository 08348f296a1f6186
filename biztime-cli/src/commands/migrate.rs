//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use biztime_server::db::migrations;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create all tables and indexes (safe to run repeatedly)
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    tracing::info!("Migrations complete");
    Ok(())
}
