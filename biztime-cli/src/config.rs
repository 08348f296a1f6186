//! Database selection shared by `serve` and `migrate`
//!
//! Resolution order:
//! - test mode (`--test` or `BIZTIME_ENV=test`): `TEST_DATABASE_URL`, else
//!   [`DEFAULT_TEST_DATABASE_URL`]
//! - otherwise: `--database-url`, `DATABASE_URL`, else [`DEFAULT_DATABASE_URL`]
//!
//! Test mode ignores `DATABASE_URL` so a `.env` pointing at the real database
//! can never leak into a test run.

use anyhow::{Context, Result};
use biztime_server::db::{PoolConfig, DEFAULT_MAX_CONNECTIONS};
use clap::Args;
use sqlx::PgPool;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/biztime";
pub const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/biztime_test";

/// Database connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (default: postgres://localhost/biztime)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Use the test database (TEST_DATABASE_URL); also set by BIZTIME_ENV=test
    #[arg(long)]
    pub test: bool,

    /// Maximum connections in the pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn is_test_mode(&self) -> bool {
        test_mode(self.test, std::env::var("BIZTIME_ENV").ok().as_deref())
    }

    pub fn resolve_url(&self) -> String {
        resolve_database_url(
            self.database_url.as_deref(),
            self.is_test_mode(),
            std::env::var("TEST_DATABASE_URL").ok().as_deref(),
        )
    }

    /// Open the pool for the selected database.
    pub async fn connect(&self) -> Result<PgPool> {
        if self.is_test_mode() {
            tracing::info!("test mode: using the test database");
        }

        PoolConfig::new(self.resolve_url())
            .max_connections(self.max_connections)
            .connect()
            .await
            .context("Failed to create database pool")
    }
}

fn test_mode(flag: bool, biztime_env: Option<&str>) -> bool {
    flag || biztime_env == Some("test")
}

fn resolve_database_url(explicit: Option<&str>, test_mode: bool, test_url: Option<&str>) -> String {
    if test_mode {
        return test_url.unwrap_or(DEFAULT_TEST_DATABASE_URL).to_string();
    }
    explicit.unwrap_or(DEFAULT_DATABASE_URL).to_string()
}
