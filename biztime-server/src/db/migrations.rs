//! Schema setup for the biztime tables
//!
//! Every statement is idempotent so this runs on each server start.

use sqlx::PgPool;

use super::DbError;

/// Create the companies, invoices, industries and join tables.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running biztime migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            code TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id SERIAL PRIMARY KEY,
            comp_code TEXT NOT NULL REFERENCES companies ON DELETE CASCADE,
            amt NUMERIC NOT NULL,
            paid BOOLEAN NOT NULL DEFAULT FALSE,
            add_date DATE NOT NULL DEFAULT CURRENT_DATE,
            paid_date DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Every stored amount must decode into a Decimal (28 significant digits):
    // at most 26 integer digits and 2 decimal places. Added separately so
    // tables created before the bound get it too.
    sqlx::raw_sql(
        r#"
        DO $$
        BEGIN
            IF NOT EXISTS (
                SELECT 1 FROM pg_constraint WHERE conname = 'invoices_amt_range'
            ) THEN
                ALTER TABLE invoices ADD CONSTRAINT invoices_amt_range
                    CHECK (amt >= 0 AND amt < 1e26 AND amt = round(amt, 2));
            END IF;
        END
        $$
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS industries (
            code TEXT PRIMARY KEY,
            industry TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies_industries (
            company_code TEXT NOT NULL REFERENCES companies ON DELETE CASCADE,
            industry_code TEXT NOT NULL REFERENCES industries ON DELETE CASCADE,
            PRIMARY KEY (company_code, industry_code)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("biztime migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    // company detail looks invoices up by owner
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_invoices_comp_code ON invoices(comp_code)")
        .execute(pool)
        .await?;

    // the primary key covers company_code lookups, not industry_code ones
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_companies_industries_industry ON companies_industries(industry_code)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
