//! Company repository
//!
//! Handles company CRUD:
//! - get: one query, invoice ids and industry names gathered as arrays
//! - create: plain INSERT, a duplicate code surfaces as the store's error
//! - update/delete: existence decided from the RETURNING row

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{CompanyCode, CompanyName};

/// Company record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Code and name only, for list display
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Company with the ids of its invoices and the names of its industries
#[derive(Debug, Clone, FromRow)]
pub struct CompanyDetail {
    #[sqlx(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
    pub industries: Vec<String>,
}

/// Company repository
pub struct CompanyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CompanyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every company's code and name.
    pub async fn list(&self) -> Result<Vec<CompanySummary>, DbError> {
        let companies = sqlx::query_as::<_, CompanySummary>(
            "SELECT code, name FROM companies ORDER BY code",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(companies)
    }

    /// Get a company with its invoice ids and industry names.
    pub async fn get(&self, code: &str) -> Result<CompanyDetail, DbError> {
        sqlx::query_as::<_, CompanyDetail>(
            r#"
            SELECT
                c.code,
                c.name,
                c.description,
                COALESCE(
                    (SELECT array_agg(i.id ORDER BY i.id)
                     FROM invoices i
                     WHERE i.comp_code = c.code),
                    '{}'
                ) AS invoices,
                COALESCE(
                    (SELECT array_agg(ind.industry ORDER BY ind.industry)
                     FROM companies_industries ci
                     JOIN industries ind ON ind.code = ci.industry_code
                     WHERE ci.company_code = c.code),
                    '{}'
                ) AS industries
            FROM companies c
            WHERE c.code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", code))
    }

    /// Insert a company under the code derived from its name.
    ///
    /// No uniqueness pre-check: a second company whose name slugifies to the
    /// same code fails on the primary key.
    pub async fn create(
        &self,
        code: &CompanyCode,
        name: &CompanyName,
        description: Option<&str>,
    ) -> Result<Company, DbError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(code.as_str())
        .bind(name.as_str())
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(company)
    }

    /// Replace name and description. The code never changes.
    pub async fn update(
        &self,
        code: &str,
        name: &CompanyName,
        description: Option<&str>,
    ) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(name.as_str())
        .bind(description)
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", code))
    }

    /// Delete a company; its invoices and industry links cascade.
    pub async fn delete(&self, code: &str) -> Result<(), DbError> {
        sqlx::query_scalar::<_, String>("DELETE FROM companies WHERE code = $1 RETURNING code")
            .bind(code)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("company", code))?;

        Ok(())
    }
}
