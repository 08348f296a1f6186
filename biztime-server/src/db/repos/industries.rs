//! Industry repository
//!
//! Handles industries and the company-industry join table:
//! - associate: existence and duplicate checks plus insert in one transaction
//! - companies_for: industry name, then its companies

use sqlx::{FromRow, PgPool};

use super::{CompanySummary, DbError};
use crate::models::{IndustryCode, IndustryName};

/// Industry record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// Row of the companies_industries join table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Association {
    pub company_code: String,
    pub industry_code: String,
}

/// Industry display name with the companies linked to it
#[derive(Debug, Clone)]
pub struct IndustryCompanies {
    pub industry: String,
    pub companies: Vec<CompanySummary>,
}

/// Industry repository
pub struct IndustryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> IndustryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every industry's code and display name.
    pub async fn list(&self) -> Result<Vec<Industry>, DbError> {
        let industries =
            sqlx::query_as::<_, Industry>("SELECT code, industry FROM industries ORDER BY code")
                .fetch_all(self.pool)
                .await?;

        Ok(industries)
    }

    /// Insert an industry. A duplicate code fails on the primary key.
    pub async fn create(
        &self,
        code: &IndustryCode,
        industry: &IndustryName,
    ) -> Result<Industry, DbError> {
        let created = sqlx::query_as::<_, Industry>(
            r#"
            INSERT INTO industries (code, industry)
            VALUES ($1, $2)
            RETURNING code, industry
            "#,
        )
        .bind(code.as_str())
        .bind(industry.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Link a company to an industry (atomic).
    ///
    /// Checks, in order, that the industry exists, that the company exists
    /// and that the pair is not linked yet. Every early return drops the
    /// transaction, which rolls it back.
    pub async fn associate(
        &self,
        industry_code: &str,
        company_code: &str,
    ) -> Result<Association, DbError> {
        let mut tx = self.pool.begin().await?;

        let industry_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM industries WHERE code = $1)")
                .bind(industry_code)
                .fetch_one(&mut *tx)
                .await?;

        if !industry_exists {
            return Err(DbError::not_found("industry", industry_code));
        }

        // FOR SHARE keeps the company from being deleted before the insert
        let company_exists = sqlx::query_scalar::<_, String>(
            "SELECT code FROM companies WHERE code = $1 FOR SHARE",
        )
        .bind(company_code)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

        if !company_exists {
            return Err(DbError::not_found("company", company_code));
        }

        let already_linked: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM companies_industries
                WHERE company_code = $1 AND industry_code = $2
            )
            "#,
        )
        .bind(company_code)
        .bind(industry_code)
        .fetch_one(&mut *tx)
        .await?;

        if already_linked {
            return Err(DbError::AlreadyAssociated {
                company_code: company_code.to_owned(),
                industry_code: industry_code.to_owned(),
            });
        }

        let association = sqlx::query_as::<_, Association>(
            r#"
            INSERT INTO companies_industries (company_code, industry_code)
            VALUES ($1, $2)
            RETURNING company_code, industry_code
            "#,
        )
        .bind(company_code)
        .bind(industry_code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(%company_code, %industry_code, "company associated with industry");
        Ok(association)
    }

    /// Get an industry's display name and the companies linked to it.
    pub async fn companies_for(&self, industry_code: &str) -> Result<IndustryCompanies, DbError> {
        let industry =
            sqlx::query_scalar::<_, String>("SELECT industry FROM industries WHERE code = $1")
                .bind(industry_code)
                .fetch_optional(self.pool)
                .await?
                .ok_or_else(|| DbError::not_found("industry", industry_code))?;

        let companies = sqlx::query_as::<_, CompanySummary>(
            r#"
            SELECT c.code, c.name
            FROM companies c
            JOIN companies_industries ci ON ci.company_code = c.code
            WHERE ci.industry_code = $1
            ORDER BY c.code
            "#,
        )
        .bind(industry_code)
        .fetch_all(self.pool)
        .await?;

        Ok(IndustryCompanies {
            industry,
            companies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Run with TEST_DATABASE_URL set: cargo test -p biztime-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn associate_checks_each_precondition() {
        let url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .expect("TEST_DATABASE_URL or DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        sqlx::query("DELETE FROM companies WHERE code = 'repo-assoc-co'")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM industries WHERE code = 'repo-assoc-ind'")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO companies (code, name) VALUES ('repo-assoc-co', 'Repo Assoc Co')")
            .execute(&pool)
            .await
            .unwrap();

        let repo = IndustryRepo::new(&pool);

        let err = repo
            .associate("repo-assoc-ind", "repo-assoc-co")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "industry", .. }));

        let code = IndustryCode::new("repo-assoc-ind").unwrap();
        let name = IndustryName::new("Repo Association").unwrap();
        repo.create(&code, &name).await.unwrap();

        let err = repo.associate("repo-assoc-ind", "repo-assoc-nobody").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "company", .. }));

        let linked = repo.associate("repo-assoc-ind", "repo-assoc-co").await.unwrap();
        assert_eq!(linked.company_code, "repo-assoc-co");

        let err = repo.associate("repo-assoc-ind", "repo-assoc-co").await.unwrap_err();
        assert!(matches!(err, DbError::AlreadyAssociated { .. }));

        let listed = repo.companies_for("repo-assoc-ind").await.unwrap();
        assert_eq!(listed.industry, "Repo Association");
        assert_eq!(listed.companies.len(), 1);

        sqlx::query("DELETE FROM companies WHERE code = 'repo-assoc-co'")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM industries WHERE code = 'repo-assoc-ind'")
            .execute(&pool)
            .await
            .unwrap();
    }
}
