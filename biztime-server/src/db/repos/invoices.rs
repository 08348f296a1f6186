//! Invoice repository
//!
//! Handles invoice CRUD with:
//! - get: single JOIN with the owning company
//! - update: paid/paid_date transition applied under a row lock

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use super::{Company, DbError};
use crate::models::{Amount, PaidDate, PaymentUpdate};

/// Invoice record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Id and owner only, for list display
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Invoice joined with the company it belongs to
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceWithCompany {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    #[sqlx(flatten)]
    pub company: Company,
}

/// SQL fragment for the new `paid_date`; the current value is `paid_date`.
fn paid_date_expr(change: PaidDate) -> &'static str {
    match change {
        PaidDate::Keep => "paid_date",
        PaidDate::SetToday => "CURRENT_DATE",
        PaidDate::Clear => "NULL",
    }
}

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every invoice's id and company code.
    pub async fn list(&self) -> Result<Vec<InvoiceSummary>, DbError> {
        let invoices =
            sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(invoices)
    }

    /// Get an invoice together with its company.
    pub async fn get(&self, id: i32) -> Result<InvoiceWithCompany, DbError> {
        sqlx::query_as::<_, InvoiceWithCompany>(
            r#"
            SELECT
                i.id, i.amt, i.paid, i.add_date, i.paid_date,
                c.code, c.name, c.description
            FROM invoices i
            JOIN companies c ON c.code = i.comp_code
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("invoice", id))
    }

    /// Insert an unpaid invoice dated today.
    ///
    /// An unknown `comp_code` fails on the foreign key.
    pub async fn create(&self, comp_code: &str, amt: Amount) -> Result<Invoice, DbError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(comp_code)
        .bind(amt.value())
        .fetch_one(self.pool)
        .await?;

        Ok(invoice)
    }

    /// Update the amount and apply the payment transition.
    ///
    /// The stored `paid` flag is read with `FOR UPDATE` in the same
    /// transaction as the write, so concurrent updates see each other's
    /// transitions in order.
    pub async fn update(
        &self,
        id: i32,
        amt: Amount,
        payment: PaymentUpdate,
    ) -> Result<Invoice, DbError> {
        let mut tx = self.pool.begin().await?;

        let stored_paid =
            sqlx::query_scalar::<_, bool>("SELECT paid FROM invoices WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::not_found("invoice", id))?;

        let change = payment.resolve(stored_paid);
        let sql = format!(
            r#"
            UPDATE invoices
            SET amt = $1, paid = $2, paid_date = {}
            WHERE id = $3
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
            paid_date_expr(change)
        );

        let invoice = sqlx::query_as::<_, Invoice>(&sql)
            .bind(amt.value())
            .bind(payment.paid(stored_paid))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(id, ?change, paid = invoice.paid, "invoice updated");
        Ok(invoice)
    }

    /// Delete an invoice by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query_scalar::<_, i32>("DELETE FROM invoices WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("invoice", id))?;

        Ok(())
    }
}
