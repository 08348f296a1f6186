//! Repository implementations for database access
//!
//! One repository per table family, each borrowing the shared pool:
//! - Single-row reads and writes decide existence from the returned row
//! - Detail reads gather related rows in the same statement (no N+1)
//! - Multi-statement writes run inside one transaction

pub mod companies;
pub mod industries;
pub mod invoices;

pub use companies::{Company, CompanyDetail, CompanyRepo, CompanySummary};
pub use industries::{Association, Industry, IndustryCompanies, IndustryRepo};
pub use invoices::{Invoice, InvoiceRepo, InvoiceSummary, InvoiceWithCompany};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("company '{company_code}' is already associated with industry '{industry_code}'")]
    AlreadyAssociated {
        company_code: String,
        industry_code: String,
    },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_resource() {
        let err = DbError::not_found("company", "nonexistent");
        assert_eq!(err.to_string(), "company 'nonexistent' not found");
    }

    #[test]
    fn already_associated_message() {
        let err = DbError::AlreadyAssociated {
            company_code: "amazon".into(),
            industry_code: "tech".into(),
        };
        assert_eq!(
            err.to_string(),
            "company 'amazon' is already associated with industry 'tech'"
        );
    }
}
