//! Company name and code validation
//!
//! Codes are never supplied by callers: they are derived from the name with
//! [`slugify`] when the company is created and stay fixed afterwards.

use super::validation::{bounded_text, ValidationError};
use crate::slug::slugify;

/// Maximum length for company names
const MAX_COMPANY_NAME_LEN: usize = 128;

/// Validated company display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    /// Create a company name, trimming surrounding whitespace.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 128 characters
    ///
    /// Any such name can rename an existing company. Creating one also
    /// needs [`CompanyName::to_code`] to succeed.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text(s, "company name", MAX_COMPANY_NAME_LEN).map(Self)
    }

    /// Derive the company code for this name.
    ///
    /// Fails when the name has no ASCII letter or digit to build a code from.
    pub fn to_code(&self) -> Result<CompanyCode, ValidationError> {
        let code = slugify(&self.0);
        if code.is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: "company name",
                reason: "must contain at least one ASCII letter or digit",
            });
        }
        Ok(CompanyCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Company primary key in slug form.
///
/// Only obtainable through [`CompanyName::to_code`], so never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyCode(String);

impl CompanyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CompanyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
