//! Industry code and display name validation
//!
//! Slug format: lowercase alphanumeric with hyphens/underscores

use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::{bounded_text, ValidationError};

/// Maximum length for industry codes
const MAX_INDUSTRY_CODE_LEN: usize = 64;

/// Maximum length for industry display names
const MAX_INDUSTRY_NAME_LEN: usize = 128;

/// Starts with alphanumeric, allows hyphens/underscores
static SLUG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").expect("invalid industry code regex")
});

/// Validated industry code (caller supplied, slug format)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndustryCode(String);

impl IndustryCode {
    /// Create an industry code, validating slug format.
    ///
    /// # Example
    /// ```
    /// use biztime_server::models::IndustryCode;
    ///
    /// assert!(IndustryCode::new("tech").is_ok());
    /// assert!(IndustryCode::new("Tech").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "industry code",
            });
        }

        if s.len() > MAX_INDUSTRY_CODE_LEN {
            return Err(ValidationError::TooLong {
                field: "industry code",
                max: MAX_INDUSTRY_CODE_LEN,
            });
        }

        if !SLUG_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "industry code",
                reason: "must be lowercase alphanumeric with hyphens/underscores, starting with alphanumeric",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated industry display name, e.g. "Technology"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryName(String);

impl IndustryName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text(s, "industry", MAX_INDUSTRY_NAME_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(IndustryCode::new("tech").is_ok());
        assert!(IndustryCode::new("manuf").is_ok());
        assert!(IndustryCode::new("acct_services").is_ok());
        assert!(IndustryCode::new("b2b-saas").is_ok());
        assert!(IndustryCode::new("3d").is_ok());
    }

    #[test]
    fn rejects_uppercase_and_spaces() {
        let err = IndustryCode::new("Tech").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        let err = IndustryCode::new("big tech").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn code_max_length() {
        assert!(IndustryCode::new(&"a".repeat(64)).is_ok());
        let err = IndustryCode::new(&"a".repeat(65)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 64, .. }));
    }

    #[test]
    fn name_is_trimmed() {
        let name = IndustryName::new(" Technology ").unwrap();
        assert_eq!(name.as_str(), "Technology");
        assert!(IndustryName::new("").is_err());
    }
}
