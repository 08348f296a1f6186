//! Invoice amounts and the paid/paid_date transition rules

use rust_decimal::Decimal;

use super::ValidationError;

/// Decimal places kept for an amount
const MAX_AMOUNT_SCALE: u32 = 2;

/// Integer digits allowed; together with the scale this stays inside the
/// 28 significant digits a `Decimal` can hold.
const MAX_AMOUNT_DIGITS: u32 = 26;

/// Validated invoice amount (exact decimal, never negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Validate an amount.
    ///
    /// # Rules
    /// - Not negative
    /// - At most 2 decimal places once trailing zeros are dropped
    /// - Below 10^26
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO {
            return Err(ValidationError::Negative { field: "amt" });
        }

        // "1.500" is kept as 1.5, "1.505" is rejected
        let value = if value.scale() > MAX_AMOUNT_SCALE {
            value.normalize()
        } else {
            value
        };
        if value.scale() > MAX_AMOUNT_SCALE {
            return Err(ValidationError::InvalidFormat {
                field: "amt",
                reason: "must have at most 2 decimal places",
            });
        }

        let limit = Decimal::from_i128_with_scale(10_i128.pow(MAX_AMOUNT_DIGITS), 0);
        if value >= limit {
            return Err(ValidationError::InvalidFormat {
                field: "amt",
                reason: "must be less than 10^26",
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// What an update does to the stored `paid_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidDate {
    /// Leave the stored date alone
    Keep,
    /// Stamp with the current date
    SetToday,
    /// Clear to NULL
    Clear,
}

/// Payment state requested by an invoice update.
///
/// Invoices are either Unpaid (`paid = false`, no date) or Paid
/// (`paid = true`, dated). Unpaid → Paid stamps today's date, Paid → Paid
/// keeps the original date, and any → Unpaid clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentUpdate {
    /// `None` when the request did not mention `paid`
    pub requested: Option<bool>,
}

impl PaymentUpdate {
    pub fn new(requested: Option<bool>) -> Self {
        Self { requested }
    }

    /// Decide the `paid_date` change given the currently stored `paid` flag.
    pub fn resolve(&self, stored_paid: bool) -> PaidDate {
        match (self.requested, stored_paid) {
            (Some(true), false) => PaidDate::SetToday,
            (Some(false), _) => PaidDate::Clear,
            (Some(true), true) | (None, _) => PaidDate::Keep,
        }
    }

    /// The `paid` value to store.
    pub fn paid(&self, stored_paid: bool) -> bool {
        self.requested.unwrap_or(stored_paid)
    }
}
