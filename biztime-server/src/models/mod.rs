//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod company;
pub mod industry;
pub mod invoice;
pub mod validation;

pub use company::{CompanyCode, CompanyName};
pub use industry::{IndustryCode, IndustryName};
pub use invoice::{Amount, PaidDate, PaymentUpdate};
pub use validation::ValidationError;
