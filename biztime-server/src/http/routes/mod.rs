//! Route handlers organized by resource

pub mod companies;
pub mod health;
pub mod industries;
pub mod invoices;

use serde::Serialize;

/// Body returned by every successful DELETE
#[derive(Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self { status: "deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
