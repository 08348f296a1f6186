//! biztime-server: company, invoice and industry records over HTTP
//!
//! JSON CRUD API backed by PostgreSQL. Companies own invoices, and
//! companies and industries are linked many-to-many.
//!
//! - [`models`]: validated request values and the invoice payment rules
//! - [`db`]: connection pool, schema setup and one repository per table
//! - [`http`]: axum router, handlers and the uniform error body

pub mod db;
pub mod http;
pub mod models;
pub mod slug;

pub use db::DbError;
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
