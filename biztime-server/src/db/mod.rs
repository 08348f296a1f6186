//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Pool handle passed in explicitly, never held as a global
//! - Existence decided from `RETURNING` rows rather than a separate lookup
//! - Transactions for multi-step operations (rolled back on drop)

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, PoolConfig, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
