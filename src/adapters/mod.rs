//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Process-local repositories behind a single lock
//! - `postgres` - PostgreSQL repositories (sqlx)
//! - `http` - REST API (axum)

pub mod http;
pub mod memory;
pub mod postgres;
