//! # newsdesk-store
//!
//! `SQLite` storage backend for the newsdesk web application.
//!
//! - **Connection pool**: `r2d2` pool with WAL mode and pragma customizer
//! - **Migrations**: version-tracked schema, embedded at compile time
//! - **Repository**: stateless [`PostRepo`], every method takes `&Connection`
//! - **Store facade**: [`Store`] owns the pool and counts logical checkouts

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod migrations;
pub mod repository;
pub mod row_types;
pub mod store;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection, new_file, new_in_memory};
pub use errors::{Result, StoreError};
pub use migrations::{current_version, latest_version, run_migrations};
pub use repository::PostRepo;
pub use row_types::PostRow;
pub use store::Store;
