//! [`Store`] — connection pool facade with a checkout counter.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::connection::{ConnectionPool, PooledConnection};
use crate::errors::Result;

/// Connection pool facade shared across all request handlers.
///
/// Owns the pool and the process-wide checkout counter backing the
/// `db_connection_count` metric. The counter increments once per
/// successful [`Store::conn`] call, never resets, and is not persisted;
/// it counts logical checkouts, not physical connections.
pub struct Store {
    pool: ConnectionPool,
    connection_count: AtomicU64,
}

impl Store {
    /// Create a new store over the given pool. The counter starts at zero.
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            pool,
            connection_count: AtomicU64::new(0),
        }
    }

    /// Check out a connection from the pool.
    ///
    /// Increments the checkout counter as an observable side effect. The
    /// handle returns to the pool on drop, so every code path releases it.
    pub fn conn(&self) -> Result<PooledConnection> {
        let conn = self.pool.get()?;
        let _ = self.connection_count.fetch_add(1, Ordering::Relaxed);
        Ok(conn)
    }

    /// Total connections checked out since process start.
    pub fn connection_count(&self) -> u64 {
        self.connection_count.load(Ordering::Relaxed)
    }
}
