//! Database row types for mapping `SQLite` rows to Rust structs.

use serde::{Deserialize, Serialize};

/// Raw post row from the `posts` table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostRow {
    /// Post ID, assigned by the store on insert. Immutable thereafter.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Free-form body, absent when the author left it blank.
    pub content: Option<String>,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: String,
}
