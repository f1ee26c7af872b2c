//! Post repository — list, get, and create for the `posts` table.
//!
//! Stateless: every method takes a `&Connection`, which makes each
//! operation a pure function from (connection, input) to output. All SQL
//! is parameterized.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::errors::Result;
use crate::row_types::PostRow;

/// Post repository, stateless.
pub struct PostRepo;

impl PostRepo {
    /// List all posts in insertion order.
    pub fn list(conn: &Connection) -> Result<Vec<PostRow>> {
        let mut stmt = conn.prepare("SELECT id, title, content, created_at FROM posts")?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Get a post by ID. Returns `None` when no row matches.
    pub fn get(conn: &Connection, id: i64) -> Result<Option<PostRow>> {
        let row = conn
            .query_row(
                "SELECT id, title, content, created_at FROM posts WHERE id = ?1",
                params![id],
                map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Insert a new post and return the stored row with its assigned ID.
    pub fn create(conn: &Connection, title: &str, content: Option<&str>) -> Result<PostRow> {
        let now = Utc::now().to_rfc3339();
        let _ = conn.execute(
            "INSERT INTO posts (title, content, created_at) VALUES (?1, ?2, ?3)",
            params![title, content, now],
        )?;
        Ok(PostRow {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            content: content.map(String::from),
            created_at: now,
        })
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn list_on_empty_table() {
        let conn = open();
        assert!(PostRepo::list(&conn).unwrap().is_empty());
    }

    #[test]
    fn create_then_get() {
        let conn = open();
        let created = PostRepo::create(&conn, "Hello", Some("World")).unwrap();
        let fetched = PostRepo::get(&conn, created.id).unwrap().unwrap();
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.content.as_deref(), Some("World"));
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn get_missing_returns_none() {
        let conn = open();
        assert!(PostRepo::get(&conn, 999_999).unwrap().is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let conn = open();
        PostRepo::create(&conn, "first", None).unwrap();
        PostRepo::create(&conn, "second", None).unwrap();
        PostRepo::create(&conn, "third", None).unwrap();
        let titles: Vec<_> = PostRepo::list(&conn)
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn ids_strictly_increase() {
        let conn = open();
        let a = PostRepo::create(&conn, "a", None).unwrap();
        let b = PostRepo::create(&conn, "b", None).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn content_may_be_null() {
        let conn = open();
        let created = PostRepo::create(&conn, "no body", None).unwrap();
        let fetched = PostRepo::get(&conn, created.id).unwrap().unwrap();
        assert!(fetched.content.is_none());
    }

    #[test]
    fn empty_title_is_not_rejected_by_the_schema() {
        // Title validation lives in the create handler; the store accepts
        // whatever it is given.
        let conn = open();
        let created = PostRepo::create(&conn, "", Some("body")).unwrap();
        assert_eq!(created.title, "");
    }
}
