//! Relationship-edge store.
//!
//! # Responsibility
//! - Persist one row per (relation, owner, member) link.
//! - Serve both the forward view (owner's collection) and the reverse view
//!   (member's back-pointer) from the same rows.
//!
//! # Invariants
//! - Listing follows edge insertion order (`id ASC`).
//! - Duplicate rows are allowed; cardinality policy is the caller's job.

use crate::model::EntityId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection};
use uuid::Uuid;

/// SQLite-backed store for the `relation_edges` table.
pub struct SqliteEdgeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEdgeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Appends one edge; duplicates are not collapsed.
    pub fn append(&self, rel: &str, owner: EntityId, member: EntityId) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO relation_edges (rel, owner_uuid, member_uuid) VALUES (?1, ?2, ?3);",
            params![rel, owner.to_string(), member.to_string()],
        )?;
        Ok(())
    }

    /// Members linked under `owner`, in insertion order.
    pub fn members(&self, rel: &str, owner: EntityId) -> RepoResult<Vec<EntityId>> {
        self.list(
            "SELECT member_uuid FROM relation_edges
             WHERE rel = ?1 AND owner_uuid = ?2
             ORDER BY id ASC;",
            rel,
            owner,
        )
    }

    /// Owners linked over `member`, in insertion order.
    pub fn owners(&self, rel: &str, member: EntityId) -> RepoResult<Vec<EntityId>> {
        self.list(
            "SELECT owner_uuid FROM relation_edges
             WHERE rel = ?1 AND member_uuid = ?2
             ORDER BY id ASC;",
            rel,
            member,
        )
    }

    /// Derived back-pointer for single-valued member links.
    pub fn owner_of(&self, rel: &str, member: EntityId) -> RepoResult<Option<EntityId>> {
        Ok(self.owners(rel, member)?.into_iter().next())
    }

    pub fn contains(&self, rel: &str, owner: EntityId, member: EntityId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM relation_edges
                WHERE rel = ?1 AND owner_uuid = ?2 AND member_uuid = ?3
            );",
            params![rel, owner.to_string(), member.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    /// Removes every edge linking `owner` and `member`; returns the count.
    pub fn remove_pair(&self, rel: &str, owner: EntityId, member: EntityId) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "DELETE FROM relation_edges
             WHERE rel = ?1 AND owner_uuid = ?2 AND member_uuid = ?3;",
            params![rel, owner.to_string(), member.to_string()],
        )?;
        Ok(changed)
    }

    /// Removes every edge of `owner` in this relation; returns the count.
    pub fn clear_owner(&self, rel: &str, owner: EntityId) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "DELETE FROM relation_edges WHERE rel = ?1 AND owner_uuid = ?2;",
            params![rel, owner.to_string()],
        )?;
        Ok(changed)
    }

    /// Removes every edge pointing at `member` in this relation.
    pub fn clear_member(&self, rel: &str, member: EntityId) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "DELETE FROM relation_edges WHERE rel = ?1 AND member_uuid = ?2;",
            params![rel, member.to_string()],
        )?;
        Ok(changed)
    }

    fn list(&self, sql: &str, rel: &str, side: EntityId) -> RepoResult<Vec<EntityId>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params![rel, side.to_string()])?;
        let mut ids = Vec::new();

        while let Some(row) = rows.next()? {
            let text: String = row.get(0)?;
            let id = Uuid::parse_str(&text).map_err(|_| {
                RepoError::InvalidData(format!("invalid uuid value `{text}` in relation_edges"))
            })?;
            ids.push(id);
        }
        Ok(ids)
    }
}
