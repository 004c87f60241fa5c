//! Generic keyed record store over one entity table.
//!
//! # Responsibility
//! - Provide the save / find-by-id / find-all / delete contract every
//!   catalog entity shares, driven by the `Record` mapping.
//!
//! # Invariants
//! - `save` is an upsert keyed by `uuid`; callers own identity pinning.
//! - `find_all` returns rows in insertion order.

use crate::model::{EntityId, EntityKind};
use crate::repo::record::Record;
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::marker::PhantomData;

/// SQLite-backed repository for one record type.
pub struct SqliteEntityRepository<'conn, T> {
    conn: &'conn Connection,
    _marker: PhantomData<T>,
}

impl<'conn, T: Record> SqliteEntityRepository<'conn, T> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _marker: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!(
            "SELECT uuid, {} FROM {}",
            T::FIELDS.join(", "),
            T::KIND.table()
        )
    }

    /// Inserts or fully replaces the record keyed by its uuid.
    pub fn save(&self, record: &T) -> RepoResult<()> {
        let mut columns = vec!["uuid"];
        columns.extend_from_slice(T::FIELDS);
        let placeholders = (1..=columns.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT OR REPLACE INTO {} ({}) VALUES ({});",
            T::KIND.table(),
            columns.join(", "),
            placeholders
        );

        let mut values = vec![Value::Text(record.id().to_string())];
        values.extend(record.field_values());
        self.conn.execute(&sql, params_from_iter(values))?;
        Ok(())
    }

    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<T>> {
        let sql = format!("{} WHERE uuid = ?1;", Self::select_sql());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([id.to_string()])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(T::from_row(row)?));
        }
        Ok(None)
    }

    /// Like `find_by_id`, but absence is an error.
    pub fn get(&self, id: EntityId) -> RepoResult<T> {
        self.find_by_id(id)?.ok_or(RepoError::NotFound {
            kind: T::KIND,
            id,
        })
    }

    pub fn find_all(&self) -> RepoResult<Vec<T>> {
        let sql = format!("{} ORDER BY rowid ASC;", Self::select_sql());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(T::from_row(row)?);
        }
        Ok(records)
    }

    pub fn exists(&self, id: EntityId) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE uuid = ?1);",
            T::KIND.table()
        );
        let exists: i64 = self
            .conn
            .query_row(&sql, [id.to_string()], |row| row.get(0))?;
        Ok(exists == 1)
    }

    pub fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        let changed = delete_record(self.conn, T::KIND, id)?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: T::KIND,
                id,
            });
        }
        Ok(())
    }
}

/// Deletes one record by kind, without the typed repository.
///
/// Used by the uniform cascade routine, where the dependent kind is only
/// known from the relation table.
pub fn delete_record(conn: &Connection, kind: EntityKind, id: EntityId) -> RepoResult<usize> {
    let sql = format!("DELETE FROM {} WHERE uuid = ?1;", kind.table());
    let changed = conn.execute(&sql, [id.to_string()])?;
    Ok(changed)
}
