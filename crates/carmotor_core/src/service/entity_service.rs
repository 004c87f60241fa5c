//! Generic entity CRUD service.
//!
//! # Responsibility
//! - Gate every mutation behind field validation.
//! - Run each operation inside one immediate transaction.
//! - Evaluate cascade/unlink rules uniformly from the relation table on
//!   delete, instead of per-entity delete code.
//!
//! # Invariants
//! - Stored identifiers are immutable: `update` pins the path identifier
//!   onto the draft, discarding whatever id the draft carried.
//! - After `delete(id)`, no relation edge references `id` from either side.

use crate::model::{
    Assessor, Banking, EntityId, InsurancePolicy, Location, MaintenanceHistory, Photo, TestDrive,
    User, Validate, Vehicle,
};
use crate::relation::RELATIONS;
use crate::repo::entity_repo::delete_record;
use crate::repo::{Record, SqliteEdgeRepository, SqliteEntityRepository};
use crate::service::{now_epoch_ms, ServiceError, ServiceResult};
use log::info;
use rusqlite::{Connection, TransactionBehavior};
use std::marker::PhantomData;

/// Validated CRUD over one record type.
pub struct EntityService<'conn, T> {
    conn: &'conn mut Connection,
    _marker: PhantomData<T>,
}

pub type VehicleService<'conn> = EntityService<'conn, Vehicle>;
pub type AssessorService<'conn> = EntityService<'conn, Assessor>;
pub type LocationService<'conn> = EntityService<'conn, Location>;
pub type UserService<'conn> = EntityService<'conn, User>;
pub type TestDriveService<'conn> = EntityService<'conn, TestDrive>;
pub type InsurancePolicyService<'conn> = EntityService<'conn, InsurancePolicy>;
pub type MaintenanceHistoryService<'conn> = EntityService<'conn, MaintenanceHistory>;
pub type BankingService<'conn> = EntityService<'conn, Banking>;
pub type PhotoService<'conn> = EntityService<'conn, Photo>;

impl<'conn, T: Record + Validate> EntityService<'conn, T> {
    /// Creates a service over a migrated connection.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self {
            conn,
            _marker: PhantomData,
        }
    }

    /// Validates and persists a new record, returning it as stored.
    pub fn create(&mut self, record: T) -> ServiceResult<T> {
        record.validate(now_epoch_ms())?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        SqliteEntityRepository::<T>::new(&tx).save(&record)?;
        tx.commit()?;

        info!(
            "event=entity_create module=service kind={} id={}",
            T::KIND,
            record.id()
        );
        Ok(record)
    }

    /// Returns every stored record, in insertion order.
    pub fn get_all(&self) -> ServiceResult<Vec<T>> {
        Ok(SqliteEntityRepository::<T>::new(&*self.conn).find_all()?)
    }

    /// Returns one record by id.
    pub fn get(&self, id: EntityId) -> ServiceResult<T> {
        Ok(SqliteEntityRepository::<T>::new(&*self.conn).get(id)?)
    }

    /// Full-replace update with the stored identity pinned.
    pub fn update(&mut self, id: EntityId, mut draft: T) -> ServiceResult<T> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        {
            let repo = SqliteEntityRepository::<T>::new(&tx);
            if !repo.exists(id)? {
                return Err(ServiceError::EntityNotFound { kind: T::KIND, id });
            }

            draft.validate(now_epoch_ms())?;
            draft.set_id(id);
            repo.save(&draft)?;
        }
        tx.commit()?;

        info!(
            "event=entity_update module=service kind={} id={id}",
            T::KIND
        );
        Ok(draft)
    }

    /// Deletes a record after cascading owned members and clearing every
    /// relation edge that references it from either side.
    pub fn delete(&mut self, id: EntityId) -> ServiceResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        {
            let repo = SqliteEntityRepository::<T>::new(&tx);
            if !repo.exists(id)? {
                return Err(ServiceError::EntityNotFound { kind: T::KIND, id });
            }

            let edges = SqliteEdgeRepository::new(&tx);
            for def in RELATIONS {
                if def.owner == T::KIND {
                    if def.owned {
                        for member_id in edges.members(def.name, id)? {
                            delete_record(&tx, def.member, member_id)?;
                        }
                    }
                    edges.clear_owner(def.name, id)?;
                }
                if def.member == T::KIND {
                    edges.clear_member(def.name, id)?;
                }
            }

            repo.delete_by_id(id)?;
        }
        tx.commit()?;

        info!(
            "event=entity_delete module=service kind={} id={id}",
            T::KIND
        );
        Ok(())
    }
}
