//! Generic relationship management service.
//!
//! # Responsibility
//! - Attach, list, fetch, bulk-replace and detach members of one relation,
//!   with existence and membership invariants enforced up front.
//!
//! # Invariants
//! - Both sides of a bidirectional link are views over the same edge rows,
//!   so they can never disagree after a mutation.
//! - `replace_all` validates the entire member list before touching any
//!   edge; a missing id leaves the collection untouched.
//! - Detaching a non-member is an idempotent no-op.
//!
//! The many-to-many vehicle/test-drive relation is also served from the
//! test-drive side through a reversed view over the same edges.

use crate::model::{
    Assessor, Banking, EntityId, InsurancePolicy, Location, MaintenanceHistory, Photo, TestDrive,
    User, Vehicle,
};
use crate::relation::{self, MemberLink, RelationDef};
use crate::repo::entity_repo::delete_record;
use crate::repo::{Record, RepoError, SqliteEdgeRepository, SqliteEntityRepository};
use crate::service::{ServiceError, ServiceResult};
use log::info;
use rusqlite::{Connection, TransactionBehavior};
use std::marker::PhantomData;

/// Relationship operations between an owner type `O` and a member type `M`.
///
/// Construct through the named pair constructors below; the `RelationDef`
/// carries cardinality and ownership policy, the type parameters carry the
/// storage mapping.
pub struct AssociationService<'conn, O, M> {
    conn: &'conn mut Connection,
    def: &'static RelationDef,
    reversed: bool,
    _marker: PhantomData<(O, M)>,
}

impl<'conn, O: Record, M: Record> AssociationService<'conn, O, M> {
    fn forward(conn: &'conn mut Connection, def: &'static RelationDef) -> Self {
        debug_assert_eq!(def.owner, O::KIND);
        debug_assert_eq!(def.member, M::KIND);
        Self {
            conn,
            def,
            reversed: false,
            _marker: PhantomData,
        }
    }

    fn reverse(conn: &'conn mut Connection, def: &'static RelationDef) -> Self {
        debug_assert_eq!(def.owner, M::KIND);
        debug_assert_eq!(def.member, O::KIND);
        Self {
            conn,
            def,
            reversed: true,
            _marker: PhantomData,
        }
    }

    /// Links `member_id` under `owner_id` and returns the member as stored.
    ///
    /// Single-valued member links are overwritten (the member's previous
    /// edge in this relation is removed); other links append, so attaching
    /// twice appends twice.
    pub fn attach(&mut self, owner_id: EntityId, member_id: EntityId) -> ServiceResult<M> {
        let def = self.def;
        let reversed = self.reversed;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let member = {
            let owners = SqliteEntityRepository::<O>::new(&tx);
            if !owners.exists(owner_id)? {
                return Err(ServiceError::EntityNotFound {
                    kind: O::KIND,
                    id: owner_id,
                });
            }
            let member = SqliteEntityRepository::<M>::new(&tx).get(member_id)?;

            let edges = SqliteEdgeRepository::new(&tx);
            let (edge_owner, edge_member) = edge_pair(reversed, owner_id, member_id);
            if def.member_link == MemberLink::Single {
                edges.clear_member(def.name, edge_member)?;
            }
            edges.append(def.name, edge_owner, edge_member)?;
            member
        };
        tx.commit()?;

        info!(
            "event=relation_attach module=service rel={} owner_id={owner_id} member_id={member_id}",
            def.name
        );
        Ok(member)
    }

    /// Snapshot of the owner's current collection, in attach order.
    pub fn members(&self, owner_id: EntityId) -> ServiceResult<Vec<M>> {
        let conn: &Connection = &*self.conn;
        let owners = SqliteEntityRepository::<O>::new(conn);
        if !owners.exists(owner_id)? {
            return Err(ServiceError::EntityNotFound {
                kind: O::KIND,
                id: owner_id,
            });
        }

        let edges = SqliteEdgeRepository::new(conn);
        let ids = if self.reversed {
            edges.owners(self.def.name, owner_id)?
        } else {
            edges.members(self.def.name, owner_id)?
        };

        let members = SqliteEntityRepository::<M>::new(conn);
        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            let record = members.find_by_id(id)?.ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "relation {} references missing {}: {id}",
                    self.def.name,
                    M::KIND
                ))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Returns one linked member; fails when the two entities exist but are
    /// not associated.
    pub fn member(&self, owner_id: EntityId, member_id: EntityId) -> ServiceResult<M> {
        let conn: &Connection = &*self.conn;
        let owners = SqliteEntityRepository::<O>::new(conn);
        if !owners.exists(owner_id)? {
            return Err(ServiceError::EntityNotFound {
                kind: O::KIND,
                id: owner_id,
            });
        }
        let member = SqliteEntityRepository::<M>::new(conn).get(member_id)?;

        let edges = SqliteEdgeRepository::new(conn);
        let (edge_owner, edge_member) = edge_pair(self.reversed, owner_id, member_id);
        if !edges.contains(self.def.name, edge_owner, edge_member)? {
            return Err(ServiceError::NotRelated {
                owner: O::KIND,
                owner_id,
                member: M::KIND,
                member_id,
            });
        }
        Ok(member)
    }

    /// Replaces the owner's whole collection with `member_ids`, in order.
    ///
    /// Every id is resolved before any edge changes; the first missing one
    /// aborts the operation with the collection untouched. Previous members
    /// are fully unlinked, including their derived back-pointers.
    pub fn replace_all(
        &mut self,
        owner_id: EntityId,
        member_ids: &[EntityId],
    ) -> ServiceResult<Vec<M>> {
        let def = self.def;
        let reversed = self.reversed;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let fetched = {
            let owners = SqliteEntityRepository::<O>::new(&tx);
            if !owners.exists(owner_id)? {
                return Err(ServiceError::EntityNotFound {
                    kind: O::KIND,
                    id: owner_id,
                });
            }

            let members = SqliteEntityRepository::<M>::new(&tx);
            let mut fetched = Vec::with_capacity(member_ids.len());
            for &member_id in member_ids {
                fetched.push(members.get(member_id)?);
            }

            let edges = SqliteEdgeRepository::new(&tx);
            if reversed {
                edges.clear_member(def.name, owner_id)?;
            } else {
                edges.clear_owner(def.name, owner_id)?;
            }
            for &member_id in member_ids {
                let (edge_owner, edge_member) = edge_pair(reversed, owner_id, member_id);
                if def.member_link == MemberLink::Single {
                    edges.clear_member(def.name, edge_member)?;
                }
                edges.append(def.name, edge_owner, edge_member)?;
            }
            fetched
        };
        tx.commit()?;

        info!(
            "event=relation_replace module=service rel={} owner_id={owner_id} count={}",
            def.name,
            member_ids.len()
        );
        Ok(fetched)
    }

    /// Unlinks `member_id` from `owner_id`.
    ///
    /// Removing a non-member is a no-op. On owned relations the member
    /// record is deleted along with the link.
    pub fn detach(&mut self, owner_id: EntityId, member_id: EntityId) -> ServiceResult<()> {
        let def = self.def;
        let reversed = self.reversed;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        {
            let owners = SqliteEntityRepository::<O>::new(&tx);
            if !owners.exists(owner_id)? {
                return Err(ServiceError::EntityNotFound {
                    kind: O::KIND,
                    id: owner_id,
                });
            }
            let members = SqliteEntityRepository::<M>::new(&tx);
            if !members.exists(member_id)? {
                return Err(ServiceError::EntityNotFound {
                    kind: M::KIND,
                    id: member_id,
                });
            }

            let edges = SqliteEdgeRepository::new(&tx);
            let (edge_owner, edge_member) = edge_pair(reversed, owner_id, member_id);
            let removed = edges.remove_pair(def.name, edge_owner, edge_member)?;
            // Owned relations are only served forward.
            if removed > 0 && def.owned && !reversed {
                delete_record(&tx, def.member, member_id)?;
            }
        }
        tx.commit()?;

        info!(
            "event=relation_detach module=service rel={} owner_id={owner_id} member_id={member_id}",
            def.name
        );
        Ok(())
    }
}

/// Maps path-level (owner, member) ids onto edge-table columns.
const fn edge_pair(reversed: bool, owner_id: EntityId, member_id: EntityId) -> (EntityId, EntityId) {
    if reversed {
        (member_id, owner_id)
    } else {
        (owner_id, member_id)
    }
}

impl<'conn> AssociationService<'conn, Assessor, Vehicle> {
    /// Vehicles handled by an assessor; the vehicle back-pointer is single.
    pub fn assessor_vehicles(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::ASSESSOR_VEHICLES)
    }
}

impl<'conn> AssociationService<'conn, Location, Vehicle> {
    /// Vehicles based at a location; the vehicle back-pointer is single.
    pub fn location_vehicles(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::LOCATION_VEHICLES)
    }
}

impl<'conn> AssociationService<'conn, Location, Assessor> {
    /// Assessors working at a location; the assessor back-pointer is single.
    pub fn location_assessors(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::LOCATION_ASSESSORS)
    }
}

impl<'conn> AssociationService<'conn, Location, TestDrive> {
    /// Test drives hosted at a location; one-directional.
    pub fn location_test_drives(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::LOCATION_TEST_DRIVES)
    }
}

impl<'conn> AssociationService<'conn, User, Vehicle> {
    /// Vehicles of interest to a user; one-directional.
    pub fn user_vehicles(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::USER_VEHICLES)
    }
}

impl<'conn> AssociationService<'conn, User, TestDrive> {
    /// Test drives booked by a user; the test-drive back-pointer is single.
    pub fn user_test_drives(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::USER_TEST_DRIVES)
    }
}

impl<'conn> AssociationService<'conn, Vehicle, TestDrive> {
    /// Test drives scheduled for a vehicle; many-to-many.
    pub fn vehicle_test_drives(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::VEHICLE_TEST_DRIVES)
    }
}

impl<'conn> AssociationService<'conn, TestDrive, Vehicle> {
    /// Vehicles covered by a test drive; the reversed many-to-many view.
    pub fn test_drive_vehicles(conn: &'conn mut Connection) -> Self {
        Self::reverse(conn, &relation::VEHICLE_TEST_DRIVES)
    }
}

impl<'conn> AssociationService<'conn, Vehicle, Banking> {
    /// Banks financing a vehicle; one-directional.
    pub fn vehicle_bankings(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::VEHICLE_BANKINGS)
    }
}

impl<'conn> AssociationService<'conn, Vehicle, InsurancePolicy> {
    /// Policies offered with a vehicle; one-directional.
    pub fn vehicle_insurance_policies(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::VEHICLE_INSURANCE_POLICIES)
    }
}

impl<'conn> AssociationService<'conn, Vehicle, MaintenanceHistory> {
    /// Maintenance records of a vehicle; one-directional.
    pub fn vehicle_maintenances(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::VEHICLE_MAINTENANCES)
    }
}

impl<'conn> AssociationService<'conn, Vehicle, Photo> {
    /// Photos owned exclusively by a vehicle. Attaching re-homes a photo
    /// held by another vehicle and detaching deletes the photo record.
    pub fn vehicle_photos(conn: &'conn mut Connection) -> Self {
        Self::forward(conn, &relation::VEHICLE_PHOTOS)
    }
}
