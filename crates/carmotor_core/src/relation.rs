//! Declarative relationship definitions.
//!
//! # Responsibility
//! - Name every relationship pair once, with its cardinality and ownership
//!   rules, so association and delete logic stay table-driven.
//!
//! # Invariants
//! - `name` doubles as the `rel` tag in the `relation_edges` table and must
//!   stay stable across schema versions.
//! - A `Single` member link means a member holds at most one edge in the
//!   relation; the derived back-pointer is therefore unambiguous.

use crate::model::EntityKind;

/// How the member side references the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberLink {
    /// One-directional: members carry no view back to the owner.
    None,
    /// Member holds a single back-pointer (overwritten on attach).
    Single,
    /// Many-to-many: members expose the full owner collection.
    Collection,
}

/// One relationship pair between an owner kind and a member kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    /// Edge tag in `relation_edges.rel`.
    pub name: &'static str,
    pub owner: EntityKind,
    pub member: EntityKind,
    pub member_link: MemberLink,
    /// Exclusive ownership: members are cascade-deleted with the owner and
    /// removed when detached.
    pub owned: bool,
}

pub const ASSESSOR_VEHICLES: RelationDef = RelationDef {
    name: "assessor_vehicles",
    owner: EntityKind::Assessor,
    member: EntityKind::Vehicle,
    member_link: MemberLink::Single,
    owned: false,
};

pub const LOCATION_VEHICLES: RelationDef = RelationDef {
    name: "location_vehicles",
    owner: EntityKind::Location,
    member: EntityKind::Vehicle,
    member_link: MemberLink::Single,
    owned: false,
};

pub const LOCATION_ASSESSORS: RelationDef = RelationDef {
    name: "location_assessors",
    owner: EntityKind::Location,
    member: EntityKind::Assessor,
    member_link: MemberLink::Single,
    owned: false,
};

pub const LOCATION_TEST_DRIVES: RelationDef = RelationDef {
    name: "location_test_drives",
    owner: EntityKind::Location,
    member: EntityKind::TestDrive,
    member_link: MemberLink::None,
    owned: false,
};

pub const USER_VEHICLES: RelationDef = RelationDef {
    name: "user_vehicles",
    owner: EntityKind::User,
    member: EntityKind::Vehicle,
    member_link: MemberLink::None,
    owned: false,
};

pub const USER_TEST_DRIVES: RelationDef = RelationDef {
    name: "user_test_drives",
    owner: EntityKind::User,
    member: EntityKind::TestDrive,
    member_link: MemberLink::Single,
    owned: false,
};

pub const VEHICLE_TEST_DRIVES: RelationDef = RelationDef {
    name: "vehicle_test_drives",
    owner: EntityKind::Vehicle,
    member: EntityKind::TestDrive,
    member_link: MemberLink::Collection,
    owned: false,
};

pub const VEHICLE_BANKINGS: RelationDef = RelationDef {
    name: "vehicle_bankings",
    owner: EntityKind::Vehicle,
    member: EntityKind::Banking,
    member_link: MemberLink::None,
    owned: false,
};

pub const VEHICLE_INSURANCE_POLICIES: RelationDef = RelationDef {
    name: "vehicle_insurance_policies",
    owner: EntityKind::Vehicle,
    member: EntityKind::InsurancePolicy,
    member_link: MemberLink::None,
    owned: false,
};

pub const VEHICLE_MAINTENANCES: RelationDef = RelationDef {
    name: "vehicle_maintenances",
    owner: EntityKind::Vehicle,
    member: EntityKind::MaintenanceHistory,
    member_link: MemberLink::None,
    owned: false,
};

pub const VEHICLE_PHOTOS: RelationDef = RelationDef {
    name: "vehicle_photos",
    owner: EntityKind::Vehicle,
    member: EntityKind::Photo,
    member_link: MemberLink::Single,
    owned: true,
};

/// Every relationship pair, in declaration order.
///
/// The uniform delete routine walks this table to cascade owned members and
/// clear dangling edges, so adding a pair here is the whole wiring.
pub const RELATIONS: &[RelationDef] = &[
    ASSESSOR_VEHICLES,
    LOCATION_VEHICLES,
    LOCATION_ASSESSORS,
    LOCATION_TEST_DRIVES,
    USER_VEHICLES,
    USER_TEST_DRIVES,
    VEHICLE_TEST_DRIVES,
    VEHICLE_BANKINGS,
    VEHICLE_INSURANCE_POLICIES,
    VEHICLE_MAINTENANCES,
    VEHICLE_PHOTOS,
];
