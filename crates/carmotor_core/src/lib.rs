//! Core domain logic for the Carmotor dealership catalog.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod relation;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Assessor, Banking, EntityId, EntityKind, InsurancePolicy, Location, MaintenanceHistory, Photo,
    TestDrive, User, UserRole, Validate, ValidationError, Vehicle,
};
pub use relation::{MemberLink, RelationDef, RELATIONS};
pub use repo::{Record, RepoError, RepoResult, SqliteEdgeRepository, SqliteEntityRepository};
pub use service::{
    now_epoch_ms, AssessorService, AssociationService, BankingService, EntityService,
    InsurancePolicyService, LocationService, MaintenanceHistoryService, PhotoService,
    ServiceError, ServiceResult, TestDriveService, UserService, VehicleService,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
