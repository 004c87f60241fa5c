//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into validated, transactional use-case
//!   APIs for entity CRUD and relationship management.
//! - Surface exactly two domain failure kinds: an identifier that does not
//!   resolve (`EntityNotFound`) and an operation the current state forbids
//!   (`Validation` / `NotRelated`).

use crate::model::{EntityId, EntityKind, ValidationError};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod association_service;
pub mod entity_service;

pub use association_service::AssociationService;
pub use entity_service::{
    AssessorService, BankingService, EntityService, InsurancePolicyService, LocationService,
    MaintenanceHistoryService, PhotoService, TestDriveService, UserService, VehicleService,
};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure raised by entity and association services.
#[derive(Debug)]
pub enum ServiceError {
    /// The identifier does not resolve in its store.
    EntityNotFound { kind: EntityKind, id: EntityId },
    /// A validator rejected the proposed field values.
    Validation(ValidationError),
    /// Both entities exist but are not associated.
    NotRelated {
        owner: EntityKind,
        owner_id: EntityId,
        member: EntityKind,
        member_id: EntityId,
    },
    /// Persistence-layer failure, propagated unmodified.
    Storage(RepoError),
}

impl ServiceError {
    /// True for the failure kind a transport layer maps to 404-class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityNotFound { .. })
    }

    /// True for the failure kind a transport layer maps to 422/400-class.
    pub fn is_illegal_operation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotRelated { .. })
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntityNotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotRelated {
                owner,
                owner_id,
                member,
                member_id,
            } => write!(
                f,
                "{member} {member_id} isn't related to {owner} with ID: {owner_id}"
            ),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::EntityNotFound { .. } | Self::NotRelated { .. } => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { kind, id } => Self::EntityNotFound { kind, id },
            other => Self::Storage(other),
        }
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(RepoError::from(value))
    }
}

/// Current instant in Unix epoch milliseconds.
///
/// The reference "now" handed to validators; exposed so callers scheduling
/// test drives or policies can build values relative to the same clock.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

#[cfg(test)]
mod tests {
    use super::ServiceError;
    use crate::model::{EntityKind, ValidationError};
    use uuid::Uuid;

    #[test]
    fn error_kinds_map_to_transport_classes() {
        let not_found = ServiceError::EntityNotFound {
            kind: EntityKind::Vehicle,
            id: Uuid::nil(),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_illegal_operation());

        let invalid = ServiceError::Validation(ValidationError::EmptyField {
            entity: "vehicle",
            field: "brand",
        });
        assert!(invalid.is_illegal_operation());

        let not_related = ServiceError::NotRelated {
            owner: EntityKind::Assessor,
            owner_id: Uuid::nil(),
            member: EntityKind::Vehicle,
            member_id: Uuid::nil(),
        };
        assert!(not_related.is_illegal_operation());
        assert!(not_related
            .to_string()
            .contains("isn't related to assessor with ID:"));
    }
}
