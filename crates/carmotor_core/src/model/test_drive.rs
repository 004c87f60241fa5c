//! Test drive domain model.
//!
//! # Invariants
//! - `date` must not be before the reference instant when validated.

use crate::model::{EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled test drive appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDrive {
    pub uuid: EntityId,
    /// Appointment date in Unix epoch milliseconds.
    pub date: i64,
}

impl TestDrive {
    /// Creates a new test drive with a generated stable ID.
    pub fn new(date: i64) -> Self {
        Self::with_id(Uuid::new_v4(), date)
    }

    pub fn with_id(uuid: EntityId, date: i64) -> Self {
        Self { uuid, date }
    }
}

impl Validate for TestDrive {
    fn validate(&self, now_ms: i64) -> Result<(), ValidationError> {
        if self.date < now_ms {
            return Err(ValidationError::DateInPast {
                entity: "test drive",
                field: "date",
            });
        }
        Ok(())
    }
}
