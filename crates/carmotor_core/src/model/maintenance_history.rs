//! Maintenance history domain model.
//!
//! # Invariants
//! - `date` must not be after the reference instant when validated;
//!   maintenance is recorded after the fact, never scheduled.

use crate::model::{require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A past maintenance intervention on a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceHistory {
    pub uuid: EntityId,
    /// Intervention date in Unix epoch milliseconds.
    pub date: i64,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Workshop address where the intervention happened.
    pub address: String,
}

impl MaintenanceHistory {
    /// Creates a new maintenance record with a generated stable ID.
    pub fn new(date: i64, kind: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), date, kind, address)
    }

    pub fn with_id(
        uuid: EntityId,
        date: i64,
        kind: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            date,
            kind: kind.into(),
            address: address.into(),
        }
    }
}

impl Validate for MaintenanceHistory {
    fn validate(&self, now_ms: i64) -> Result<(), ValidationError> {
        if self.date > now_ms {
            return Err(ValidationError::DateInFuture {
                entity: "maintenance history",
                field: "date",
            });
        }
        require_text("maintenance history", "type", &self.kind)?;
        require_text("maintenance history", "address", &self.address)?;
        Ok(())
    }
}
