//! Location domain model.

use crate::model::{require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dealership branch where vehicles and assessors are based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub uuid: EntityId,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    /// Opening hours, free-form text.
    pub schedule: String,
}

impl Location {
    /// Creates a new location with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, address, phone_number, schedule)
    }

    pub fn with_id(
        uuid: EntityId,
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            schedule: schedule.into(),
        }
    }
}

impl Validate for Location {
    fn validate(&self, _now_ms: i64) -> Result<(), ValidationError> {
        require_text("location", "name", &self.name)?;
        require_text("location", "address", &self.address)?;
        require_text("location", "phone number", &self.phone_number)?;
        require_text("location", "schedule", &self.schedule)?;
        Ok(())
    }
}
