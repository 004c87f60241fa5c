//! Photo domain model.
//!
//! Photos are owned exclusively by one vehicle and are cascade-deleted
//! with it; see the `vehicle_photos` relation definition.

use crate::model::{require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A photo of one area of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub uuid: EntityId,
    pub uri: String,
    /// Which part of the vehicle the shot covers (front, interior, ...).
    pub area: String,
}

impl Photo {
    /// Creates a new photo with a generated stable ID.
    pub fn new(uri: impl Into<String>, area: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), uri, area)
    }

    pub fn with_id(uuid: EntityId, uri: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            uuid,
            uri: uri.into(),
            area: area.into(),
        }
    }
}

impl Validate for Photo {
    fn validate(&self, _now_ms: i64) -> Result<(), ValidationError> {
        require_text("photo", "uri", &self.uri)?;
        require_text("photo", "area", &self.area)?;
        Ok(())
    }
}
