//! Vehicle domain model.
//!
//! # Invariants
//! - `capacity` is strictly positive.
//! - `price` is a finite number.

use crate::model::{require_finite, require_positive, require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vehicle offered by the dealership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable global ID used for linking and auditing.
    pub uuid: EntityId,
    pub brand: String,
    pub series: String,
    pub last_plate_digit: String,
    pub model: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Passenger capacity; must be strictly positive.
    pub capacity: i64,
    /// Listing price; must be finite.
    pub price: f64,
}

impl Vehicle {
    /// Creates a new vehicle with a generated stable ID.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: impl Into<String>,
        series: impl Into<String>,
        last_plate_digit: impl Into<String>,
        model: impl Into<String>,
        kind: impl Into<String>,
        capacity: i64,
        price: f64,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            brand,
            series,
            last_plate_digit,
            model,
            kind,
            capacity,
            price,
        )
    }

    /// Creates a vehicle with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        uuid: EntityId,
        brand: impl Into<String>,
        series: impl Into<String>,
        last_plate_digit: impl Into<String>,
        model: impl Into<String>,
        kind: impl Into<String>,
        capacity: i64,
        price: f64,
    ) -> Self {
        Self {
            uuid,
            brand: brand.into(),
            series: series.into(),
            last_plate_digit: last_plate_digit.into(),
            model: model.into(),
            kind: kind.into(),
            capacity,
            price,
        }
    }
}

impl Validate for Vehicle {
    fn validate(&self, _now_ms: i64) -> Result<(), ValidationError> {
        require_text("vehicle", "brand", &self.brand)?;
        require_text("vehicle", "series", &self.series)?;
        require_text("vehicle", "last plate digit", &self.last_plate_digit)?;
        require_text("vehicle", "model", &self.model)?;
        require_text("vehicle", "type", &self.kind)?;
        require_positive("vehicle", "capacity", self.capacity)?;
        require_finite("vehicle", "price", self.price)?;
        Ok(())
    }
}
