//! Insurance policy domain model.
//!
//! # Invariants
//! - `price` and `premium_rate` are finite numbers.
//! - `duration` (expiry date) must not be before the reference instant.

use crate::model::{require_finite, require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An insurance policy offered with a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub uuid: EntityId,
    pub price: f64,
    pub premium_rate: f64,
    /// Policy expiry date in Unix epoch milliseconds.
    pub duration: i64,
    pub insurance_company: String,
}

impl InsurancePolicy {
    /// Creates a new policy with a generated stable ID.
    pub fn new(
        price: f64,
        premium_rate: f64,
        duration: i64,
        insurance_company: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), price, premium_rate, duration, insurance_company)
    }

    pub fn with_id(
        uuid: EntityId,
        price: f64,
        premium_rate: f64,
        duration: i64,
        insurance_company: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            price,
            premium_rate,
            duration,
            insurance_company: insurance_company.into(),
        }
    }
}

impl Validate for InsurancePolicy {
    fn validate(&self, now_ms: i64) -> Result<(), ValidationError> {
        require_finite("insurance policy", "price", self.price)?;
        if self.duration < now_ms {
            return Err(ValidationError::DateInPast {
                entity: "insurance policy",
                field: "duration",
            });
        }
        require_finite("insurance policy", "premium rate", self.premium_rate)?;
        require_text("insurance policy", "insurance company", &self.insurance_company)?;
        Ok(())
    }
}
