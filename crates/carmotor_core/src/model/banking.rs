//! Financing bank domain model.

use crate::model::{require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bank offering financing for vehicle purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banking {
    pub uuid: EntityId,
    pub name: String,
    pub uri_logo: String,
    /// Phone of the assessor handling this bank's financing deals.
    pub assessor_phone: String,
}

impl Banking {
    /// Creates a new bank with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        uri_logo: impl Into<String>,
        assessor_phone: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, uri_logo, assessor_phone)
    }

    pub fn with_id(
        uuid: EntityId,
        name: impl Into<String>,
        uri_logo: impl Into<String>,
        assessor_phone: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            uri_logo: uri_logo.into(),
            assessor_phone: assessor_phone.into(),
        }
    }
}

impl Validate for Banking {
    fn validate(&self, _now_ms: i64) -> Result<(), ValidationError> {
        require_text("bank", "name", &self.name)?;
        require_text("bank", "uri logo", &self.uri_logo)?;
        require_text("bank", "assessor phone", &self.assessor_phone)?;
        Ok(())
    }
}
