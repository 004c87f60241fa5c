//! Assessor domain model.

use crate::model::{require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sales assessor attending customers at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessor {
    pub uuid: EntityId,
    pub name: String,
    pub uri_photo: String,
    pub contact_info: String,
}

impl Assessor {
    /// Creates a new assessor with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        uri_photo: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, uri_photo, contact_info)
    }

    pub fn with_id(
        uuid: EntityId,
        name: impl Into<String>,
        uri_photo: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            uri_photo: uri_photo.into(),
            contact_info: contact_info.into(),
        }
    }
}

impl Validate for Assessor {
    fn validate(&self, _now_ms: i64) -> Result<(), ValidationError> {
        require_text("assessor", "name", &self.name)?;
        require_text("assessor", "uri photo", &self.uri_photo)?;
        require_text("assessor", "contact information", &self.contact_info)?;
        Ok(())
    }
}
