//! User domain model.

use crate::model::{require_text, EntityId, Validate, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a registered user plays in the dealership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Back-office administrator.
    Admin,
    /// Dealership sales staff.
    Seller,
    /// Customer browsing or purchasing vehicles.
    Buyer,
}

/// A registered user of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: EntityId,
    pub name: String,
    pub email: String,
    /// National/legal identifier, free-form text.
    pub identifier: String,
    pub phone: String,
    pub role: UserRole,
}

impl User {
    /// Creates a new user with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        identifier: impl Into<String>,
        phone: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, identifier, phone, role)
    }

    pub fn with_id(
        uuid: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        identifier: impl Into<String>,
        phone: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            email: email.into(),
            identifier: identifier.into(),
            phone: phone.into(),
            role,
        }
    }
}

impl Validate for User {
    fn validate(&self, _now_ms: i64) -> Result<(), ValidationError> {
        require_text("user", "name", &self.name)?;
        require_text("user", "email", &self.email)?;
        require_text("user", "identifier", &self.identifier)?;
        require_text("user", "phone", &self.phone)?;
        Ok(())
    }
}
