//! Record-to-row mappings for every catalog entity.
//!
//! # Responsibility
//! - Define the `Record` contract the generic repository operates on.
//! - Keep column lists, value binding and row parsing per entity in one
//!   place, next to each other.
//!
//! # Invariants
//! - `FIELDS` order matches the binding order of `field_values` and the
//!   column order expected by `from_row`.

use crate::model::{
    Assessor, Banking, EntityId, EntityKind, InsurancePolicy, Location, MaintenanceHistory, Photo,
    TestDrive, User, UserRole, Vehicle,
};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::Row;
use uuid::Uuid;

/// Storage contract for one catalog entity type.
///
/// The table name is derived from `KIND` so the kind-to-table mapping has a
/// single source of truth.
pub trait Record: Sized {
    const KIND: EntityKind;
    /// Column names after `uuid`, in binding order.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> EntityId;
    /// Forces the stored identifier onto this record (identity pinning).
    fn set_id(&mut self, id: EntityId);
    /// Values for `FIELDS`, in the same order.
    fn field_values(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

fn parse_uuid(table: &'static str, value: &str) -> RepoResult<EntityId> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {table}.uuid")))
}

fn row_uuid(row: &Row<'_>, kind: EntityKind) -> RepoResult<EntityId> {
    let text: String = row.get("uuid")?;
    parse_uuid(kind.table(), &text)
}

impl Record for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;
    const FIELDS: &'static [&'static str] = &[
        "brand",
        "series",
        "last_plate_digit",
        "model",
        "type",
        "capacity",
        "price",
    ];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.brand.clone()),
            Value::Text(self.series.clone()),
            Value::Text(self.last_plate_digit.clone()),
            Value::Text(self.model.clone()),
            Value::Text(self.kind.clone()),
            Value::Integer(self.capacity),
            Value::Real(self.price),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            brand: row.get("brand")?,
            series: row.get("series")?,
            last_plate_digit: row.get("last_plate_digit")?,
            model: row.get("model")?,
            kind: row.get("type")?,
            capacity: row.get("capacity")?,
            price: row.get("price")?,
        })
    }
}

impl Record for Assessor {
    const KIND: EntityKind = EntityKind::Assessor;
    const FIELDS: &'static [&'static str] = &["name", "uri_photo", "contact_info"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.uri_photo.clone()),
            Value::Text(self.contact_info.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            name: row.get("name")?,
            uri_photo: row.get("uri_photo")?,
            contact_info: row.get("contact_info")?,
        })
    }
}

impl Record for Location {
    const KIND: EntityKind = EntityKind::Location;
    const FIELDS: &'static [&'static str] = &["name", "address", "phone_number", "schedule"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.address.clone()),
            Value::Text(self.phone_number.clone()),
            Value::Text(self.schedule.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            name: row.get("name")?,
            address: row.get("address")?,
            phone_number: row.get("phone_number")?,
            schedule: row.get("schedule")?,
        })
    }
}

fn user_role_to_db(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Seller => "seller",
        UserRole::Buyer => "buyer",
    }
}

fn parse_user_role(value: &str) -> Option<UserRole> {
    match value {
        "admin" => Some(UserRole::Admin),
        "seller" => Some(UserRole::Seller),
        "buyer" => Some(UserRole::Buyer),
        _ => None,
    }
}

impl Record for User {
    const KIND: EntityKind = EntityKind::User;
    const FIELDS: &'static [&'static str] = &["name", "email", "identifier", "phone", "role"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.email.clone()),
            Value::Text(self.identifier.clone()),
            Value::Text(self.phone.clone()),
            Value::Text(user_role_to_db(self.role).to_string()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let role_text: String = row.get("role")?;
        let role = parse_user_role(&role_text).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid user role `{role_text}` in users.role"))
        })?;

        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            name: row.get("name")?,
            email: row.get("email")?,
            identifier: row.get("identifier")?,
            phone: row.get("phone")?,
            role,
        })
    }
}

impl Record for TestDrive {
    const KIND: EntityKind = EntityKind::TestDrive;
    const FIELDS: &'static [&'static str] = &["date"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![Value::Integer(self.date)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            date: row.get("date")?,
        })
    }
}

impl Record for InsurancePolicy {
    const KIND: EntityKind = EntityKind::InsurancePolicy;
    const FIELDS: &'static [&'static str] =
        &["price", "premium_rate", "duration", "insurance_company"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Real(self.price),
            Value::Real(self.premium_rate),
            Value::Integer(self.duration),
            Value::Text(self.insurance_company.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            price: row.get("price")?,
            premium_rate: row.get("premium_rate")?,
            duration: row.get("duration")?,
            insurance_company: row.get("insurance_company")?,
        })
    }
}

impl Record for MaintenanceHistory {
    const KIND: EntityKind = EntityKind::MaintenanceHistory;
    const FIELDS: &'static [&'static str] = &["date", "type", "address"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.date),
            Value::Text(self.kind.clone()),
            Value::Text(self.address.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            date: row.get("date")?,
            kind: row.get("type")?,
            address: row.get("address")?,
        })
    }
}

impl Record for Banking {
    const KIND: EntityKind = EntityKind::Banking;
    const FIELDS: &'static [&'static str] = &["name", "uri_logo", "assessor_phone"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.uri_logo.clone()),
            Value::Text(self.assessor_phone.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            name: row.get("name")?,
            uri_logo: row.get("uri_logo")?,
            assessor_phone: row.get("assessor_phone")?,
        })
    }
}

impl Record for Photo {
    const KIND: EntityKind = EntityKind::Photo;
    const FIELDS: &'static [&'static str] = &["uri", "area"];

    fn id(&self) -> EntityId {
        self.uuid
    }

    fn set_id(&mut self, id: EntityId) {
        self.uuid = id;
    }

    fn field_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.uri.clone()),
            Value::Text(self.area.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            uuid: row_uuid(row, Self::KIND)?,
            uri: row.get("uri")?,
            area: row.get("area")?,
        })
    }
}
