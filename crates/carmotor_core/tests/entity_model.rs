use carmotor_core::{
    Assessor, InsurancePolicy, MaintenanceHistory, TestDrive, User, UserRole, Validate,
    ValidationError, Vehicle,
};
use uuid::Uuid;

const NOW_MS: i64 = 1_700_000_000_000;
const ONE_DAY_MS: i64 = 86_400_000;

fn valid_vehicle() -> Vehicle {
    Vehicle::new("Mazda", "3", "7", "2024", "sedan", 5, 25_990.0)
}

#[test]
fn vehicle_new_generates_identity() {
    let vehicle = valid_vehicle();
    assert!(!vehicle.uuid.is_nil());
    assert_eq!(vehicle.brand, "Mazda");
    assert_eq!(vehicle.capacity, 5);
}

#[test]
fn vehicle_validation_covers_every_required_field() {
    assert!(valid_vehicle().validate(NOW_MS).is_ok());

    let mut blank_brand = valid_vehicle();
    blank_brand.brand = "  ".to_string();
    assert_eq!(
        blank_brand.validate(NOW_MS).unwrap_err(),
        ValidationError::EmptyField {
            entity: "vehicle",
            field: "brand"
        }
    );

    let mut no_seats = valid_vehicle();
    no_seats.capacity = 0;
    assert!(matches!(
        no_seats.validate(NOW_MS).unwrap_err(),
        ValidationError::NonPositive { field: "capacity", .. }
    ));

    let mut nan_price = valid_vehicle();
    nan_price.price = f64::NAN;
    assert!(matches!(
        nan_price.validate(NOW_MS).unwrap_err(),
        ValidationError::NotFinite { field: "price", .. }
    ));

    let mut infinite_price = valid_vehicle();
    infinite_price.price = f64::NEG_INFINITY;
    assert!(infinite_price.validate(NOW_MS).is_err());
}

#[test]
fn test_drive_date_must_not_be_in_the_past() {
    let future = TestDrive::new(NOW_MS + ONE_DAY_MS);
    assert!(future.validate(NOW_MS).is_ok());

    let past = TestDrive::new(NOW_MS - ONE_DAY_MS);
    assert_eq!(
        past.validate(NOW_MS).unwrap_err(),
        ValidationError::DateInPast {
            entity: "test drive",
            field: "date"
        }
    );
}

#[test]
fn insurance_policy_duration_must_not_be_in_the_past() {
    let active = InsurancePolicy::new(1_200.0, 0.05, NOW_MS + ONE_DAY_MS, "Altaseguro");
    assert!(active.validate(NOW_MS).is_ok());

    let expired = InsurancePolicy::new(1_200.0, 0.05, NOW_MS - ONE_DAY_MS, "Altaseguro");
    assert!(matches!(
        expired.validate(NOW_MS).unwrap_err(),
        ValidationError::DateInPast { field: "duration", .. }
    ));

    let bad_rate = InsurancePolicy::new(1_200.0, f64::INFINITY, NOW_MS + ONE_DAY_MS, "Altaseguro");
    assert!(matches!(
        bad_rate.validate(NOW_MS).unwrap_err(),
        ValidationError::NotFinite { field: "premium rate", .. }
    ));
}

#[test]
fn maintenance_date_must_not_be_in_the_future() {
    let recorded = MaintenanceHistory::new(NOW_MS - ONE_DAY_MS, "oil change", "Cra 7 #12-34");
    assert!(recorded.validate(NOW_MS).is_ok());

    let scheduled = MaintenanceHistory::new(NOW_MS + ONE_DAY_MS, "oil change", "Cra 7 #12-34");
    assert_eq!(
        scheduled.validate(NOW_MS).unwrap_err(),
        ValidationError::DateInFuture {
            entity: "maintenance history",
            field: "date"
        }
    );
}

#[test]
fn assessor_requires_all_text_fields() {
    let assessor = Assessor::new("Jane", "photos/jane.png", "jane@carmotor.co");
    assert!(assessor.validate(NOW_MS).is_ok());

    let no_contact = Assessor::new("Jane", "photos/jane.png", "");
    assert!(matches!(
        no_contact.validate(NOW_MS).unwrap_err(),
        ValidationError::EmptyField {
            field: "contact information",
            ..
        }
    ));
}

#[test]
fn vehicle_serialization_uses_expected_wire_fields() {
    let vehicle_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let vehicle = Vehicle::with_id(vehicle_id, "Mazda", "3", "7", "2024", "sedan", 5, 25_990.0);

    let json = serde_json::to_value(&vehicle).unwrap();
    assert_eq!(json["uuid"], vehicle_id.to_string());
    assert_eq!(json["type"], "sedan");
    assert_eq!(json["last_plate_digit"], "7");
    assert_eq!(json["capacity"], 5);

    let decoded: Vehicle = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, vehicle);
}

#[test]
fn user_role_serializes_in_snake_case() {
    let user = User::new("Ana", "ana@mail.co", "CC-1019", "3001234567", UserRole::Seller);
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["role"], "seller");
}
