use carmotor_core::db::open_db_in_memory;
use carmotor_core::{
    now_epoch_ms, relation, Assessor, AssessorService, AssociationService, Location,
    LocationService, ServiceError, SqliteEdgeRepository, TestDrive, TestDriveService, User,
    UserRole, UserService, Vehicle, VehicleService,
};
use uuid::Uuid;

const ONE_DAY_MS: i64 = 86_400_000;

fn vehicle(brand: &str) -> Vehicle {
    Vehicle::new(brand, "LX", "8", "2024", "sedan", 5, 21_000.0)
}

fn location(name: &str) -> Location {
    Location::new(name, "Av 68 #40-21", "6015550177", "mon-sat 9-19")
}

#[test]
fn assessor_vehicle_attach_then_detach_round_trip() {
    let mut conn = open_db_in_memory().unwrap();
    let assessor = AssessorService::new(&mut conn)
        .create(Assessor::new("Jane", "u", "c"))
        .unwrap();
    let car = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();

    {
        let mut vehicles = AssociationService::assessor_vehicles(&mut conn);
        let attached = vehicles.attach(assessor.uuid, car.uuid).unwrap();
        assert_eq!(attached.uuid, car.uuid);

        let listed = vehicles.members(assessor.uuid).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].uuid, car.uuid);
    }
    {
        // The derived back-pointer agrees with the owner's collection.
        let edges = SqliteEdgeRepository::new(&conn);
        assert_eq!(
            edges
                .owner_of(relation::ASSESSOR_VEHICLES.name, car.uuid)
                .unwrap(),
            Some(assessor.uuid)
        );
    }
    {
        let mut vehicles = AssociationService::assessor_vehicles(&mut conn);
        vehicles.detach(assessor.uuid, car.uuid).unwrap();
        assert!(vehicles.members(assessor.uuid).unwrap().is_empty());
    }

    let edges = SqliteEdgeRepository::new(&conn);
    assert_eq!(
        edges
            .owner_of(relation::ASSESSOR_VEHICLES.name, car.uuid)
            .unwrap(),
        None
    );
}

#[test]
fn attach_overwrites_a_single_valued_back_pointer() {
    let mut conn = open_db_in_memory().unwrap();
    let first = AssessorService::new(&mut conn)
        .create(Assessor::new("Jane", "u", "c"))
        .unwrap();
    let second = AssessorService::new(&mut conn)
        .create(Assessor::new("Luis", "u", "c"))
        .unwrap();
    let car = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();

    {
        let mut vehicles = AssociationService::assessor_vehicles(&mut conn);
        vehicles.attach(first.uuid, car.uuid).unwrap();
        vehicles.attach(second.uuid, car.uuid).unwrap();

        assert!(vehicles.members(first.uuid).unwrap().is_empty());
        assert_eq!(vehicles.members(second.uuid).unwrap()[0].uuid, car.uuid);
    }

    let edges = SqliteEdgeRepository::new(&conn);
    assert_eq!(
        edges
            .owner_of(relation::ASSESSOR_VEHICLES.name, car.uuid)
            .unwrap(),
        Some(second.uuid)
    );
}

#[test]
fn member_lookup_fails_when_entities_exist_but_are_unrelated() {
    let mut conn = open_db_in_memory().unwrap();
    let owner = UserService::new(&mut conn)
        .create(User::new("Ana", "ana@mail.co", "CC-1019", "3001234567", UserRole::Buyer))
        .unwrap();
    let car = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();

    let user_vehicles = AssociationService::user_vehicles(&mut conn);
    let err = user_vehicles.member(owner.uuid, car.uuid).unwrap_err();

    assert!(err.is_illegal_operation());
    assert!(err.to_string().contains("isn't related to user with ID:"));
}

#[test]
fn replace_all_with_a_missing_member_leaves_the_collection_untouched() {
    let mut conn = open_db_in_memory().unwrap();
    let site = LocationService::new(&mut conn).create(location("North")).unwrap();
    let kept = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();
    let candidate = VehicleService::new(&mut conn).create(vehicle("Kia")).unwrap();

    let mut vehicles = AssociationService::location_vehicles(&mut conn);
    vehicles.attach(site.uuid, kept.uuid).unwrap();

    let err = vehicles
        .replace_all(site.uuid, &[candidate.uuid, Uuid::new_v4()])
        .unwrap_err();
    assert!(err.is_not_found());

    let listed = vehicles.members(site.uuid).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].uuid, kept.uuid);
}

#[test]
fn replace_all_fully_unlinks_members_dropped_from_the_list() {
    let mut conn = open_db_in_memory().unwrap();
    let site = LocationService::new(&mut conn).create(location("North")).unwrap();
    let old = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();
    let new = VehicleService::new(&mut conn).create(vehicle("Kia")).unwrap();

    {
        let mut vehicles = AssociationService::location_vehicles(&mut conn);
        vehicles.attach(site.uuid, old.uuid).unwrap();
        let replaced = vehicles.replace_all(site.uuid, &[new.uuid]).unwrap();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].uuid, new.uuid);
    }

    let edges = SqliteEdgeRepository::new(&conn);
    assert_eq!(
        edges
            .owner_of(relation::LOCATION_VEHICLES.name, old.uuid)
            .unwrap(),
        None
    );
    assert_eq!(
        edges
            .owner_of(relation::LOCATION_VEHICLES.name, new.uuid)
            .unwrap(),
        Some(site.uuid)
    );
}

#[test]
fn booking_a_test_drive_moves_its_single_user_link() {
    let mut conn = open_db_in_memory().unwrap();
    let first = UserService::new(&mut conn)
        .create(User::new("Ana", "ana@mail.co", "CC-1019", "3001234567", UserRole::Buyer))
        .unwrap();
    let second = UserService::new(&mut conn)
        .create(User::new("Leo", "leo@mail.co", "CC-2040", "3017654321", UserRole::Buyer))
        .unwrap();
    let drive = TestDriveService::new(&mut conn)
        .create(TestDrive::new(now_epoch_ms() + ONE_DAY_MS))
        .unwrap();

    let mut bookings = AssociationService::user_test_drives(&mut conn);
    bookings.attach(first.uuid, drive.uuid).unwrap();
    bookings.attach(second.uuid, drive.uuid).unwrap();

    assert!(bookings.members(first.uuid).unwrap().is_empty());
    assert_eq!(bookings.members(second.uuid).unwrap()[0].uuid, drive.uuid);
}

#[test]
fn location_test_drives_is_one_directional_and_tolerates_duplicates() {
    let mut conn = open_db_in_memory().unwrap();
    let site = LocationService::new(&mut conn).create(location("North")).unwrap();
    let drive = TestDriveService::new(&mut conn)
        .create(TestDrive::new(now_epoch_ms() + ONE_DAY_MS))
        .unwrap();

    let mut drives = AssociationService::location_test_drives(&mut conn);
    drives.attach(site.uuid, drive.uuid).unwrap();
    drives.attach(site.uuid, drive.uuid).unwrap();

    assert_eq!(drives.members(site.uuid).unwrap().len(), 2);
}

#[test]
fn detaching_a_non_member_is_a_no_op() {
    let mut conn = open_db_in_memory().unwrap();
    let assessor = AssessorService::new(&mut conn)
        .create(Assessor::new("Jane", "u", "c"))
        .unwrap();
    let linked = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();
    let stranger = VehicleService::new(&mut conn).create(vehicle("Kia")).unwrap();

    let mut vehicles = AssociationService::assessor_vehicles(&mut conn);
    vehicles.attach(assessor.uuid, linked.uuid).unwrap();

    vehicles.detach(assessor.uuid, stranger.uuid).unwrap();

    let listed = vehicles.members(assessor.uuid).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].uuid, linked.uuid);
}

#[test]
fn every_operation_reports_a_missing_owner_before_mutating() {
    let mut conn = open_db_in_memory().unwrap();
    let car = VehicleService::new(&mut conn).create(vehicle("Mazda")).unwrap();
    let ghost = Uuid::new_v4();

    let mut vehicles = AssociationService::assessor_vehicles(&mut conn);

    assert!(vehicles.attach(ghost, car.uuid).unwrap_err().is_not_found());
    assert!(vehicles.members(ghost).unwrap_err().is_not_found());
    assert!(vehicles.member(ghost, car.uuid).unwrap_err().is_not_found());
    assert!(vehicles
        .replace_all(ghost, &[car.uuid])
        .unwrap_err()
        .is_not_found());
    assert!(vehicles.detach(ghost, car.uuid).unwrap_err().is_not_found());

    let err = vehicles.detach(ghost, car.uuid).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::EntityNotFound { id, .. } if id == ghost
    ));
}
