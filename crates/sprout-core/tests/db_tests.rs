use jiff::civil::date;
use rusqlite::Connection;
use sprout_core::{Database, TrackerError};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());

    // Opening the same file again must not fail on the existing schema
    Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_and_get_plant() {
    let (_temp_file, mut db) = create_test_db();

    let plant = db
        .create_plant("Rose", 3, date(2024, 1, 1))
        .expect("Failed to create plant");
    assert!(plant.id > 0);

    let fetched = db
        .get_plant(plant.id)
        .expect("Failed to get plant")
        .expect("Plant should exist");
    assert_eq!(fetched, plant);

    assert!(db.get_plant(plant.id + 100).unwrap().is_none());
}

#[test]
fn test_require_plant_not_found() {
    let (_temp_file, db) = create_test_db();

    match db.require_plant(12) {
        Err(TrackerError::PlantNotFound { id }) => assert_eq!(id, 12),
        other => panic!("Expected PlantNotFound, got {other:?}"),
    }
}

#[test]
fn test_list_plants_in_creation_order() {
    let (_temp_file, mut db) = create_test_db();

    for name in ["Tulip", "Aloe", "Moss"] {
        db.create_plant(name, 5, date(2024, 1, 1))
            .expect("Failed to create plant");
    }

    let names: Vec<String> = db
        .list_plants()
        .expect("Failed to list plants")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Tulip", "Aloe", "Moss"]);
}

#[test]
fn test_schema_rejects_non_positive_frequency() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.create_plant("Fern", 0, date(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, TrackerError::Database { .. }));
    assert_eq!(db.count_plants().unwrap(), 0);
}

#[test]
fn test_water_plant_writes_both_rows() {
    let (_temp_file, mut db) = create_test_db();
    let plant = db.create_plant("Ivy", 5, date(2024, 1, 1)).unwrap();

    let (updated, event) = db.water_plant(plant.id, date(2024, 1, 4)).unwrap();

    assert_eq!(updated.last_watered, date(2024, 1, 4));
    assert_eq!(event.plant_id, plant.id);
    assert_eq!(event.date, date(2024, 1, 4));
    assert_eq!(db.count_watering_events().unwrap(), 1);
    assert_eq!(db.list_watering_events(plant.id).unwrap(), vec![event]);
}

#[test]
fn test_water_unknown_plant_rolls_back() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.water_plant(404, date(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, TrackerError::PlantNotFound { id: 404 }));
    assert_eq!(db.count_watering_events().unwrap(), 0);
}

#[test]
fn test_mark_watered_only_touches_plant() {
    let (_temp_file, mut db) = create_test_db();
    let plant = db.create_plant("Sage", 2, date(2024, 1, 1)).unwrap();

    let updated = db.mark_watered(plant.id, date(2024, 1, 2)).unwrap();
    assert_eq!(updated.last_watered, date(2024, 1, 2));
    assert_eq!(db.count_watering_events().unwrap(), 0);

    assert!(matches!(
        db.mark_watered(plant.id + 1, date(2024, 1, 2)),
        Err(TrackerError::PlantNotFound { .. })
    ));
}

#[test]
fn test_events_listed_most_recent_first() {
    let (_temp_file, mut db) = create_test_db();
    let plant = db.create_plant("Palm", 7, date(2024, 1, 1)).unwrap();
    let other = db.create_plant("Fig", 7, date(2024, 1, 1)).unwrap();

    db.record_watering(plant.id, date(2024, 1, 3)).unwrap();
    db.record_watering(plant.id, date(2024, 1, 9)).unwrap();
    db.record_watering(plant.id, date(2024, 1, 5)).unwrap();
    db.record_watering(other.id, date(2024, 1, 7)).unwrap();

    let dates: Vec<_> = db
        .list_watering_events(plant.id)
        .unwrap()
        .into_iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(dates, vec![date(2024, 1, 9), date(2024, 1, 5), date(2024, 1, 3)]);
    assert_eq!(db.count_watering_events().unwrap(), 4);
}

#[test]
fn test_record_watering_unknown_plant() {
    let (_temp_file, mut db) = create_test_db();

    assert!(matches!(
        db.record_watering(3, date(2024, 1, 1)),
        Err(TrackerError::PlantNotFound { id: 3 })
    ));
    assert!(matches!(
        db.list_watering_events(3),
        Err(TrackerError::PlantNotFound { id: 3 })
    ));
    assert_eq!(db.count_watering_events().unwrap(), 0);
}

#[test]
fn test_foreign_key_enforced() {
    let (temp_file, _db) = create_test_db();

    let conn = Connection::open(temp_file.path()).unwrap();
    conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
    let result = conn.execute(
        "INSERT INTO watering_history (plant_id, date) VALUES (?1, ?2)",
        rusqlite::params![99, "2024-01-01"],
    );
    assert!(result.is_err());
}

/// Creates a database file with the layout of the original Flask/SQLAlchemy
/// application, followed by `rows`.
fn create_web_tracker_db(rows: &str) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    let conn = Connection::open(temp_file.path()).unwrap();
    conn.execute_batch(
        "CREATE TABLE plant (
             id INTEGER NOT NULL,
             name VARCHAR(100) NOT NULL,
             frequency INTEGER NOT NULL,
             last_watered DATE,
             PRIMARY KEY (id)
         );
         CREATE TABLE watering_history (
             id INTEGER NOT NULL,
             plant_id INTEGER NOT NULL,
             date DATE,
             PRIMARY KEY (id),
             FOREIGN KEY(plant_id) REFERENCES plant (id)
         );",
    )
    .unwrap();
    conn.execute_batch(rows).unwrap();
    temp_file
}

#[test]
fn test_opens_database_from_web_tracker() {
    let temp_file = create_web_tracker_db(
        "INSERT INTO plant (id, name, frequency, last_watered) VALUES (1, 'Rose', 3, '2024-01-05');
         INSERT INTO watering_history (id, plant_id, date) VALUES (1, 1, '2024-01-05');",
    );

    let db = Database::new(temp_file.path()).expect("Failed to open legacy database");
    let plants = db.list_plants().unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Rose");
    assert_eq!(plants[0].last_watered, date(2024, 1, 5));
    assert_eq!(db.list_watering_events(1).unwrap().len(), 1);
}

#[test]
fn test_web_tracker_rows_out_of_range() {
    let temp_file = create_web_tracker_db(
        "INSERT INTO plant (id, name, frequency, last_watered) VALUES (1, 'Rose', 3, '2024-01-05');
         INSERT INTO plant (id, name, frequency, last_watered) VALUES (2, 'Bad', -1, '2024-01-05');
         INSERT INTO plant (id, name, frequency, last_watered) VALUES (3, 'Huge', 99999999, '2024-01-05');
         INSERT INTO plant (id, name, frequency, last_watered) VALUES (4, 'Never', 7, NULL);",
    );

    let mut db = Database::new(temp_file.path()).expect("Failed to open legacy database");
    let plants = db.list_plants().expect("Legacy rows must not break listing");

    let summary: Vec<(u64, u32)> = plants.iter().map(|p| (p.id, p.frequency)).collect();
    assert_eq!(summary, vec![(1, 3), (2, 1), (3, 36_500)]);
    assert!(db.get_plant(4).unwrap().is_none());

    // Watering gives the plant a last watered day, after which it is listed
    let (watered, _) = db.water_plant(4, date(2024, 2, 1)).unwrap();
    assert_eq!(watered.last_watered, date(2024, 2, 1));
    assert_eq!(db.list_plants().unwrap().len(), 4);
}

#[test]
fn test_water_plant_rolls_back_when_event_insert_fails() {
    let (temp_file, mut db) = create_test_db();
    let plant = db.create_plant("Rose", 3, date(2024, 1, 1)).unwrap();

    let conn = Connection::open(temp_file.path()).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_events BEFORE INSERT ON watering_history
         BEGIN SELECT RAISE(ABORT, 'history is read-only'); END;",
    )
    .unwrap();
    drop(conn);

    let err = db.water_plant(plant.id, date(2024, 1, 5)).unwrap_err();
    assert!(matches!(err, TrackerError::Database { .. }));

    let unchanged = db.require_plant(plant.id).unwrap();
    assert_eq!(unchanged.last_watered, date(2024, 1, 1));
    assert_eq!(db.count_watering_events().unwrap(), 0);
}
