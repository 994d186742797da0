// Integration tests for the application factory
//
// The factory must be pure configuration: no connection, no schema
// creation, and every call yields an independent instance reporting the
// same configured values.

use petstore_core::Pet;
use petstore_server::{App, AppConfig};
use petstore_store::PetRepo;

#[test]
fn test_factory_calls_are_independent_and_consistent() {
    let first = App::new(AppConfig::default());
    let second = App::new(AppConfig::default());

    assert_eq!(first.database_uri(), second.database_uri());
    assert_eq!(first.database_uri(), "sqlite:///app.db");
    assert!(!first.track_modifications());
    assert!(!second.track_modifications());
}

#[test]
fn test_factory_performs_no_io() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let app = App::new(AppConfig::with_database_path(&db_path));

    // Construction alone must not create the database file
    assert!(!db_path.exists());
    assert_eq!(
        app.database_uri(),
        format!("sqlite:///{}", db_path.display())
    );
}

#[test]
fn test_migrate_then_query_through_app_connection() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let app = App::new(AppConfig::with_database_path(&db_path));
    app.migrate().unwrap();

    let conn = app.connect().unwrap();
    let mut pet = Pet::new("Fido", "Dog");
    PetRepo::insert(&conn, &mut pet).unwrap();

    assert_eq!(PetRepo::count(&conn).unwrap(), 1);
    assert!(pet.is_persisted());
}

#[test]
fn test_migrate_is_idempotent_through_helper() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let app = App::new(AppConfig::with_database_path(&db_path));
    app.migrate().unwrap();
    app.migrate().unwrap();

    let conn = app.connect().unwrap();
    assert_eq!(PetRepo::count(&conn).unwrap(), 0);
}

#[test]
fn test_misconfigured_path_fails_on_first_use() {
    let app = App::new(AppConfig::with_database_path(
        "/nonexistent-dir/petstore/app.db",
    ));

    // The factory accepted the config; the error surfaces at connect time
    let result = app.connect();
    assert!(result.is_err());
}
