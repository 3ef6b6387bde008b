mod common;

use sea_orm::ConnectionTrait;
use sea_orm_migration::MigratorTrait;

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = sea_orm::Database::connect(common::unique_database_url())
        .await
        .unwrap();

    mutabaa::migration::Migrator::up(&db, None)
        .await
        .expect("first run");
    mutabaa::migration::Migrator::up(&db, None)
        .await
        .expect("second run");

    db.execute_unprepared(
        "INSERT INTO reports (teacher_name, department, details) VALUES ('a', 'b', '')",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn legacy_table_gains_missing_columns() {
    let db = sea_orm::Database::connect(common::unique_database_url())
        .await
        .unwrap();

    // Schema as first deployed, before the visit-detail columns existed.
    db.execute_unprepared(
        "CREATE TABLE reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            teacher_name TEXT NOT NULL,
            department TEXT NOT NULL,
            details TEXT NOT NULL,
            image_url TEXT,
            location_lat REAL,
            location_lng REAL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .await
    .unwrap();

    mutabaa::migration::Migrator::up(&db, None)
        .await
        .expect("migrating a legacy table");

    db.execute_unprepared(
        "INSERT INTO reports (teacher_name, department, details, governorate, visit_date)
         VALUES ('a', 'b', '', 'القاهرة', '2025-03-02')",
    )
    .await
    .expect("new columns are writable");
}
