//! In-memory databases for tests.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use super::client::ClimateStore;

/// `(station, date, prcp, tobs)`
pub type Row = (&'static str, &'static str, Option<f64>, f64);

/// A slice of the Hawaii dataset around its final dates.
pub const SAMPLE: [Row; 8] = [
    ("USC00519397", "2016-08-23", Some(0.00), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00519397", "2016-08-24", Some(0.08), 79.0),
    ("USC00513117", "2016-08-24", None, 76.0),
    ("USC00519281", "2017-01-01", Some(0.29), 62.0),
    ("USC00519397", "2017-08-22", Some(0.00), 82.0),
    ("USC00519281", "2017-08-23", Some(0.45), 81.0),
    ("USC00519397", "2017-08-23", Some(0.00), 76.0),
];

/// Create the `measurement` and `station` tables with the dataset's schema.
pub async fn create_schema(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Insert measurement rows, in the order given.
pub async fn insert_rows(pool: &SqlitePool, rows: &[Row]) {
    for &(station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(pool)
            .await
            .unwrap();
    }
}

/// A store over a fresh in-memory database holding `rows`.
pub async fn seeded_store(rows: &[Row]) -> ClimateStore {
    // Every connection to `:memory:` is a separate database, so keep exactly one.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    create_schema(&pool).await;
    insert_rows(&pool, rows).await;

    ClimateStore::from_pool(pool)
}
