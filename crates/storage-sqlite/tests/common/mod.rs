use std::sync::Arc;

use sikasync_storage_sqlite::db::{self, DbPool};
use tempfile::TempDir;

/// Creates a fresh migrated database in a temp directory. The TempDir must
/// stay alive for the duration of the test.
pub fn setup_db() -> (TempDir, Arc<DbPool>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = db::init(dir.path().to_str().expect("non-utf8 temp path"))
        .expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");
    (dir, pool)
}
