//! Helpers for integration tests.

use product_catalog::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// Temporary database used in integration tests.
pub struct TestDb {
    // Dropping the directory removes the database along with its -shm/-wal files.
    _dir: TempDir,
    path: std::path::PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
