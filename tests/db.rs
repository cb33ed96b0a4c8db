use diesel::RunQueryDsl;
use diesel::sql_types::Text;

use product_catalog::db::run_migrations;

mod common;

#[derive(diesel::QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_creates_and_removes_db_files() {
    let path = {
        let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        assert!(test_db.path().exists());
        test_db.path().to_path_buf()
    };

    assert!(!path.exists());
    assert!(!std::path::Path::new(&format!("{}-shm", path.display())).exists());
    assert!(!std::path::Path::new(&format!("{}-wal", path.display())).exists());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");

    let applied = run_migrations(&test_db.pool()).expect("rerun migrations");

    assert_eq!(applied, 0);
}

#[test]
fn test_connections_use_wal_journal() {
    let test_db = common::TestDb::new("test_connections_use_wal_journal.db");
    let mut conn = test_db.pool().get().expect("get connection");

    let mode = diesel::sql_query("PRAGMA journal_mode")
        .get_result::<JournalMode>(&mut conn)
        .expect("query journal mode");

    assert_eq!(mode.journal_mode.to_lowercase(), "wal");
}
