#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tasklite::db::db::Db;
    use tasklite::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tasklite::db::tasks::Tasks;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn columns(conn: &Connection) -> Vec<(String, String, bool, bool)> {
        let mut stmt = conn.prepare("PRAGMA table_info(tasks)").unwrap();
        let columns = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, bool>(3)?,
                    row.get::<_, i32>(5)? > 0,
                ))
            })
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        columns
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 1);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_matches_layout(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(
            columns(&db.conn),
            vec![
                ("id".to_string(), "INTEGER".to_string(), true, true),
                ("text".to_string(), "TEXT".to_string(), true, false),
            ]
        );
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        assert_eq!(manager.run_migrations(&mut conn).unwrap(), 1);
        let version1 = get_db_version(&conn).unwrap();

        assert_eq!(manager.run_migrations(&mut conn).unwrap(), 0);
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, 1);
        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_initialize_keeps_existing_rows(ctx: &mut MigrationTestContext) {
        let mut tasks = Tasks::open(&ctx.db_path).unwrap();
        tasks.create_task("Before").unwrap();

        tasks.initialize().unwrap();
        tasks.initialize().unwrap();

        assert_eq!(tasks.list_tasks().unwrap().len(), 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_database_from_older_schema_is_accepted(ctx: &mut MigrationTestContext) {
        // A file created with the plain table and user_version already at 1
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY NOT NULL, text TEXT NOT NULL);
                 INSERT INTO tasks (text) VALUES ('Legacy');
                 PRAGMA user_version = 1;",
            )
            .unwrap();
        }

        let tasks = Tasks::open(&ctx.db_path).unwrap();
        let listed = tasks.list_tasks().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "Legacy");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_status_on_untouched_file(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
        assert_eq!(MigrationManager::new().latest_version(), 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_existing_does_not_create_missing_file(ctx: &mut MigrationTestContext) {
        assert!(Db::open_existing(&ctx.db_path).unwrap().is_none());
        assert!(!ctx.db_path.exists());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_existing_leaves_schema_alone(ctx: &mut MigrationTestContext) {
        drop(Connection::open(&ctx.db_path).unwrap());

        let conn = Db::open_existing(&ctx.db_path).unwrap().unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }
}
