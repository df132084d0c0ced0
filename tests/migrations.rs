#[cfg(test)]
mod tests {
    use kanri::db::db::Db;
    use kanri::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct MigrationTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_migrates_to_latest(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 3);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_recorded_in_order(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        let manager = MigrationManager::new();
        let history = manager.get_migration_history(&db.conn).unwrap();
        let versions: Vec<u32> = history.iter().map(|(v, _, _)| *v).collect();
        let names: Vec<&str> = history.iter().map(|(_, n, _)| n.as_str()).collect();

        assert_eq!(versions, vec![1, 2, 3]);
        assert_eq!(names, vec!["create_tasks_table", "add_subtask_links", "add_task_owner"]);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_applies_nothing_new(_ctx: &mut MigrationTestContext) {
        {
            let db = Db::new().unwrap();
            assert_eq!(get_db_version(&db.conn).unwrap(), 3);
        }

        // Second open finds the schema current and leaves history alone.
        let db = Db::new().unwrap();
        let manager = MigrationManager::new();
        assert_eq!(manager.get_migration_history(&db.conn).unwrap().len(), 3);
    }
}
