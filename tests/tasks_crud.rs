#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use kanri::db::tasks::Tasks;
    use kanri::libs::error::TaskError;
    use kanri::libs::task::{NewTask, Priority, Status, TaskPatch};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StoreTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn new_task(title: &str, status: Status) -> NewTask {
        let mut task = NewTask::new(title, Priority::Medium);
        task.status = status;
        task
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_and_read_back_fields(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let mut task = new_task("Ship release", Status::InProgress);
        task.description = "Cut the 1.0 tag".to_string();
        task.priority = Priority::Critical;
        task.due_date = NaiveDate::from_ymd_opt(2025, 4, 19);
        task.due_time = NaiveTime::from_hms_opt(14, 30, 0);
        task.labels = "release,backend".to_string();
        task.owner = Some("alice".to_string());

        let id = store.insert(&task).unwrap();
        let stored = store.get_by_id(id, Some("alice")).unwrap().unwrap();

        assert_eq!(stored.title, "Ship release");
        assert_eq!(stored.description, "Cut the 1.0 tag");
        assert_eq!(stored.status, Status::InProgress);
        assert_eq!(stored.priority, Priority::Critical);
        assert_eq!(stored.due_date, NaiveDate::from_ymd_opt(2025, 4, 19));
        assert_eq!(stored.due_time, NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(stored.labels, vec!["release".to_string(), "backend".to_string()]);
        assert_eq!(stored.position, 1);
        assert_eq!(stored.owner.as_deref(), Some("alice"));
        assert!(stored.created_date.is_some());
        assert!(stored.last_updated.is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_normalizes_labels(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let mut task = new_task("Labelled", Status::Todo);
        task.labels = "frontend, Bug!!, ,frontend".to_string();

        let id = store.insert(&task).unwrap();
        let stored = store.get_by_id(id, None).unwrap().unwrap();

        // Invalid token dropped, duplicate and empty entries removed.
        assert_eq!(stored.labels, vec!["frontend".to_string()]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_rejects_invalid_input(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let empty_title = new_task("", Status::Todo);
        assert!(matches!(store.insert(&empty_title), Err(TaskError::Validation(_))));

        let long_title = new_task(&"x".repeat(101), Status::Todo);
        assert!(matches!(store.insert(&long_title), Err(TaskError::Validation(_))));

        let mut long_description = new_task("Fine title", Status::Todo);
        long_description.description = "y".repeat(2001);
        assert!(matches!(store.insert(&long_description), Err(TaskError::Validation(_))));

        // A rejected insert leaves no trace.
        assert!(store.fetch(None).unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_replaces_fields_without_touching_position(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let first = store.insert(&new_task("First", Status::Todo)).unwrap();
        let second = store.insert(&new_task("Second", Status::Todo)).unwrap();

        let stored = store.get_by_id(first, None).unwrap().unwrap();
        let mut patch = TaskPatch::from_task(&stored);
        patch.title = "First, renamed".to_string();
        patch.description = "Now with details".to_string();
        patch.priority = Priority::High;
        patch.due_date = NaiveDate::from_ymd_opt(2025, 5, 1);
        patch.labels = "urgent".to_string();

        store.update(first, None, &patch).unwrap();

        let updated = store.get_by_id(first, None).unwrap().unwrap();
        assert_eq!(updated.title, "First, renamed");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.due_date, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(updated.labels, vec!["urgent".to_string()]);
        assert_eq!(updated.position, 1, "non-status update must not move the task");
        assert_eq!(store.get_by_id(second, None).unwrap().unwrap().position, 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_with_status_change_repositions(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let moving = store.insert(&new_task("Moving", Status::Todo)).unwrap();
        let staying = store.insert(&new_task("Staying", Status::Todo)).unwrap();
        store.insert(&new_task("Done already", Status::Done)).unwrap();

        let stored = store.get_by_id(moving, None).unwrap().unwrap();
        let mut patch = TaskPatch::from_task(&stored);
        patch.status = Status::Done;
        store.update(moving, None, &patch).unwrap();

        let moved = store.get_by_id(moving, None).unwrap().unwrap();
        assert_eq!(moved.status, Status::Done);
        assert_eq!(moved.position, 2, "status change through update appends to the target column");
        assert_eq!(store.get_by_id(staying, None).unwrap().unwrap().position, 1, "old column compacts");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_missing_task_is_not_found(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let patch = TaskPatch {
            title: "Ghost".to_string(),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::Low,
            due_date: None,
            due_time: None,
            labels: String::new(),
        };
        assert!(matches!(store.update(42, None, &patch), Err(TaskError::NotFound(42))));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_subtask_rules(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let parent = store.insert(&new_task("Parent", Status::Todo)).unwrap();

        let mut child = new_task("Child", Status::Todo);
        child.parent_id = Some(parent);
        let child_id = store.insert(&child).unwrap();

        // Nesting below a subtask is rejected.
        let mut grandchild = new_task("Grandchild", Status::Todo);
        grandchild.parent_id = Some(child_id);
        assert!(matches!(store.insert(&grandchild), Err(TaskError::Validation(_))));

        // A dangling parent reference is rejected.
        let mut orphan = new_task("Orphan", Status::Todo);
        orphan.parent_id = Some(999);
        assert!(matches!(store.insert(&orphan), Err(TaskError::Validation(_))));

        let subtasks = store.subtasks(parent, None).unwrap();
        assert_eq!(subtasks.len(), 1);
        assert_eq!(subtasks[0].title, "Child");
        assert_eq!(store.subtask_count(parent).unwrap(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_cascades_to_subtasks(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let parent = store.insert(&new_task("Parent", Status::Todo)).unwrap();
        let sibling = store.insert(&new_task("Sibling", Status::Todo)).unwrap();

        // One child shares the parent's column, one lives elsewhere.
        let mut child_a = new_task("Child A", Status::Todo);
        child_a.parent_id = Some(parent);
        store.insert(&child_a).unwrap();
        let mut child_b = new_task("Child B", Status::Done);
        child_b.parent_id = Some(parent);
        store.insert(&child_b).unwrap();

        let removed = store.delete(parent, None).unwrap();
        assert_eq!(removed, 2);

        let remaining = store.fetch(None).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Sibling");
        assert_eq!(remaining[0].position, 1, "surviving column compacts back to 1..N");
        assert_eq!(store.get_by_id(sibling, None).unwrap().unwrap().position, 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fetch_orders_by_status_group_then_due(_ctx: &mut StoreTestContext) {
        let mut store = Tasks::new().unwrap();

        let mut done_task = new_task("Done", Status::Done);
        done_task.due_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        store.insert(&done_task).unwrap();

        let mut todo_late = new_task("Todo late", Status::Todo);
        todo_late.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        store.insert(&todo_late).unwrap();

        let todo_no_due = new_task("Todo no due", Status::Todo);
        store.insert(&todo_no_due).unwrap();

        let mut todo_timed = new_task("Todo timed", Status::Todo);
        todo_timed.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        todo_timed.due_time = NaiveTime::from_hms_opt(9, 0, 0);
        store.insert(&todo_timed).unwrap();

        let mut blocked_task = new_task("Blocked", Status::Blocked);
        blocked_task.due_date = NaiveDate::from_ymd_opt(2025, 1, 1);
        store.insert(&blocked_task).unwrap();

        let titles: Vec<String> = store.fetch(None).unwrap().iter().map(|t| t.title.clone()).collect();

        // Status groups in list order; within To Do the date-only task at
        // midnight precedes the timed one, and the task without a due date
        // comes last.
        assert_eq!(titles, vec!["Todo late", "Todo timed", "Todo no due", "Blocked", "Done"]);
    }
}
