#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use kanri::libs::task::{NewTask, Priority, Status, Task};

    #[test]
    fn test_status_names_round_trip() {
        for status in Status::LIST_ORDER {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("Doing"), None);
        assert_eq!(Status::Todo.to_string(), "To Do");
        assert_eq!(Status::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_priority_names_round_trip() {
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::parse("Urgent"), None);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(Status::Todo.color(), "#3b82f6");
        assert_eq!(Status::InProgress.color(), "#f59e0b");
        assert_eq!(Status::Done.color(), "#10b981");
        assert_eq!(Status::Blocked.color(), "#ef4444");
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(Priority::Critical.color(), "#ef4444");
        assert_eq!(Priority::High.color(), "#f59e0b");
        assert_eq!(Priority::Medium.color(), "#10b981");
        assert_eq!(Priority::Low.color(), "#6b7280");
    }

    #[test]
    fn test_list_and_board_orders_differ() {
        assert_eq!(Status::LIST_ORDER, [Status::Todo, Status::InProgress, Status::Blocked, Status::Done]);
        assert_eq!(Status::BOARD_ORDER, [Status::Blocked, Status::Todo, Status::InProgress, Status::Done]);
        assert!(Status::Todo.list_rank() < Status::Done.list_rank());
    }

    #[test]
    fn test_due_sort_key_combines_date_and_time() {
        let mut task = Task {
            id: Some(1),
            title: "t".to_string(),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::Low,
            due_date: NaiveDate::from_ymd_opt(2025, 4, 19),
            due_time: NaiveTime::from_hms_opt(14, 30, 0),
            labels: Vec::new(),
            position: 1,
            parent_id: None,
            owner: None,
            created_date: None,
            last_updated: None,
        };

        let timed = task.due_sort_key().unwrap();
        assert_eq!(timed.to_string(), "2025-04-19 14:30:00");

        // A bare date sorts at midnight, ahead of any timed task that day.
        task.due_time = None;
        let dated = task.due_sort_key().unwrap();
        assert!(dated < timed);

        task.due_date = None;
        assert!(task.due_sort_key().is_none());
    }

    #[test]
    fn test_new_task_defaults() {
        let task = NewTask::new("Fresh", Priority::Medium);
        assert_eq!(task.status, Status::Todo);
        assert!(task.due_date.is_none());
        assert!(task.parent_id.is_none());
        assert!(task.owner.is_none());
    }
}
