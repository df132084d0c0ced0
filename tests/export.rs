#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use kanri::libs::export::{ExportFormat, Exporter};
    use kanri::libs::task::{Priority, Status, Task};

    fn sample_task() -> Task {
        Task {
            id: Some(7),
            title: "Ship release".to_string(),
            description: "Cut the 1.0 tag".to_string(),
            status: Status::InProgress,
            priority: Priority::Critical,
            due_date: NaiveDate::from_ymd_opt(2025, 4, 19),
            due_time: NaiveTime::from_hms_opt(14, 30, 0),
            labels: vec!["release".to_string(), "backend".to_string()],
            position: 2,
            parent_id: None,
            owner: Some("alice".to_string()),
            created_date: None,
            last_updated: None,
        }
    }

    #[test]
    fn test_csv_export_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");

        let written = Exporter::new(ExportFormat::Csv, Some(path.clone())).export_tasks(&[sample_task()]).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,title,description,status,priority,due_date,due_time,labels"));

        let row = lines.next().unwrap();
        assert!(row.contains("Ship release"));
        assert!(row.contains("In Progress"));
        assert!(row.contains("2025-04-19"));
        assert!(row.contains("14:30"));
        assert!(row.contains("release,backend"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        Exporter::new(ExportFormat::Json, Some(path.clone())).export_tasks(&[sample_task()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(rows[0]["id"], 7);
        assert_eq!(rows[0]["title"], "Ship release");
        assert_eq!(rows[0]["status"], "In Progress");
        assert_eq!(rows[0]["priority"], "Critical");
        assert_eq!(rows[0]["due_time"], "14:30");
        assert_eq!(rows[0]["owner"], "alice");
    }
}
