//! Task snapshot export.
//!
//! Writes the visible task list to CSV or JSON, either to an explicit path
//! or to a timestamped file in the current directory.

use crate::libs::task::Task;
use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One flattened task row; keeps the CSV header stable and the JSON shape
/// independent from the internal struct.
#[derive(Debug, Serialize)]
struct ExportTask {
    id: i64,
    title: String,
    description: String,
    status: String,
    priority: String,
    due_date: String,
    due_time: String,
    labels: String,
    position: i64,
    parent_id: Option<i64>,
    owner: String,
    created_date: String,
    last_updated: String,
}

impl ExportTask {
    fn from_task(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            due_time: task.due_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            labels: task.labels_csv(),
            position: task.position,
            parent_id: task.parent_id,
            owner: task.owner.clone().unwrap_or_default(),
            created_date: task.created_date.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
            last_updated: task.last_updated.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Exporter { format, output_path }
    }

    /// Writes the snapshot and returns the path of the created file.
    pub fn export_tasks(&self, tasks: &[Task]) -> Result<PathBuf> {
        let path = self.resolve_path();
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from_task).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for row in &rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let file = File::create(&path)?;
                serde_json::to_writer_pretty(file, &rows)?;
            }
        }

        Ok(path)
    }

    fn resolve_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => PathBuf::from(format!("kanri_tasks_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), self.format.extension())),
        }
    }
}
