//! Task store and ordering engine.
//!
//! All task persistence goes through [`Tasks`]. Besides plain CRUD it owns
//! the ordering invariant of the board: within every status partition the
//! `position` values form a dense 1..N sequence with no gaps or duplicates.
//! Every mutation runs inside a single transaction, so the read-then-write
//! sequences used for position maintenance cannot interleave.
//!
//! Visibility follows the permissive sharing rule: a row with a NULL owner
//! is visible to everyone, otherwise the owner must match the caller. A
//! caller without an identity sees all rows.

use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::task::{NewTask, Priority, Status, Task, TaskPatch};
use crate::libs::validation;
use chrono::{Local, NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M";

const TASK_COLUMNS: &str = "id, title, description, status, priority, due_date, due_time, labels, position, parent_id, owner, created_date, last_updated";

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, priority, due_date, due_time, labels, position, parent_id, owner, created_date, last_updated)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const UPDATE_FIELDS: &str = "UPDATE tasks SET title = ?2, description = ?3, priority = ?4, due_date = ?5, due_time = ?6, labels = ?7, last_updated = ?8 WHERE id = ?1";
const UPDATE_STATUS_POSITION: &str = "UPDATE tasks SET status = ?2, position = ?3, last_updated = ?4 WHERE id = ?1";
const CLOSE_POSITION_GAP: &str = "UPDATE tasks SET position = position - 1 WHERE status = ?1 AND position > ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

const SELECT_MAX_POSITION: &str = "SELECT MAX(position) FROM tasks WHERE status = ?1";
const SELECT_MAX_POSITION_OTHERS: &str = "SELECT MAX(position) FROM tasks WHERE status = ?1 AND id != ?2";
const SELECT_PLACEMENT: &str = "SELECT status, position FROM tasks WHERE id = ?1 AND (?2 IS NULL OR owner IS NULL OR owner = ?2)";
const SELECT_PARENT_LINK: &str = "SELECT parent_id FROM tasks WHERE id = ?1";
const SELECT_FIRST_CHILD: &str = "SELECT id, status, position FROM tasks WHERE parent_id = ?1 LIMIT 1";
const COUNT_CHILDREN: &str = "SELECT COUNT(*) FROM tasks WHERE parent_id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> anyhow::Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Creates a task at the end of its status partition and returns its id.
    ///
    /// Validation (field rules and the one-level parent constraint) runs
    /// before any write, so an invalid task never disturbs the ordering.
    pub fn insert(&mut self, new: &NewTask) -> Result<i64, TaskError> {
        let mut errors = validation::validate_task_input(&new.title, &new.description);

        let tx = self.conn.transaction()?;

        if let Some(parent_id) = new.parent_id {
            let parent_link = tx
                .query_row(SELECT_PARENT_LINK, params![parent_id], |row| row.get::<_, Option<i64>>(0))
                .optional()?;
            match parent_link {
                None => errors.push(format!("Parent task #{} does not exist", parent_id)),
                Some(Some(_)) => errors.push("Subtasks cannot be nested below another subtask".to_string()),
                Some(None) => {}
            }
        }

        if !errors.is_empty() {
            return Err(TaskError::Validation(errors));
        }

        let labels = validation::normalize_labels(&new.labels).join(",");
        let max_position: Option<i64> = tx.query_row(SELECT_MAX_POSITION, params![new.status.as_str()], |row| row.get(0))?;
        let now = timestamp();

        tx.execute(
            INSERT_TASK,
            params![
                new.title,
                new.description,
                new.status.as_str(),
                new.priority.as_str(),
                new.due_date,
                new.due_time.map(|t| t.format(TIME_FORMAT).to_string()),
                labels,
                max_position.unwrap_or(0) + 1,
                new.parent_id,
                new.owner,
                now,
                now,
            ],
        )?;

        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(id)
    }

    /// All tasks visible to `owner`, grouped by status category and sorted
    /// by the combined due instant inside each group, tasks without a due
    /// date last.
    pub fn fetch(&mut self, owner: Option<&str>) -> Result<Vec<Task>, TaskError> {
        let mut tasks = {
            let mut stmt = self
                .conn
                .prepare(&format!("SELECT {} FROM tasks WHERE ?1 IS NULL OR owner IS NULL OR owner = ?1", TASK_COLUMNS))?;
            let task_iter = stmt.query_map(params![owner], row_to_task)?;

            let mut tasks = Vec::new();
            for task in task_iter {
                tasks.push(task?);
            }
            tasks
        };

        tasks.sort_by(|a, b| {
            a.status.list_rank().cmp(&b.status.list_rank()).then_with(|| match (a.due_sort_key(), b.due_sort_key()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
        });

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64, owner: Option<&str>) -> Result<Option<Task>, TaskError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM tasks WHERE id = ?1 AND (?2 IS NULL OR owner IS NULL OR owner = ?2)", TASK_COLUMNS),
                params![id, owner],
                row_to_task,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Direct subtasks of a task, in creation order.
    pub fn subtasks(&mut self, parent_id: i64, owner: Option<&str>) -> Result<Vec<Task>, TaskError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM tasks WHERE parent_id = ?1 AND (?2 IS NULL OR owner IS NULL OR owner = ?2)", TASK_COLUMNS))?;
        let task_iter = stmt.query_map(params![parent_id, owner], row_to_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn subtask_count(&mut self, parent_id: i64) -> Result<usize, TaskError> {
        let count: i64 = self.conn.query_row(COUNT_CHILDREN, params![parent_id], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Replaces a task's editable fields.
    ///
    /// A changed status goes through the same gap-close and append logic as
    /// [`Tasks::change_status`]; everything else leaves ordering untouched.
    pub fn update(&mut self, id: i64, owner: Option<&str>, patch: &TaskPatch) -> Result<(), TaskError> {
        let errors = validation::validate_task_input(&patch.title, &patch.description);
        if !errors.is_empty() {
            return Err(TaskError::Validation(errors));
        }
        let labels = validation::normalize_labels(&patch.labels).join(",");

        let tx = self.conn.transaction()?;

        let (old_status, old_position): (String, i64) = tx
            .query_row(SELECT_PLACEMENT, params![id, owner], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        let now = timestamp();

        if patch.status.as_str() != old_status {
            tx.execute(CLOSE_POSITION_GAP, params![old_status, old_position])?;
            let max_position: Option<i64> = tx.query_row(SELECT_MAX_POSITION_OTHERS, params![patch.status.as_str(), id], |row| row.get(0))?;
            tx.execute(UPDATE_STATUS_POSITION, params![id, patch.status.as_str(), max_position.unwrap_or(0) + 1, now])?;
        }

        tx.execute(
            UPDATE_FIELDS,
            params![
                id,
                patch.title,
                patch.description,
                patch.priority.as_str(),
                patch.due_date,
                patch.due_time.map(|t| t.format(TIME_FORMAT).to_string()),
                labels,
                now,
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Moves a task to another status column, appending it at the end.
    ///
    /// The gap in the source partition closes before the target end
    /// position is computed (over the other rows), so a move within the
    /// same column re-appends the task while keeping positions dense.
    pub fn change_status(&mut self, id: i64, owner: Option<&str>, new_status: Status) -> Result<(), TaskError> {
        let tx = self.conn.transaction()?;

        let (old_status, old_position): (String, i64) = tx
            .query_row(SELECT_PLACEMENT, params![id, owner], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        tx.execute(CLOSE_POSITION_GAP, params![old_status, old_position])?;

        let max_position: Option<i64> = tx.query_row(SELECT_MAX_POSITION_OTHERS, params![new_status.as_str(), id], |row| row.get(0))?;
        tx.execute(UPDATE_STATUS_POSITION, params![id, new_status.as_str(), max_position.unwrap_or(0) + 1, timestamp()])?;

        tx.commit()?;
        Ok(())
    }

    /// Deletes a task and its subtasks, compacting every affected
    /// partition. Returns the number of subtasks removed with it.
    pub fn delete(&mut self, id: i64, owner: Option<&str>) -> Result<usize, TaskError> {
        let tx = self.conn.transaction()?;

        tx.query_row(SELECT_PLACEMENT, params![id, owner], |row| row.get::<_, i64>(1))
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        // Subtasks go first, one at a time: removing a child shifts the
        // positions of its siblings, so each placement is re-read.
        let mut removed = 0usize;
        loop {
            let child: Option<(i64, String, i64)> = tx
                .query_row(SELECT_FIRST_CHILD, params![id], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
                .optional()?;
            let Some((child_id, child_status, child_position)) = child else {
                break;
            };
            tx.execute(CLOSE_POSITION_GAP, params![child_status, child_position])?;
            tx.execute(DELETE_TASK, params![child_id])?;
            removed += 1;
        }

        // A child in the same partition may have shifted this task down;
        // re-read its placement before compacting.
        let (status, position): (String, i64) = tx
            .query_row(SELECT_PLACEMENT, params![id, owner], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        tx.execute(CLOSE_POSITION_GAP, params![status, position])?;
        tx.execute(DELETE_TASK, params![id])?;

        tx.commit()?;
        Ok(removed)
    }
}

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    let status_str: String = row.get(3)?;
    let status = Status::parse(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, format!("unknown status '{}'", status_str).into())
    })?;

    let priority_str: String = row.get(4)?;
    let priority = Priority::parse(&priority_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, format!("unknown priority '{}'", priority_str).into())
    })?;

    let due_time: Option<String> = row.get(6)?;
    let labels: String = row.get(7)?;
    let created_date: Option<String> = row.get(11)?;
    let last_updated: Option<String> = row.get(12)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status,
        priority,
        due_date: row.get(5)?,
        due_time: due_time.and_then(|t| NaiveTime::parse_from_str(&t, TIME_FORMAT).ok()),
        labels: labels.split(',').filter(|l| !l.is_empty()).map(str::to_string).collect(),
        position: row.get(8)?,
        parent_id: row.get(9)?,
        owner: row.get(10)?,
        created_date: created_date.and_then(|t| NaiveDateTime::parse_from_str(&t, TIMESTAMP_FORMAT).ok()),
        last_updated: last_updated.and_then(|t| NaiveDateTime::parse_from_str(&t, TIMESTAMP_FORMAT).ok()),
    })
}
