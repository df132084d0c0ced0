//! Input validation for task fields.
//!
//! Status, priority, date and time validity are enforced by the type system
//! at the CLI boundary; what remains here are the length limits and the
//! label normalization rules. Validation runs before any mutation so the
//! ordering invariants of the store can never be violated by a
//! partially-applied invalid write.

use chrono::NaiveDate;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_LABEL_LEN: usize = 20;

/// Checks title and description against the field rules.
///
/// Returns one message per violated rule; an empty vector means the input
/// is acceptable.
pub fn validate_task_input(title: &str, description: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push("Title is required".to_string());
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(format!("Title must be at most {} characters", MAX_TITLE_LEN));
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(format!("Description must be at most {} characters", MAX_DESCRIPTION_LEN));
    }

    errors
}

/// Whether a due date lies before `today`.
///
/// Past due dates are accepted (the board renders them as overdue); callers
/// surface this as a warning, not an error.
pub fn due_date_in_past(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.map(|d| d < today).unwrap_or(false)
}

/// Normalizes a raw comma-separated label string.
///
/// Tokens are trimmed; empty entries, duplicates and tokens failing the
/// `[A-Za-z0-9_-]{1,20}` rule are dropped. First occurrence order is kept.
pub fn normalize_labels(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() || !is_valid_label(token) {
            continue;
        }
        if !labels.iter().any(|l| l == token) {
            labels.push(token.to_string());
        }
    }
    labels
}

fn is_valid_label(label: &str) -> bool {
    label.chars().count() <= MAX_LABEL_LEN && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
