#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kanri::libs::validation::{due_date_in_past, normalize_labels, validate_task_input, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_task_input("Fix the build", "It broke on main").is_empty());
        assert!(validate_task_input(&"x".repeat(MAX_TITLE_LEN), &"y".repeat(MAX_DESCRIPTION_LEN)).is_empty());
    }

    #[test]
    fn test_title_is_required() {
        let errors = validate_task_input("", "");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Title is required"));
    }

    #[test]
    fn test_length_limits() {
        let errors = validate_task_input(&"x".repeat(MAX_TITLE_LEN + 1), "");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at most 100"));

        let errors = validate_task_input("ok", &"y".repeat(MAX_DESCRIPTION_LEN + 1));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at most 2000"));

        // Violations accumulate rather than short-circuit.
        let errors = validate_task_input(&"x".repeat(MAX_TITLE_LEN + 1), &"y".repeat(MAX_DESCRIPTION_LEN + 1));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_label_normalization_drops_invalid_and_duplicate_tokens() {
        // "Bug!!" fails the charset rule entirely; the duplicate and the
        // empty entry disappear.
        assert_eq!(normalize_labels("frontend, Bug!!, ,frontend"), vec!["frontend".to_string()]);
    }

    #[test]
    fn test_label_normalization_keeps_first_occurrence_order() {
        assert_eq!(
            normalize_labels("backend, ui, backend, data_eng, infra-2"),
            vec!["backend".to_string(), "ui".to_string(), "data_eng".to_string(), "infra-2".to_string()]
        );
    }

    #[test]
    fn test_labels_over_twenty_chars_are_dropped() {
        assert_eq!(normalize_labels("abcdefghijklmnopqrst"), vec!["abcdefghijklmnopqrst".to_string()]);
        assert!(normalize_labels("abcdefghijklmnopqrstu").is_empty());
    }

    #[test]
    fn test_labels_reject_whitespace_and_symbols_inside_tokens() {
        assert!(normalize_labels("two words").is_empty());
        assert!(normalize_labels("emoji🔥").is_empty());
        assert_eq!(normalize_labels("ok-label, bad*label"), vec!["ok-label".to_string()]);
    }

    #[test]
    fn test_empty_label_input_yields_no_labels() {
        assert!(normalize_labels("").is_empty());
        assert!(normalize_labels(" , ,, ").is_empty());
    }

    #[test]
    fn test_due_date_in_past() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();

        assert!(due_date_in_past(NaiveDate::from_ymd_opt(2024, 1, 11), today));
        assert!(!due_date_in_past(NaiveDate::from_ymd_opt(2024, 1, 12), today));
        assert!(!due_date_in_past(NaiveDate::from_ymd_opt(2024, 1, 13), today));
        assert!(!due_date_in_past(None, today));
    }
}
