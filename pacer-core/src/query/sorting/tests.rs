//! Tests for row sorting

#[cfg(test)]
mod tests {
    use crate::query::sorting::{SortSpec, sort_rows};
    use crate::query::types::Row;
    use serde_json::{Value, json};

    fn create_test_row(name: &str, finish_time: Value, category: &str) -> Row {
        json!({"name": name, "finishTime": finish_time, "category": category})
            .as_object()
            .cloned()
            .unwrap()
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r["name"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_sort_ascending_by_number() {
        let mut rows = vec![
            create_test_row("Charlie", json!(240), "Full Marathon"),
            create_test_row("Alice", json!(95), "Half Marathon"),
            create_test_row("Bob", json!(130.5), "Half Marathon"),
        ];

        sort_rows(&mut rows, &[SortSpec::ascending("finishTime")]);

        assert_eq!(names(&rows), ["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_sort_descending() {
        let mut rows = vec![
            create_test_row("Alice", json!(95), "Half Marathon"),
            create_test_row("Charlie", json!(240), "Full Marathon"),
            create_test_row("Bob", json!(130), "Half Marathon"),
        ];

        sort_rows(&mut rows, &[SortSpec::descending("finishTime")]);

        assert_eq!(names(&rows), ["Charlie", "Bob", "Alice"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut rows = vec![
            create_test_row("First", json!(100), "10K"),
            create_test_row("Fast", json!(50), "10K"),
            create_test_row("Second", json!(100), "10K"),
            create_test_row("Third", json!(100), "10K"),
        ];

        sort_rows(&mut rows, &[SortSpec::descending("finishTime")]);

        assert_eq!(names(&rows), ["First", "Second", "Third", "Fast"]);
    }

    #[test]
    fn test_compound_sort() {
        let mut rows = vec![
            create_test_row("D", json!(200), "Half Marathon"),
            create_test_row("B", json!(300), "Full Marathon"),
            create_test_row("C", json!(100), "Half Marathon"),
            create_test_row("A", json!(250), "Full Marathon"),
        ];

        sort_rows(
            &mut rows,
            &[SortSpec::ascending("category"), SortSpec::ascending("finishTime")],
        );

        assert_eq!(names(&rows), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_missing_values_sort_last_in_both_directions() {
        let rows = vec![
            create_test_row("NoTime", Value::Null, "10K"),
            create_test_row("Slow", json!(70), "10K"),
            create_test_row("Quick", json!(40), "10K"),
        ];

        let mut ascending = rows.clone();
        sort_rows(&mut ascending, &[SortSpec::ascending("finishTime")]);
        assert_eq!(names(&ascending), ["Quick", "Slow", "NoTime"]);

        let mut descending = rows;
        sort_rows(&mut descending, &[SortSpec::descending("finishTime")]);
        assert_eq!(names(&descending), ["Slow", "Quick", "NoTime"]);
    }

    #[test]
    fn test_empty_spec_keeps_order() {
        let mut rows = vec![
            create_test_row("Z", json!(1), "10K"),
            create_test_row("A", json!(0), "10K"),
        ];
        sort_rows(&mut rows, &[]);
        assert_eq!(names(&rows), ["Z", "A"]);
    }
}
