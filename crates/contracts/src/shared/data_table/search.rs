use super::row::TableRow;

/// Case-insensitive substring match of `query` against every field of the row.
///
/// An empty query matches everything. The query is used as-is (no trimming).
pub fn row_matches<R: TableRow>(row: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    matches_lowercase(row, &needle)
}

fn matches_lowercase<R: TableRow>(row: &R, needle: &str) -> bool {
    R::FIELDS
        .iter()
        .any(|field| row.field_value(*field).contains_lowercase(needle))
}

/// Rows retained by the search query, in their original order.
pub fn filter_rows<'a, R: TableRow>(rows: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return rows.iter().collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| matches_lowercase(*row, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::fixtures::{sample, SampleRow};
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_keeps_everything() {
        let rows = sample();
        let kept = filter_rows(&rows, "");
        assert_eq!(kept.len(), rows.len());
    }

    #[test]
    fn test_query_emma_keeps_only_emma() {
        let rows = vec![
            SampleRow::new("ORD-9385", "Emma Thompson", 1299.99, 2),
            SampleRow::new("ORD-9384", "James Wilson", 849.95, 3),
        ];
        let kept = filter_rows(&rows, "emma");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].customer, "Emma Thompson");
    }

    #[test]
    fn test_search_covers_fields_outside_columns() {
        // `email` is never shown as a column but is still searched.
        let rows = sample();
        let kept = filter_rows(&rows, "SOPHIA.CHEN@");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "ORD-9383");
    }

    #[test]
    fn test_search_matches_numbers_by_string_form() {
        let rows = sample();
        let kept = filter_rows(&rows, "849.9");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "ORD-9384");
    }

    #[test]
    fn test_empty_field_never_matches() {
        let mut row = SampleRow::new("ORD-1", "Nobody", 1.0, 1);
        row.email = None;
        assert!(row_matches(&row, "nobody"));
        assert!(!row_matches(&row, "@"));
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let rows = sample();
        assert_eq!(filter_rows(&rows, " ").len(), rows.len());
        assert!(filter_rows(&rows, "  ").is_empty());
    }

    fn arb_rows() -> impl Strategy<Value = Vec<SampleRow>> {
        prop::collection::vec(("[A-Za-z ]{0,12}", 0.0f64..5000.0, 0u32..10), 0..40).prop_map(
            |items| {
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, amount, qty))| {
                        SampleRow::new(&format!("ORD-{}", i + 1), &name, amount, qty)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_empty_query_is_identity(rows in arb_rows()) {
            let kept: Vec<&str> = filter_rows(&rows, "").iter().map(|r| r.id.as_str()).collect();
            let all: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
            prop_assert_eq!(kept, all);
        }

        #[test]
        fn prop_filter_is_subset_and_every_row_matches(rows in arb_rows(), query in "[a-zA-Z]{1,3}") {
            let kept = filter_rows(&rows, &query);
            let needle = query.to_lowercase();
            let mut cursor = 0;
            for row in kept {
                // Retained rows are a subsequence of the input.
                let pos = rows[cursor..].iter().position(|r| r.id == row.id);
                prop_assert!(pos.is_some());
                cursor += pos.unwrap_or(0) + 1;

                let any_field = SampleRow::FIELDS.iter().any(|f| {
                    row.field_value(*f)
                        .search_text()
                        .map(|t| t.contains(&needle))
                        .unwrap_or(false)
                });
                prop_assert!(any_field);
            }
        }
    }
}
