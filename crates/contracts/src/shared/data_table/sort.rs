use super::row::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort of the table. A direction exists only together with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState<F> {
    Unsorted,
    Sorted { field: F, direction: SortDirection },
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        SortState::Unsorted
    }
}

impl<F: Copy + Eq> SortState<F> {
    /// Next state after a click on the header of `field`.
    ///
    /// Same field: ascending -> descending -> unsorted. Another field: ascending.
    pub fn toggled(self, field: F) -> Self {
        match self {
            SortState::Sorted {
                field: active,
                direction,
            } if active == field => match direction {
                SortDirection::Ascending => SortState::Sorted {
                    field,
                    direction: SortDirection::Descending,
                },
                SortDirection::Descending => SortState::Unsorted,
            },
            _ => SortState::Sorted {
                field,
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn active_field(&self) -> Option<F> {
        match self {
            SortState::Sorted { field, .. } => Some(*field),
            SortState::Unsorted => None,
        }
    }

    /// Direction shown on the header of `field`, if it is the active one.
    pub fn direction_for(&self, field: F) -> Option<SortDirection> {
        match self {
            SortState::Sorted {
                field: active,
                direction,
            } if *active == field => Some(*direction),
            _ => None,
        }
    }
}

/// Stable in-place sort; rows with equal keys keep their relative order.
pub fn sort_rows<R: TableRow>(rows: &mut [&R], sort: &SortState<R::Field>) {
    let SortState::Sorted { field, direction } = *sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let cmp = a.field_value(field).compare(&b.field_value(field));
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::fixtures::{sample, SampleField, SampleRow};
    use proptest::prelude::*;

    fn ids(rows: &[&SampleRow]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_toggle_cycle_on_same_field() {
        let s = SortState::Unsorted.toggled(SampleField::Amount);
        assert_eq!(
            s,
            SortState::Sorted {
                field: SampleField::Amount,
                direction: SortDirection::Ascending
            }
        );
        let s = s.toggled(SampleField::Amount);
        assert_eq!(s.direction_for(SampleField::Amount), Some(SortDirection::Descending));
        let s = s.toggled(SampleField::Amount);
        assert_eq!(s, SortState::Unsorted);
        assert_eq!(s.active_field(), None);
    }

    #[test]
    fn test_other_field_resets_to_ascending() {
        let s = SortState::Unsorted
            .toggled(SampleField::Amount)
            .toggled(SampleField::Amount)
            .toggled(SampleField::Customer);
        assert_eq!(
            s,
            SortState::Sorted {
                field: SampleField::Customer,
                direction: SortDirection::Ascending
            }
        );
        assert_eq!(s.direction_for(SampleField::Amount), None);
    }

    #[test]
    fn test_sort_by_amount_both_directions() {
        let data = sample();
        let mut rows: Vec<&SampleRow> = data.iter().collect();

        let asc = SortState::Unsorted.toggled(SampleField::Amount);
        sort_rows(&mut rows, &asc);
        assert_eq!(
            ids(&rows),
            ["ORD-9382", "ORD-9380", "ORD-9384", "ORD-9385", "ORD-9383", "ORD-9381"]
        );

        let desc = asc.toggled(SampleField::Amount);
        sort_rows(&mut rows, &desc);
        assert_eq!(
            ids(&rows),
            ["ORD-9381", "ORD-9383", "ORD-9385", "ORD-9384", "ORD-9380", "ORD-9382"]
        );
    }

    #[test]
    fn test_unsorted_leaves_order_untouched() {
        let data = sample();
        let mut rows: Vec<&SampleRow> = data.iter().collect();
        sort_rows(&mut rows, &SortState::Unsorted);
        assert_eq!(ids(&rows), data.iter().map(|r| r.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_equal_keys_keep_input_order_when_descending() {
        let data = sample();
        let mut rows: Vec<&SampleRow> = data.iter().collect();
        let desc = SortState::Sorted {
            field: SampleField::Items,
            direction: SortDirection::Descending,
        };
        sort_rows(&mut rows, &desc);
        // items: 4, 3, then the two 2s and the two 1s in input order.
        assert_eq!(
            ids(&rows),
            ["ORD-9381", "ORD-9384", "ORD-9385", "ORD-9380", "ORD-9383", "ORD-9382"]
        );
    }

    proptest! {
        #[test]
        fn prop_sort_is_stable(keys in prop::collection::vec(0u32..4, 0..50), descending in any::<bool>()) {
            let data: Vec<SampleRow> = keys
                .iter()
                .enumerate()
                .map(|(i, k)| SampleRow::new(&format!("ORD-{}", i), "Same Name", 1.0, *k))
                .collect();
            let mut rows: Vec<&SampleRow> = data.iter().collect();
            let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
            sort_rows(&mut rows, &SortState::Sorted { field: SampleField::Items, direction });

            let position = |id: &str| data.iter().position(|r| r.id == id).unwrap_or(usize::MAX);
            for pair in rows.windows(2) {
                if pair[0].items == pair[1].items {
                    prop_assert!(position(&pair[0].id) < position(&pair[1].id));
                }
            }
        }

        #[test]
        fn prop_three_clicks_restore_unsorted(field_idx in 0usize..5) {
            let field = SampleRow::FIELDS[field_idx];
            let state = SortState::Unsorted.toggled(field).toggled(field).toggled(field);
            prop_assert_eq!(state, SortState::Unsorted);
        }
    }
}
