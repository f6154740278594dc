use super::value::FieldValue;
use std::fmt::Debug;

/// A record that can be shown by the data table.
///
/// Fields are addressed through a closed key type, so a column or sort key that
/// does not exist on the row is rejected at compile time.
pub trait TableRow {
    /// Field key of this row type (usually a fieldless enum).
    type Field: Copy + Eq + Debug + Send + Sync + 'static;

    /// Every field of the row, in declaration order. Search runs over all of them,
    /// not only over the displayed columns.
    const FIELDS: &'static [Self::Field];

    /// Unique identifier of the row within its collection.
    fn row_id(&self) -> &str;

    fn field_value(&self, field: Self::Field) -> FieldValue;
}
