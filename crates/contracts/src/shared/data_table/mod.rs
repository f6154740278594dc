//! Client-side tabular data shaping: free-text search over all row fields,
//! tri-state single-column sort, fixed-size pagination and the render model
//! consumed by the `DataTable` component.
//!
//! Pipeline on every render:
//!
//! ```text
//! rows --search(query)--> filtered --sort(state.sort)--> sorted --page(state.page)--> DataTableModel
//! ```
//!
//! Nothing here performs I/O; every function is total over its inputs.

pub mod column;
pub mod model;
pub mod pagination;
pub mod row;
pub mod search;
pub mod sort;
pub mod state;
pub mod value;

#[cfg(test)]
pub(crate) mod fixtures;

pub use column::{BadgeTone, CellAlign, CellContent, CellRenderer, ColumnDescriptor};
pub use model::{
    build_model, shape_rows, DataTableModel, HeaderCell, PaginationModel, RenderedRow, TableBody,
    EMPTY_HINT, EMPTY_TITLE,
};
pub use pagination::{page_buttons, page_count, PageButton, PAGE_SIZE};
pub use row::TableRow;
pub use search::{filter_rows, row_matches};
pub use sort::{sort_rows, SortDirection, SortState};
pub use state::DataTableState;
pub use value::FieldValue;
