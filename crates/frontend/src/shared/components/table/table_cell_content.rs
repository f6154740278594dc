//! Table cell for structured cell content
//!
//! ```text
//! <TableCellContent content=CellContent::text("ORD-9385") />
//! <TableCellContent content=CellContent::badge("Completed", BadgeTone::Success) align=CellAlign::Right />
//! ```

use crate::shared::components::ui::Badge;
use contracts::shared::data_table::{CellAlign, CellContent};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellContent(
    content: CellContent,

    #[prop(optional)]
    align: CellAlign,
) -> impl IntoView {
    let class = match align {
        CellAlign::Right => "text-right",
        CellAlign::Left => "",
    };

    let inner = match content {
        CellContent::Text(text) => view! {
            <TableCellLayout truncate=true>{text}</TableCellLayout>
        }
        .into_any(),
        CellContent::Badge { label, tone } => view! {
            <Badge tone=tone>{label}</Badge>
        }
        .into_any(),
    };

    view! { <TableCell class=class>{inner}</TableCell> }
}
