use super::row::TableRow;
use std::fmt;
use std::sync::Arc;

/// Custom cell renderer. Returns structured content, never markup.
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> CellContent + Send + Sync>;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Right,
}

/// Colour of a badge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    /// Badge variant name understood by the UI badge component.
    pub fn variant(&self) -> &'static str {
        match self {
            BadgeTone::Primary => "primary",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Error => "error",
            BadgeTone::Neutral => "neutral",
        }
    }
}

/// Content of one rendered cell. The view layer is responsible for composing
/// and escaping it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Badge { label: String, tone: BadgeTone },
}

impl CellContent {
    pub fn text(value: impl Into<String>) -> Self {
        CellContent::Text(value.into())
    }

    pub fn badge(label: impl Into<String>, tone: BadgeTone) -> Self {
        CellContent::Badge {
            label: label.into(),
            tone,
        }
    }
}

/// Describes how one field of a row is labelled, rendered and sorted.
pub struct ColumnDescriptor<R: TableRow> {
    pub label: String,
    pub field: R::Field,
    pub renderer: Option<CellRenderer<R>>,
    pub sortable: bool,
    pub align: CellAlign,
}

impl<R: TableRow> ColumnDescriptor<R> {
    /// Plain, non-sortable, left-aligned column.
    pub fn new(label: impl Into<String>, field: R::Field) -> Self {
        Self {
            label: label.into(),
            field,
            renderer: None,
            sortable: false,
            align: CellAlign::Left,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = CellAlign::Right;
        self
    }

    pub fn with_renderer(mut self, renderer: impl Fn(&R) -> CellContent + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Custom renderer output if present, otherwise the stringified field value.
    pub fn render_cell(&self, row: &R) -> CellContent {
        match &self.renderer {
            Some(render) => render(row),
            None => CellContent::Text(row.field_value(self.field).to_string()),
        }
    }
}

impl<R: TableRow> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            field: self.field,
            renderer: self.renderer.clone(),
            sortable: self.sortable,
            align: self.align,
        }
    }
}

impl<R: TableRow> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("label", &self.label)
            .field("field", &self.field)
            .field("custom_renderer", &self.renderer.is_some())
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .finish()
    }
}
