mod rect;

pub use rect::Rect;

/// Where the last render placed each part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetLayout {
    /// Whole widget: text block, gap and icon row.
    pub container: Rect,
    pub text: Rect,
    /// Absent while the icon is hidden.
    pub icon: Option<Rect>,
}
