use crate::layout::WidgetLayout;
use crate::widget::Target;

/// Find the widget part at the given coordinates.
/// The icon wins over the container; anything else in the container counts
/// as a click on the text.
pub fn hit_test(layout: &WidgetLayout, x: u16, y: u16) -> Option<Target> {
    if layout.icon.is_some_and(|icon| icon.contains(x, y)) {
        return Some(Target::Icon);
    }

    if layout.container.contains(x, y) {
        Some(Target::Text)
    } else {
        None
    }
}
