use std::time::Instant;

use expandtext::render::visible_rows;
use expandtext::{
    hit_test, render_widget, Buffer, CellMeasure, Color, ExpandConfig, ExpandTextView, Icon,
    Rect, Rgb, Target, WidgetLayout,
};

const TEXT: &str = "alpha beta gamma delta epsilon zeta eta theta";

fn widget(text: &str, max_lines: usize) -> ExpandTextView {
    let config = ExpandConfig::new(text)
        .max_lines(max_lines)
        .text_color(Color::rgb(255, 0, 0));
    let mut widget = ExpandTextView::new(config).unwrap();
    widget.finalize_layout(&CellMeasure, 20.0);
    widget
}

fn render(widget: &ExpandTextView) -> (Buffer, WidgetLayout) {
    let mut buf = Buffer::new(20, 10);
    let layout = render_widget(widget, &CellMeasure, Rect::from_size(20, 10), &mut buf);
    (buf, layout)
}

/// Characters of row `y`, skipping wide-char continuation cells.
fn row(buf: &Buffer, y: u16) -> String {
    let text: String = (0..buf.width())
        .filter_map(|x| buf.get(x, y))
        .filter(|cell| !cell.wide_continuation)
        .map(|cell| cell.char)
        .collect();
    text.trim_end().to_string()
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn test_collapsed_shows_budget_with_ellipsis_and_icon() {
    let (buf, layout) = render(&widget(TEXT, 2));

    assert_eq!(row(&buf, 0), "alpha beta gamma");
    assert_eq!(row(&buf, 1), "delta epsilon zeta…");
    assert_eq!(row(&buf, 2), "");
    assert_eq!(buf.get(9, 3).unwrap().char, '▼');

    assert_eq!(layout.text, Rect::new(0, 0, 20, 2));
    assert_eq!(layout.icon, Some(Rect::new(9, 3, 1, 1)));
    assert_eq!(layout.container, Rect::new(0, 0, 20, 4));
}

#[test]
fn test_text_uses_configured_color() {
    let (buf, _) = render(&widget(TEXT, 2));
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(255, 0, 0));
}

#[test]
fn test_expanded_shows_all_lines_and_flipped_icon() {
    let mut widget = widget(TEXT, 2);
    widget.toggle(Instant::now());
    widget.tick(1.0);

    let (buf, layout) = render(&widget);

    assert_eq!(row(&buf, 1), "delta epsilon zeta");
    assert_eq!(row(&buf, 2), "eta theta");
    assert_eq!(buf.get(9, 4).unwrap().char, '▲');
    assert_eq!(layout.text.height, 3);
}

#[test]
fn test_shrinking_box_cuts_lines_before_clip_returns() {
    let mut widget = widget(TEXT, 2);
    widget.toggle(Instant::now());
    widget.tick(1.0);
    widget.toggle(Instant::now());
    widget.tick(0.5);

    let (buf, layout) = render(&widget);

    // Halfway: 2.5 rows tall, still unclipped, icon turned a quarter
    assert_eq!(layout.text.height, 3);
    assert_eq!(row(&buf, 1), "delta epsilon zeta");
    assert_eq!(row(&buf, 2), "eta theta");
    assert_eq!(buf.get(9, 4).unwrap().char, '◀');
}

#[test]
fn test_fitting_content_has_no_icon() {
    let (buf, layout) = render(&widget("short text", 3));

    assert_eq!(row(&buf, 0), "short text");
    assert_eq!(layout.icon, None);
    assert_eq!(layout.container, Rect::new(0, 0, 20, 1));
    assert!((1..10).all(|y| row(&buf, y).is_empty()));
}

#[test]
fn test_custom_glyph_icon() {
    let config = ExpandConfig::new(TEXT).max_lines(1).icon(Icon::Glyph('v'));
    let mut widget = ExpandTextView::new(config).unwrap();
    widget.finalize_layout(&CellMeasure, 20.0);

    let (buf, _) = render(&widget);
    assert_eq!(buf.get(9, 2).unwrap().char, 'v');
}

#[test]
fn test_icon_dropped_when_area_too_short() {
    let widget = widget(TEXT, 2);
    let mut buf = Buffer::new(20, 3);
    let layout = render_widget(&widget, &CellMeasure, Rect::from_size(20, 3), &mut buf);

    assert_eq!(layout.icon, None);
    assert_eq!(layout.text.height, 2);
}

#[test]
fn test_area_at_bottom_edge_of_coordinate_space() {
    let mut widget = widget(TEXT, 2);
    widget.toggle(Instant::now());
    widget.tick(1.0);

    let mut buf = Buffer::new(20, 10);
    let area = Rect::new(u16::MAX - 20, u16::MAX - 1, 20, 10);
    let layout = render_widget(&widget, &CellMeasure, area, &mut buf);

    assert_eq!(layout.text.height, 3);
    assert_eq!(layout.icon, None);
    assert!((0..10).all(|y| row(&buf, y).is_empty()));
}

#[test]
fn test_visible_rows() {
    assert_eq!(visible_rows(2.0, 1.0), 2);
    assert_eq!(visible_rows(2.5, 1.0), 3);
    assert_eq!(visible_rows(40.0, 20.0), 2);
    assert_eq!(visible_rows(0.0, 20.0), 0);
    assert_eq!(visible_rows(10.0, 0.0), 0);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_targets() {
    let (_, layout) = render(&widget(TEXT, 2));

    assert_eq!(hit_test(&layout, 9, 3), Some(Target::Icon));
    assert_eq!(hit_test(&layout, 0, 0), Some(Target::Text));
    assert_eq!(hit_test(&layout, 0, 3), Some(Target::Text));
    assert_eq!(hit_test(&layout, 0, 5), None);
}

#[test]
fn test_click_through_hit_test_toggles() {
    let mut widget = widget(TEXT, 2);
    let (_, layout) = render(&widget);

    let target = hit_test(&layout, 9, 3).unwrap();
    assert!(widget.click(target, Instant::now()));
    assert!(widget.is_animating());
}
