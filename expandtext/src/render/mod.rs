use crate::buffer::{Buffer, Cell};
use crate::layout::{Rect, WidgetLayout};
use crate::measure::TextMeasure;
use crate::text::{align_offset, char_width};
use crate::types::{Rgb, TextAlign};
use crate::widget::ExpandTextView;

/// Blank rows between the text block and the icon.
pub const ICON_GAP: u16 = 1;

/// Paint `widget` into `area` of `buf`.
///
/// The text block is as tall as the view's current height allows, so a
/// shrinking box cuts lines off before the line clip is restored. The icon
/// sits centered below the text, turned to the view's rotation.
pub fn render_widget<M>(
    widget: &ExpandTextView,
    measure: &M,
    area: Rect,
    buf: &mut Buffer,
) -> WidgetLayout
where
    M: TextMeasure + ?Sized,
{
    let config = widget.config();
    let view = widget.view();

    let line_height = measure.line_height(&config.paint());
    let rows = visible_rows(view.height, line_height).min(area.height);
    let text = Rect::new(area.x, area.y, area.width, rows);

    let fg = config.text_color.to_rgb();
    for (row, line) in widget
        .lines(measure, f32::from(area.width))
        .iter()
        .take(usize::from(rows))
        .enumerate()
    {
        let y = text.y.saturating_add(row as u16);
        draw_line(buf, line, text.x, y, text.right(), fg);
    }

    let mut container = text;
    let mut icon = None;

    if view.icon_visible {
        let y = text.bottom().saturating_add(ICON_GAP);
        if y < area.bottom() {
            let glyph = config.icon.rotated(view.rotation);
            let width = char_width(glyph).max(1);
            let offset = align_offset(width, usize::from(area.width), TextAlign::Center) as u16;
            let x = area.x.saturating_add(offset);
            draw_line(buf, &glyph.to_string(), x, y, area.right(), fg);

            let rect = Rect::new(x, y, width as u16, 1);
            container = container.union(&rect);
            icon = Some(rect);
        }
    }

    WidgetLayout {
        container,
        text,
        icon,
    }
}

/// Rows needed to show `height` worth of lines.
pub fn visible_rows(height: f32, line_height: f32) -> u16 {
    if line_height <= 0.0 || height <= 0.0 || !height.is_finite() {
        return 0;
    }
    // Exact multiples must not round up on float noise
    let rows = (height / line_height - 1e-4).ceil();
    rows.clamp(0.0, f32::from(u16::MAX)) as u16
}

fn draw_line(buf: &mut Buffer, line: &str, x: u16, y: u16, right: u16, fg: Rgb) {
    let mut x = x;

    for ch in line.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > right {
            break;
        }

        // Preserve existing background
        let bg = buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0));
        buf.set(x, y, Cell::new(ch).with_fg(fg).with_bg(bg));

        for offset in 1..width {
            if let Some(cell) = buf.get_mut(x.saturating_add(offset), y) {
                cell.char = ' ';
                cell.fg = fg;
                cell.wide_continuation = true;
            }
        }

        x += width;
    }
}
