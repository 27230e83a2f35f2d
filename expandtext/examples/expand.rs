use std::fs::File;
use std::time::{Duration, Instant};

use expandtext::buffer::Cell;
use expandtext::{
    render_widget, Buffer, CellMeasure, Color, Event, ExpandConfig, ExpandTextView, Key, Rect,
    Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const CONTENT: &str = "A collapsed block shows only its first few lines and marks the cut \
with an ellipsis. Click the text or the arrow below it, or press Enter, to expand the block \
to its full height. The arrow turns while the box grows and shrinks, and both follow the same \
clock so they finish together. Content that already fits shows no arrow at all and ignores \
clicks entirely.";

const HINT: &str = " click or Enter toggles, q quits";
const FRAME: Duration = Duration::from_millis(16);
const MARGIN: u16 = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("expand.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = ExpandConfig::from_attributes([
        ("text", CONTENT),
        ("textcolor", "#FFE0E0E0"),
        ("textsize", "15sp"),
        ("lines", "2"),
    ])?;
    let mut widget = ExpandTextView::new(config)?;

    let mut term = Terminal::new()?;
    let measure = CellMeasure;

    loop {
        let (width, height) = term.size();
        let area = Rect::new(
            MARGIN,
            MARGIN,
            width.saturating_sub(MARGIN * 2).min(60),
            height.saturating_sub(MARGIN * 2),
        );

        // First layout pass is done once the area is known
        if !widget.is_laid_out() {
            widget.finalize_layout(&measure, f32::from(area.width));
        }

        let animating = widget.advance(Instant::now());
        let layout = term.render(|buf, screen| {
            draw_hint(buf, screen);
            render_widget(&widget, &measure, area, buf)
        })?;

        // Tick at frame rate while animating, otherwise wait for input
        let timeout = if animating { Some(FRAME) } else { None };
        for event in term.poll(timeout)? {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                other => {
                    widget.handle_event(&other, &layout, Instant::now());
                }
            }
        }
    }
}

fn draw_hint(buf: &mut Buffer, screen: Rect) {
    let Some(y) = screen.bottom().checked_sub(1) else {
        return;
    };
    let fg = Color::oklch(0.7, 0.1, 200.0).to_rgb();
    for (x, ch) in HINT.chars().enumerate().take(usize::from(screen.width)) {
        buf.set(x as u16, y, Cell::new(ch).with_fg(fg));
    }
}
