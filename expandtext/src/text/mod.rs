use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::surface::LineClip;
use crate::types::TextAlign;

const ELLIPSIS: char = '…';

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Mark `line` as cut off: keep as much as fits in `max_width` alongside a
/// trailing ellipsis.
pub fn ellipsize_end(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut result = take_width(line.trim_end(), max_width - 1);
    result.push(ELLIPSIS);
    result
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

/// Apply a line clip to already wrapped lines. When lines are dropped the
/// last visible one ends in an ellipsis.
pub fn clip_lines(mut lines: Vec<String>, clip: LineClip, max_width: usize) -> Vec<String> {
    let LineClip::Limited(max) = clip else {
        return lines;
    };
    if lines.len() <= max {
        return lines;
    }

    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        *last = ellipsize_end(last, max_width);
    }
    lines
}

pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(current_line);
                    current_line = String::new();
                    current_width = 0;
                }

                // Overlong words fall back to char wrapping
                let broken = wrap_chars(word, max_width);
                let broken_len = broken.len();
                for (i, part) in broken.into_iter().enumerate() {
                    if i < broken_len - 1 {
                        lines.push(part);
                    } else {
                        current_line = part;
                        current_width = display_width(&current_line);
                    }
                }
                continue;
            }

            let space_width = if current_line.is_empty() { 0 } else { 1 };
            let needed_width = space_width + word_width;

            if current_width + needed_width > max_width {
                if !current_line.is_empty() {
                    lines.push(current_line);
                }
                current_line = word.to_string();
                current_width = word_width;
            } else {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        } else if input_line.chars().all(|c| c.is_whitespace()) {
            lines.push(String::new());
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for ch in input_line.chars() {
            let ch_width = char_width(ch);

            if ch_width == 0 {
                // Combining marks stay with their base
                current_line.push(ch);
                continue;
            }

            if current_width + ch_width > max_width {
                if !current_line.is_empty() {
                    lines.push(current_line);
                }
                current_line = String::new();
                current_width = 0;
            }

            current_line.push(ch);
            current_width += ch_width;
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}
