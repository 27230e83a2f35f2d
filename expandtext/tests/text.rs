use expandtext::text::{
    align_offset, char_width, clip_lines, display_width, ellipsize_end, wrap_chars, wrap_words,
};
use expandtext::{LineClip, TextAlign};

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are 2 cells wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("한글"), 4);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('…'), 1);
}

#[test]
fn test_ellipsize_end_marks_lines_that_fit() {
    assert_eq!(ellipsize_end("short", 10), "short…");
    assert_eq!(ellipsize_end("exactly10!", 10), "exactly10…");
    assert_eq!(ellipsize_end("trailing  ", 10), "trailing…");
    assert_eq!(ellipsize_end("anything", 0), "");
}

#[test]
fn test_ellipsize_end_cjk() {
    // Ellipsis takes 1 cell, leaving 4 for two wide chars
    assert_eq!(ellipsize_end("日本語", 5), "日本…");
    assert_eq!(ellipsize_end("日本語", 4), "日…");
}

#[test]
fn test_clip_lines_unlimited_keeps_everything() {
    let lines = owned(&["a", "b", "c"]);
    assert_eq!(clip_lines(lines.clone(), LineClip::Unlimited, 10), lines);
}

#[test]
fn test_clip_lines_within_limit_is_untouched() {
    let lines = owned(&["a", "b"]);
    assert_eq!(clip_lines(lines.clone(), LineClip::Limited(2), 10), lines);
}

#[test]
fn test_clip_lines_marks_last_visible_line() {
    let lines = owned(&["first line", "second", "third"]);
    assert_eq!(
        clip_lines(lines, LineClip::Limited(2), 10),
        vec!["first line", "second…"]
    );
}

#[test]
fn test_line_clip_truncates() {
    assert!(!LineClip::Unlimited.truncates(100));
    assert!(!LineClip::Limited(3).truncates(3));
    assert!(LineClip::Limited(3).truncates(4));
}

#[test]
fn test_wrap_words_simple() {
    assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
}

#[test]
fn test_wrap_words_breaks() {
    assert_eq!(wrap_words("hello world foo bar", 11), vec!["hello world", "foo bar"]);
}

#[test]
fn test_wrap_words_single_word_too_long() {
    assert_eq!(wrap_words("superlongword", 5), vec!["super", "longw", "ord"]);
}

#[test]
fn test_wrap_words_preserves_newlines() {
    assert_eq!(wrap_words("line1\nline2", 20), vec!["line1", "line2"]);
    assert_eq!(wrap_words("a\n\nb", 20), vec!["a", "", "b"]);
}

#[test]
fn test_wrap_words_empty() {
    assert_eq!(wrap_words("", 10), vec![""]);
    assert!(wrap_words("anything", 0).is_empty());
}

#[test]
fn test_wrap_chars_simple() {
    assert_eq!(wrap_chars("hello", 3), vec!["hel", "lo"]);
    assert_eq!(wrap_chars("hello", 5), vec!["hello"]);
}

#[test]
fn test_wrap_chars_cjk() {
    assert_eq!(wrap_chars("日本語", 4), vec!["日本", "語"]);
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(5, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(5, 10, TextAlign::Right), 5);
    assert_eq!(align_offset(15, 10, TextAlign::Center), 0);
}
