//! # Text Layout
//!
//! Width-aware padding helpers for strings that may already carry ANSI styling.
//!
//! Styling is applied *before* layout (a name is made bold, then centred), so every
//! helper here measures the **visible** width of its input rather than its byte or
//! char length. All width math goes through [`visible_length`]; nothing else in the
//! crate should try to reason about escape sequences.
//!
//! None of these functions truncate. If the content is wider than the target the
//! padding collapses to zero and the overflow is the caller's problem.

use console::strip_ansi_codes;
use unicode_width::UnicodeWidthStr;

/// Display width of `s` once every ANSI escape sequence has been removed.
///
/// Measured in terminal columns, not chars: a wide CJK glyph takes two cells of
/// the card border, so it must count as two here.
pub fn visible_length(s: &str) -> usize {
    strip_ansi_codes(s).width()
}

/// Centres `s` in a field of `width` visible columns.
///
/// The left pad is `floor((width - len) / 2)`, so odd slack puts the extra space
/// on the right.
pub fn center(s: &str, width: usize) -> String {
    let slack = width.saturating_sub(visible_length(s));
    let left = slack / 2;
    let right = slack - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Places `s` after `indent` spaces and pads the rest of the field with spaces.
pub fn left_align(s: &str, width: usize, indent: usize) -> String {
    let trailing = width
        .saturating_sub(visible_length(s))
        .saturating_sub(indent);
    format!("{}{}{}", " ".repeat(indent), s, " ".repeat(trailing))
}

/// Greedy word wrap.
///
/// Words are packed onto a line, separated by single spaces, until the next one
/// would push the line past `max_width`. A word wider than `max_width` gets a line
/// of its own and is never split. Text that already fits comes back unchanged as
/// a single line, spacing included.
pub fn word_wrap(text: &str, max_width: usize) -> Vec<String> {
    if text.width() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if current.width() + 1 + word.width() > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGENTA: &str = "\u{1b}[35m";
    const BOLD: &str = "\u{1b}[1m";
    const RESET: &str = "\u{1b}[0m";

    fn styled(s: &str) -> String {
        format!("{MAGENTA}{BOLD}{s}{RESET}")
    }

    #[test]
    fn test_visible_length_plain() {
        assert_eq!(visible_length("Build ship grow."), 16);
    }

    #[test]
    fn test_visible_length_only_escapes() {
        assert_eq!(visible_length(MAGENTA), 0);
        assert_eq!(visible_length(&format!("{MAGENTA}{BOLD}{RESET}")), 0);
        assert_eq!(visible_length(&MAGENTA.repeat(20)), 0);
    }

    #[test]
    fn test_visible_length_ignores_extended_codes() {
        let s = "\u{1b}[38;5;201mhello\u{1b}[0m";
        assert_eq!(visible_length(s), 5);
    }

    #[test]
    fn test_visible_length_box_drawing() {
        assert_eq!(visible_length("┌───┐"), 5);
    }

    #[test]
    fn test_center_even_slack() {
        assert_eq!(center("ab", 6), "  ab  ");
    }

    #[test]
    fn test_center_odd_slack_goes_right() {
        assert_eq!(center("ab", 7), "  ab   ");
    }

    #[test]
    fn test_center_styled_text_fills_width() {
        let name = styled("Kartik Labhshetwar");
        for width in 18..70 {
            let line = center(&name, width);
            assert_eq!(visible_length(&line), width);

            let left = line.len() - line.trim_start().len();
            let right = line.len() - line.trim_end().len();
            assert!(right - left <= 1, "width {width}: {left} vs {right}");
        }
    }

    #[test]
    fn test_center_overflow_is_untouched() {
        assert_eq!(center("toolong", 3), "toolong");
    }

    #[test]
    fn test_left_align_places_at_indent() {
        let line = left_align("hi", 10, 6);
        assert_eq!(line, "      hi  ");
    }

    #[test]
    fn test_left_align_styled_text() {
        let tagline = styled("Build ship grow.");
        for indent in 0..8 {
            let line = left_align(&tagline, 63, indent);
            assert_eq!(visible_length(&line), 63);
            let plain = strip_ansi_codes(&line).into_owned();
            assert_eq!(plain.find('B'), Some(indent));
        }
    }

    #[test]
    fn test_left_align_overflow_has_no_trailing_pad() {
        assert_eq!(left_align("abcdef", 4, 2), "  abcdef");
    }

    #[test]
    fn test_word_wrap_short_text_is_single_line() {
        let text = "TaskMaster is a task app.";
        assert_eq!(word_wrap(text, 50), vec![text.to_string()]);
    }

    #[test]
    fn test_word_wrap_respects_width() {
        let text = "Mind Mentor is an innovative AI-powered study assistant designed to \
                    revolutionize the way students learn and prepare for exams.";
        let lines = word_wrap(text, 50);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 50, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_word_wrap_never_splits_words() {
        let text = "a supercalifragilisticexpialidocious word here";
        let lines = word_wrap(text, 10);
        let words: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(words, text.split(' ').collect::<Vec<_>>());
        assert!(lines.contains(&"supercalifragilisticexpialidocious".to_string()));
    }

    #[test]
    fn test_word_wrap_exact_fit() {
        assert_eq!(word_wrap("aaaa bbbb", 9), vec!["aaaa bbbb"]);
        assert_eq!(word_wrap("aaaa bbbb", 8), vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn test_word_wrap_fitting_text_is_returned_verbatim() {
        for text in ["", " ", " leading", "two  spaces", "trailing "] {
            assert_eq!(word_wrap(text, 50), vec![text.to_string()], "{text:?}");
        }
    }

    #[test]
    fn test_visible_length_counts_wide_chars_as_two_columns() {
        assert_eq!(visible_length("名前"), 4);
        assert_eq!(visible_length(&styled("名前")), 4);
    }
}
