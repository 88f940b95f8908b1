//! Terminal output sanitization
//!
//! Sender names, words and emoji come straight from the chat export. Before they are printed
//! in a text table they go through [`sanitize_cell`], which drops ANSI escape sequences and
//! control characters and folds line breaks, so a crafted message cannot move the cursor,
//! recolor the terminal or break the table layout.

/// Make user-controlled text safe to print as a single table cell
///
/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters, and replaces
/// newlines, carriage returns and tabs with a single space each.
///
/// # Examples
///
/// ```
/// use chatlog_analyzer::utils::terminal::sanitize_cell;
///
/// assert_eq!(sanitize_cell("\x1b[31mAlice\x1b[0m"), "Alice");
/// assert_eq!(sanitize_cell("two\nlines"), "two lines");
/// ```
pub fn sanitize_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Skip parameters up to the final letter of the sequence
                for next_ch in chars.by_ref() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        match ch {
            '\n' | '\r' | '\t' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_codes() {
        assert_eq!(sanitize_cell("\x1b[1m\x1b[31mBold Red\x1b[0m plain"), "Bold Red plain");
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(sanitize_cell("\x1b[2J\x1b[HCleared"), "Cleared");
    }

    #[test]
    fn test_lone_escape_is_dropped() {
        assert_eq!(sanitize_cell("a\x1bb"), "ab");
    }

    #[test]
    fn test_folds_line_breaks() {
        assert_eq!(sanitize_cell("Line 1\nLine 2\rLine 3\tTabbed"), "Line 1 Line 2 Line 3 Tabbed");
    }

    #[test]
    fn test_removes_bell_and_backspace() {
        assert_eq!(sanitize_cell("Alert!\x07 Test\x08"), "Alert! Test");
    }

    #[test]
    fn test_keeps_emoji_and_accents() {
        assert_eq!(sanitize_cell("José 👋 \x1b[32m🌍\x1b[0m"), "José 👋 🌍");
    }

    #[test]
    fn test_empty() {
        assert_eq!(sanitize_cell(""), "");
    }
}
