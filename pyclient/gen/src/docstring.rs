//! Docstring typesetting.
//!
//! API descriptions are written by service authors and can be arbitrarily long
//! or contain characters that would end a Python string early. Everything that
//! ends up between triple quotes in generated code goes through
//! [`typeset_docstring`].

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm, wrap};

const TAB_STOP: usize = 8;

/// Escapes text for embedding in a triple-quoted Python string.
///
/// Backslashes are doubled so escape sequences survive literally, and every
/// `"""` is escaped so the string cannot be closed early.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::docstring::escape_docstring;
///
/// assert_eq!(escape_docstring(r#"say """hi""""#), r#"say \"\"\"hi\"\"\""#);
/// assert_eq!(escape_docstring(r"a\d"), r"a\\d");
/// ```
pub fn escape_docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}

/// Typesets free text as the body of an indented docstring.
///
/// Each input line is wrapped to `width` columns without splitting words. The
/// first output line carries no indentation (the caller has already written
/// it); every later line is indented by `level` spaces. Blank input lines
/// become empty output lines with no trailing indentation.
///
/// ## Examples
///
/// ```
/// use pyclient_gen::docstring::typeset_docstring;
///
/// let text = "Get Task\n\nReturns the task definition.";
/// assert_eq!(
///     typeset_docstring(text, 8, 100),
///     "Get Task\n\n        Returns the task definition."
/// );
/// ```
pub fn typeset_docstring(text: &str, level: usize, width: usize) -> String {
    let indent = " ".repeat(level);
    let escaped = escape_docstring(text);

    let mut lines: Vec<String> = Vec::new();
    for (idx, line) in escaped.lines().enumerate() {
        if line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let initial_indent = if idx == 0 { "" } else { indent.as_str() };
        let options = Options::new(width)
            .initial_indent(initial_indent)
            .subsequent_indent(&indent)
            .break_words(false)
            .word_separator(WordSeparator::AsciiSpace)
            .word_splitter(WordSplitter::NoHyphenation)
            .wrap_algorithm(WrapAlgorithm::FirstFit);

        let expanded = expand_tabs(line);
        lines.extend(wrap(&expanded, options).into_iter().map(|l| l.into_owned()));
    }

    lines.join("\n")
}

/// Expands tabs to spaces using tab stops every eight columns.
fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + TAB_STOP);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_STOP - column % TAB_STOP;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
        tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
        nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute \
        irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla.";

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(typeset_docstring("Ping Server", 8, 100), "Ping Server");
    }

    #[test]
    fn wrapped_lines_fit_width() {
        let out = typeset_docstring(LOREM, 8, 100);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 100, "line too long ({}): {}", line.len(), line);
        }
    }

    #[test]
    fn continuation_lines_are_indented() {
        let out = typeset_docstring(LOREM, 8, 100);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("Lorem"));
        for line in &lines[1..] {
            assert!(line.starts_with("        "));
            assert!(!line.starts_with("         "));
        }
    }

    #[test]
    fn later_paragraphs_are_indented() {
        let out = typeset_docstring("First\nSecond\nThird", 4, 100);
        assert_eq!(out, "First\n    Second\n    Third");
    }

    #[test]
    fn blank_lines_have_no_trailing_indent() {
        let out = typeset_docstring("One\n\nTwo\n   \nThree", 8, 100);
        assert_eq!(out, "One\n\n        Two\n\n        Three");
    }

    #[test]
    fn long_words_are_not_split() {
        let url = format!("https://example.com/{}", "a".repeat(120));
        let text = format!("See {} for details", url);
        let out = typeset_docstring(&text, 4, 100);

        assert!(out.lines().any(|line| line.trim() == url));
        for line in out.lines() {
            if line.trim() != url {
                assert!(line.len() <= 100);
            }
        }
    }

    #[test]
    fn hyphenated_words_stay_together() {
        let text = format!("{} task-group-resolved", "word ".repeat(19));
        let out = typeset_docstring(&text, 4, 100);
        assert!(out.contains("task-group-resolved"));
    }

    #[test]
    fn triple_quotes_are_escaped() {
        let out = typeset_docstring(r#"Use """ carefully"#, 8, 100);
        assert_eq!(out, r#"Use \"\"\" carefully"#);
    }

    #[test]
    fn tabs_expand_to_tab_stops() {
        assert_eq!(expand_tabs("a\tb"), "a       b");
        assert_eq!(expand_tabs("\tx"), "        x");
        assert_eq!(expand_tabs("12345678\ty"), "12345678        y");
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(typeset_docstring("", 8, 100), "");
    }
}
