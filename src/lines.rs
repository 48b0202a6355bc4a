//! Physical line supply for the tokenizer.

use std::collections::VecDeque;

/// Pulls physical lines from a source, with a push-back queue and a line counter.
#[derive(Debug)]
pub(crate) struct LineSupply<I> {
    source: I,
    /// Lines pushed back by recovery, delivered before the source.
    pending: VecDeque<String>,
    line_number: u64,
    comment_line_marker: Option<String>,
}

impl<I: Iterator<Item = String>> LineSupply<I> {
    pub(crate) fn new(source: I, comment_line_marker: Option<String>) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            line_number: 0,
            comment_line_marker,
        }
    }

    #[inline]
    pub(crate) fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Returns the next physical line, or `None` when the input is exhausted.
    ///
    /// With `skip_empty`, blank lines and comment lines are counted and dropped.
    pub(crate) fn next_line(&mut self, skip_empty: bool) -> Option<String> {
        loop {
            let line = self.pull()?;
            if skip_empty && self.is_skippable(&line) {
                tracing::trace!(line_number = self.line_number, "skipping blank or comment line");
                continue;
            }
            return Some(line);
        }
    }

    /// Discard one physical line without any filtering.
    pub(crate) fn skip_line(&mut self) -> bool {
        self.pull().is_some()
    }

    /// Queue lines for re-delivery, oldest first, rewinding the counter for each.
    pub(crate) fn push_back(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.pending.push_back(line);
            self.line_number -= 1;
        }
    }

    fn pull(&mut self) -> Option<String> {
        let line = match self.pending.pop_front() {
            Some(line) => line,
            None => self.source.next()?,
        };
        self.line_number += 1;
        Some(line)
    }

    fn is_skippable(&self, line: &str) -> bool {
        line.is_empty()
            || self
                .comment_line_marker
                .as_deref()
                .is_some_and(|marker| line.starts_with(marker))
    }
}

/// Splits decoded text into physical lines.
///
/// `\r\n`, `\r` and `\n` are all recognized as terminators. A terminator at the
/// very end of the text does not produce an extra empty line.
///
/// ```
/// use csv_tokenizer::TextLines;
///
/// let lines: Vec<String> = TextLines::new("a,b\r\nc,d\re,f\n").collect();
/// assert_eq!(lines, vec!["a,b", "c,d", "e,f"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    rest: &'a str,
}

impl<'a> TextLines<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl Iterator for TextLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c| c == '\r' || c == '\n') {
            Some(i) => {
                let line = &self.rest[..i];
                let terminator_len = if self.rest[i..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[i + terminator_len..];
                Some(line.to_string())
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(lines: &[&str], marker: Option<&str>) -> LineSupply<std::vec::IntoIter<String>> {
        let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        LineSupply::new(lines.into_iter(), marker.map(str::to_string))
    }

    #[test]
    fn test_skip_empty_lines_are_counted() {
        let mut lines = supply(&["", "a", "", "b"], None);
        assert_eq!(lines.next_line(true).as_deref(), Some("a"));
        assert_eq!(lines.line_number(), 2);
        assert_eq!(lines.next_line(true).as_deref(), Some("b"));
        assert_eq!(lines.line_number(), 4);
        assert_eq!(lines.next_line(true), None);
        assert_eq!(lines.line_number(), 4);
    }

    #[test]
    fn test_comment_lines() {
        let mut lines = supply(&["#x", "a", "#y"], Some("#"));
        assert_eq!(lines.next_line(true).as_deref(), Some("a"));
        // Continuation lines keep comments as content.
        assert_eq!(lines.next_line(false).as_deref(), Some("#y"));
        assert_eq!(lines.line_number(), 3);
    }

    #[test]
    fn test_push_back_is_fifo() {
        let mut lines = supply(&["a", "b", "c"], None);
        lines.next_line(true);
        lines.next_line(true);
        lines.next_line(true);
        lines.push_back(vec!["b".to_string(), "c".to_string()]);
        assert_eq!(lines.line_number(), 1);
        assert_eq!(lines.next_line(true).as_deref(), Some("b"));
        assert_eq!(lines.next_line(true).as_deref(), Some("c"));
        assert_eq!(lines.line_number(), 3);
    }

    #[test]
    fn test_skip_line_ignores_filters() {
        let mut lines = supply(&["", "a"], None);
        assert!(lines.skip_line());
        assert_eq!(lines.line_number(), 1);
        assert!(lines.skip_line());
        assert!(!lines.skip_line());
    }

    #[test]
    fn test_text_lines() {
        let lines: Vec<String> = TextLines::new("\na\r\n\rb").collect();
        assert_eq!(lines, vec!["", "a", "", "b"]);

        assert_eq!(TextLines::new("").count(), 0);
        assert_eq!(TextLines::new("\n").collect::<Vec<_>>(), vec![""]);
    }
}
