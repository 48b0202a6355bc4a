//! Record/column tokenizer over a sequence of physical lines.
//!
//! The tokenizer is driven in two levels. [`CsvTokenizer::next_record`] opens a
//! record on the next eligible line, then [`CsvTokenizer::next_column`] is called
//! until [`CsvTokenizer::has_next_column`] turns false. A quoted column may pull
//! further physical lines while it is open.

use crate::config::{QuotesInQuotedFields, TokenizerConfig};
use crate::error::{Result, TokenizerError};
use crate::lines::LineSupply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    NotEnd,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnState {
    Begin,
    Value,
    QuotedValue,
    AfterQuotedValue,
    FirstTrim,
    LastTrimOrValue,
}

/// Streaming CSV tokenizer.
///
/// # Example
///
/// ```
/// use csv_tokenizer::{CsvTokenizer, Newline, TokenizerConfig};
///
/// let config = TokenizerConfig::builder(",").newline(Newline::LF).build().unwrap();
/// let lines = vec!["a,\"b".to_string(), "c\"".to_string()];
/// let mut tokenizer = CsvTokenizer::new(config, lines);
///
/// assert!(tokenizer.next_record().unwrap());
/// assert_eq!(tokenizer.next_column().unwrap(), "a");
/// assert_eq!(tokenizer.next_column().unwrap(), "b\nc");
/// assert!(!tokenizer.has_next_column());
/// assert!(!tokenizer.next_record().unwrap());
/// ```
#[derive(Debug)]
pub struct CsvTokenizer<I> {
    config: TokenizerConfig,
    lines: LineSupply<I>,

    /// Line being scanned. `None` before the first record and after input ran
    /// out inside a quoted value.
    line: Option<String>,
    /// Byte offset into `line`.
    cursor: usize,
    /// Lines consumed by the quoted value currently being read, kept for recovery.
    quoted_span_lines: Vec<String>,

    record_state: RecordState,
    was_quoted_column: bool,
}

impl<I: Iterator<Item = String>> CsvTokenizer<I> {
    /// Create a tokenizer reading physical lines (without terminators) from `lines`.
    pub fn new<L>(config: TokenizerConfig, lines: L) -> Self
    where
        L: IntoIterator<Item = String, IntoIter = I>,
    {
        let comment_line_marker = config.comment_line_marker().map(str::to_string);
        Self {
            config,
            lines: LineSupply::new(lines.into_iter(), comment_line_marker),
            line: None,
            cursor: 0,
            quoted_span_lines: Vec::new(),
            // nothing is open yet, next_record() must come first
            record_state: RecordState::End,
            was_quoted_column: false,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Number of physical lines consumed so far, skipped lines included.
    pub fn current_line_number(&self) -> u64 {
        self.lines.line_number()
    }

    /// Drop one physical line, typically a header row.
    ///
    /// Blank and comment lines are not filtered here. Returns false when the
    /// input is exhausted.
    pub fn skip_header_line(&mut self) -> bool {
        self.lines.skip_line()
    }

    /// Abandon the current record after an error.
    ///
    /// If a quoted value had pulled in continuation lines, those lines (except the
    /// first) and the current line are queued again so that later records are not
    /// lost. Returns the line the abandoned record started on.
    pub fn skip_current_line(&mut self) -> Option<String> {
        let skipped = if self.quoted_span_lines.is_empty() {
            self.line.clone()
        } else {
            let mut span = std::mem::take(&mut self.quoted_span_lines).into_iter();
            let first = span.next();
            let unread: Vec<String> = span.chain(self.line.take()).collect();
            tracing::debug!(
                line_number = self.lines.line_number(),
                lines = unread.len(),
                "re-queueing lines of an abandoned quoted value"
            );
            self.lines.push_back(unread);
            first
        };
        self.record_state = RecordState::End;
        skipped
    }

    /// Start the next record, skipping blank and comment lines.
    pub fn next_record(&mut self) -> Result<bool> {
        self.next_record_with(true)
    }

    /// Start the next record.
    ///
    /// Fails if columns of the current record are still unread. Returns false at
    /// end of input.
    pub fn next_record_with(&mut self, skip_empty_line: bool) -> Result<bool> {
        if self.record_state != RecordState::End {
            return Err(TokenizerError::RecordHasUnexpectedTrailingColumn {
                line: self.current_line_number(),
            });
        }

        if self.next_line(skip_empty_line) {
            self.record_state = RecordState::NotEnd;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Start the next record and read all of its columns with null mapping.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_record(&mut self) -> Result<Option<Vec<Option<String>>>> {
        self.read_record_with(true)
    }

    /// Like [`read_record`](Self::read_record), optionally keeping blank lines
    /// as single-column records.
    pub fn read_record_with(
        &mut self,
        skip_empty_line: bool,
    ) -> Result<Option<Vec<Option<String>>>> {
        if !self.next_record_with(skip_empty_line)? {
            return Ok(None);
        }

        let mut record = Vec::new();
        while self.has_next_column() {
            record.push(self.next_column_or_null()?);
        }
        Ok(Some(record))
    }

    #[inline]
    pub fn has_next_column(&self) -> bool {
        self.record_state == RecordState::NotEnd
    }

    /// Whether the column returned last was quoted.
    #[inline]
    pub fn was_quoted_column(&self) -> bool {
        self.was_quoted_column
    }

    /// Read the next column of the current record.
    ///
    /// Inside a quoted value, an escape character that is the last character
    /// of a line is not kept: the value continues on the next line, joined by
    /// the configured newline, as if the line had simply ended there. So
    /// `"ab\` followed by `cd"` reads as `ab` + newline + `cd`.
    ///
    /// Every byte appended to a quoted value, including doubled quotes and
    /// joining newlines, counts against
    /// [`max_quoted_field_length`](TokenizerConfig::max_quoted_field_length).
    pub fn next_column(&mut self) -> Result<String> {
        if !self.has_next_column() {
            return Err(TokenizerError::RecordDoesNotHaveExpectedColumn {
                line: self.current_line_number(),
            });
        }

        self.was_quoted_column = false;
        self.quoted_span_lines.clear();

        let trim = self.config.trim_if_not_quoted();
        let stray_quotes =
            self.config.quotes_in_quoted_fields() == QuotesInQuotedFields::AcceptStrayQuotes;

        let mut value_start = self.cursor;
        // set by Value, read by LastTrimOrValue
        let mut value_end = 0;
        let mut quoted = String::new();
        let mut state = ColumnState::Begin;

        loop {
            let pos = self.cursor;
            let c = self.next_char();

            match state {
                ColumnState::Begin => {
                    if self.is_delimiter(c) && self.consume_delimiter_following() {
                        return Ok(String::new());
                    }
                    if c.is_none() {
                        self.record_state = RecordState::End;
                        return Ok(String::new());
                    } else if trim && is_space(c) {
                        state = ColumnState::FirstTrim;
                    } else if self.is_quote(c) {
                        value_start = self.cursor;
                        self.was_quoted_column = true;
                        state = ColumnState::QuotedValue;
                    } else {
                        state = ColumnState::Value;
                    }
                }

                ColumnState::FirstTrim => {
                    if self.is_delimiter(c) && self.consume_delimiter_following() {
                        return Ok(String::new());
                    }
                    if c.is_none() {
                        self.record_state = RecordState::End;
                        return Ok(String::new());
                    } else if self.is_quote(c) {
                        // leading spaces before a quoted value are dropped
                        value_start = self.cursor;
                        self.was_quoted_column = true;
                        state = ColumnState::QuotedValue;
                    } else if is_space(c) {
                        // still leading spaces
                    } else {
                        value_start = pos;
                        state = ColumnState::Value;
                    }
                }

                ColumnState::Value => {
                    if self.is_delimiter(c) && self.consume_delimiter_following() {
                        return Ok(self.line()[value_start..pos].to_string());
                    }
                    if c.is_none() {
                        self.record_state = RecordState::End;
                        return Ok(self.line()[value_start..pos].to_string());
                    } else if trim && is_space(c) {
                        value_end = pos;
                        state = ColumnState::LastTrimOrValue;
                    }
                    // Quotes inside an unquoted value are plain content.
                }

                ColumnState::LastTrimOrValue => {
                    if self.is_delimiter(c) && self.consume_delimiter_following() {
                        return Ok(self.line()[value_start..value_end].to_string());
                    }
                    if c.is_none() {
                        self.record_state = RecordState::End;
                        return Ok(self.line()[value_start..value_end].to_string());
                    } else if !is_space(c) {
                        // the spaces were inside the value
                        state = ColumnState::Value;
                    }
                }

                ColumnState::QuotedValue => {
                    if c.is_none() {
                        quoted.push_str(&self.line()[value_start..pos]);
                        quoted.push_str(self.config.newline().as_str());
                        self.check_quoted_length(&quoted, pos)?;
                        self.continue_quoted_value()?;
                        value_start = 0;
                    } else if self.is_quote(c) {
                        let next = self.peek_char(0);
                        let next_next = self.peek_char(1);
                        if self.is_quote(next)
                            && (!stray_quotes
                                || !(self.is_delimiter(next_next) || next_next.is_none()))
                        {
                            // Doubled quote. Under the stray-quote policy a quote right
                            // before a delimiter or end of line still closes the value.
                            quoted.push_str(&self.line()[value_start..self.cursor]);
                            self.cursor += next.map_or(0, char::len_utf8);
                            value_start = self.cursor;
                            self.check_quoted_length(&quoted, value_start)?;
                        } else if stray_quotes && !(self.is_delimiter(next) || next.is_none()) {
                            // stray quote, kept as content
                            self.check_quoted_length(&quoted, value_start)?;
                        } else {
                            quoted.push_str(&self.line()[value_start..pos]);
                            state = ColumnState::AfterQuotedValue;
                        }
                    } else if self.is_escape(c) {
                        // quote is checked first so that quote == escape works
                        let next = self.peek_char(0);
                        if next.is_none() {
                            quoted.push_str(&self.line()[value_start..pos]);
                            quoted.push_str(self.config.newline().as_str());
                            self.check_quoted_length(&quoted, self.cursor)?;
                            self.continue_quoted_value()?;
                            value_start = 0;
                        } else if let Some(escaped) =
                            next.filter(|_| self.is_quote(next) || self.is_escape(next))
                        {
                            quoted.push_str(&self.line()[value_start..pos]);
                            quoted.push(escaped);
                            self.cursor += escaped.len_utf8();
                            value_start = self.cursor;
                            self.check_quoted_length(&quoted, value_start)?;
                        } else {
                            self.check_quoted_length(&quoted, value_start)?;
                        }
                    } else {
                        self.check_quoted_length(&quoted, value_start)?;
                    }
                }

                ColumnState::AfterQuotedValue => {
                    if self.is_delimiter(c) && self.consume_delimiter_following() {
                        return Ok(quoted);
                    }
                    match c {
                        None => {
                            self.record_state = RecordState::End;
                            return Ok(quoted);
                        }
                        Some(' ') => {
                            // trailing spaces after the closing quote
                        }
                        Some(character) => {
                            return Err(TokenizerError::InvalidCharacterAfterQuote {
                                character,
                                quote: self.config.quote().char().unwrap_or_default(),
                                line: self.current_line_number(),
                            });
                        }
                    }
                }
            }
        }
    }

    /// Read the next column, mapping it to `None` per the null-string rules.
    ///
    /// Without a configured null string, an empty unquoted value is `None` while
    /// an empty quoted value (`""`) is `Some("")`. With a null string, only an
    /// exact match is `None`.
    pub fn next_column_or_null(&mut self) -> Result<Option<String>> {
        let value = self.next_column()?;
        Ok(match self.config.null_string() {
            Some(null_string) if value == null_string => None,
            Some(_) => Some(value),
            None if value.is_empty() && !self.was_quoted_column => None,
            None => Some(value),
        })
    }

    fn next_line(&mut self, skip_empty_line: bool) -> bool {
        match self.lines.next_line(skip_empty_line) {
            Some(line) => {
                self.line = Some(line);
                self.cursor = 0;
                true
            }
            None => false,
        }
    }

    /// Move the current line into the quoted span and load the continuation line.
    fn continue_quoted_value(&mut self) -> Result<()> {
        if let Some(line) = self.line.take() {
            self.quoted_span_lines.push(line);
        }
        if self.next_line(false) {
            Ok(())
        } else {
            self.record_state = RecordState::End;
            Err(TokenizerError::EndOfFileInQuotedField {
                line: self.current_line_number(),
            })
        }
    }

    fn check_quoted_length(&self, quoted: &str, value_start: usize) -> Result<()> {
        let limit = self.config.max_quoted_field_length();
        if (self.cursor - value_start) + quoted.len() > limit {
            return Err(TokenizerError::QuotedFieldLengthLimitExceeded {
                limit,
                line: self.current_line_number(),
            });
        }
        Ok(())
    }

    #[inline]
    fn line(&self) -> &str {
        self.line.as_deref().unwrap_or_default()
    }

    /// Consume one character; `None` is the end-of-line sentinel.
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let c = self.line()[self.cursor..].chars().next()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    #[inline]
    fn peek_char(&self, n: usize) -> Option<char> {
        self.line()[self.cursor..].chars().nth(n)
    }

    /// Consume the delimiter's following string if it matches at the cursor.
    fn consume_delimiter_following(&mut self) -> bool {
        let len = match self.config.delimiter().following.as_deref() {
            None => return true,
            Some(following) if self.line()[self.cursor..].starts_with(following) => {
                following.len()
            }
            Some(_) => return false,
        };
        self.cursor += len;
        true
    }

    #[inline]
    fn is_delimiter(&self, c: Option<char>) -> bool {
        c == Some(self.config.delimiter().char)
    }

    #[inline]
    fn is_quote(&self, c: Option<char>) -> bool {
        c.is_some() && c == self.config.quote().char()
    }

    #[inline]
    fn is_escape(&self, c: Option<char>) -> bool {
        c.is_some() && c == self.config.escape().char()
    }
}

#[inline]
fn is_space(c: Option<char>) -> bool {
    c == Some(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Newline, TokenizerBuilder};
    use crate::error::ErrorKind;

    fn tokenizer(builder: &TokenizerBuilder, lines: &[&str]) -> CsvTokenizer<std::vec::IntoIter<String>> {
        let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        CsvTokenizer::new(builder.build().unwrap(), lines)
    }

    fn lf(delimiter: &str) -> TokenizerBuilder {
        let mut builder = TokenizerConfig::builder(delimiter);
        builder.newline(Newline::LF);
        builder
    }

    fn columns(tokenizer: &mut CsvTokenizer<std::vec::IntoIter<String>>) -> Vec<String> {
        let mut out = Vec::new();
        while tokenizer.has_next_column() {
            out.push(tokenizer.next_column().unwrap());
        }
        out
    }

    #[test]
    fn test_protocol_violations() {
        let mut t = tokenizer(&lf(","), &["a,b"]);

        let err = t.next_column().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);

        assert!(t.next_record().unwrap());
        assert_eq!(t.next_column().unwrap(), "a");
        let err = t.next_record().unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::RecordHasUnexpectedTrailingColumn { line: 1 }
        ));

        assert_eq!(t.next_column().unwrap(), "b");
        assert!(matches!(
            t.next_column(),
            Err(TokenizerError::RecordDoesNotHaveExpectedColumn { .. })
        ));
        assert!(!t.next_record().unwrap());
    }

    #[test]
    fn test_empty_columns() {
        let mut t = tokenizer(&lf(","), &[",,"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["", "", ""]);
    }

    #[test]
    fn test_multi_char_delimiter() {
        let mut t = tokenizer(&lf("|;"), &["a|b|;c|;", "\"x|;y\"|;z"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a|b", "c", ""]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["x|;y", "z"]);
    }

    #[test]
    fn test_multi_char_delimiter_with_trim() {
        let mut builder = lf("::");
        builder.trim_if_not_quoted(true);
        let mut t = tokenizer(&builder, &["  a ::  : b  ::\"c\"  "]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a", ": b", "c"]);
    }

    #[test]
    fn test_trim_keeps_inner_spaces() {
        let mut builder = lf(",");
        builder.trim_if_not_quoted(true);
        let mut t = tokenizer(&builder, &[" a b  c ,   ,x"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a b  c", "", "x"]);
    }

    #[test]
    fn test_quote_inside_unquoted_value() {
        let mut t = tokenizer(&lf(","), &["ab\"c,d"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["ab\"c", "d"]);
    }

    #[test]
    fn test_no_quote() {
        let mut builder = lf(",");
        builder.no_quote();
        let mut t = tokenizer(&builder, &["\"a,b\""]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["\"a", "b\""]);
        assert!(!t.was_quoted_column());
    }

    #[test]
    fn test_escape_sequences() {
        let mut t = tokenizer(&lf(","), &[r#""a\"b","c\\d","e\xf""#]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a\"b", "c\\d", "e\\xf"]);
    }

    #[test]
    fn test_no_escape() {
        let mut builder = lf(",");
        builder.no_escape();
        let mut t = tokenizer(&builder, &[r#""a\""#]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a\\"]);
    }

    #[test]
    fn test_escape_equal_to_quote() {
        let mut builder = lf(",");
        builder.escape('"');
        let mut t = tokenizer(&builder, &["\"a\"\"b\",c"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a\"b", "c"]);
    }

    #[test]
    fn test_escaped_end_of_line() {
        let mut t = tokenizer(&lf(","), &["\"ab\\", "cd\",e"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["ab\ncd", "e"]);
        assert_eq!(t.current_line_number(), 2);
    }

    #[test]
    fn test_newline_literal_is_configurable() {
        let builder = TokenizerConfig::builder(",");
        let mut t = tokenizer(&builder, &["\"a", "b\""]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a\r\nb"]);
    }

    #[test]
    fn test_continuation_keeps_comment_lines() {
        let mut builder = lf(",");
        builder.comment_line_marker("#");
        let mut t = tokenizer(&builder, &["#skip", "\"a", "#b\",c"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a\n#b", "c"]);
    }

    #[test]
    fn test_end_of_file_in_quoted_field() {
        let mut t = tokenizer(&lf(","), &["x,\"a", "b"]);
        assert!(t.next_record().unwrap());
        assert_eq!(t.next_column().unwrap(), "x");
        let err = t.next_column().unwrap_err();
        assert!(matches!(err, TokenizerError::EndOfFileInQuotedField { line: 2 }));
        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert!(!t.has_next_column());

        assert_eq!(t.skip_current_line().as_deref(), Some("x,\"a"));
        assert_eq!(t.current_line_number(), 1);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["b"]);
        assert!(!t.next_record().unwrap());
    }

    #[test]
    fn test_invalid_character_after_quote() {
        let mut t = tokenizer(&lf(","), &["\"a\"  x,b", "c,d"]);
        assert!(t.next_record().unwrap());
        let err = t.next_column().unwrap_err();
        assert_eq!(
            err,
            TokenizerError::InvalidCharacterAfterQuote {
                character: 'x',
                quote: '"',
                line: 1
            }
        );

        assert_eq!(t.skip_current_line().as_deref(), Some("\"a\"  x,b"));
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["c", "d"]);
    }

    #[test]
    fn test_stray_quote_before_delimiter_closes_value() {
        let mut builder = lf(",");
        builder.accept_stray_quotes();
        let mut t = tokenizer(&builder, &["\"a\"\",b"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["a\"", "b"]);
    }

    #[test]
    fn test_quoted_length_counts_across_lines() {
        let mut builder = lf(",");
        builder.max_quoted_field_length(4);
        let mut t = tokenizer(&builder, &["\"ab", "c\""]);
        assert!(t.next_record().unwrap());
        // "ab" + newline + "c" is exactly four bytes
        assert_eq!(columns(&mut t), vec!["ab\nc"]);
    }

    #[test]
    fn test_doubled_quotes_count_toward_length() {
        let mut builder = lf(",");
        builder.max_quoted_field_length(4);

        let line = format!("\"{}\"", "\"\"".repeat(4));
        let mut t = tokenizer(&builder, &[line.as_str()]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["\"\"\"\""]);

        let line = format!("\"{}\"", "\"\"".repeat(20));
        let mut t = tokenizer(&builder, &[line.as_str()]);
        assert!(t.next_record().unwrap());
        assert_eq!(
            t.next_column().unwrap_err(),
            TokenizerError::QuotedFieldLengthLimitExceeded { limit: 4, line: 1 }
        );
    }

    #[test]
    fn test_joined_blank_lines_count_toward_length() {
        let mut builder = lf(",");
        builder.max_quoted_field_length(4);

        let mut lines = vec!["\""];
        lines.extend(std::iter::repeat_n("", 20));
        lines.push("\"");
        let mut t = tokenizer(&builder, &lines);
        assert!(t.next_record().unwrap());
        // the fifth joining newline goes over the limit
        assert_eq!(
            t.next_column().unwrap_err(),
            TokenizerError::QuotedFieldLengthLimitExceeded { limit: 4, line: 5 }
        );
    }

    #[test]
    fn test_escaped_end_of_line_counts_toward_length() {
        let mut builder = lf(",");
        builder.max_quoted_field_length(3);
        let mut t = tokenizer(&builder, &["\"ab\\", "\\", "c\""]);
        assert!(t.next_record().unwrap());
        assert_eq!(
            t.next_column().unwrap_err(),
            TokenizerError::QuotedFieldLengthLimitExceeded { limit: 3, line: 2 }
        );
    }

    #[test]
    fn test_unicode_content() {
        let mut t = tokenizer(&lf("→"), &["é→\"ü\"\"ß\"→日本"]);
        assert!(t.next_record().unwrap());
        assert_eq!(columns(&mut t), vec!["é", "ü\"ß", "日本"]);
    }

    #[test]
    fn test_read_record() {
        let mut t = tokenizer(&lf(","), &["a,,\"\"", "", "b"]);
        assert_eq!(
            t.read_record().unwrap(),
            Some(vec![Some("a".to_string()), None, Some(String::new())])
        );
        assert_eq!(t.read_record().unwrap(), Some(vec![Some("b".to_string())]));
        assert_eq!(t.read_record().unwrap(), None);
    }

    #[test]
    fn test_keep_empty_line_as_record() {
        let mut t = tokenizer(&lf(","), &["", "a"]);
        assert!(t.next_record_with(false).unwrap());
        assert_eq!(t.next_column_or_null().unwrap(), None);
        assert!(!t.has_next_column());
        assert!(t.next_record_with(false).unwrap());
        assert_eq!(columns(&mut t), vec!["a"]);
    }

    #[test]
    fn test_skip_current_line_before_first_record() {
        let mut t = tokenizer(&lf(","), &["a"]);
        assert_eq!(t.skip_current_line(), None);
        assert!(t.next_record().unwrap());
    }
}
