use thiserror::Error;

/// Broad classification of a [`TokenizerError`].
///
/// Callers match on this to decide whether
/// [`CsvTokenizer::skip_current_line`](crate::CsvTokenizer::skip_current_line)
/// is worth calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The configuration was rejected at build time.
    Config,
    /// The caller broke the record/column calling discipline.
    Protocol,
    /// Malformed data that can be skipped, after which parsing resumes.
    Recoverable,
    /// Malformed data that ends the current record.
    Fatal,
}

/// Error type for CSV tokenizing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A new record was requested before all columns of the current one were read.
    #[error("Record has unexpected trailing column at line {line}")]
    RecordHasUnexpectedTrailingColumn { line: u64 },

    /// A column was requested after the record had already ended.
    #[error("Record does not have expected column at line {line}")]
    RecordDoesNotHaveExpectedColumn { line: u64 },

    /// A quoted value grew past the configured maximum length.
    #[error("The size of the quoted value exceeds the limit size ({limit}) at line {line}")]
    QuotedFieldLengthLimitExceeded { limit: usize, line: u64 },

    /// Input ended while a quoted value was still open.
    #[error("Unexpected end of file in a quoted field at line {line}")]
    EndOfFileInQuotedField { line: u64 },

    /// Something other than spaces, a delimiter or end of line follows a closing quote.
    #[error("Unexpected extra character '{character}' after a value quoted by '{quote}' at line {line}")]
    InvalidCharacterAfterQuote {
        character: char,
        quote: char,
        line: u64,
    },
}

impl TokenizerError {
    /// Returns the classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            TokenizerError::InvalidConfig(_) => ErrorKind::Config,
            TokenizerError::RecordHasUnexpectedTrailingColumn { .. }
            | TokenizerError::RecordDoesNotHaveExpectedColumn { .. } => ErrorKind::Protocol,
            TokenizerError::QuotedFieldLengthLimitExceeded { .. } => ErrorKind::Recoverable,
            TokenizerError::EndOfFileInQuotedField { .. }
            | TokenizerError::InvalidCharacterAfterQuote { .. } => ErrorKind::Fatal,
        }
    }

    /// Returns true if the caller can skip the broken record and keep going.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Recoverable)
    }

    /// Physical line number the error was detected at, if it relates to input.
    pub const fn line_number(&self) -> Option<u64> {
        match self {
            TokenizerError::InvalidConfig(_) => None,
            TokenizerError::RecordHasUnexpectedTrailingColumn { line }
            | TokenizerError::RecordDoesNotHaveExpectedColumn { line }
            | TokenizerError::QuotedFieldLengthLimitExceeded { line, .. }
            | TokenizerError::EndOfFileInQuotedField { line }
            | TokenizerError::InvalidCharacterAfterQuote { line, .. } => Some(*line),
        }
    }
}

/// Result type alias for tokenizing operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            TokenizerError::InvalidConfig("x".to_string()).kind(),
            ErrorKind::Config
        );
        assert_eq!(
            TokenizerError::RecordDoesNotHaveExpectedColumn { line: 1 }.kind(),
            ErrorKind::Protocol
        );
        assert!(TokenizerError::QuotedFieldLengthLimitExceeded { limit: 8, line: 2 }.is_recoverable());
        assert!(!TokenizerError::EndOfFileInQuotedField { line: 3 }.is_recoverable());
    }

    #[test]
    fn test_invalid_character_message() {
        let err = TokenizerError::InvalidCharacterAfterQuote {
            character: 'b',
            quote: '"',
            line: 1,
        };
        assert!(
            err.to_string()
                .starts_with("Unexpected extra character 'b' after a value quoted by '\"'")
        );
        assert_eq!(err.line_number(), Some(1));
    }
}
