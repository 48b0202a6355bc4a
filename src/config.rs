//! Tokenizer configuration and its validating builder.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TokenizerError};

/// Default upper bound on the size of a quoted value (128 KiB).
pub const DEFAULT_MAX_QUOTED_FIELD_LENGTH: usize = 131_072;

/// Field delimiter: one designated character, optionally followed by a fixed string.
///
/// A delimiter such as `"|;"` is recognized only when `|` is immediately followed
/// by `;`. A lone `|` is ordinary field content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiter {
    /// The character that starts the delimiter.
    pub char: char,
    /// The rest of a multi-character delimiter.
    pub following: Option<String>,
}

impl Delimiter {
    /// Split a delimiter string into its designated character and following string.
    pub fn parse(delimiter: &str) -> Result<Self> {
        let mut chars = delimiter.chars();
        let first = chars.next().ok_or_else(|| {
            TokenizerError::InvalidConfig("an empty delimiter is not accepted".to_string())
        })?;
        let rest = chars.as_str();
        Ok(Self {
            char: first,
            following: (!rest.is_empty()).then(|| rest.to_string()),
        })
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char)?;
        if let Some(following) = &self.following {
            write!(f, "{following}")?;
        }
        Ok(())
    }
}

/// Quote character configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// No quoting.
    None,
    /// Quote with the specified character.
    Some(char),
}

impl Default for Quote {
    fn default() -> Self {
        Quote::Some('"')
    }
}

impl Quote {
    /// Returns the quote character if set.
    pub const fn char(&self) -> Option<char> {
        match self {
            Quote::None => None,
            Quote::Some(c) => Some(*c),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::None => write!(f, "none"),
            Quote::Some(c) => write!(f, "{c}"),
        }
    }
}

/// Escape character configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Escape {
    /// No escaping.
    None,
    /// Escape with the specified character.
    Some(char),
}

impl Default for Escape {
    fn default() -> Self {
        Escape::Some('\\')
    }
}

impl Escape {
    /// Returns the escape character if set.
    pub const fn char(&self) -> Option<char> {
        match self {
            Escape::None => None,
            Escape::Some(c) => Some(*c),
        }
    }
}

/// Line terminator used to rebuild newlines embedded in multi-line quoted values.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Newline {
    /// Windows-style line ending (\r\n).
    #[default]
    CRLF,
    /// Old Mac-style line ending (\r).
    CR,
    /// Unix-style line ending (\n).
    LF,
}

impl Newline {
    /// Returns the literal terminator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Newline::CRLF => "\r\n",
            Newline::CR => "\r",
            Newline::LF => "\n",
        }
    }
}

impl FromStr for Newline {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "\r\n" => Ok(Newline::CRLF),
            "\r" => Ok(Newline::CR),
            "\n" => Ok(Newline::LF),
            other => Err(TokenizerError::InvalidConfig(format!(
                "\"{}\" is not accepted as a newline",
                escape_control(other)
            ))),
        }
    }
}

/// How quote characters inside a quoted value are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuotesInQuotedFields {
    /// A quote inside a quoted value is literal only when doubled.
    #[default]
    StrictRfc4180,
    /// A lone quote not next to a delimiter or end of line is literal content.
    ///
    /// Assumes fields contain no delimiters.
    AcceptStrayQuotes,
}

/// Immutable, validated tokenizer configuration.
///
/// Built with [`TokenizerConfig::builder`].
///
/// # Example
///
/// ```
/// use csv_tokenizer::{Newline, TokenizerConfig};
///
/// let config = TokenizerConfig::builder("\t")
///     .newline(Newline::LF)
///     .comment_line_marker("#")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.delimiter().char, '\t');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    delimiter: Delimiter,
    quote: Quote,
    escape: Escape,
    newline: Newline,
    trim_if_not_quoted: bool,
    quotes_in_quoted_fields: QuotesInQuotedFields,
    max_quoted_field_length: usize,
    comment_line_marker: Option<String>,
    null_string: Option<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter {
                char: ',',
                following: None,
            },
            quote: Quote::default(),
            escape: Escape::default(),
            newline: Newline::default(),
            trim_if_not_quoted: false,
            quotes_in_quoted_fields: QuotesInQuotedFields::default(),
            max_quoted_field_length: DEFAULT_MAX_QUOTED_FIELD_LENGTH,
            comment_line_marker: None,
            null_string: None,
        }
    }
}

impl TokenizerConfig {
    /// Start building a configuration for the given delimiter.
    ///
    /// The first character of `delimiter` is the designated delimiter character;
    /// the remainder, if any, must follow it for the delimiter to be recognized.
    pub fn builder(delimiter: impl Into<String>) -> TokenizerBuilder {
        TokenizerBuilder::new(delimiter)
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    pub fn quote(&self) -> Quote {
        self.quote
    }

    pub fn escape(&self) -> Escape {
        self.escape
    }

    pub fn newline(&self) -> Newline {
        self.newline
    }

    pub fn trim_if_not_quoted(&self) -> bool {
        self.trim_if_not_quoted
    }

    pub fn quotes_in_quoted_fields(&self) -> QuotesInQuotedFields {
        self.quotes_in_quoted_fields
    }

    pub fn max_quoted_field_length(&self) -> usize {
        self.max_quoted_field_length
    }

    pub fn comment_line_marker(&self) -> Option<&str> {
        self.comment_line_marker.as_deref()
    }

    pub fn null_string(&self) -> Option<&str> {
        self.null_string.as_deref()
    }
}

/// Builder for [`TokenizerConfig`].
///
/// Setters return `&mut Self` for chaining; [`build`](Self::build) validates the
/// combination and produces the immutable configuration.
#[derive(Debug, Clone)]
pub struct TokenizerBuilder {
    delimiter: String,
    quote: Quote,
    escape: Escape,
    newline: Newline,
    trim_if_not_quoted: bool,
    quotes_in_quoted_fields: QuotesInQuotedFields,
    max_quoted_field_length: usize,
    comment_line_marker: Option<String>,
    null_string: Option<String>,
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self::new(",")
    }
}

impl TokenizerBuilder {
    /// Create a builder with default settings for the given delimiter.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            quote: Quote::default(),
            escape: Escape::default(),
            newline: Newline::default(),
            trim_if_not_quoted: false,
            quotes_in_quoted_fields: QuotesInQuotedFields::default(),
            max_quoted_field_length: DEFAULT_MAX_QUOTED_FIELD_LENGTH,
            comment_line_marker: None,
            null_string: None,
        }
    }

    /// Set the quote character.
    pub fn quote(&mut self, quote: char) -> &mut Self {
        self.quote = Quote::Some(quote);
        self
    }

    /// Disable quoting.
    pub fn no_quote(&mut self) -> &mut Self {
        self.quote = Quote::None;
        self
    }

    /// Set the escape character.
    pub fn escape(&mut self, escape: char) -> &mut Self {
        self.escape = Escape::Some(escape);
        self
    }

    /// Disable escaping.
    pub fn no_escape(&mut self) -> &mut Self {
        self.escape = Escape::None;
        self
    }

    /// Set the newline used inside multi-line quoted values.
    pub fn newline(&mut self, newline: Newline) -> &mut Self {
        self.newline = newline;
        self
    }

    /// Trim leading and trailing spaces of values that are not quoted.
    pub fn trim_if_not_quoted(&mut self, trim: bool) -> &mut Self {
        self.trim_if_not_quoted = trim;
        self
    }

    /// Set how quotes inside quoted values are handled.
    pub fn quotes_in_quoted_fields(&mut self, policy: QuotesInQuotedFields) -> &mut Self {
        self.quotes_in_quoted_fields = policy;
        self
    }

    /// Shorthand for [`QuotesInQuotedFields::AcceptStrayQuotes`].
    pub fn accept_stray_quotes(&mut self) -> &mut Self {
        self.quotes_in_quoted_fields(QuotesInQuotedFields::AcceptStrayQuotes)
    }

    /// Set the maximum size in bytes of a quoted value.
    pub fn max_quoted_field_length(&mut self, max: usize) -> &mut Self {
        self.max_quoted_field_length = max;
        self
    }

    /// Skip lines starting with this marker.
    pub fn comment_line_marker(&mut self, marker: impl Into<String>) -> &mut Self {
        self.comment_line_marker = Some(marker.into());
        self
    }

    /// Map columns equal to this literal to null.
    pub fn null_string(&mut self, null_string: impl Into<String>) -> &mut Self {
        self.null_string = Some(null_string.into());
        self
    }

    /// Validate the settings and build the configuration.
    pub fn build(&self) -> Result<TokenizerConfig> {
        let delimiter = Delimiter::parse(&self.delimiter)?;

        if self.max_quoted_field_length == 0 {
            return Err(TokenizerError::InvalidConfig(
                "max_quoted_field_length must be positive".to_string(),
            ));
        }

        // Leading/trailing spaces next to stray quotes have no single reading,
        // e.g. `val1,  ""val2""  ,val3`.
        if self.trim_if_not_quoted
            && self.quotes_in_quoted_fields != QuotesInQuotedFields::StrictRfc4180
        {
            return Err(TokenizerError::InvalidConfig(
                "trim_if_not_quoted requires quotes_in_quoted_fields to be StrictRfc4180"
                    .to_string(),
            ));
        }

        Ok(TokenizerConfig {
            delimiter,
            quote: self.quote,
            escape: self.escape,
            newline: self.newline,
            trim_if_not_quoted: self.trim_if_not_quoted,
            quotes_in_quoted_fields: self.quotes_in_quoted_fields,
            max_quoted_field_length: self.max_quoted_field_length,
            comment_line_marker: self.comment_line_marker.clone(),
            null_string: self.null_string.clone(),
        })
    }
}

/// Render control characters visibly for error messages.
fn escape_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) <= 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
