//! csv-tokenizer: streaming, line-based CSV tokenizer
//!
//! Turns a sequence of decoded text lines into logical CSV records, one column
//! at a time. Quoted values may span several physical lines.
//!
//! # Quick Start
//!
//! ```
//! use csv_tokenizer::{CsvTokenizer, TextLines, TokenizerConfig};
//!
//! let config = TokenizerConfig::builder(",").build().unwrap();
//! let mut tokenizer = CsvTokenizer::new(config, TextLines::new("aaa,bbb\nccc,ddd"));
//!
//! let mut records = Vec::new();
//! while tokenizer.next_record().unwrap() {
//!     let mut record = Vec::new();
//!     while tokenizer.has_next_column() {
//!         record.push(tokenizer.next_column().unwrap());
//!     }
//!     records.push(record);
//! }
//!
//! assert_eq!(records, vec![vec!["aaa", "bbb"], vec!["ccc", "ddd"]]);
//! ```
//!
//! # Dialect options
//!
//! ```
//! use csv_tokenizer::{Newline, TokenizerConfig};
//!
//! let config = TokenizerConfig::builder("|;")
//!     .quote('\'')
//!     .no_escape()
//!     .newline(Newline::LF)
//!     .trim_if_not_quoted(true)
//!     .comment_line_marker("#")
//!     .null_string("NULL")
//!     .max_quoted_field_length(1024)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.delimiter().following.as_deref(), Some(";"));
//! ```
//!
//! # Recovering from malformed records
//!
//! An oversized quoted value fails with a recoverable error. Calling
//! [`CsvTokenizer::skip_current_line`] drops the broken record and puts back any
//! lines the quoted value swallowed.
//!
//! ```
//! use csv_tokenizer::{CsvTokenizer, Newline, TokenizerConfig};
//!
//! let config = TokenizerConfig::builder(",")
//!     .newline(Newline::LF)
//!     .max_quoted_field_length(12)
//!     .build()
//!     .unwrap();
//! let lines = ["v1,\"0123", "v2,v3", "v4,v5"].map(String::from);
//! let mut tokenizer = CsvTokenizer::new(config, lines);
//!
//! assert!(tokenizer.next_record().unwrap());
//! assert_eq!(tokenizer.next_column().unwrap(), "v1");
//! let err = tokenizer.next_column().unwrap_err();
//! assert!(err.is_recoverable());
//!
//! assert_eq!(tokenizer.skip_current_line().as_deref(), Some("v1,\"0123"));
//! assert!(tokenizer.next_record().unwrap());
//! assert_eq!(tokenizer.next_column().unwrap(), "v2");
//! ```

mod config;
mod error;
mod lines;
mod tokenizer;

pub use config::{
    DEFAULT_MAX_QUOTED_FIELD_LENGTH, Delimiter, Escape, Newline, Quote, QuotesInQuotedFields,
    TokenizerBuilder, TokenizerConfig,
};
pub use error::{ErrorKind, Result, TokenizerError};
pub use lines::TextLines;
pub use tokenizer::CsvTokenizer;
