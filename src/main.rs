//! csv-tokenize CLI - tokenize CSV files into records

use clap::Parser;
use csv_tokenizer::{
    CsvTokenizer, ErrorKind, Newline, TextLines, TokenizerConfig, TokenizerError,
};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Streaming CSV tokenizer.
///
/// Splits each file into records and columns, supporting multi-line quoted
/// values, multi-character delimiters, comment lines and null literals.
#[derive(Parser, Debug)]
#[command(name = "csv-tokenize")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file(s) to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Delimiter; characters after the first must follow it to count as a delimiter
    #[arg(short = 'd', long, default_value = ",")]
    delimiter: String,

    /// Quote character (single character, or 'none')
    #[arg(short = 'q', long)]
    quote: Option<String>,

    /// Escape character (single character, or 'none')
    #[arg(short = 'e', long)]
    escape: Option<String>,

    /// Newline placed inside multi-line quoted values
    #[arg(long, default_value = "crlf")]
    newline: NewlineArg,

    /// Trim spaces around values that are not quoted
    #[arg(short = 't', long)]
    trim: bool,

    /// Treat quotes not next to a delimiter or end of line as content
    #[arg(long)]
    accept_stray_quotes: bool,

    /// Maximum size in bytes of a quoted value
    #[arg(long, default_value_t = csv_tokenizer::DEFAULT_MAX_QUOTED_FIELD_LENGTH)]
    max_quoted_field_length: usize,

    /// Skip lines starting with this marker
    #[arg(short = 'c', long)]
    comment: Option<String>,

    /// Literal that is read as null
    #[arg(short = 'n', long)]
    null_string: Option<String>,

    /// Drop the first line of each file
    #[arg(long)]
    skip_header: bool,

    /// Report blank lines as records instead of skipping them
    #[arg(long)]
    keep_empty_lines: bool,

    /// Skip malformed records instead of stopping at the first one
    #[arg(long)]
    skip_invalid: bool,

    /// Output format: text (default), json, or csv
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum NewlineArg {
    Crlf,
    Cr,
    Lf,
}

impl From<NewlineArg> for Newline {
    fn from(arg: NewlineArg) -> Self {
        match arg {
            NewlineArg::Crlf => Newline::CRLF,
            NewlineArg::Cr => Newline::CR,
            NewlineArg::Lf => Newline::LF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(io::stdout());
    let mut exit_code = ExitCode::SUCCESS;

    for file in &args.files {
        match tokenize_file(file, &config, &args, &mut writer) {
            Ok(records) => {
                tracing::info!(file = %file.display(), records, "tokenized");
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", file.display(), e);
                exit_code = ExitCode::FAILURE;
            }
        }
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error writing output: {e}");
        exit_code = ExitCode::FAILURE;
    }

    exit_code
}

fn build_config(args: &Args) -> csv_tokenizer::Result<TokenizerConfig> {
    let mut builder = TokenizerConfig::builder(args.delimiter.as_str());

    if let Some(ref quote_str) = args.quote {
        match char_option("quote", quote_str)? {
            Some(c) => builder.quote(c),
            None => builder.no_quote(),
        };
    }

    if let Some(ref escape_str) = args.escape {
        match char_option("escape", escape_str)? {
            Some(c) => builder.escape(c),
            None => builder.no_escape(),
        };
    }

    builder
        .newline(args.newline.into())
        .trim_if_not_quoted(args.trim)
        .max_quoted_field_length(args.max_quoted_field_length);

    if args.accept_stray_quotes {
        builder.accept_stray_quotes();
    }
    if let Some(ref marker) = args.comment {
        builder.comment_line_marker(marker.as_str());
    }
    if let Some(ref null_string) = args.null_string {
        builder.null_string(null_string.as_str());
    }

    builder.build()
}

/// Parse a single character option; 'none' disables it.
fn char_option(name: &str, value: &str) -> csv_tokenizer::Result<Option<char>> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(TokenizerError::InvalidConfig(format!(
            "{name} must be a single character or 'none', got {value:?}"
        ))),
    }
}

fn tokenize_file(
    path: &Path,
    config: &TokenizerConfig,
    args: &Args,
    writer: &mut csv::Writer<Stdout>,
) -> Result<u64, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let mut tokenizer = CsvTokenizer::new(config.clone(), TextLines::new(&text));

    if args.skip_header {
        tokenizer.skip_header_line();
    }

    let mut records = 0;
    loop {
        match tokenizer.read_record_with(!args.keep_empty_lines) {
            Ok(Some(record)) => {
                let line = tokenizer.current_line_number();
                match args.format {
                    OutputFormat::Text => print_text_output(path, line, &record),
                    OutputFormat::Json => print_json_output(path, line, &record),
                    OutputFormat::Csv => writer.write_record(
                        record.iter().map(|column| column.as_deref().unwrap_or("")),
                    )?,
                }
                records += 1;
            }
            Ok(None) => break,
            Err(e) if args.skip_invalid && e.kind() != ErrorKind::Protocol => {
                let skipped = tokenizer.skip_current_line();
                tracing::warn!(
                    file = %path.display(),
                    line = e.line_number(),
                    error = %e,
                    skipped = ?skipped,
                    "skipping invalid record"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(records)
}

fn print_text_output(path: &Path, line: u64, record: &[Option<String>]) {
    let columns: Vec<String> = record
        .iter()
        .map(|column| match column {
            Some(value) => format!("{value:?}"),
            None => "null".to_string(),
        })
        .collect();
    println!("{}:{}: [{}]", path.display(), line, columns.join(", "));
}

fn print_json_output(path: &Path, line: u64, record: &[Option<String>]) {
    let columns: Vec<String> = record
        .iter()
        .map(|column| match column {
            Some(value) => json_string(value),
            None => "null".to_string(),
        })
        .collect();
    println!(
        r#"{{"file":{},"line":{},"columns":[{}]}}"#,
        json_string(&path.display().to_string()),
        line,
        columns.join(",")
    );
}

fn json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
