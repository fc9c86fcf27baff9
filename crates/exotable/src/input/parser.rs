//! Delimited text reader for catalog exports.
//!
//! Catalog files come as CSV or TSV, sometimes prefixed by comment blocks
//! (the NASA archive) or with header rows that do not match their columns
//! (TEPCat). Everything is read as strings; no type inference happens here.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{DataTable, SourceMetadata};
use crate::error::{ExoError, Result};

/// Candidate delimiters, in order of preference on ties.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Lines sampled for delimiter detection.
const SAMPLE_LINES: usize = 10;

/// How a delimited file is read.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter (None = auto-detect).
    pub delimiter: Option<u8>,
    /// The first non-comment line is a header row.
    pub has_header: bool,
    /// Names used instead of the file's header row. The file's own header
    /// row, if any, is still consumed.
    pub header_override: Option<Vec<String>>,
    /// Lines starting with this byte are skipped.
    pub comment: Option<u8>,
    /// Trim whitespace around fields.
    pub trim: bool,
    /// Stop after this many data rows.
    pub max_rows: Option<usize>,
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            header_override: None,
            comment: None,
            trim: false,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Reads delimited text into a [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read a whole file, returning its table and metadata about the file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| ExoError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents, self.config.comment)?,
        };
        let table = self.parse_bytes(&contents, delimiter)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            content_hash(&contents),
            contents.len() as u64,
            format_name(delimiter).to_string(),
            table.row_count(),
            table.column_count(),
        );
        Ok((table, metadata))
    }

    /// Read in-memory delimited text.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = self.reader(bytes, delimiter);

        let file_header: Option<Vec<String>> = if self.config.has_header {
            Some(reader.headers()?.iter().map(str::to_string).collect())
        } else {
            None
        };

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let mut rows = reader
            .records()
            .take(limit)
            .map(|record| -> Result<Vec<String>> {
                Ok(record?.iter().map(str::to_string).collect())
            })
            .collect::<Result<Vec<_>>>()?;

        let headers = match (&self.config.header_override, file_header) {
            (Some(names), _) => names.clone(),
            (None, Some(names)) => names,
            (None, None) => generated_headers(&rows),
        };

        if headers.is_empty() {
            return Err(ExoError::EmptyData("No columns found".to_string()));
        }

        // Ragged rows: pad with nulls, drop trailing extras
        for row in &mut rows {
            row.resize(headers.len(), String::new());
        }

        Ok(DataTable::new(headers, rows))
    }

    fn reader<'a>(&self, bytes: &'a [u8], delimiter: u8) -> csv::Reader<&'a [u8]> {
        let trim = if self.config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };
        csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .comment(self.config.comment)
            .trim(trim)
            .flexible(true)
            .from_reader(bytes)
    }
}

/// `column_1`, `column_2`, ... for headerless files.
fn generated_headers(rows: &[Vec<String>]) -> Vec<String> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (1..=width).map(|i| format!("column_{}", i)).collect()
}

fn content_hash(bytes: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(bytes))
}

fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

/// Pick the delimiter splitting the sampled lines into the most fields,
/// preferring delimiters that give every line the same field count.
fn detect_delimiter(bytes: &[u8], comment: Option<u8>) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| comment.is_none_or(|c| !line.as_bytes().starts_with(&[c])))
        .take(SAMPLE_LINES)
        .collect();

    if sample.is_empty() {
        return Err(ExoError::EmptyData("No lines to analyze".to_string()));
    }

    let best = DELIMITERS
        .iter()
        .enumerate()
        .filter_map(|(rank, &delimiter)| {
            let counts: Vec<usize> = sample
                .iter()
                .map(|line| count_unquoted(line, delimiter))
                .collect();
            let header_fields = counts[0];
            if header_fields == 0 {
                return None;
            }
            let consistent = counts.iter().all(|&c| c == header_fields);
            // Ties go to the earlier candidate
            Some(((consistent, header_fields, usize::MAX - rank), delimiter))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, delimiter)| delimiter);

    Ok(best.unwrap_or(b','))
}

/// Occurrences of `delimiter` outside double quotes.
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    line.bytes()
        .scan(false, |quoted, b| {
            if b == b'"' {
                *quoted = !*quoted;
            }
            Some(!*quoted && b == delimiter)
        })
        .filter(|&hit| hit)
        .count()
}
