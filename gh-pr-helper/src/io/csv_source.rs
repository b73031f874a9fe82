//! Streaming reader for the comments file.
//!
//! Rows are parsed lazily, one [`CommentRecord`] at a time, after the header
//! row has been checked for the configured columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::record::{ColumnMap, CommentRecord, resolve_columns};

/// Explicit parsing rules for the comments file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: u8,
    /// `None` disables quoting: quote characters are kept as field content.
    pub quote: Option<u8>,
    pub has_headers: bool,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: Some(b'"'),
            has_headers: true,
        }
    }
}

impl CsvFormat {
    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(false);
        match self.quote {
            Some(quote) => builder.quote(quote).quoting(true),
            None => builder.quoting(false),
        };
        builder
    }
}

/// Iterator over the records of a comments file, in file order.
pub struct CommentReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnMap,
    row: csv::StringRecord,
}

impl CommentReader<File> {
    /// Open `path` and validate its header row.
    pub fn open(
        path: &Path,
        format: &CsvFormat,
        id_column: &str,
        feedback_column: &str,
    ) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        Self::from_reader(file, format, id_column, feedback_column)
            .with_context(|| format!("read {}", path.display()))
    }
}

impl<R: Read> CommentReader<R> {
    /// Wrap `input` and resolve the id and feedback columns from its header.
    pub fn from_reader(
        input: R,
        format: &CsvFormat,
        id_column: &str,
        feedback_column: &str,
    ) -> Result<Self> {
        let mut reader = format.reader_builder().from_reader(input);
        let headers = reader.headers().context("read header row")?;
        let names: Vec<&str> = headers.iter().collect();
        let columns = resolve_columns(&names, id_column, feedback_column)?;
        debug!(?columns, headers = names.len(), "resolved columns");
        Ok(Self {
            reader,
            columns,
            row: csv::StringRecord::new(),
        })
    }

    pub fn columns(&self) -> ColumnMap {
        self.columns
    }
}

impl<R: Read> Iterator for CommentReader<R> {
    type Item = Result<CommentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(false) => None,
            Ok(true) => {
                let fields: Vec<&str> = self.row.iter().collect();
                let line = self.row.position().map_or(0, csv::Position::line);
                Some(
                    self.columns
                        .extract(&fields)
                        .with_context(|| format!("row at line {line}")),
                )
            }
            Err(err) => Some(Err(err).context("parse comments csv")),
        }
    }
}
