use super::normalizer::NameNormalizer;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to access batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid batch CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{column}' not found in CSV header")]
    MissingColumn { column: String },
}

/// Which column to normalize and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub column: String,
    /// Appended column for normalized titles. `None` rewrites `column` in place.
    pub output_column: Option<String>,
}

impl BatchOptions {
    pub fn in_place(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            output_column: None,
        }
    }

    pub fn appending(column: impl Into<String>, output_column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            output_column: Some(output_column.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub matched: usize,
    pub unchanged: usize,
}

/// Streams `reader` to `writer`, normalizing one column of every record.
pub fn normalize_csv<R: Read, W: Write>(
    normalizer: &NameNormalizer,
    reader: R,
    writer: W,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError> {
    let started = Instant::now();
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let headers = csv_reader.headers()?.clone();
    let column_index = headers
        .iter()
        .position(|header| header.trim() == options.column.trim())
        .ok_or_else(|| BatchError::MissingColumn {
            column: options.column.clone(),
        })?;

    let mut output_headers = headers.clone();
    if let Some(output_column) = &options.output_column {
        output_headers.push_field(output_column);
    }
    csv_writer.write_record(&output_headers)?;

    let mut summary = BatchSummary::default();
    let mut record = csv::StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let title = record.get(column_index).unwrap_or_default();
        let resolved = normalizer.resolve(title);
        summary.rows += 1;
        match resolved {
            Some(_) => summary.matched += 1,
            None => summary.unchanged += 1,
        }
        let normalized = resolved.unwrap_or(title);

        let output: csv::StringRecord = if options.output_column.is_some() {
            record.iter().chain(std::iter::once(normalized)).collect()
        } else {
            record
                .iter()
                .enumerate()
                .map(|(index, field)| if index == column_index { normalized } else { field })
                .collect()
        };
        csv_writer.write_record(&output)?;
    }

    csv_writer.flush()?;

    debug!(column = %options.column, "batch column normalized");
    info!(
        rows = summary.rows,
        matched = summary.matched,
        unchanged = summary.unchanged,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch normalization complete"
    );

    Ok(summary)
}

pub fn normalize_csv_file<P: AsRef<Path>, Q: AsRef<Path>>(
    normalizer: &NameNormalizer,
    input: P,
    output: Q,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!(input = %input.display(), output = %output.display(), "normalizing CSV file");

    let reader = std::fs::File::open(input)?;
    let writer = std::fs::File::create(output)?;
    normalize_csv(normalizer, reader, writer, options)
}
