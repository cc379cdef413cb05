use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::model::{Column, Samples, Table};
use super::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a header CSV (one column per series, one row per time step).
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let table = read_table(open(path)?)?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Load a headerless CSV holding one flat sequence of samples.
pub fn load_samples(path: &Path) -> Result<Samples, LoadError> {
    let samples = read_samples(open(path)?)?;
    log::info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Table reader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then numeric rows.
/// Empty cells load as `NaN`. A nameless all-empty last column (left behind
/// by a trailing `,` on every line) is dropped.
pub fn read_table<R: Read>(input: R) -> Result<Table, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut all_blank = vec![true; headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        for (col_idx, cell) in record.iter().enumerate() {
            if !cell.is_empty() {
                all_blank[col_idx] = false;
            }
            values[col_idx].push(parse_cell(cell, row_no + 1, || {
                headers[col_idx].clone()
            })?);
        }
    }

    if values[0].is_empty() {
        return Err(LoadError::Empty);
    }

    let last = headers.len() - 1;
    let drop_last = last > 0 && headers[last].is_empty() && all_blank[last];

    let mut columns: Vec<Column> = headers
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (name, values))| {
            let name = if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name
            };
            Column { name, values }
        })
        .collect();

    if drop_last {
        log::warn!("Dropping empty trailing column (line-terminating delimiter)");
        columns.pop();
    }

    Ok(Table::from_columns(columns))
}

// ---------------------------------------------------------------------------
// Flat sample reader
// ---------------------------------------------------------------------------

/// Headerless layout: either one comma-separated row or one value per line.
/// A trailing empty field on a line is ignored.
pub fn read_samples<R: Read>(input: R) -> Result<Samples, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let row_no = rows.len() + 1;
        let mut fields: Vec<&str> = record.iter().collect();
        if fields.len() > 1 && fields.last() == Some(&"") {
            fields.pop();
        }
        let row = fields
            .iter()
            .enumerate()
            .map(|(col_idx, cell)| parse_cell(cell, row_no, || col_idx.to_string()))
            .collect::<Result<Vec<f64>, LoadError>>()?;
        rows.push(row);
    }

    let samples: Vec<f64> = match rows.len() {
        0 => Vec::new(),
        1 => rows.pop().unwrap_or_default(),
        n => {
            let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
            if widest > 1 {
                return Err(LoadError::Shape {
                    rows: n,
                    columns: widest,
                });
            }
            rows.into_iter().flatten().collect()
        }
    };

    if samples.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(Samples::new(samples))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_cell(cell: &str, row: usize, column: impl FnOnce() -> String) -> Result<f64, LoadError> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>().map_err(|_| LoadError::NotNumeric {
        row,
        column: column(),
        value: cell.to_string(),
    })
}
