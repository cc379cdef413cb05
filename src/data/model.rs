// ---------------------------------------------------------------------------
// Column – one named series of the source table
// ---------------------------------------------------------------------------

/// A named column of samples. Missing cells are stored as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Table – the multi-series input
// ---------------------------------------------------------------------------

/// A rectangular table in header order. Every column has `row_count` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns that all have the same length.
    pub(crate) fn from_columns(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map_or(0, |c| c.values.len());
        debug_assert!(columns.iter().all(|c| c.values.len() == row_count));
        Table { columns, row_count }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

// ---------------------------------------------------------------------------
// Samples – the waveform input
// ---------------------------------------------------------------------------

/// A flat sequence of samples with no column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples(Vec<f64>);

impl Samples {
    pub fn new(values: Vec<f64>) -> Self {
        Samples(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
