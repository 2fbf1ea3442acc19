use std::{fs::File, io::Read, ops::Range, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, Result};

/// Default header name for the independent (x) column.
pub const X_COLUMN: &str = "Size";

/// Default header name for the dependent (y) column.
pub const Y_COLUMN: &str = "Cost";

/// One (x, y) observation from the input table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Independent variable
    pub x: f64,

    /// Dependent variable
    pub y: f64,
}

/// An ordered, immutable collection of samples.
///
/// A dataset is created once, from a CSV source or an explicit vector, and
/// never mutated afterwards. It remembers the column names the samples were
/// read from so that presentation can label its output.
///
/// # Example
/// ```rust
/// # use linefit::Dataset;
/// let csv = "Size,Cost\n60,150\n80,200\n";
/// let data = Dataset::from_reader(csv.as_bytes(), "Size", "Cost").unwrap();
/// assert_eq!(data.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
    x_label: String,
    y_label: String,
}

impl Dataset {
    /// Creates a dataset from an explicit set of samples.
    ///
    /// The labels name the source columns, and are used when rendering the
    /// table and chart axes.
    pub fn new(
        samples: Vec<Sample>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            samples,
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    /// Loads a dataset from a CSV file.
    ///
    /// See [`Dataset::from_reader`] for the expected format.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be opened, plus everything
    /// [`Dataset::from_reader`] can return.
    pub fn from_path(path: impl AsRef<Path>, x_column: &str, y_column: &str) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, x_column, y_column)
    }

    /// Loads a dataset from CSV data.
    ///
    /// The input must have a header row containing at least the `x_column`
    /// and `y_column` names; every following row contributes one sample.
    /// Columns other than the two named ones are ignored, and the column
    /// order does not matter. Fields are trimmed of whitespace.
    ///
    /// # Errors
    /// - [`Error::MissingColumn`] if a named column is absent from the header.
    /// - [`Error::EmptyData`] if the input has no data rows.
    /// - [`Error::InvalidValue`] if a cell is not a number.
    /// - [`Error::Csv`] if the input is not well-formed CSV.
    pub fn from_reader<R: Read>(reader: R, x_column: &str, y_column: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(Error::EmptyData);
        }

        let x_index = column_index(&headers, x_column)?;
        let y_index = column_index(&headers, y_column)?;

        let mut samples = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            samples.push(Sample {
                x: parse_field(&record, x_index, row, x_column)?,
                y: parse_field(&record, y_index, row, y_column)?,
            });
        }

        if samples.is_empty() {
            return Err(Error::EmptyData);
        }

        log::debug!(
            "loaded {} samples from columns ({x_column}, {y_column})",
            samples.len()
        );
        Ok(Self::new(samples, x_column, y_column))
    }

    /// Returns the samples, in input order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the dataset holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the name of the independent (x) column.
    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Returns the name of the dependent (y) column.
    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Iterates over the x values, in input order.
    pub fn x_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|sample| sample.x)
    }

    /// Iterates over the y values, in input order.
    pub fn y_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|sample| sample.y)
    }

    /// Returns the `min..max` range of the x values.
    ///
    /// Returns `inf..-inf` for an empty dataset.
    #[must_use]
    pub fn x_range(&self) -> Range<f64> {
        value_range(self.x_iter())
    }

    /// Returns the `min..max` range of the y values.
    ///
    /// Returns `inf..-inf` for an empty dataset.
    #[must_use]
    pub fn y_range(&self) -> Range<f64> {
        value_range(self.y_iter())
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    min..max
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

fn parse_field(record: &StringRecord, index: usize, row: usize, column: &str) -> Result<f64> {
    let field = record.get(index).unwrap_or("");
    field.parse().map_err(|_| Error::InvalidValue {
        // Data rows start on line 2, after the header
        line: row + 2,
        column: column.to_string(),
    })
}
