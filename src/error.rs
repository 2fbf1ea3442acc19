//! Error types for loading samples and fitting the regression line
//!
//! This module defines the common errors encountered when reading tabular
//! input or computing the fit, along with a convenient `Result` alias.

/// Errors that can occur while loading samples or fitting the regression line.
///
/// This enum represents the common failure modes when reading two-column
/// tabular input and estimating the line's coefficients.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The input could not be parsed as CSV.
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// The input has a header row but no data rows.
    #[error("The input contains no data rows")]
    EmptyData,

    /// A required column is absent from the header row.
    #[error("The column '{0}' is missing in the CSV file")]
    MissingColumn(String),

    /// A cell could not be parsed as a number.
    #[error("Line {line}: the value in column '{column}' is not a number")]
    InvalidValue {
        /// 1-based line number in the input, counting the header row
        line: usize,
        /// Name of the offending column
        column: String,
    },

    /// Fewer than two samples were provided.
    ///
    /// With a single point the slope denominator is zero; the line is
    /// undetermined.
    #[error("At least 2 samples are required to fit a line, got {n}")]
    NotEnoughData {
        /// Number of samples provided
        n: usize,
    },

    /// Every x value is identical, so the slope is undefined.
    ///
    /// The closed-form estimator divides by the x variance (`SS_xx`).
    #[error("All x values are identical; the slope is undefined")]
    ConstantX,

    /// Every y value is identical, so R² is undefined.
    ///
    /// The goodness-of-fit divides by the total sum of squares (`SS_tot`).
    #[error("All y values are identical; R-squared is undefined")]
    ConstantY,
}

/// Result type for loading and fitting
pub type Result<T> = std::result::Result<T, Error>;
