//! Utilities for displaying samples and regression results
//!
//! This module provides the two stateless renderers around a fit:
//! - [`data_table`]: an enumerated table of the input rows.
//! - [`results_panel`]: the text block summarizing R², the coefficients,
//!   and the regression equation.
//!
//! Both only format; writing to stdout (or into the chart) is left to the
//! caller.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};

use crate::{Dataset, FitQuality, LinearFit};

/// Number of decimal places used for reported coefficients and R².
pub const DEFAULT_PRECISION: usize = 4;

/// Builds an enumerated table of the input samples.
///
/// One row per sample, in input order, with the source column names in the
/// header. The returned [`Table`] implements `Display`.
///
/// # Example
/// ```rust
/// # use linefit::{display, Dataset};
/// let csv = "Size,Cost\n60,150\n80,200\n";
/// let data = Dataset::from_reader(csv.as_bytes(), "Size", "Cost").unwrap();
/// println!("{}", display::data_table(&data));
/// ```
#[must_use]
pub fn data_table(data: &Dataset) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new(format!("{} (x)", data.x_label())),
        Cell::new(format!("{} (y)", data.y_label())),
    ]);

    for (i, sample) in data.samples().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(sample.x).set_alignment(CellAlignment::Right),
            Cell::new(sample.y).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Formats the regression results panel.
///
/// The panel lists R², the intercept, the slope, and the regression
/// equation, each with [`DEFAULT_PRECISION`] decimal places. It is rendered
/// beneath the chart by the `plotting` feature and is also suitable for
/// stdout.
#[must_use]
pub fn results_panel(fit: &LinearFit, quality: &FitQuality) -> String {
    format!(
        "Regression Results:\n\n\
         R-squared: {r2:.p$}\n\
         b0 (intercept): {b0:.p$}\n\
         b1 (slope): {b1:.p$}\n\
         Regression equation: {equation}",
        r2 = quality.r_squared(),
        b0 = fit.intercept(),
        b1 = fit.slope(),
        equation = fit.equation(),
        p = DEFAULT_PRECISION,
    )
}
