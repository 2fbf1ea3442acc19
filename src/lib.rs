//! # Linefit
//! ## Ordinary least-squares simple linear regression
//!
//! This crate fits a straight line `y = b0 + b1·x` to a set of (x, y) samples
//! using the closed-form least-squares estimator, reports how well the line
//! explains the data (R²), and renders the result as a chart and as a table.
//!
//! It is designed around two-column tabular input: a CSV file with a header
//! row naming the independent and dependent columns (`Size` and `Cost` by
//! default), one sample per row.
//!
//! The simplest use-case is to load a file and fit it:
//! ```rust
//! use linefit::{Dataset, FitQuality, LinearFit};
//!
//! let csv = "Size,Cost\n1,2\n2,4\n3,6\n";
//! let data = Dataset::from_reader(csv.as_bytes(), "Size", "Cost").unwrap();
//!
//! let fit = LinearFit::fit(&data).unwrap();
//! let quality = FitQuality::evaluate(&data, &fit).unwrap();
//!
//! assert_eq!(fit.slope(), 2.0);
//! assert_eq!(fit.intercept(), 0.0);
//! assert_eq!(quality.r_squared(), 1.0);
//! ```
//!
//! # Core Concepts
//! - A [`Sample`] is one (x, y) observation; a [`Dataset`] is an ordered,
//!   immutable collection of them plus the column names they came from.
//! - A [`LinearFit`] is the fitted line: an intercept (`b0`) and a slope
//!   (`b1`), computed once from a dataset and immutable afterwards.
//! - A [`FitQuality`] is the derived goodness-of-fit: R² plus the residual
//!   and total sums of squares it was computed from.
//! - Presentation is stateless: [`display`] prints a table of the input rows
//!   and formats the results panel, and [`plot`] (behind the default
//!   `plotting` feature) draws the scatter, the fitted line, and the panel
//!   to an SVG or PNG.
//!
//! # Degenerate inputs
//! The estimator needs at least two samples, and the closed form divides by
//! the x variance. Rather than producing NaN, degenerate inputs are reported
//! as errors: [`error::Error::ConstantX`] when every x is identical (the
//! slope is undefined) and [`error::Error::ConstantY`] when every y is
//! identical (R² is undefined).
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // Sample counts are tiny compared to f64's mantissa
#![allow(clippy::similar_names)] //       ss_xx and ss_xy are the standard names
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod display;
pub mod error;
pub mod statistics;

#[cfg(feature = "plotting")]
#[cfg_attr(docsrs, doc(cfg(feature = "plotting")))]
pub mod plot;

mod fit;
mod sample;

pub use fit::LinearFit;
pub use sample::{Dataset, Sample, X_COLUMN, Y_COLUMN};
pub use statistics::FitQuality;
