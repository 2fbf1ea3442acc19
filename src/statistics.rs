//! Summary statistics and goodness-of-fit for a fitted line
//!
//! This module provides the descriptive statistics the estimator is built
//! from, and the R² goodness-of-fit derived from a [`LinearFit`].
//!
//! - [`mean`]: Arithmetic mean of a sequence.
//! - [`r_squared`]: Proportion of variance explained by predictions.
//! - [`FitQuality`]: R² plus the sums of squares it was computed from.

use crate::{
    error::{Error, Result},
    Dataset, LinearFit,
};

/// Computes the arithmetic mean of a sequence of values.
///
/// Returns NaN if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = linefit::statistics::mean(values.into_iter());
/// assert_eq!(m, 2.0);
/// ```
pub fn mean(data: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0.0;
    for value in data {
        sum += value;
        count += 1.0;
    }
    sum / count
}

/// Calculates the R-squared value for a set of predictions.
///
/// R-squared tells you how well the predictions explain the data:
/// - `0` means they explain none of the variation.
/// - `1` means they explain all the variation.
/// - Negative values mean they do worse than predicting the mean.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - ŷ_i)²
///   SS_tot = Σ (y_i - ȳ)²
/// ```
/// </div>
///
/// # Parameters
/// - `y`: The actual (observed) values.
/// - `y_fit`: The predicted values. Zipped with `y`; extra elements in the
///   longer sequence are ignored.
///
/// # Errors
/// Returns [`Error::ConstantY`] when every observed value is identical,
/// since `SS_tot` is then zero and the ratio is undefined.
///
/// # Example
/// ```rust
/// # use linefit::statistics::r_squared;
/// let y = vec![1.0, 2.0, 3.0];
/// let y_fit = vec![1.0, 2.0, 3.0];
/// let r2 = r_squared(y.into_iter(), y_fit.into_iter()).unwrap();
/// assert_eq!(r2, 1.0);
/// ```
pub fn r_squared(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> Result<f64> {
    let pairs: Vec<(f64, f64)> = y.zip(y_fit).collect();
    let mean_y = mean(pairs.iter().map(|(y, _)| *y));

    let (ss_res, ss_tot) = sums_of_squares(pairs.iter().copied(), mean_y)?;
    Ok(1.0 - ss_res / ss_tot)
}

/// Goodness-of-fit of a [`LinearFit`] against the dataset it was fitted to.
///
/// Purely derived from the fit and the samples; nothing here is persisted.
///
/// # Example
/// ```rust
/// # use linefit::{Dataset, FitQuality, LinearFit};
/// let csv = "Size,Cost\n1,2\n2,4\n3,6\n4,8\n";
/// let data = Dataset::from_reader(csv.as_bytes(), "Size", "Cost").unwrap();
/// let fit = LinearFit::fit(&data).unwrap();
/// let quality = FitQuality::evaluate(&data, &fit).unwrap();
/// assert_eq!(quality.r_squared(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitQuality {
    r_squared: f64,
    ss_res: f64,
    ss_tot: f64,
}

impl FitQuality {
    /// Evaluates how well `fit` explains `data`.
    ///
    /// # Errors
    /// Returns [`Error::ConstantY`] when every y value is identical.
    pub fn evaluate(data: &Dataset, fit: &LinearFit) -> Result<Self> {
        let mean_y = mean(data.y_iter());
        let pairs = data.samples().iter().map(|s| (s.y, fit.y(s.x)));
        let (ss_res, ss_tot) = sums_of_squares(pairs, mean_y)?;

        let r_squared = 1.0 - ss_res / ss_tot;
        log::debug!("fit quality: R² = {r_squared} (SS_res = {ss_res}, SS_tot = {ss_tot})");

        Ok(Self {
            r_squared,
            ss_res,
            ss_tot,
        })
    }

    /// Returns R²: the fraction of y variance the fit explains.
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Returns the residual sum of squares `Σ(y − ŷ)²`.
    #[must_use]
    pub fn ss_res(&self) -> f64 {
        self.ss_res
    }

    /// Returns the total sum of squares `Σ(y − ȳ)²`.
    #[must_use]
    pub fn ss_tot(&self) -> f64 {
        self.ss_tot
    }
}

/// Returns (`SS_res`, `SS_tot`) over (observed, predicted) pairs,
/// or [`Error::ConstantY`] when `SS_tot` is degenerate.
fn sums_of_squares(
    pairs: impl Iterator<Item = (f64, f64)>,
    mean_y: f64,
) -> Result<(f64, f64)> {
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    let mut sum_yy = 0.0;
    for (y, y_fit) in pairs {
        ss_res += (y - y_fit).powi(2);
        ss_tot += (y - mean_y).powi(2);
        sum_yy += y * y;
    }

    // When every y is identical the deviations cancel to rounding noise
    if ss_tot.abs() <= f64::EPSILON * sum_yy.abs().max(1.0) {
        return Err(Error::ConstantY);
    }
    Ok((ss_res, ss_tot))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{assert_close, Sample};

    fn dataset(samples: &[(f64, f64)]) -> Dataset {
        let samples = samples.iter().map(|&(x, y)| Sample { x, y }).collect();
        Dataset::new(samples, "Size", "Cost")
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean([1.0, 2.0, 3.0].into_iter()), 2.0);
    }

    #[test]
    fn mean_of_nothing_is_nan() {
        assert!(mean(std::iter::empty()).is_nan());
    }

    #[test]
    fn r_squared_perfect_fit() {
        let y = vec![1.0, 2.0, 3.0];
        let y_fit = vec![1.0, 2.0, 3.0];
        let r2 = r_squared(y.into_iter(), y_fit.into_iter()).unwrap();
        assert_eq!(r2, 1.0);
    }

    #[test]
    fn r_squared_mean_prediction_explains_nothing() {
        // Predicting the mean everywhere: SS_res == SS_tot
        let y = vec![1.0, 2.0, 3.0];
        let y_fit = vec![2.0, 2.0, 2.0];
        let r2 = r_squared(y.into_iter(), y_fit.into_iter()).unwrap();
        assert_eq!(r2, 0.0);
    }

    #[test]
    fn r_squared_can_go_negative() {
        let y = vec![1.0, 2.0, 3.0];
        let y_fit = vec![10.0, 10.0, 10.0];
        let r2 = r_squared(y.into_iter(), y_fit.into_iter()).unwrap();
        assert_eq!(r2, -96.0);
    }

    #[test]
    fn r_squared_constant_y_is_an_error() {
        let y = vec![5.0, 5.0, 5.0];
        let y_fit = vec![5.0, 5.0, 5.0];
        let err = r_squared(y.into_iter(), y_fit.into_iter()).unwrap_err();
        assert!(matches!(err, Error::ConstantY));
    }

    #[test]
    fn quality_of_a_perfect_line() {
        let data = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        let quality = FitQuality::evaluate(&data, &fit).unwrap();
        assert_eq!(quality.r_squared(), 1.0);
        assert_eq!(quality.ss_res(), 0.0);
        assert_eq!(quality.ss_tot(), 20.0);
    }

    #[test]
    fn quality_of_a_noisy_line() {
        let data = dataset(&[(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8)]);
        let fit = LinearFit::fit(&data).unwrap();
        let quality = FitQuality::evaluate(&data, &fit).unwrap();
        assert!(quality.r_squared() > 0.99);
        assert!(quality.r_squared() < 1.0);
        assert!(quality.ss_res() > 0.0);
    }

    #[test]
    fn quality_rejects_constant_y() {
        // A flat line fits, but R² divides by a zero SS_tot
        let data = dataset(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        let err = FitQuality::evaluate(&data, &fit).unwrap_err();
        assert!(matches!(err, Error::ConstantY));
    }

    #[test]
    fn quality_is_row_order_invariant() {
        let a = dataset(&[(60.0, 150.0), (75.0, 190.0), (80.0, 205.0), (120.0, 300.0)]);
        let b = dataset(&[(80.0, 205.0), (120.0, 300.0), (60.0, 150.0), (75.0, 190.0)]);

        let qa = FitQuality::evaluate(&a, &LinearFit::fit(&a).unwrap()).unwrap();
        let qb = FitQuality::evaluate(&b, &LinearFit::fit(&b).unwrap()).unwrap();
        assert_close!(qa.r_squared(), qb.r_squared(), 1e-12);
    }
}
