use std::fmt;

use crate::{
    display::DEFAULT_PRECISION,
    error::{Error, Result},
    Dataset,
};

/// A straight line fitted to a dataset by ordinary least squares.
///
/// The line is `y = b0 + b1·x`, where `b0` is the intercept (the predicted y
/// at x = 0) and `b1` is the slope (the change in y per unit of x). Both are
/// computed once, in closed form, and the fit is immutable afterwards.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// SS_xy = Σ(x·y) − n·x̄·ȳ
/// SS_xx = Σ(x·x) − n·x̄·x̄
/// b1 = SS_xy / SS_xx
/// b0 = ȳ − b1·x̄
/// where
///   x̄, ȳ = arithmetic means of x and y, n = number of samples
/// ```
/// </div>
///
/// # Example
/// ```rust
/// # use linefit::{Dataset, LinearFit, Sample};
/// let samples = vec![
///     Sample { x: 1.0, y: 2.0 },
///     Sample { x: 2.0, y: 4.0 },
///     Sample { x: 3.0, y: 6.0 },
/// ];
/// let data = Dataset::new(samples, "Size", "Cost");
/// let fit = LinearFit::fit(&data).unwrap();
/// assert_eq!(fit.slope(), 2.0);
/// assert_eq!(fit.y(10.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    intercept: f64,
    slope: f64,
}

impl LinearFit {
    /// Fits a line to the dataset.
    ///
    /// # Errors
    /// - [`Error::NotEnoughData`] if the dataset holds fewer than two samples.
    /// - [`Error::ConstantX`] if every x value is identical.
    pub fn fit(data: &Dataset) -> Result<Self> {
        Self::from_xy(data.x_iter(), data.y_iter())
    }

    /// Fits a line to paired x and y sequences.
    ///
    /// The sequences are zipped; extra elements in the longer one are
    /// ignored.
    ///
    /// # Errors
    /// - [`Error::NotEnoughData`] if fewer than two pairs are provided.
    /// - [`Error::ConstantX`] if every x value is identical.
    pub fn from_xy(
        x: impl Iterator<Item = f64>,
        y: impl Iterator<Item = f64>,
    ) -> Result<Self> {
        let mut n = 0usize;
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        let (mut sum_xy, mut sum_xx) = (0.0, 0.0);
        for (x, y) in x.zip(y) {
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
            n += 1;
        }

        if n < 2 {
            return Err(Error::NotEnoughData { n });
        }

        let n = n as f64;
        let mean_x = sum_x / n;
        let mean_y = sum_y / n;
        let ss_xy = sum_xy - n * mean_x * mean_y;
        let ss_xx = sum_xx - n * mean_x * mean_x;

        // When every x is identical, Σx² and n·x̄² cancel to rounding noise
        if ss_xx.abs() <= f64::EPSILON * sum_xx.abs().max(1.0) {
            return Err(Error::ConstantX);
        }

        let slope = ss_xy / ss_xx;
        let intercept = mean_y - slope * mean_x;
        log::debug!("fitted y = {intercept} + {slope}x");

        Ok(Self { intercept, slope })
    }

    /// Returns the intercept `b0`: the predicted y at x = 0.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the slope `b1`: the change in y per unit of x.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Predicts the y value at `x`.
    #[must_use]
    pub fn y(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Evaluates the line at each x, returning (x, ŷ) pairs.
    pub fn solve(&self, x: impl Iterator<Item = f64>) -> Vec<(f64, f64)> {
        x.map(|x| (x, self.y(x))).collect()
    }

    /// Renders the line as `y = b0 + b1x` with fixed precision.
    #[must_use]
    pub fn equation(&self) -> String {
        format!(
            "y = {b0:.p$} + {b1:.p$}x",
            b0 = self.intercept,
            b1 = self.slope,
            p = DEFAULT_PRECISION,
        )
    }
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.equation())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::assert_close;

    fn dataset(samples: &[(f64, f64)]) -> Dataset {
        let samples = samples
            .iter()
            .map(|&(x, y)| crate::Sample { x, y })
            .collect();
        Dataset::new(samples, "Size", "Cost")
    }

    #[test]
    fn perfect_diagonal() {
        let data = dataset(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        assert_eq!(fit.slope(), 1.0);
        assert_eq!(fit.intercept(), 0.0);
    }

    #[test]
    fn doubling_line() {
        let data = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        assert_eq!(fit.slope(), 2.0);
        assert_eq!(fit.intercept(), 0.0);
    }

    #[test]
    fn flat_line() {
        // Constant y is a valid fit: slope 0, intercept at the level
        let data = dataset(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        assert_eq!(fit.slope(), 0.0);
        assert_eq!(fit.intercept(), 5.0);
    }

    #[test]
    fn constant_x_is_an_error() {
        let data = dataset(&[(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)]);
        let err = LinearFit::fit(&data).unwrap_err();
        assert!(matches!(err, Error::ConstantX));
    }

    #[test]
    fn constant_x_large_magnitude() {
        // Σx² − n·x̄² leaves rounding noise here rather than an exact zero
        let data = dataset(&[(1e8, 1.0), (1e8, 2.0), (1e8, 3.0)]);
        let err = LinearFit::fit(&data).unwrap_err();
        assert!(matches!(err, Error::ConstantX));
    }

    #[test]
    fn too_few_samples() {
        let err = LinearFit::fit(&dataset(&[(1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, Error::NotEnoughData { n: 1 }));

        let err = LinearFit::fit(&dataset(&[])).unwrap_err();
        assert!(matches!(err, Error::NotEnoughData { n: 0 }));
    }

    #[test]
    fn row_order_does_not_change_the_fit() {
        let ordered = dataset(&[(60.0, 150.0), (75.0, 190.0), (80.0, 205.0), (120.0, 300.0)]);
        let shuffled = dataset(&[(120.0, 300.0), (75.0, 190.0), (60.0, 150.0), (80.0, 205.0)]);

        let a = LinearFit::fit(&ordered).unwrap();
        let b = LinearFit::fit(&shuffled).unwrap();
        assert_close!(a.slope(), b.slope(), 1e-12);
        assert_close!(a.intercept(), b.intercept(), 1e-12);
    }

    #[test]
    fn prediction_follows_the_line() {
        let data = dataset(&[(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        assert_close!(fit.y(0.0), 1.0);
        assert_close!(fit.y(10.0), 21.0);

        let solved = fit.solve([0.0, 10.0].into_iter());
        assert_eq!(solved.len(), 2);
        assert_close!(solved[1].1, 21.0);
    }

    #[test]
    fn equation_uses_four_decimals() {
        let data = dataset(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        assert_eq!(fit.equation(), "y = 0.0000 + 1.0000x");
        assert_eq!(fit.to_string(), fit.equation());
    }

    #[test]
    fn negative_slope_keeps_the_sign_inline() {
        let data = dataset(&[(1.0, 3.0), (2.0, 1.0)]);
        let fit = LinearFit::fit(&data).unwrap();
        assert_eq!(fit.equation(), "y = 5.0000 + -2.0000x");
    }
}
