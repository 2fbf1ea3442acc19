//! Rendering of the regression chart
//!
//! Draws the scatter of input samples, the fitted line, and a results panel
//! beneath the chart, to SVG data or to a PNG file.
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

pub use plotters;

mod palette;
use palette::Palette;

use std::{ops::Range, path::Path};

use plotters::coord::Shift;
use plotters::prelude::*;
use resvg::usvg;

use crate::{display, Dataset, FitQuality, LinearFit};

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Error drawing the chart
    #[error("Error drawing plot: {0}")]
    Draw(String),

    /// Error parsing the rendered SVG
    #[error("Rendering error: {0}")]
    SvgParse(#[from] usvg::Error),

    /// Error encoding the PNG
    #[error("PNG encoding error: {0}")]
    PngEncode(String),
}

fn draw_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Renders a dataset and its fit as a chart with a results panel.
///
/// The image is split 3:1 vertically: the upper area holds the scatter plot
/// and the fitted line, the lower area the results panel (R², coefficients,
/// and the regression equation).
///
/// # Example
/// ```rust
/// # use linefit::{plot::RegressionPlot, Dataset, FitQuality, LinearFit};
/// # let csv = "Size,Cost\n60,150\n80,200\n120,290\n";
/// # let data = Dataset::from_reader(csv.as_bytes(), "Size", "Cost").unwrap();
/// # let fit = LinearFit::fit(&data).unwrap();
/// # let quality = FitQuality::evaluate(&data, &fit).unwrap();
/// let svg = RegressionPlot::new()
///     .with_size(800, 800)
///     .render_svg(&data, &fit, &quality)
///     .unwrap();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct RegressionPlot {
    size: (u32, u32),
    title: String,
}

impl Default for RegressionPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl RegressionPlot {
    /// Creates a plot with the default size (640×640) and title.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: (640, 640),
            title: "Regression Line".to_string(),
        }
    }

    /// Sets the image size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Sets the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Renders the chart and panel as SVG data.
    ///
    /// # Errors
    /// Returns [`PlotError::Draw`] if a drawing primitive fails.
    pub fn render_svg(
        &self,
        data: &Dataset,
        fit: &LinearFit,
        quality: &FitQuality,
    ) -> Result<String, PlotError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            // Chart above, results panel below, 3:1
            let split = (self.size.1 as i32) * 3 / 4;
            let (chart_area, panel_area) = root.clone().split_vertically(split);

            self.draw_chart(&chart_area, data, fit)?;
            Self::draw_panel(&panel_area, fit, quality)?;
            root.present().map_err(draw_err)?;
        }
        Ok(svg)
    }

    /// Renders the chart and panel to a PNG file at `target`.
    ///
    /// # Errors
    /// Returns an error if drawing fails or the image cannot be rasterized
    /// and written.
    pub fn render_png(
        &self,
        data: &Dataset,
        fit: &LinearFit,
        quality: &FitQuality,
        target: &Path,
    ) -> Result<(), PlotError> {
        let svg = self.render_svg(data, fit, quality)?;
        write_png(&svg, target)
    }

    fn draw_chart(
        &self,
        area: &DrawingArea<SVGBackend<'_>, Shift>,
        data: &Dataset,
        fit: &LinearFit,
    ) -> Result<(), PlotError> {
        let palette = Palette::default();
        let (x_range, y_range) = chart_ranges(data, fit);

        let mut chart = ChartBuilder::on(area)
            .caption(&self.title, ("sans-serif", 24).into_font())
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range.clone(), y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(data.x_label())
            .y_desc(data.y_label())
            .draw()
            .map_err(draw_err)?;

        //
        // Scatter of the input samples
        let scatter = palette.scatter;
        chart
            .draw_series(
                data.samples()
                    .iter()
                    .map(|s| Circle::new((s.x, s.y), 3, scatter.filled())),
            )
            .map_err(draw_err)?
            .label(format!("{} vs {}", data.y_label(), data.x_label()))
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, scatter.filled()));

        //
        // Fitted line across the full x range
        let line = fit.solve([x_range.start, x_range.end].into_iter());
        let style: ShapeStyle = palette.line.into();
        let style = style.stroke_width(2);
        chart
            .draw_series(LineSeries::new(line, style))
            .map_err(draw_err)?
            .label(fit.equation())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(draw_err)?;

        Ok(())
    }

    fn draw_panel(
        area: &DrawingArea<SVGBackend<'_>, Shift>,
        fit: &LinearFit,
        quality: &FitQuality,
    ) -> Result<(), PlotError> {
        let palette = Palette::default();
        let (width, height) = area.dim_in_pixel();

        area.draw(&Rectangle::new(
            [(10, 5), (width as i32 - 10, height as i32 - 5)],
            palette.panel.filled(),
        ))
        .map_err(draw_err)?;

        let style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
        let text = display::results_panel(fit, quality);
        for (i, line) in text.lines().enumerate() {
            area.draw(&Text::new(
                line.to_string(),
                (24, 16 + 20 * i as i32),
                style.clone(),
            ))
            .map_err(draw_err)?;
        }
        Ok(())
    }
}

/// Axis ranges covering the samples and the fitted line, padded by 5%
fn chart_ranges(data: &Dataset, fit: &LinearFit) -> (Range<f64>, Range<f64>) {
    let x_range = data.x_range();
    let y_range = data.y_range();

    // The line can leave the sample range at the chart edges
    let y_at_edges = [fit.y(x_range.start), fit.y(x_range.end)];
    let y_min = y_at_edges.iter().fold(y_range.start, |lo, &y| lo.min(y));
    let y_max = y_at_edges.iter().fold(y_range.end, |hi, &y| hi.max(y));

    (padded(x_range), padded(y_min..y_max))
}

fn padded(range: Range<f64>) -> Range<f64> {
    let span = range.end - range.start;
    let pad = if span == 0.0 { 1.0 } else { span * 0.05 };
    (range.start - pad)..(range.end + pad)
}

/// Rasterizes SVG data to a PNG file.
fn write_png(svg: &str, target: &Path) -> Result<(), PlotError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| PlotError::PngEncode("Plot area has zero size".to_string()))?;
    resvg::render(&tree, usvg::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(target)
        .map_err(|e| PlotError::PngEncode(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;

    fn fitted() -> (Dataset, LinearFit, FitQuality) {
        let samples = vec![
            Sample { x: 60.0, y: 150.0 },
            Sample { x: 80.0, y: 205.0 },
            Sample { x: 120.0, y: 300.0 },
        ];
        let data = Dataset::new(samples, "Size", "Cost");
        let fit = LinearFit::fit(&data).unwrap();
        let quality = FitQuality::evaluate(&data, &fit).unwrap();
        (data, fit, quality)
    }

    #[test]
    fn renders_svg_with_title_and_labels() {
        let (data, fit, quality) = fitted();
        let svg = RegressionPlot::new()
            .render_svg(&data, &fit, &quality)
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Regression Line"));
        assert!(svg.contains("R-squared"));
    }

    #[test]
    fn custom_title_is_used() {
        let (data, fit, quality) = fitted();
        let svg = RegressionPlot::new()
            .with_title("House prices")
            .render_svg(&data, &fit, &quality)
            .unwrap();
        assert!(svg.contains("House prices"));
    }

    #[test]
    fn padding_expands_the_range() {
        let range = padded(0.0..100.0);
        assert!(range.start < 0.0);
        assert!(range.end > 100.0);

        // A degenerate span still produces a drawable range
        let range = padded(5.0..5.0);
        assert!(range.start < range.end);
    }
}
