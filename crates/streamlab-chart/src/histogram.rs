use anyhow::{Result, ensure};
use plotters::coord::Shift;
use plotters::prelude::*;
use streamlab_stats::histogram::Histogram;

use crate::style::ChartStyle;

/// Draws a distribution panel: frequency bars plus vertical mean and median
/// reference lines with a legend carrying the formatted values.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn draw_histogram_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    histogram: &Histogram,
    mean: f64,
    median: f64,
    fill: RGBColor,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    ensure!(!histogram.bins.is_empty(), "histogram has no bins");

    let x_min = histogram.bins[0].range.start;
    let x_max = histogram.bins[histogram.bins.len() - 1].range.end;
    let y_max = (histogram.max_count() as f64) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Value")
        .y_desc("Frequency")
        .x_labels(6)
        .x_label_formatter(&|v| crate::axis_label(*v))
        .draw()?;

    chart.draw_series(histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.range.start, 0.0), (bin.range.end, bin.count as f64)],
            fill.mix(0.7).filled(),
        )
    }))?;
    chart.draw_series(histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.range.start, 0.0), (bin.range.end, bin.count as f64)],
            BLACK.mix(0.4),
        )
    }))?;

    let mean_style = style.mean_line;
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(mean, 0.0), (mean, y_max)],
            mean_style.stroke_width(2),
        )))?
        .label(format!("Mean: {}", crate::legend_value(mean)))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], mean_style));

    let median_style = style.median_line;
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(median, 0.0), (median, y_max)],
            median_style.stroke_width(2),
        )))?
        .label(format!("Median: {}", crate::legend_value(median)))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], median_style));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.25))
        .draw()?;

    Ok(())
}
