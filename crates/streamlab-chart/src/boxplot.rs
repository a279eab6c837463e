use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use streamlab_stats::boxplot::BoxplotSummary;

/// Half-width of a box, in category units.
const BOX_HALF: f64 = 0.25;
/// Half-width of a whisker cap.
const CAP_HALF: f64 = 0.12;

/// One box in a box-plot panel.
pub(crate) struct BoxplotEntry<'a> {
    pub label: &'a str,
    pub summary: &'a BoxplotSummary,
    pub fill: RGBColor,
}

/// Draws a box-and-whisker panel with one category per entry.
///
/// Boxes are drawn by hand from the five-number summaries so that whiskers
/// stop at the extreme observed samples rather than the raw 1.5 IQR fences.
pub(crate) fn draw_boxplot_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    entries: &[BoxplotEntry<'_>],
    median_color: RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    assert!(!entries.is_empty(), "box-plot panel needs at least one entry");

    let y_min = entries
        .iter()
        .map(|e| e.summary.whisker_low)
        .fold(f64::INFINITY, f64::min);
    let y_max = entries
        .iter()
        .map(|e| e.summary.whisker_high)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (y_max - y_min).max(1.0);
    let y_range = (y_min - 0.05 * span)..(y_max + 0.05 * span);

    #[expect(clippy::cast_precision_loss)]
    let x_max = entries.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..x_max, y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Value")
        .x_labels(entries.len())
        .x_label_formatter(&|x| {
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = x.round() as usize;
            if (x - x.round()).abs() < 0.25 && x.round() >= 0.0 && idx < entries.len() {
                entries[idx].label.to_owned()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|v| crate::axis_label(*v))
        .draw()?;

    for (i, entry) in entries.iter().enumerate() {
        #[expect(clippy::cast_precision_loss)]
        let x = i as f64;
        let s = entry.summary;

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - BOX_HALF, s.q1), (x + BOX_HALF, s.q3)],
            entry.fill.mix(0.7).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - BOX_HALF, s.q1), (x + BOX_HALF, s.q3)],
            BLACK,
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - BOX_HALF, s.median), (x + BOX_HALF, s.median)],
            median_color.stroke_width(2),
        )))?;

        // Whisker stems.
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, s.q1), (x, s.whisker_low)],
            BLACK,
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, s.q3), (x, s.whisker_high)],
            BLACK,
        )))?;

        // Whisker caps.
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - CAP_HALF, s.whisker_low), (x + CAP_HALF, s.whisker_low)],
            BLACK,
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x - CAP_HALF, s.whisker_high), (x + CAP_HALF, s.whisker_high)],
            BLACK,
        )))?;
    }

    Ok(())
}
