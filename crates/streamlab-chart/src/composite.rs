use std::path::Path;

use anyhow::{Context as _, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use streamlab_stats::{
    boxplot::BoxplotSummary,
    histogram::Histogram,
    summary::{Metric, SampleSummary},
};

use crate::{
    boxplot::{BoxplotEntry, draw_boxplot_panel},
    histogram::draw_histogram_panel,
    style::ChartStyle,
};

/// Width of one grouped bar, in metric units.
const BAR_WIDTH: f64 = 0.35;

/// One scenario's data as consumed by the chart renderer.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioPanel<'a> {
    /// Scenario name, e.g. `"Scenario A"`.
    pub name: &'a str,
    /// Short throughput description, e.g. `"100K values/sec"`.
    pub flow_label: &'a str,
    /// Sample set, sorted in ascending order.
    pub samples: &'a [u64],
    /// Statistics record derived from `samples`.
    pub summary: &'a SampleSummary,
}

/// Renders the six-panel composite figure to a PNG file.
///
/// Panel layout (2 rows of 3): box plot A, box plot B, side-by-side
/// comparison, histogram A, histogram B, grouped metric bars. Any existing
/// file at `path` is overwritten.
///
/// # Errors
///
/// Fails when either sample set is empty or the image cannot be written.
pub fn render_composite(
    path: &Path,
    style: &ChartStyle,
    a: &ScenarioPanel<'_>,
    b: &ScenarioPanel<'_>,
) -> Result<()> {
    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    draw_composite(&root, style, a, b)?;
    root.present()
        .with_context(|| format!("Failed to write chart image: {}", path.display()))?;
    Ok(())
}

/// Draws the full figure onto an arbitrary backend.
///
/// Split out from [`render_composite`] so tests can render into an in-memory
/// bitmap buffer.
fn draw_composite<DB>(
    root: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
    a: &ScenarioPanel<'_>,
    b: &ScenarioPanel<'_>,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let root = root.titled(
        "Streaming Throughput Analysis - Box Plots and Statistics",
        ("sans-serif", 32),
    )?;
    let panels = root.split_evenly((2, 3));

    let box_a = BoxplotSummary::from_sorted(a.samples)?;
    let box_b = BoxplotSummary::from_sorted(b.samples)?;

    draw_boxplot_panel(
        &panels[0],
        &format!("{}: Box Plot ({})", a.name, a.flow_label),
        &[BoxplotEntry {
            label: a.name,
            summary: &box_a,
            fill: style.fill_a,
        }],
        style.box_median,
    )?;
    draw_boxplot_panel(
        &panels[1],
        &format!("{}: Box Plot ({})", b.name, b.flow_label),
        &[BoxplotEntry {
            label: b.name,
            summary: &box_b,
            fill: style.fill_b,
        }],
        style.box_median,
    )?;
    draw_boxplot_panel(
        &panels[2],
        "Comparison of Both Scenarios",
        &[
            BoxplotEntry {
                label: a.name,
                summary: &box_a,
                fill: style.fill_a,
            },
            BoxplotEntry {
                label: b.name,
                summary: &box_b,
                fill: style.fill_b,
            },
        ],
        style.box_median,
    )?;

    draw_histogram_panel(
        &panels[3],
        &format!("{}: Distribution", a.name),
        &Histogram::from_sorted(a.samples, style.histogram_bins),
        a.summary.mean,
        a.summary.median,
        style.fill_a,
        style,
    )?;
    draw_histogram_panel(
        &panels[4],
        &format!("{}: Distribution", b.name),
        &Histogram::from_sorted(b.samples, style.histogram_bins),
        b.summary.mean,
        b.summary.median,
        style.fill_b,
        style,
    )?;

    draw_metric_bars(&panels[5], style, a, b)?;

    Ok(())
}

/// Draws the grouped bar chart comparing the five compared metrics.
#[expect(clippy::cast_precision_loss)]
fn draw_metric_bars<DB>(
    area: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
    a: &ScenarioPanel<'_>,
    b: &ScenarioPanel<'_>,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let metrics = Metric::COMPARED;
    let y_max = metrics
        .iter()
        .flat_map(|&m| [a.summary.metric(m), b.summary.metric(m)])
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.15;
    let x_max = metrics.len() as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption("Statistical Metrics Comparison", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Metric")
        .y_desc("Value")
        .x_labels(metrics.len())
        .x_label_formatter(&|x| {
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = x.round() as usize;
            if (x - x.round()).abs() < 0.25 && x.round() >= 0.0 && idx < metrics.len() {
                metrics[idx].short_label().to_owned()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|v| crate::axis_label(*v))
        .draw()?;

    let fill_a = style.fill_a;
    chart
        .draw_series(metrics.iter().enumerate().map(|(i, &m)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_WIDTH, 0.0), (x, a.summary.metric(m))],
                fill_a.mix(0.9).filled(),
            )
        }))?
        .label(a.name)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], fill_a.filled()));

    let fill_b = style.fill_b;
    chart
        .draw_series(metrics.iter().enumerate().map(|(i, &m)| {
            let x = i as f64;
            Rectangle::new(
                [(x, 0.0), (x + BAR_WIDTH, b.summary.metric(m))],
                fill_b.mix(0.9).filled(),
            )
        }))?
        .label(b.name)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], fill_b.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.25))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_samples(offset: u64) -> Vec<u64> {
        let mut samples = (0u64..500)
            .map(|i| (i * 7919 + offset) % 100_000)
            .collect::<Vec<_>>();
        samples.sort_unstable();
        samples
    }

    #[test]
    fn test_composite_renders_into_buffer() {
        let samples_a = scenario_samples(0);
        let samples_b = scenario_samples(13);
        let summary_a = SampleSummary::from_sorted(&samples_a).unwrap();
        let summary_b = SampleSummary::from_sorted(&samples_b).unwrap();
        let a = ScenarioPanel {
            name: "Scenario A",
            flow_label: "100K values/sec",
            samples: &samples_a,
            summary: &summary_a,
        };
        let b = ScenarioPanel {
            name: "Scenario B",
            flow_label: "60M values/min",
            samples: &samples_b,
            summary: &summary_b,
        };
        let style = ChartStyle {
            size: (900, 600),
            ..ChartStyle::default()
        };

        let mut buffer = vec![0u8; 900 * 600 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (900, 600)).into_drawing_area();
            draw_composite(&root, &style, &a, &b).unwrap();
            root.present().unwrap();
        }
        // A rendered figure on a white background cannot be all zero bytes.
        assert!(buffer.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_empty_samples_are_rejected() {
        let samples = scenario_samples(0);
        let summary = SampleSummary::from_sorted(&samples).unwrap();
        let filled = ScenarioPanel {
            name: "Scenario A",
            flow_label: "100K values/sec",
            samples: &samples,
            summary: &summary,
        };
        let empty = ScenarioPanel {
            name: "Scenario B",
            flow_label: "60M values/min",
            samples: &[],
            summary: &summary,
        };

        let mut buffer = vec![0u8; 900 * 600 * 3];
        let root = BitMapBackend::with_buffer(&mut buffer, (900, 600)).into_drawing_area();
        let style = ChartStyle {
            size: (900, 600),
            ..ChartStyle::default()
        };
        assert!(draw_composite(&root, &style, &filled, &empty).is_err());
    }
}
