//! Chart rendering for the Streamlab throughput analysis report.
//!
//! Produces the composite figure accompanying the text report: box plots for
//! each scenario, a side-by-side comparison, annotated histograms, and a
//! grouped bar chart of the compared metrics, all rendered into a single PNG
//! with `plotters`.
//!
//! Styling is carried by an explicit [`style::ChartStyle`] value; there is no
//! global plotting configuration.

pub mod composite;
pub mod style;

mod boxplot;
mod histogram;

/// Formats a value for a chart axis label in scientific notation.
#[must_use]
pub(crate) fn axis_label(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value:.1e}")
    }
}

/// Formats a value for legend text in scientific notation.
#[must_use]
pub(crate) fn legend_value(value: f64) -> String {
    format!("{value:.2e}")
}
