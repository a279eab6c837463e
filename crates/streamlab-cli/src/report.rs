use std::{fs, path::Path};

use anyhow::Context as _;
use streamlab_stats::summary::Metric;

use crate::scenario::Scenario;

const BANNER_WIDTH: usize = 70;

/// Renders the full text report: header, one block per scenario, and the
/// narrative comparison. The same text goes to the console and the summary
/// file.
#[must_use]
pub fn render_report(a: &Scenario, b: &Scenario) -> String {
    let mut out = String::new();
    push_banner(&mut out, "STREAMING THROUGHPUT ANALYSIS SUMMARY");
    out.push('\n');
    push_scenario_block(&mut out, a);
    out.push('\n');
    push_scenario_block(&mut out, b);
    out.push('\n');
    push_narrative(&mut out, a, b);
    out
}

/// Overwrites the summary file with the rendered report.
pub fn write_report(path: &Path, report: &str) -> anyhow::Result<()> {
    fs::write(path, report)
        .with_context(|| format!("Failed to write summary file: {}", path.display()))
}

fn push_banner(out: &mut String, title: &str) {
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push('\n');
}

fn push_scenario_block(out: &mut String, scenario: &Scenario) {
    push_banner(out, scenario.kind.banner());
    out.push_str(&format!(
        "Sample size: {}\n",
        format_count(scenario.summary.len as u64)
    ));
    for metric in Metric::ALL {
        out.push_str(&format!(
            "{:<9} : {}\n",
            metric.label(),
            format_scientific(scenario.summary.metric(metric))
        ));
    }
}

fn push_narrative(out: &mut String, a: &Scenario, b: &Scenario) {
    let volume_a = a.kind.hourly_volume();
    let volume_b = b.kind.hourly_volume();
    let ratio = volume_b / volume_a.max(1);

    push_banner(out, "KEY OBSERVATIONS");
    out.push_str("1. Data volume:\n");
    out.push_str(&format!(
        "   - {}: {} total values per hour\n",
        a.kind.name(),
        format_count(volume_a)
    ));
    out.push_str(&format!(
        "   - {}: {} total values per hour\n",
        b.kind.name(),
        format_count(volume_b)
    ));
    out.push_str(&format!(
        "   - {} processes {ratio}x more data per hour\n",
        b.kind.name()
    ));
    out.push_str("2. Central tendency:\n");
    out.push_str(&format!(
        "   - Mean difference: {}\n",
        format_scientific((a.summary.mean - b.summary.mean).abs())
    ));
    out.push_str(&format!(
        "   - Median difference: {}\n",
        format_scientific((a.summary.median - b.summary.median).abs())
    ));
    out.push_str("3. Variability:\n");
    out.push_str(&format!(
        "   - {} IQR: {}\n",
        a.kind.name(),
        format_scientific(a.summary.iqr)
    ));
    out.push_str(&format!(
        "   - {} IQR: {}\n",
        b.kind.name(),
        format_scientific(b.summary.iqr)
    ));
}

/// Formats a value in scientific notation with a two-decimal mantissa and an
/// explicitly signed, zero-padded exponent, e.g. `5.00e+11`.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.2e}");
    let (mantissa, exponent) = formatted
        .split_once('e')
        .expect("exponential format always contains 'e'");
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Formats an integer with `,` thousands separators.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
