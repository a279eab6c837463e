use std::path::PathBuf;

use clap::Parser;
use log::info;
use streamlab_chart::{composite::render_composite, style::ChartStyle};

use crate::{
    report,
    scenario::{Scenario, ScenarioKind},
};

/// Computes descriptive statistics for two throughput scenarios and renders
/// a comparative text report and chart image.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Input sample file for scenario A; synthetic data is generated when absent
    #[arg(long, default_value = "throughput_a.txt")]
    input_a: PathBuf,
    /// Input sample file for scenario B; synthetic data is generated when absent
    #[arg(long, default_value = "throughput_b.txt")]
    input_b: PathBuf,
    /// Output path for the text summary report
    #[arg(long, default_value = "throughput_summary.txt")]
    summary: PathBuf,
    /// Output path for the composite chart image
    #[arg(long, default_value = "throughput_charts.png")]
    chart: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let a = Scenario::prepare(ScenarioKind::A, &args.input_a)?;
    let b = Scenario::prepare(ScenarioKind::B, &args.input_b)?;

    let report = report::render_report(&a, &b);
    print!("{report}");
    report::write_report(&args.summary, &report)?;
    info!("Summary written to {}", args.summary.display());

    let style = ChartStyle::default();
    render_composite(&args.chart, &style, &a.panel(), &b.panel())?;
    info!("Charts written to {}", args.chart.display());

    println!();
    println!("Analysis complete.");
    println!("Summary: {}", args.summary.display());
    println!("Charts:  {}", args.chart.display());
    Ok(())
}
