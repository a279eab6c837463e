use std::path::Path;

use anyhow::Context as _;
use log::{info, warn};
use streamlab_chart::composite::ScenarioPanel;
use streamlab_stats::summary::SampleSummary;

use crate::data;

/// The two throughput assumptions under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    A,
    B,
}

impl ScenarioKind {
    /// Display name, e.g. `"Scenario A"`.
    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::A => "Scenario A",
            ScenarioKind::B => "Scenario B",
        }
    }

    /// Report banner describing the throughput assumption.
    pub fn banner(self) -> &'static str {
        match self {
            ScenarioKind::A => "SCENARIO A: 100,000 values/second for 1 hour",
            ScenarioKind::B => "SCENARIO B: 60,000,000 values/minute for 1 hour",
        }
    }

    /// Short throughput description used in chart captions.
    pub fn flow_label(self) -> &'static str {
        match self {
            ScenarioKind::A => "100K values/sec",
            ScenarioKind::B => "60M values/min",
        }
    }

    /// Seed for the synthetic fallback generator.
    pub fn seed(self) -> u64 {
        match self {
            ScenarioKind::A => 42,
            ScenarioKind::B => 43,
        }
    }

    /// Total values produced per hour under this scenario's assumption.
    pub fn hourly_volume(self) -> u64 {
        match self {
            ScenarioKind::A => 100_000 * 3600,
            ScenarioKind::B => 60_000_000 * 60,
        }
    }
}

/// A scenario with its sample set and derived statistics record.
///
/// Samples are sorted once here; every downstream consumer works on the
/// sorted data.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub samples: Vec<u64>,
    pub summary: SampleSummary,
}

impl Scenario {
    /// Loads the scenario's sample set from `path`, falling back to seeded
    /// synthetic generation when the file is absent, then derives the
    /// statistics record.
    pub fn prepare(kind: ScenarioKind, path: &Path) -> anyhow::Result<Self> {
        let mut samples = match data::load_samples(path)? {
            Some(samples) => {
                info!(
                    "Loaded {} values for {} from {}",
                    samples.len(),
                    kind.name(),
                    path.display()
                );
                samples
            }
            None => {
                warn!(
                    "{} not found; generating synthetic data for {} (seed {})",
                    path.display(),
                    kind.name(),
                    kind.seed()
                );
                data::generate_samples(kind.seed(), data::SYNTHETIC_SAMPLE_COUNT)
            }
        };
        samples.sort_unstable();

        let summary = SampleSummary::from_sorted(&samples)
            .with_context(|| format!("No samples available for {}", kind.name()))?;

        Ok(Self {
            kind,
            samples,
            summary,
        })
    }

    /// Borrows the scenario in the form the chart renderer consumes.
    pub fn panel(&self) -> ScenarioPanel<'_> {
        ScenarioPanel {
            name: self.kind.name(),
            flow_label: self.kind.flow_label(),
            samples: &self.samples,
            summary: &self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_full_synthetic_set() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = Scenario::prepare(ScenarioKind::A, &dir.path().join("absent.txt")).unwrap();
        assert_eq!(scenario.samples.len(), data::SYNTHETIC_SAMPLE_COUNT);
        assert!(
            scenario
                .samples
                .iter()
                .all(|&v| v < data::SYNTHETIC_VALUE_BOUND)
        );
    }

    #[test]
    fn test_loaded_file_drives_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        std::fs::write(&path, "10 20 30").unwrap();

        let scenario = Scenario::prepare(ScenarioKind::A, &path).unwrap();
        assert_eq!(scenario.summary.mean, 20.0);
        assert_eq!(scenario.summary.p25, 15.0);
        assert_eq!(scenario.summary.p75, 25.0);
        assert_eq!(scenario.summary.iqr, 10.0);
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        assert!(Scenario::prepare(ScenarioKind::B, &path).is_err());
    }

    #[test]
    fn test_hourly_volumes() {
        assert_eq!(ScenarioKind::A.hourly_volume(), 360_000_000);
        assert_eq!(ScenarioKind::B.hourly_volume(), 3_600_000_000);
    }
}
