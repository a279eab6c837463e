use crate::{descriptive::DescriptiveStats, error::StatsError, mode, percentiles};

/// The metrics making up a [`SampleSummary`], in canonical report order.
///
/// Every consumer that iterates a summary record (console report, summary
/// file, chart bar groups) draws from [`Metric::ALL`] so the emission order
/// is fixed in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Mean,
    Median,
    Mode,
    Min,
    Max,
    StdDev,
    P25,
    P75,
    Iqr,
}

impl Metric {
    /// All metrics in canonical order.
    pub const ALL: [Metric; 9] = [
        Metric::Mean,
        Metric::Median,
        Metric::Mode,
        Metric::Min,
        Metric::Max,
        Metric::StdDev,
        Metric::P25,
        Metric::P75,
        Metric::Iqr,
    ];

    /// The subset compared across scenarios in the bar chart.
    pub const COMPARED: [Metric; 5] = [
        Metric::Mean,
        Metric::Median,
        Metric::P25,
        Metric::P75,
        Metric::Iqr,
    ];

    /// Report label, as printed in the console block and summary file.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Mean => "Mean",
            Metric::Median => "Median",
            Metric::Mode => "Mode",
            Metric::Min => "Min",
            Metric::Max => "Max",
            Metric::StdDev => "Std Dev",
            Metric::P25 => "25th %ile",
            Metric::P75 => "75th %ile",
            Metric::Iqr => "IQR",
        }
    }

    /// Compact label used for chart axes.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Metric::Mean => "Mean",
            Metric::Median => "Median",
            Metric::Mode => "Mode",
            Metric::Min => "Min",
            Metric::Max => "Max",
            Metric::StdDev => "Std",
            Metric::P25 => "P25",
            Metric::P75 => "P75",
            Metric::Iqr => "IQR",
        }
    }
}

/// The fixed statistics record derived once from a sample set.
///
/// Combines descriptive statistics, the quartiles, and the mode into the
/// nine-metric record that the report and charts consume. Derived once per
/// scenario and never mutated.
///
/// # Examples
///
/// ```
/// use streamlab_stats::summary::{Metric, SampleSummary};
///
/// let summary = SampleSummary::from_samples(&[10, 20, 30]).unwrap();
/// assert_eq!(summary.len, 3);
/// assert_eq!(summary.mean, 20.0);
/// assert_eq!(summary.median, 20.0);
/// assert_eq!(summary.p25, 15.0);
/// assert_eq!(summary.p75, 25.0);
/// assert_eq!(summary.iqr, 10.0);
/// assert_eq!(summary.metric(Metric::Min), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    /// Number of samples the record was derived from.
    pub len: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (50th percentile, linear interpolation).
    pub median: f64,
    /// Most frequent value; ascending tie-break.
    pub mode: u64,
    /// Smallest sample.
    pub min: u64,
    /// Largest sample.
    pub max: u64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Interquartile range, `p75 - p25`.
    pub iqr: f64,
}

impl SampleSummary {
    /// Derives the statistics record from unsorted samples.
    ///
    /// # Returns
    ///
    /// * `Ok(SampleSummary)` - if the sample set contains at least one value
    /// * `Err(StatsError::EmptySampleSet)` - if the sample set is empty
    pub fn from_samples(values: &[u64]) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        Self::from_sorted(&sorted)
    }

    /// Derives the statistics record from pre-sorted samples.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[u64]) -> Result<Self, StatsError> {
        let stats = DescriptiveStats::from_sorted(sorted_values)?;
        let p25 = percentiles::compute_percentile(sorted_values, 25.0)?;
        let p75 = percentiles::compute_percentile(sorted_values, 75.0)?;
        let mode = mode::mode_or_zero(sorted_values);

        Ok(Self {
            len: sorted_values.len(),
            mean: stats.mean,
            median: stats.median,
            mode,
            min: stats.min,
            max: stats.max,
            std_dev: stats.std_dev,
            p25,
            p75,
            iqr: p75 - p25,
        })
    }

    /// Looks up a metric value by name.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mean => self.mean,
            Metric::Median => self.median,
            Metric::Mode => self.mode as f64,
            Metric::Min => self.min as f64,
            Metric::Max => self.max as f64,
            Metric::StdDev => self.std_dev,
            Metric::P25 => self.p25,
            Metric::P75 => self.p75,
            Metric::Iqr => self.iqr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_set_is_rejected() {
        assert_eq!(
            SampleSummary::from_samples(&[]).unwrap_err(),
            StatsError::EmptySampleSet
        );
    }

    #[test]
    fn test_reference_fixture() {
        let summary = SampleSummary::from_samples(&[10, 20, 30]).unwrap();
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.median, 20.0);
        assert_eq!(summary.p25, 15.0);
        assert_eq!(summary.p75, 25.0);
        assert_eq!(summary.iqr, 10.0);
    }

    #[test]
    fn test_quartiles_bracket_median() {
        let values = [9, 1, 8, 2, 7, 3, 6, 4, 5, 5];
        let summary = SampleSummary::from_samples(&values).unwrap();
        assert!(summary.p25 <= summary.median);
        assert!(summary.median <= summary.p75);
        assert!(summary.iqr >= 0.0);
    }

    #[test]
    fn test_mode_of_unique_values_is_minimum() {
        let summary = SampleSummary::from_samples(&[30, 10, 20]).unwrap();
        assert_eq!(summary.mode, 10);
    }

    #[test]
    fn test_no_metric_is_nan() {
        let summary = SampleSummary::from_samples(&[5]).unwrap();
        for metric in Metric::ALL {
            assert!(summary.metric(metric).is_finite(), "{metric:?}");
        }
    }

    #[test]
    fn test_canonical_order_is_stable() {
        let labels = Metric::ALL.map(Metric::label);
        assert_eq!(
            labels,
            [
                "Mean",
                "Median",
                "Mode",
                "Min",
                "Max",
                "Std Dev",
                "25th %ile",
                "75th %ile",
                "IQR"
            ]
        );
    }
}
