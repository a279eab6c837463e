use crate::{error::StatsError, percentiles};

/// Five-number summary describing a box-and-whisker plot.
///
/// The box spans the interquartile range with a line at the median. Whiskers
/// follow the Tukey convention: they reach the most extreme data points that
/// lie within 1.5 IQR of the box, so they never extend past observed data.
///
/// # Examples
///
/// ```
/// use streamlab_stats::boxplot::BoxplotSummary;
///
/// let summary = BoxplotSummary::new(&[10, 20, 30]).unwrap();
/// assert_eq!(summary.q1, 15.0);
/// assert_eq!(summary.median, 20.0);
/// assert_eq!(summary.q3, 25.0);
/// assert_eq!(summary.whisker_low, 10.0);
/// assert_eq!(summary.whisker_high, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotSummary {
    /// Lower whisker: smallest sample within 1.5 IQR below the first quartile.
    pub whisker_low: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Upper whisker: largest sample within 1.5 IQR above the third quartile.
    pub whisker_high: f64,
}

impl BoxplotSummary {
    /// Computes a box-plot summary from unsorted values.
    pub fn new(values: &[u64]) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        Self::from_sorted(&sorted)
    }

    /// Computes a box-plot summary from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[u64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted(),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return Err(StatsError::EmptySampleSet);
        }

        let q1 = percentiles::compute_percentile(sorted_values, 25.0)?;
        let median = percentiles::compute_percentile(sorted_values, 50.0)?;
        let q3 = percentiles::compute_percentile(sorted_values, 75.0)?;
        let reach = 1.5 * (q3 - q1);

        // Whiskers snap to the extreme samples inside the fences. Both lookups
        // are in bounds for non-empty data because the fences bracket the box.
        let low_fence = q1 - reach;
        let high_fence = q3 + reach;
        let low_idx = sorted_values.partition_point(|&v| (v as f64) < low_fence);
        let high_idx = sorted_values.partition_point(|&v| (v as f64) <= high_fence);
        let whisker_low = sorted_values[low_idx] as f64;
        let whisker_high = sorted_values[high_idx - 1] as f64;

        Ok(Self {
            whisker_low,
            q1,
            median,
            q3,
            whisker_high,
        })
    }

    /// The interquartile range covered by the box.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
