use crate::{error::StatsError, percentiles};

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency, dispersion,
/// and spread for a dataset of `u64` sample values.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The minimum value in the dataset.
    pub min: u64,
    /// The maximum value in the dataset.
    pub max: u64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to summarize. The values will be copied and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Ok(DescriptiveStats)` - if the dataset contains at least one value
    /// * `Err(StatsError::EmptySampleSet)` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use streamlab_stats::descriptive::DescriptiveStats;
    /// let values = [5, 2, 4, 1, 3];
    /// let stats = DescriptiveStats::new(&values).unwrap();
    /// assert_eq!(stats.min, 1);
    /// assert_eq!(stats.max, 5);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new(values: &[u64]) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        Self::from_sorted(&sorted)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use streamlab_stats::descriptive::DescriptiveStats;
    /// let mut values = [5, 2, 4, 1, 3];
    /// values.sort_unstable();
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[u64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted(),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first().ok_or(StatsError::EmptySampleSet)?;
        let max = *sorted_values.last().ok_or(StatsError::EmptySampleSet)?;
        let n = sorted_values.len() as f64;
        let mean = sorted_values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let median = percentiles::compute_percentile(sorted_values, 50.0)?;
        let variance = sorted_values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Ok(Self {
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            DescriptiveStats::new(&[]).unwrap_err(),
            StatsError::EmptySampleSet
        );
    }

    #[test]
    fn test_reference_fixture() {
        let stats = DescriptiveStats::new(&[10, 20, 30]).unwrap();
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.median, 20.0);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 30);
    }

    #[test]
    fn test_population_standard_deviation() {
        // Population variance of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 4.
        let stats = DescriptiveStats::new(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn test_even_length_median() {
        let stats = DescriptiveStats::new(&[1, 2, 3, 4]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new(&[7]).unwrap();
        assert_eq!(stats.min, 7);
        assert_eq!(stats.max, 7);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
