use crate::error::StatsError;

/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between the two closest ranks.
/// For a dataset with n values, the p-th percentile sits at fractional rank
/// `(n - 1) * p / 100`; when the rank is not integral, the result is
/// interpolated between the surrounding values.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0)
///
/// # Returns
///
/// * `Ok(value)` - the value at the specified percentile
/// * `Err(StatsError::EmptySampleSet)` - if the input is empty
///
/// # Panics
///
/// Panics if `percentile` is outside the range 0.0 to 100.0.
///
/// # Examples
///
/// ```
/// use streamlab_stats::percentiles::compute_percentile;
///
/// let sorted = [10, 20, 30];
///
/// assert_eq!(compute_percentile(&sorted, 50.0).unwrap(), 20.0);
/// assert_eq!(compute_percentile(&sorted, 25.0).unwrap(), 15.0);
/// assert_eq!(compute_percentile(&sorted, 75.0).unwrap(), 25.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn compute_percentile(sorted_values: &[u64], percentile: f64) -> Result<f64, StatsError> {
    assert!(
        (0.0..=100.0).contains(&percentile),
        "percentile must be in 0.0..=100.0"
    );
    if sorted_values.is_empty() {
        return Err(StatsError::EmptySampleSet);
    }

    let rank = ((sorted_values.len() - 1) as f64 * percentile) / 100.0;
    let lower_idx = rank.floor() as usize;
    let upper_idx = rank.ceil() as usize;
    let lower = sorted_values[lower_idx] as f64;
    let upper = sorted_values[upper_idx] as f64;
    let fraction = rank - rank.floor();
    Ok(lower + (upper - lower) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            compute_percentile(&[], 50.0),
            Err(StatsError::EmptySampleSet)
        );
    }

    #[test]
    fn test_single_value() {
        let sorted = [42];
        assert_eq!(compute_percentile(&sorted, 0.0).unwrap(), 42.0);
        assert_eq!(compute_percentile(&sorted, 50.0).unwrap(), 42.0);
        assert_eq!(compute_percentile(&sorted, 100.0).unwrap(), 42.0);
    }

    #[test]
    fn test_linear_interpolation_between_ranks() {
        let sorted = [10, 20, 30];
        assert_eq!(compute_percentile(&sorted, 25.0).unwrap(), 15.0);
        assert_eq!(compute_percentile(&sorted, 75.0).unwrap(), 25.0);
    }

    #[test]
    fn test_even_length_median_is_interpolated() {
        let sorted = [1, 2, 3, 4];
        assert_eq!(compute_percentile(&sorted, 50.0).unwrap(), 2.5);
    }

    #[test]
    fn test_extremes_match_min_and_max() {
        let sorted = [3, 7, 11, 400];
        assert_eq!(compute_percentile(&sorted, 0.0).unwrap(), 3.0);
        assert_eq!(compute_percentile(&sorted, 100.0).unwrap(), 400.0);
    }

    #[test]
    fn test_quartile_ordering_invariant() {
        let sorted = [4, 8, 15, 16, 23, 42, 42, 99];
        let p25 = compute_percentile(&sorted, 25.0).unwrap();
        let median = compute_percentile(&sorted, 50.0).unwrap();
        let p75 = compute_percentile(&sorted, 75.0).unwrap();
        assert!(p25 <= median);
        assert!(median <= p75);
    }
}
