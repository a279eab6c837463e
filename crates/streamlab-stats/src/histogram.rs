use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the full data range into equally wide bins and counts
/// the frequency of values falling into each bin. Bins are half-open except the
/// last, which also includes the maximum value, so every sample lands in
/// exactly one bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order of range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end
    /// except for the final bin).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to create the histogram from. Will be copied and sorted internally.
    /// * `num_bins` - The number of bins to create.
    ///
    /// # Examples
    ///
    /// ```
    /// # use streamlab_stats::histogram::Histogram;
    /// let values = [5, 2, 8, 1, 9, 3, 7, 4, 6, 10];
    /// let histogram = Histogram::new(&values, 3);
    /// assert_eq!(histogram.bins.len(), 3);
    /// ```
    #[must_use]
    pub fn new(values: &[u64], num_bins: usize) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// Returns a histogram with no bins when the input is empty or `num_bins`
    /// is zero.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[u64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted(),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = sorted_values[0] as f64;
        let max = sorted_values[sorted_values.len() - 1] as f64;
        // Degenerate range: all samples share one value. Center a unit-wide
        // range on it so bin width stays positive.
        let (lo, hi) = if min < max {
            (min, max)
        } else {
            (min - 0.5, max + 0.5)
        };
        let width = (hi - lo) / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                // Recompute both edges from the full range to avoid
                // floating-point accumulation across bins.
                let start = lo + (bin_idx as f64) * (hi - lo) / num_bins as f64;
                let end = lo + ((bin_idx + 1) as f64) * (hi - lo) / num_bins as f64;
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &value in sorted_values {
            let position = (value as f64 - lo) / width;
            // Clamping folds the inclusive maximum into the final bin and
            // guards against rounding just past the last edge.
            let idx = (position.floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// The largest bin count, or zero for a histogram with no bins.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
