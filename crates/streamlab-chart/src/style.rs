use plotters::style::RGBColor;

/// Explicit styling for the composite figure.
///
/// Passed through the render call instead of living in global plotting state,
/// so two renders with different styles cannot interfere.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Pixel geometry of the composite image.
    pub size: (u32, u32),
    /// Fill color for scenario A panels (light blue).
    pub fill_a: RGBColor,
    /// Fill color for scenario B panels (light green).
    pub fill_b: RGBColor,
    /// Median line color in box plots.
    pub box_median: RGBColor,
    /// Mean reference line color in histograms.
    pub mean_line: RGBColor,
    /// Median reference line color in histograms.
    pub median_line: RGBColor,
    /// Number of histogram bins per distribution panel.
    pub histogram_bins: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            size: (1800, 1200),
            fill_a: RGBColor(173, 216, 230),
            fill_b: RGBColor(144, 238, 144),
            box_median: RGBColor(200, 30, 30),
            mean_line: RGBColor(200, 30, 30),
            median_line: RGBColor(30, 140, 30),
            histogram_bins: 50,
        }
    }
}
