//! Statistical analysis utilities for the Streamlab project.
//!
//! This crate reduces large unsigned-integer sample sets to the summary
//! measures used by the throughput analysis report:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation, min, max
//! - **Percentiles**: linear-interpolation percentile computation
//! - **Mode**: most frequent value with ascending tie-break
//! - **Histogram generation**: fixed-width frequency distributions
//! - **Box-plot summaries**: five-number summaries with Tukey whiskers
//! - **Sample summaries**: the combined per-scenario statistics record
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation on sorted samples
//! - [`mode`]: Most-frequent-value computation
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`boxplot`]: Five-number summaries for box-and-whisker plots
//! - [`summary`]: The combined statistics record and metric ordering
//! - [`error`]: Error types shared across the crate
//!
//! # Examples
//!
//! ## Computing a full summary record
//!
//! ```
//! use streamlab_stats::summary::SampleSummary;
//!
//! let values = [10, 20, 30];
//! let summary = SampleSummary::from_samples(&values).unwrap();
//! assert_eq!(summary.mean, 20.0);
//! assert_eq!(summary.p25, 15.0);
//! assert_eq!(summary.iqr, 10.0);
//! ```
//!
//! ## Computing a single percentile
//!
//! ```
//! use streamlab_stats::percentiles::compute_percentile;
//!
//! let sorted = [1, 2, 3, 4, 5];
//! assert_eq!(compute_percentile(&sorted, 50.0).unwrap(), 3.0);
//! ```
//!
//! ## Rejecting empty input
//!
//! ```
//! use streamlab_stats::error::StatsError;
//! use streamlab_stats::summary::SampleSummary;
//!
//! let err = SampleSummary::from_samples(&[]).unwrap_err();
//! assert_eq!(err, StatsError::EmptySampleSet);
//! ```

pub mod boxplot;
pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod mode;
pub mod percentiles;
pub mod summary;
