use thiserror::Error;

/// Errors produced by statistical computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The computation requires at least one sample value.
    ///
    /// Statistics on an empty sample set are undefined; callers must reject
    /// the input instead of propagating NaN through the report.
    #[error("sample set is empty")]
    EmptySampleSet,
}
