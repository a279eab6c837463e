use std::{fs, io, path::Path};

use anyhow::Context as _;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Number of samples generated when an input file is absent.
pub const SYNTHETIC_SAMPLE_COUNT: usize = 100_000;
/// Exclusive upper bound for synthetic sample values.
pub const SYNTHETIC_VALUE_BOUND: u64 = 1_000_000_000_000;

/// Reads whitespace-separated non-negative integers from a text file.
///
/// A missing file is the expected fallback trigger and returns `Ok(None)`.
/// Any other failure (unreadable file, malformed token) is fatal and
/// propagates with context.
pub fn load_samples(path: &Path) -> anyhow::Result<Option<Vec<u64>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read input file: {}", path.display()));
        }
    };

    let samples = contents
        .split_whitespace()
        .map(|token| {
            token.parse::<u64>().with_context(|| {
                format!("Invalid sample value {token:?} in {}", path.display())
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Some(samples))
}

/// Generates `len` pseudorandom samples uniformly drawn from
/// `[0, SYNTHETIC_VALUE_BOUND)`.
///
/// The generator is a PCG seeded from `seed`, so the same seed and length
/// reproduce the exact same sample set on every run and platform.
#[must_use]
pub fn generate_samples(seed: u64, len: usize) -> Vec<u64> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random_range(0..SYNTHETIC_VALUE_BOUND))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(load_samples(&path).unwrap().is_none());
    }

    #[test]
    fn test_loads_whitespace_separated_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "10 20").unwrap();
        writeln!(file, "30").unwrap();
        drop(file);

        let samples = load_samples(&path).unwrap().unwrap();
        assert_eq!(samples, vec![10, 20, 30]);
    }

    #[test]
    fn test_malformed_content_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        fs::write(&path, "10 twenty 30").unwrap();
        assert!(load_samples(&path).is_err());
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        fs::write(&path, "10 -20 30").unwrap();
        assert!(load_samples(&path).is_err());
    }

    #[test]
    fn test_generation_is_reproducible() {
        let first = generate_samples(42, SYNTHETIC_SAMPLE_COUNT);
        let second = generate_samples(42, SYNTHETIC_SAMPLE_COUNT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_samples_are_bounded() {
        let samples = generate_samples(42, SYNTHETIC_SAMPLE_COUNT);
        assert_eq!(samples.len(), SYNTHETIC_SAMPLE_COUNT);
        assert!(samples.iter().all(|&v| v < SYNTHETIC_VALUE_BOUND));
    }

    #[test]
    fn test_scenario_seeds_differ() {
        let a = generate_samples(42, 1000);
        let b = generate_samples(43, 1000);
        assert_ne!(a, b);
    }
}
