use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{ensure, Context, Error};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rscan_parser_rs::scanfile::{ScanFile, ScanHeader};

#[derive(Clone, Debug)]
pub struct MockConfig {
    pub line_count: u8,
    pub point_count: u8,
    pub step_size: u8,
    pub line_size: u8,
    pub line_start: u8,
    pub point_start: u8,
    /// Mean raw sample, before scaling.
    pub mean: f64,
    pub std_dev: f64,
    pub seed: u64,
}

impl Default for MockConfig {
    fn default() -> MockConfig {
        MockConfig {
            line_count: 30,
            point_count: 60,
            step_size: 1,
            line_size: 1,
            line_start: 0,
            point_start: 0,
            mean: 1000.0,
            std_dev: 25.0,
            seed: 0,
        }
    }
}

impl MockConfig {
    pub fn header(&self) -> ScanHeader {
        ScanHeader {
            step_size: self.step_size,
            line_size: self.line_size,
            line_count: self.line_count,
            point_count: self.point_count,
            line_start: self.line_start,
            point_start: self.point_start,
        }
    }
}

/// A full scan of a roughly spherical room: every sample drawn from the
/// same normal distribution, in acquisition order.
pub fn generate_scan(config: &MockConfig) -> Result<ScanFile, Error> {
    ensure!(config.mean >= 0.0, "mean must not be negative: {}", config.mean);
    ensure!(
        config.std_dev >= 0.0 && config.std_dev.is_finite(),
        "invalid standard deviation: {}",
        config.std_dev
    );
    let normal = Normal::new(config.mean, config.std_dev)
        .with_context(|| format!("invalid standard deviation: {}", config.std_dev))?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let header = config.header();
    let samples = (0..header.expected_samples())
        .map(|_| normal.sample(&mut rng).clamp(0.0, u32::MAX as f64) as u32)
        .collect();
    Ok(ScanFile::new(header, samples))
}

/// Writes `scan` to a new file. An existing file is never overwritten.
pub fn write_scan(scan: &ScanFile, path: &Path) -> Result<(), Error> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    scan.write_to(&mut out)?;
    out.flush()?;
    tracing::info!("wrote {} samples to {}", scan.samples.len(), path.display());
    Ok(())
}
