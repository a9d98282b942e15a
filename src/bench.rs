//! Timing statistics for the `timebench` binary.
//!
//! Holds the pure parts of the benchmark: reading the command list and
//! summarizing wall-clock samples. Actually running the commands stays in the
//! binary.

use std::io::{self, BufRead};

/// Summary statistics over a set of duration samples, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average: f64,
    /// Sample standard deviation (n-1 denominator)
    pub std: f64,
    /// Standard error of the mean
    pub stderr: f64,
}

impl Summary {
    /// Compute summary statistics. Returns `None` for an empty sample set;
    /// a single sample has zero spread.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let average = samples.iter().sum::<f64>() / n;
        let std = if samples.len() < 2 {
            0.0
        } else {
            let variance = samples
                .iter()
                .map(|s| (s - average) * (s - average))
                .sum::<f64>()
                / (n - 1.0);
            variance.sqrt()
        };
        Some(Self {
            average,
            std,
            stderr: std / n.sqrt(),
        })
    }
}

/// Read one shell command per line, skipping blank lines
pub fn read_commands<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut commands = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            commands.push(line);
        }
    }
    Ok(commands)
}
