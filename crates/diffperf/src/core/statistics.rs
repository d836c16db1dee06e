// Dweve DiffPerf - Ordered-Collection Diff Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Timing series and the statistics computed over them.
//!
//! All statistics are pure functions of the samples. Nothing here sorts or
//! otherwise mutates a series in place; percentile works on a sorted copy.
//!
//! # Empty input
//!
//! `mean`, `minimum`, `maximum` and `std_dev` reject an empty series with
//! [`BenchError::EmptySeries`]. `percentile` returns [`Duration::ZERO`]
//! instead. The two behaviors differ on purpose so that reports stay
//! comparable with historical DiffPerf output.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Percentile ranks shown in every rendered report, in display order.
pub const REPORT_PERCENTILES: [(&str, f64); 5] = [
    ("p50", 0.50),
    ("p75", 0.75),
    ("p90", 0.90),
    ("p95", 0.95),
    ("p99", 0.99),
];

/// Per-trial elapsed times for one (algorithm, workload) pair, in trial order.
///
/// Only the harness appends to a series. Once handed out it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSeries {
    samples: Vec<Duration>,
}

impl TimingSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty series with room for `trials` samples.
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            samples: Vec::with_capacity(trials),
        }
    }

    /// Wraps already-collected samples.
    pub fn from_samples(samples: Vec<Duration>) -> Self {
        Self { samples }
    }

    pub(crate) fn push(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    /// Samples in trial order.
    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no trial was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of the samples.
    pub fn mean(&self) -> Result<Duration> {
        mean(&self.samples)
    }

    /// Smallest sample.
    pub fn minimum(&self) -> Result<Duration> {
        minimum(&self.samples)
    }

    /// Largest sample.
    pub fn maximum(&self) -> Result<Duration> {
        maximum(&self.samples)
    }

    /// Sample at rank `p`; see [`percentile`].
    pub fn percentile(&self, p: f64) -> Result<Duration> {
        percentile(&self.samples, p)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> Result<Duration> {
        std_dev(&self.samples)
    }

    /// Borrowed statistics view over this series.
    pub fn summary(&self) -> Summary<'_> {
        Summary { series: self }
    }
}

impl FromIterator<Duration> for TimingSeries {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// Read-only statistics view over a [`TimingSeries`].
///
/// Holds no data of its own. Every accessor recomputes from the series.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    series: &'a TimingSeries,
}

impl<'a> Summary<'a> {
    /// The underlying series.
    pub fn series(&self) -> &'a TimingSeries {
        self.series
    }

    /// Number of samples.
    pub fn count(&self) -> usize {
        self.series.len()
    }

    /// Mean of the series.
    pub fn mean(&self) -> Result<Duration> {
        self.series.mean()
    }

    /// Smallest sample.
    pub fn minimum(&self) -> Result<Duration> {
        self.series.minimum()
    }

    /// Largest sample.
    pub fn maximum(&self) -> Result<Duration> {
        self.series.maximum()
    }

    /// Percentile at rank `p`; zero for an empty series.
    pub fn percentile(&self, p: f64) -> Result<Duration> {
        self.series.percentile(p)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> Result<Duration> {
        self.series.std_dev()
    }
}

/// Arithmetic mean, truncated to whole nanoseconds.
///
/// # Errors
///
/// [`BenchError::EmptySeries`] if `samples` is empty.
pub fn mean(samples: &[Duration]) -> Result<Duration> {
    if samples.is_empty() {
        return Err(BenchError::EmptySeries { statistic: "mean" });
    }

    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    Ok(nanos_to_duration(total / samples.len() as u128))
}

/// Smallest sample.
///
/// # Errors
///
/// [`BenchError::EmptySeries`] if `samples` is empty.
pub fn minimum(samples: &[Duration]) -> Result<Duration> {
    samples
        .iter()
        .copied()
        .min()
        .ok_or(BenchError::EmptySeries {
            statistic: "minimum",
        })
}

/// Largest sample.
///
/// # Errors
///
/// [`BenchError::EmptySeries`] if `samples` is empty.
pub fn maximum(samples: &[Duration]) -> Result<Duration> {
    samples
        .iter()
        .copied()
        .max()
        .ok_or(BenchError::EmptySeries {
            statistic: "maximum",
        })
}

/// Population standard deviation.
///
/// # Errors
///
/// [`BenchError::EmptySeries`] if `samples` is empty.
pub fn std_dev(samples: &[Duration]) -> Result<Duration> {
    if samples.is_empty() {
        return Err(BenchError::EmptySeries {
            statistic: "std_dev",
        });
    }

    let mean_ns = mean(samples)?.as_nanos() as f64;
    let variance: f64 = samples
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / samples.len() as f64;

    Ok(Duration::from_nanos(variance.sqrt() as u64))
}

/// Sample at rank `p` of the sorted series.
///
/// With `count` samples sorted ascending, `fraction = count * p` and
/// `idx = ceil(fraction)`:
///
/// - if `fraction` is a whole number and `idx < count - 2`, the result is
///   the average of `sorted[idx]` and `sorted[idx + 1]`;
/// - otherwise `sorted[idx]` when `idx < count`;
/// - otherwise `sorted[idx - 1]`.
///
/// This is neither nearest-rank nor linear interpolation. Keep the
/// `count - 2` bound as is; reported numbers depend on it.
///
/// An empty series yields [`Duration::ZERO`].
///
/// # Errors
///
/// [`BenchError::InvalidPercentile`] if `p` is outside `[0, 1]` or NaN.
/// The rank is checked before the empty-series shortcut.
///
/// # Example
///
/// ```
/// use diffperf::core::statistics::percentile;
/// use std::time::Duration;
///
/// let samples: Vec<Duration> = (1..=4).map(Duration::from_secs).collect();
/// assert_eq!(percentile(&samples, 0.5).unwrap(), Duration::from_secs(3));
/// assert_eq!(percentile(&[], 0.9).unwrap(), Duration::ZERO);
/// ```
pub fn percentile(samples: &[Duration], p: f64) -> Result<Duration> {
    if !(0.0..=1.0).contains(&p) {
        return Err(BenchError::InvalidPercentile { p });
    }
    if samples.is_empty() {
        return Ok(Duration::ZERO);
    }

    let count = samples.len();
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let fraction = count as f64 * p;
    let ceiled = fraction.ceil();
    let idx = ceiled as usize;

    // `idx + 2 < count` is `idx < count - 2` without underflow for count < 2.
    let value = if fraction == ceiled && idx + 2 < count {
        (sorted[idx] + sorted[idx + 1]) / 2
    } else if idx < count {
        sorted[idx]
    } else {
        sorted[idx - 1]
    };

    Ok(value)
}

fn nanos_to_duration(nanos: u128) -> Duration {
    Duration::new(
        (nanos / 1_000_000_000) as u64,
        (nanos % 1_000_000_000) as u32,
    )
}
