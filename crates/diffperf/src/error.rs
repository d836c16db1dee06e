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

//! Error types for DiffPerf benchmarking operations.
//!
//! Statistics, measurement, and configuration failures are reported through
//! [`BenchError`]. Diff adapters report their own failures through
//! [`AlgorithmError`], which the harness wraps with the algorithm name and
//! the trial index at which the failure happened.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum generated collection length (1 million elements).
///
/// Caps generated and loaded collections. Adapters whose working memory grows
/// faster than the input carry their own limits ([`LcsDiff::with_max_cells`],
/// [`MyersDiff::with_max_cells`]) and fail with [`AlgorithmError`] instead.
///
/// [`LcsDiff::with_max_cells`]: crate::algorithms::LcsDiff::with_max_cells
/// [`MyersDiff::with_max_cells`]: crate::algorithms::MyersDiff::with_max_cells
pub const MAX_COLLECTION_SIZE: usize = 1_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Failure reported by a diff adapter.
///
/// The harness never inspects the message; it is carried through to the
/// report so the user can see why a workload has no statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
#[serde(transparent)]
pub struct AlgorithmError {
    /// Human-readable failure description
    pub message: String,
}

impl AlgorithmError {
    /// Creates a new adapter error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// A statistic that needs at least one sample was asked of an empty series.
    ///
    /// `percentile` never raises this; it returns zero for empty input.
    #[error("cannot compute {statistic} of an empty timing series")]
    EmptySeries {
        /// Name of the statistic requested
        statistic: &'static str,
    },

    /// A diff adapter failed while a workload was being timed.
    #[error("algorithm '{algorithm}' failed at trial {trial}: {source}")]
    AlgorithmFailure {
        /// Adapter name
        algorithm: String,
        /// Zero-based index of the failing trial
        trial: usize,
        /// Error raised by the adapter
        #[source]
        source: AlgorithmError,
    },

    /// Percentile rank outside `[0, 1]` (or NaN).
    #[error("percentile rank {p} is outside [0, 1]")]
    InvalidPercentile {
        /// The rejected rank
        p: f64,
    },

    /// Invalid configuration parameter
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Requested collection exceeds [`MAX_COLLECTION_SIZE`]
    #[error("collection size {requested} exceeds maximum allowed limit of {max}")]
    CollectionTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// I/O error while exporting a report
    #[error("I/O error: {0}")]
    Io(String),

    /// Report serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl BenchError {
    /// Shorthand for [`BenchError::InvalidConfig`].
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

/// Validate that a collection size is within acceptable limits
///
/// # Examples
///
/// ```
/// use diffperf::error::{validate_collection_size, MAX_COLLECTION_SIZE};
///
/// assert!(validate_collection_size(1000).is_ok());
/// assert!(validate_collection_size(MAX_COLLECTION_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_collection_size(size: usize) -> Result<()> {
    if size > MAX_COLLECTION_SIZE {
        Err(BenchError::CollectionTooLarge {
            requested: size,
            max: MAX_COLLECTION_SIZE,
        })
    } else {
        Ok(())
    }
}
