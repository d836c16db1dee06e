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

//! Centralized benchmark configuration.
//!
//! Trial count, optional inter-trial delay, and report format for a run.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default number of trials per workload.
pub const DEFAULT_TRIALS: usize = 1_000;

/// Export format options for benchmark reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text breakdown, one line per workload.
    #[default]
    Console,
    /// JSON format for machine-readable reports.
    Json,
    /// Markdown format for documentation.
    Markdown,
}

impl ExportFormat {
    /// All supported formats.
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Console,
        ExportFormat::Json,
        ExportFormat::Markdown,
    ];

    /// Returns the format identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Console => "console",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "text" => Ok(ExportFormat::Console),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(BenchError::invalid_config(
                "format",
                format!("unknown format '{}', expected console, json or markdown", other),
            )),
        }
    }
}

/// Configuration for a benchmark run.
///
/// # Example
///
/// ```
/// use diffperf::core::config::{BenchConfig, ExportFormat};
/// use std::time::Duration;
///
/// let config = BenchConfig::default()
///     .with_trials(200)
///     .with_trial_delay(Duration::from_millis(1))
///     .with_export_format(ExportFormat::Json);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Trials per (algorithm, workload) pair.
    pub trials: usize,
    /// Pause between consecutive trials. `None` runs them back to back.
    pub trial_delay: Option<Duration>,
    /// Report format.
    pub export_format: ExportFormat,
}

impl BenchConfig {
    /// Creates a configuration with the given trial count.
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            trial_delay: None,
            export_format: ExportFormat::Console,
        }
    }

    /// Sets the trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets a pause between trials.
    pub fn with_trial_delay(mut self, delay: Duration) -> Self {
        self.trial_delay = Some(delay);
        self
    }

    /// Sets the report format.
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidConfig`] if `trials` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(BenchError::invalid_config("trials", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS)
    }
}
