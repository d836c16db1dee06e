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

//! Report types and structures.
//!
//! Raw timing series are reduced to [`SummarySnapshot`]s, expressed in
//! seconds, before any report is rendered or exported.

use crate::core::statistics::{TimingSeries, REPORT_PERCENTILES};
use crate::error::Result;
use crate::generators::WorkloadKind;
use crate::harness::{BenchmarkResult, WorkloadOutcome};
use serde::{Deserialize, Serialize};

/// Summary statistics of one series, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    /// Number of samples.
    pub trials: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl SummarySnapshot {
    /// Computes the snapshot of `series`.
    ///
    /// # Errors
    ///
    /// [`BenchError::EmptySeries`](crate::error::BenchError::EmptySeries) if
    /// the series has no samples.
    pub fn from_series(series: &TimingSeries) -> Result<Self> {
        let summary = series.summary();
        let [p50, p75, p90, p95, p99] = REPORT_PERCENTILES;

        Ok(Self {
            trials: summary.count(),
            mean: summary.mean()?.as_secs_f64(),
            min: summary.minimum()?.as_secs_f64(),
            max: summary.maximum()?.as_secs_f64(),
            std_dev: summary.std_dev()?.as_secs_f64(),
            p50: summary.percentile(p50.1)?.as_secs_f64(),
            p75: summary.percentile(p75.1)?.as_secs_f64(),
            p90: summary.percentile(p90.1)?.as_secs_f64(),
            p95: summary.percentile(p95.1)?.as_secs_f64(),
            p99: summary.percentile(p99.1)?.as_secs_f64(),
        })
    }

    /// Percentile values paired with their labels, in display order.
    pub fn percentiles(&self) -> [(&'static str, f64); 5] {
        let [p50, p75, p90, p95, p99] = REPORT_PERCENTILES.map(|(label, _)| label);
        [
            (p50, self.p50),
            (p75, self.p75),
            (p90, self.p90),
            (p95, self.p95),
            (p99, self.p99),
        ]
    }
}

/// Reported state of one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WorkloadStatus {
    Completed(SummarySnapshot),
    Failed { trial: usize, reason: String },
}

/// One workload row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadReport {
    pub workload: WorkloadKind,
    #[serde(flatten)]
    pub status: WorkloadStatus,
}

/// All workloads of one adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub algorithm: String,
    pub workloads: Vec<WorkloadReport>,
}

impl AlgorithmReport {
    /// Summarizes a benchmark result.
    pub fn from_result(result: &BenchmarkResult) -> Result<Self> {
        let workloads = result
            .outcomes()
            .map(|(workload, outcome)| -> Result<WorkloadReport> {
                let status = match outcome {
                    WorkloadOutcome::Completed(series) => {
                        WorkloadStatus::Completed(SummarySnapshot::from_series(series)?)
                    }
                    WorkloadOutcome::Failed { trial, error } => WorkloadStatus::Failed {
                        trial: *trial,
                        reason: error.to_string(),
                    },
                };
                Ok(WorkloadReport { workload, status })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            algorithm: result.algorithm.clone(),
            workloads,
        })
    }
}

/// Complete benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Report title.
    pub title: String,
    /// Report timestamp (RFC 3339).
    pub timestamp: String,
    /// Trials per workload.
    pub trials: usize,
    /// Per-adapter results, in run order.
    pub algorithms: Vec<AlgorithmReport>,
}

impl BenchmarkReport {
    /// Creates an empty report stamped with the current time.
    pub fn new(title: impl Into<String>, trials: usize) -> Self {
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            trials,
            algorithms: Vec::new(),
        }
    }

    /// Summarizes and appends a benchmark result.
    pub fn add_result(&mut self, result: &BenchmarkResult) -> Result<()> {
        self.algorithms.push(AlgorithmReport::from_result(result)?);
        Ok(())
    }

    /// Builds a report from a batch of results.
    pub fn from_results(
        title: impl Into<String>,
        trials: usize,
        results: &[BenchmarkResult],
    ) -> Result<Self> {
        let mut report = Self::new(title, trials);
        for result in results {
            report.add_result(result)?;
        }
        Ok(report)
    }

    /// Number of adapters in the report.
    pub fn result_count(&self) -> usize {
        self.algorithms.len()
    }
}
